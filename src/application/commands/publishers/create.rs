// src/application/commands/publishers/create.rs
use super::PublisherCommandService;
use crate::{
    application::{
        commands::ensure_capability,
        dto::{AuthenticatedUser, PublisherDto},
        error::ApplicationResult,
    },
    domain::publisher::{NewPublisher, PublisherName},
};

pub struct CreatePublisherCommand {
    pub name: String,
}

impl PublisherCommandService {
    pub async fn create_publisher(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePublisherCommand,
    ) -> ApplicationResult<PublisherDto> {
        ensure_capability(actor, "publishers", "create")?;
        let name = PublisherName::new(command.name)?;

        let publisher = self
            .publisher_repo
            .insert(NewPublisher {
                name,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(publisher_id = i64::from(publisher.id), "publisher created");
        Ok(PublisherDto::new(publisher, None))
    }
}
