// src/application/commands/publishers/membership.rs
use super::PublisherCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PublisherDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::publisher::{MembershipRole, Publisher, PublisherId},
};

pub struct JoinPublisherCommand {
    pub publisher_id: i64,
}

pub struct LeavePublisherCommand {
    pub publisher_id: i64,
}

impl PublisherCommandService {
    /// Journalists join as journalists, editors as editors. Joining twice
    /// keeps a single membership.
    pub async fn join_publisher(
        &self,
        actor: &AuthenticatedUser,
        command: JoinPublisherCommand,
    ) -> ApplicationResult<PublisherDto> {
        let role = Self::membership_role(actor)?;
        let publisher = self.load_publisher(command.publisher_id).await?;

        self.publisher_repo
            .add_member(publisher.id, actor.id, role)
            .await?;
        Ok(PublisherDto::new(publisher, Some(role)))
    }

    pub async fn leave_publisher(
        &self,
        actor: &AuthenticatedUser,
        command: LeavePublisherCommand,
    ) -> ApplicationResult<PublisherDto> {
        let role = Self::membership_role(actor)?;
        let publisher = self.load_publisher(command.publisher_id).await?;

        self.publisher_repo
            .remove_member(publisher.id, actor.id, role)
            .await?;
        Ok(PublisherDto::new(publisher, None))
    }

    fn membership_role(actor: &AuthenticatedUser) -> ApplicationResult<MembershipRole> {
        if !actor.has_capability("publishers", "join") {
            return Err(ApplicationError::forbidden(
                "Only journalists and editors can join publishers!",
            ));
        }
        MembershipRole::for_role(actor.role).ok_or_else(|| {
            ApplicationError::forbidden("Only journalists and editors can join publishers!")
        })
    }

    async fn load_publisher(&self, raw: i64) -> ApplicationResult<Publisher> {
        let id = PublisherId::new(raw)?;
        self.publisher_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("publisher not found"))
    }
}
