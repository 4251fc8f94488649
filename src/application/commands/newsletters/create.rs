// src/application/commands/newsletters/create.rs
use super::NewsletterCommandService;
use crate::{
    application::{
        commands::ensure_capability,
        dto::{AuthenticatedUser, NewsletterDto},
        error::ApplicationResult,
    },
    domain::newsletter::{NewNewsletter, NewsletterDescription, NewsletterTitle},
};

pub struct CreateNewsletterCommand {
    pub title: String,
    pub description: String,
    pub article_ids: Vec<i64>,
}

impl NewsletterCommandService {
    pub async fn create_newsletter(
        &self,
        actor: &AuthenticatedUser,
        command: CreateNewsletterCommand,
    ) -> ApplicationResult<NewsletterDto> {
        ensure_capability(actor, "newsletters", "create")?;

        let title = NewsletterTitle::new(command.title)?;
        let description = NewsletterDescription::new(command.description)?;
        let article_ids = self.resolve_articles(command.article_ids).await?;

        let created = self
            .write_repo
            .insert(NewNewsletter {
                title,
                description,
                author_id: actor.id,
                article_ids,
                created_at: self.clock.now(),
            })
            .await?;

        Ok(self.load_record(created.id).await?.into())
    }
}
