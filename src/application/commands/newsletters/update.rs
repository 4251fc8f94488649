// src/application/commands/newsletters/update.rs
use super::NewsletterCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, NewsletterDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::newsletter::{
        NewsletterDescription, NewsletterId, NewsletterRecord, NewsletterTitle, NewsletterUpdate,
        specifications::CanUpdateNewsletterSpec,
    },
};

pub struct UpdateNewsletterCommand {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Replaces the article set when present.
    pub article_ids: Option<Vec<i64>>,
}

impl NewsletterCommandService {
    pub async fn update_newsletter(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateNewsletterCommand,
    ) -> ApplicationResult<NewsletterDto> {
        let id = NewsletterId::new(command.id)?;
        self.load_editable(actor, id).await?;

        let mut update = NewsletterUpdate::new(id);
        if let Some(title) = command.title {
            update = update.with_title(NewsletterTitle::new(title)?);
        }
        if let Some(description) = command.description {
            update = update.with_description(NewsletterDescription::new(description)?);
        }
        if let Some(article_ids) = command.article_ids {
            update = update.with_articles(self.resolve_articles(article_ids).await?);
        }

        self.write_repo.update(update).await?;
        Ok(self.load_record(id).await?.into())
    }

    pub async fn editable_newsletter(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<NewsletterDto> {
        let id = NewsletterId::new(id)?;
        Ok(self.load_editable(actor, id).await?.into())
    }

    async fn load_editable(
        &self,
        actor: &AuthenticatedUser,
        id: NewsletterId,
    ) -> ApplicationResult<NewsletterRecord> {
        let record = self.load_record(id).await?;
        if !CanUpdateNewsletterSpec::new(&actor.capabilities, &record.newsletter, actor.id)
            .is_satisfied()
        {
            return Err(ApplicationError::forbidden(
                "You can only edit your own newsletters!",
            ));
        }
        Ok(record)
    }
}
