// src/application/commands/newsletters/delete.rs
use super::NewsletterCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, NewsletterDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::newsletter::{NewsletterId, NewsletterRecord, specifications::CanDeleteNewsletterSpec},
};

pub struct DeleteNewsletterCommand {
    pub id: i64,
}

impl NewsletterCommandService {
    pub async fn delete_newsletter(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteNewsletterCommand,
    ) -> ApplicationResult<()> {
        let id = NewsletterId::new(command.id)?;
        self.load_deletable(actor, id).await?;

        self.write_repo.delete(id).await?;
        Ok(())
    }

    pub async fn deletable_newsletter(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<NewsletterDto> {
        let id = NewsletterId::new(id)?;
        Ok(self.load_deletable(actor, id).await?.into())
    }

    async fn load_deletable(
        &self,
        actor: &AuthenticatedUser,
        id: NewsletterId,
    ) -> ApplicationResult<NewsletterRecord> {
        let record = self.load_record(id).await?;
        if !CanDeleteNewsletterSpec::new(&actor.capabilities, &record.newsletter, actor.id)
            .is_satisfied()
        {
            return Err(ApplicationError::forbidden(
                "You can only delete your own newsletters!",
            ));
        }
        Ok(record)
    }
}
