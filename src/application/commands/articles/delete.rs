// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleRecord, specifications::CanDeleteArticleSpec},
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        self.load_deletable(actor, id).await?;

        self.write_repo.delete(id).await?;
        tracing::info!(article_id = command.id, actor_id = i64::from(actor.id), "article deleted");
        Ok(())
    }

    /// The article, if `actor` may delete it. Backs the confirmation page.
    pub async fn deletable_article(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(id)?;
        Ok(self.load_deletable(actor, id).await?.into())
    }

    async fn load_deletable(
        &self,
        actor: &AuthenticatedUser,
        id: ArticleId,
    ) -> ApplicationResult<ArticleRecord> {
        let record = self.load_record(id).await?;
        let delete_spec = CanDeleteArticleSpec::new(&actor.capabilities, &record.article, actor.id);
        if !delete_spec.is_satisfied() {
            return Err(ApplicationError::forbidden(
                "You can only delete your own articles!",
            ));
        }
        Ok(record)
    }
}
