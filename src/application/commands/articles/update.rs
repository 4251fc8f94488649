// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        ArticleContent, ArticleId, ArticleRecord, ArticleTitle, ArticleUpdate,
        specifications::CanUpdateArticleSpec,
    },
};

/// `None` leaves a field unchanged. For `publisher_id`, `Some(None)`
/// detaches the article from its publisher.
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub publisher_id: Option<Option<i64>>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let record = self.load_editable(actor, id).await?;

        let mut update = ArticleUpdate::new(id, self.clock.now());
        if let Some(title) = command.title {
            update = update.with_title(ArticleTitle::new(title)?);
        }
        if let Some(content) = command.content {
            update = update.with_content(ArticleContent::new(content)?);
        }
        if let Some(publisher) = command.publisher_id {
            update = update.with_publisher(self.resolve_publisher(publisher).await?);
        }

        if update.is_empty() {
            return Ok(record.into());
        }

        self.write_repo.update(update).await?;
        Ok(self.load_record(id).await?.into())
    }

    /// The article as it stands, if `actor` is allowed to edit it. Used to
    /// prefill edit forms.
    pub async fn editable_article(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(id)?;
        Ok(self.load_editable(actor, id).await?.into())
    }

    async fn load_editable(
        &self,
        actor: &AuthenticatedUser,
        id: ArticleId,
    ) -> ApplicationResult<ArticleRecord> {
        let record = self.load_record(id).await?;
        let update_spec = CanUpdateArticleSpec::new(&actor.capabilities, &record.article, actor.id);
        if !update_spec.is_satisfied() {
            return Err(ApplicationError::forbidden(
                "You can only edit your own articles!",
            ));
        }
        Ok(record)
    }
}
