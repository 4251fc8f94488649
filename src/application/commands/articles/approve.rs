// src/application/commands/articles/approve.rs
use super::ArticleCommandService;
use crate::{
    application::{
        commands::ensure_capability,
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
        notifications::NotificationReport,
    },
    domain::article::{ArticleEvent, ArticleId},
};
use tracing::info;

pub struct ApproveArticleCommand {
    pub id: i64,
}

pub struct ApproveArticleResult {
    pub article: ArticleDto,
    /// `None` when the article was already approved and nothing was sent.
    pub notifications: Option<NotificationReport>,
}

impl ArticleCommandService {
    /// Commits the approval first; notifications run afterwards and cannot
    /// undo or fail it. Approving an approved article is a no-op.
    pub async fn approve_article(
        &self,
        actor: &AuthenticatedUser,
        command: ApproveArticleCommand,
    ) -> ApplicationResult<ApproveArticleResult> {
        ensure_capability(actor, "articles", "approve")?;
        let id = ArticleId::new(command.id)?;
        let mut record = self.load_record(id).await?;

        let Some(ArticleEvent::Approved { at, .. }) = record.article.approve(self.clock.now()) else {
            return Ok(ApproveArticleResult {
                article: record.into(),
                notifications: None,
            });
        };

        if !self.write_repo.mark_approved(id, at).await? {
            // Lost a race with another approval; that request notifies.
            return Ok(ApproveArticleResult {
                article: self.load_record(id).await?.into(),
                notifications: None,
            });
        }
        info!(article_id = command.id, editor_id = i64::from(actor.id), "article approved");

        let report = self.notifier.article_approved(&record).await;
        Ok(ApproveArticleResult {
            article: record.into(),
            notifications: Some(report),
        })
    }
}
