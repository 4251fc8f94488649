// src/application/queries/articles/list.rs
use super::{ArticleQueryService, service::to_dtos};
use crate::application::{
    commands::ensure_capability,
    dto::{ArticleDto, AuthenticatedUser},
    error::ApplicationResult,
};

impl ArticleQueryService {
    /// Approved articles, newest first.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        Ok(to_dtos(self.read_repo.list_approved().await?))
    }

    /// Articles awaiting approval, for editors.
    pub async fn list_pending(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<ArticleDto>> {
        ensure_capability(actor, "articles", "view:pending")?;
        Ok(to_dtos(self.read_repo.list_pending().await?))
    }
}
