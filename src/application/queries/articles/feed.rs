// src/application/queries/articles/feed.rs
use super::{ArticleQueryService, service::to_dtos};
use crate::application::{
    dto::{ArticleDto, AuthenticatedUser},
    error::ApplicationResult,
};

impl ArticleQueryService {
    /// Approved articles from subscribed publishers and followed
    /// journalists, each at most once, newest first.
    pub async fn subscribed_feed(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<ArticleDto>> {
        Ok(to_dtos(self.read_repo.list_subscribed(actor.id).await?))
    }
}
