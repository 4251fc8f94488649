// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, ArticleRecord, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Sets the approved flag on a pending article. Returns `false` when the
    /// article was already approved. There is no operation that clears it.
    async fn mark_approved(&self, id: ArticleId, at: DateTime<Utc>) -> DomainResult<bool>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

/// Listing methods return newest first.
#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleRecord>>;
    async fn list_approved(&self) -> DomainResult<Vec<ArticleRecord>>;
    async fn list_pending(&self) -> DomainResult<Vec<ArticleRecord>>;
    async fn list_by_author(&self, author: UserId) -> DomainResult<Vec<ArticleRecord>>;
    /// Approved articles from publishers `reader` subscribes to or by
    /// journalists `reader` follows.
    async fn list_subscribed(&self, reader: UserId) -> DomainResult<Vec<ArticleRecord>>;
    /// Ids from `ids` that do not exist.
    async fn missing_ids(&self, ids: &[ArticleId]) -> DomainResult<Vec<ArticleId>>;
}
