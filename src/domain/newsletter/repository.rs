// src/domain/newsletter/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::newsletter::entity::{NewNewsletter, Newsletter, NewsletterRecord, NewsletterUpdate};
use crate::domain::newsletter::value_objects::NewsletterId;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait NewsletterWriteRepository: Send + Sync {
    async fn insert(&self, newsletter: NewNewsletter) -> DomainResult<Newsletter>;
    async fn update(&self, update: NewsletterUpdate) -> DomainResult<Newsletter>;
    async fn delete(&self, id: NewsletterId) -> DomainResult<()>;
}

#[async_trait]
pub trait NewsletterReadRepository: Send + Sync {
    async fn find_by_id(&self, id: NewsletterId) -> DomainResult<Option<NewsletterRecord>>;
    /// Newest first.
    async fn list(&self) -> DomainResult<Vec<NewsletterRecord>>;
    async fn list_by_author(&self, author: UserId) -> DomainResult<Vec<NewsletterRecord>>;
}
