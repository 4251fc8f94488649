// src/domain/subscription/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::publisher::{Publisher, PublisherId};
use crate::domain::subscription::{SubscriptionTarget, ToggleOutcome};
use crate::domain::user::{UserId, UserSummary};
use async_trait::async_trait;

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Removes the relation row if present, inserts it otherwise.
    async fn toggle(&self, reader: UserId, target: SubscriptionTarget) -> DomainResult<ToggleOutcome>;

    async fn is_subscribed(&self, reader: UserId, target: SubscriptionTarget) -> DomainResult<bool>;

    async fn subscribed_publishers(&self, reader: UserId) -> DomainResult<Vec<Publisher>>;

    async fn followed_journalists(&self, reader: UserId) -> DomainResult<Vec<UserSummary>>;

    async fn publisher_subscribers(&self, publisher: PublisherId) -> DomainResult<Vec<UserSummary>>;

    async fn journalist_followers(&self, journalist: UserId) -> DomainResult<Vec<UserSummary>>;
}
