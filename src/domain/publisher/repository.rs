// src/domain/publisher/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::publisher::{
    entity::{NewPublisher, Publisher},
    value_objects::{MembershipRole, PublisherId},
};
use crate::domain::user::{UserId, UserSummary};
use async_trait::async_trait;

#[async_trait]
pub trait PublisherRepository: Send + Sync {
    async fn insert(&self, publisher: NewPublisher) -> DomainResult<Publisher>;

    async fn find_by_id(&self, id: PublisherId) -> DomainResult<Option<Publisher>>;

    /// All publishers ordered by name.
    async fn list(&self) -> DomainResult<Vec<Publisher>>;

    /// Adding an existing member is a no-op.
    async fn add_member(
        &self,
        publisher: PublisherId,
        user: UserId,
        role: MembershipRole,
    ) -> DomainResult<()>;

    /// Returns whether a membership row was removed.
    async fn remove_member(
        &self,
        publisher: PublisherId,
        user: UserId,
        role: MembershipRole,
    ) -> DomainResult<bool>;

    async fn memberships_of(&self, user: UserId)
    -> DomainResult<Vec<(PublisherId, MembershipRole)>>;

    async fn members(
        &self,
        publisher: PublisherId,
        role: MembershipRole,
    ) -> DomainResult<Vec<UserSummary>>;
}
