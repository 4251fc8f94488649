// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User, UserSummary},
    value_objects::{EmailAddress, Role, UserId, Username},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;

    /// Persist the user together with the permission group matching its role.
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    /// Users holding `role`, ordered by username.
    async fn list_by_role(&self, role: Role) -> DomainResult<Vec<UserSummary>>;
}
