// src/application/commands/subscriptions/toggle.rs
use super::SubscriptionCommandService;
use crate::{
    application::{
        commands::ensure_capability,
        dto::{AuthenticatedUser, SubscriptionKind, SubscriptionToggleDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        publisher::PublisherId,
        subscription::SubscriptionTarget,
        user::{Role, UserId},
    },
};
use tracing::debug;

pub struct ToggleSubscriptionCommand {
    pub kind: SubscriptionKind,
    pub target_id: i64,
}

impl SubscriptionCommandService {
    /// Flips the caller's membership in the target's subscriber relation.
    pub async fn toggle_subscription(
        &self,
        actor: &AuthenticatedUser,
        command: ToggleSubscriptionCommand,
    ) -> ApplicationResult<SubscriptionToggleDto> {
        ensure_capability(actor, "subscriptions", "manage")?;

        let (target, name) = match command.kind {
            SubscriptionKind::Publisher => {
                let id = PublisherId::new(command.target_id)?;
                let publisher = self
                    .publisher_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("publisher not found"))?;
                (SubscriptionTarget::Publisher(id), String::from(publisher.name))
            }
            SubscriptionKind::Journalist => {
                let id = UserId::new(command.target_id)?;
                let journalist = self
                    .user_repo
                    .find_by_id(id)
                    .await?
                    .filter(|user| user.role == Role::Journalist)
                    .ok_or_else(|| ApplicationError::not_found("journalist not found"))?;
                (SubscriptionTarget::Journalist(id), String::from(journalist.username))
            }
        };

        let outcome = self.subscription_repo.toggle(actor.id, target).await?;
        debug!(reader_id = i64::from(actor.id), ?target, ?outcome, "subscription toggled");

        Ok(SubscriptionToggleDto {
            kind: command.kind,
            id: command.target_id,
            name,
            subscribed: outcome.is_subscribed(),
        })
    }
}
