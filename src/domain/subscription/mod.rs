// src/domain/subscription/mod.rs
pub mod repository;

pub use repository::SubscriptionRepository;

use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;

/// What a reader can subscribe to. Membership in the matching relation is
/// the whole subscription state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionTarget {
    Publisher(PublisherId),
    Journalist(UserId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Subscribed,
    Unsubscribed,
}

impl ToggleOutcome {
    pub const fn is_subscribed(self) -> bool {
        matches!(self, Self::Subscribed)
    }
}
