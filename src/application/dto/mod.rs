// src/application/dto/mod.rs
pub mod articles;
pub mod auth;
pub mod dashboard;
pub mod newsletters;
pub mod publishers;
pub mod serde_time;
pub mod subscriptions;
pub mod users;

pub use articles::{ApprovalDto, ArticleDto};
pub use auth::{AccessTokenDto, AuthTokenDto, AuthenticatedUser, TokenKind, TokenPairDto, TokenSubject};
pub use dashboard::DashboardDto;
pub use newsletters::NewsletterDto;
pub use publishers::{PublisherDto, PublisherSummaryDto};
pub use subscriptions::{
    SubscriptionKind, SubscriptionOverviewDto, SubscriptionTargetDto, SubscriptionToggleDto,
};
pub use users::{UserDto, UserSummaryDto};
