// src/infrastructure/repositories/mod.rs
mod error;
mod rows;
mod sqlite_article;
mod sqlite_newsletter;
mod sqlite_publisher;
mod sqlite_subscription;
mod sqlite_user;

pub use error::map_sqlx;
pub use sqlite_article::{SqliteArticleReadRepository, SqliteArticleWriteRepository};
pub use sqlite_newsletter::{SqliteNewsletterReadRepository, SqliteNewsletterWriteRepository};
pub use sqlite_publisher::SqlitePublisherRepository;
pub use sqlite_subscription::SqliteSubscriptionRepository;
pub use sqlite_user::SqliteUserRepository;

use crate::application::services::Repositories;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Every repository port backed by the same pool.
pub fn sqlite_repositories(pool: &SqlitePool) -> Repositories {
    Repositories {
        users: Arc::new(SqliteUserRepository::new(pool.clone())),
        article_writes: Arc::new(SqliteArticleWriteRepository::new(pool.clone())),
        article_reads: Arc::new(SqliteArticleReadRepository::new(pool.clone())),
        newsletter_writes: Arc::new(SqliteNewsletterWriteRepository::new(pool.clone())),
        newsletter_reads: Arc::new(SqliteNewsletterReadRepository::new(pool.clone())),
        publishers: Arc::new(SqlitePublisherRepository::new(pool.clone())),
        subscriptions: Arc::new(SqliteSubscriptionRepository::new(pool.clone())),
    }
}
