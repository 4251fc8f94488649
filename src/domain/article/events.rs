// src/domain/article/events.rs
use crate::domain::article::value_objects::ArticleId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleEvent {
    Approved {
        id: ArticleId,
        author_id: UserId,
        at: DateTime<Utc>,
    },
}
