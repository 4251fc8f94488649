// src/application/dto/articles.rs
use crate::domain::article::ArticleRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{publishers::PublisherSummaryDto, serde_time, users::UserSummaryDto};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: UserSummaryDto,
    pub publisher: Option<PublisherSummaryDto>,
    pub approved: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<ArticleRecord> for ArticleDto {
    fn from(record: ArticleRecord) -> Self {
        let ArticleRecord {
            article,
            author,
            publisher,
        } = record;
        Self {
            id: article.id.into(),
            title: article.title.into(),
            content: article.content.into(),
            author: author.into(),
            publisher: publisher.map(Into::into),
            approved: article.approved,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalDto {
    pub message: String,
    pub article: ArticleDto,
}
