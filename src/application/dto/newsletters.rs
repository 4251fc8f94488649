// src/application/dto/newsletters.rs
use crate::domain::newsletter::NewsletterRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{articles::ArticleDto, serde_time, users::UserSummaryDto};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub author: UserSummaryDto,
    pub articles: Vec<ArticleDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<NewsletterRecord> for NewsletterDto {
    fn from(record: NewsletterRecord) -> Self {
        let NewsletterRecord {
            newsletter,
            author,
            articles,
        } = record;
        Self {
            id: newsletter.id.into(),
            title: newsletter.title.as_str().to_string(),
            description: newsletter.description.as_str().to_string(),
            author: author.into(),
            articles: articles.into_iter().map(Into::into).collect(),
            created_at: newsletter.created_at,
        }
    }
}
