// src/domain/newsletter/entity.rs
use crate::domain::article::{ArticleId, ArticleRecord};
use crate::domain::newsletter::value_objects::{NewsletterDescription, NewsletterId, NewsletterTitle};
use crate::domain::user::{UserId, UserSummary};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Newsletter {
    pub id: NewsletterId,
    pub title: NewsletterTitle,
    pub description: NewsletterDescription,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// A newsletter with its author and referenced articles, oldest reference
/// first.
#[derive(Debug, Clone)]
pub struct NewsletterRecord {
    pub newsletter: Newsletter,
    pub author: UserSummary,
    pub articles: Vec<ArticleRecord>,
}

#[derive(Debug, Clone)]
pub struct NewNewsletter {
    pub title: NewsletterTitle,
    pub description: NewsletterDescription,
    pub author_id: UserId,
    pub article_ids: Vec<ArticleId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewsletterUpdate {
    pub id: NewsletterId,
    pub title: Option<NewsletterTitle>,
    pub description: Option<NewsletterDescription>,
    /// Replaces the whole article set when present.
    pub article_ids: Option<Vec<ArticleId>>,
}

impl NewsletterUpdate {
    pub const fn new(id: NewsletterId) -> Self {
        Self {
            id,
            title: None,
            description: None,
            article_ids: None,
        }
    }

    pub fn with_title(mut self, title: NewsletterTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_description(mut self, description: NewsletterDescription) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_articles(mut self, article_ids: Vec<ArticleId>) -> Self {
        self.article_ids = Some(article_ids);
        self
    }
}
