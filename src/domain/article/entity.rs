// src/domain/article/entity.rs
use crate::domain::article::events::ArticleEvent;
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle};
use crate::domain::publisher::{Publisher, PublisherId};
use crate::domain::user::{UserId, UserSummary};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub author_id: UserId,
    pub publisher_id: Option<PublisherId>,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Moves a pending article to approved. Approval is final, so calling
    /// this on an approved article changes nothing and yields no event.
    pub fn approve(&mut self, at: DateTime<Utc>) -> Option<ArticleEvent> {
        if self.approved {
            return None;
        }
        self.approved = true;
        self.updated_at = at;
        Some(ArticleEvent::Approved {
            id: self.id,
            author_id: self.author_id,
            at,
        })
    }

    pub fn set_content(&mut self, title: ArticleTitle, content: ArticleContent, at: DateTime<Utc>) {
        self.title = title;
        self.content = content;
        self.updated_at = at;
    }
}

/// An article joined with its author and publisher.
#[derive(Debug, Clone)]
pub struct ArticleRecord {
    pub article: Article,
    pub author: UserSummary,
    pub publisher: Option<Publisher>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub author_id: UserId,
    pub publisher_id: Option<PublisherId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub content: Option<ArticleContent>,
    pub publisher_id: Option<Option<PublisherId>>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub const fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            content: None,
            publisher_id: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub const fn with_publisher(mut self, publisher_id: Option<PublisherId>) -> Self {
        self.publisher_id = Some(publisher_id);
        self
    }

    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.publisher_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn pending_article() -> Article {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            content: ArticleContent::new("content").unwrap(),
            author_id: UserId::new(1).unwrap(),
            publisher_id: None,
            approved: false,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn approve_transitions_once() {
        let mut article = pending_article();
        let at = article.created_at + Duration::hours(1);

        let event = article.approve(at);
        assert!(article.approved);
        assert_eq!(article.updated_at, at);
        assert_eq!(
            event,
            Some(ArticleEvent::Approved {
                id: article.id,
                author_id: article.author_id,
                at,
            })
        );

        let later = at + Duration::hours(1);
        assert_eq!(article.approve(later), None);
        assert!(article.approved);
        assert_eq!(article.updated_at, at);
    }

    #[test]
    fn set_content_updates_fields() {
        let mut article = pending_article();
        let at = article.created_at + Duration::minutes(5);
        article.set_content(
            ArticleTitle::new("new title").unwrap(),
            ArticleContent::new("new content").unwrap(),
            at,
        );
        assert_eq!(article.title.as_str(), "new title");
        assert_eq!(article.content.as_str(), "new content");
        assert_eq!(article.updated_at, at);
        assert!(!article.approved);
    }

    #[test]
    fn empty_update_is_detected() {
        let update = ArticleUpdate::new(ArticleId(1), Utc::now());
        assert!(update.is_empty());
        assert!(!update.with_publisher(None).is_empty());
    }
}
