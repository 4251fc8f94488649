// src/application/commands/newsletters/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{ArticleId, ArticleReadRepository},
        newsletter::{
            NewsletterId, NewsletterReadRepository, NewsletterRecord, NewsletterWriteRepository,
        },
    },
};

pub struct NewsletterCommandService {
    pub(super) write_repo: Arc<dyn NewsletterWriteRepository>,
    pub(super) read_repo: Arc<dyn NewsletterReadRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl NewsletterCommandService {
    pub fn new(
        write_repo: Arc<dyn NewsletterWriteRepository>,
        read_repo: Arc<dyn NewsletterReadRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            article_repo,
            clock,
        }
    }

    pub(super) async fn load_record(&self, id: NewsletterId) -> ApplicationResult<NewsletterRecord> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("newsletter not found"))
    }

    /// Deduplicates the ids, keeping first occurrences, and rejects any that
    /// do not name an existing article.
    pub(super) async fn resolve_articles(&self, raw: Vec<i64>) -> ApplicationResult<Vec<ArticleId>> {
        let mut ids: Vec<ArticleId> = Vec::with_capacity(raw.len());
        for value in raw {
            let id = ArticleId::new(value)?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        let missing = self.article_repo.missing_ids(&ids).await?;
        if let Some(first) = missing.first() {
            return Err(ApplicationError::validation(format!(
                "article {first} does not exist"
            )));
        }
        Ok(ids)
    }
}
