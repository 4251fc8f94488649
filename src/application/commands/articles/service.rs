// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        notifications::ApprovalNotifier,
        ports::time::Clock,
    },
    domain::{
        article::{ArticleId, ArticleReadRepository, ArticleRecord, ArticleWriteRepository},
        publisher::{PublisherId, PublisherRepository},
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
    pub(super) notifier: Arc<ApprovalNotifier>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
        notifier: Arc<ApprovalNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            publisher_repo,
            notifier,
            clock,
        }
    }

    pub(super) async fn load_record(&self, id: ArticleId) -> ApplicationResult<ArticleRecord> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    /// Validates an optional publisher reference from user input.
    pub(super) async fn resolve_publisher(
        &self,
        publisher_id: Option<i64>,
    ) -> ApplicationResult<Option<PublisherId>> {
        let Some(raw) = publisher_id else {
            return Ok(None);
        };
        let id = PublisherId::new(raw)?;
        if self.publisher_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::validation(format!(
                "publisher {raw} does not exist"
            )));
        }
        Ok(Some(id))
    }
}
