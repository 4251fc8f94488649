// src/application/queries/newsletters/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, NewsletterDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::specifications::CanViewArticleSpec,
        newsletter::{NewsletterId, NewsletterReadRepository, NewsletterRecord},
    },
};

pub struct GetNewsletterQuery {
    pub id: i64,
}

pub struct NewsletterQueryService {
    read_repo: Arc<dyn NewsletterReadRepository>,
}

impl NewsletterQueryService {
    pub fn new(read_repo: Arc<dyn NewsletterReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn list_newsletters(
        &self,
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<Vec<NewsletterDto>> {
        let records = self.read_repo.list().await?;
        Ok(records
            .into_iter()
            .map(|record| visible_to(actor, record).into())
            .collect())
    }

    pub async fn get_newsletter(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetNewsletterQuery,
    ) -> ApplicationResult<NewsletterDto> {
        let id = NewsletterId::new(query.id)?;
        let record = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("newsletter not found"))?;
        Ok(visible_to(actor, record).into())
    }
}

/// Drops referenced articles that the viewer may not see yet.
fn visible_to(actor: Option<&AuthenticatedUser>, mut record: NewsletterRecord) -> NewsletterRecord {
    let viewer = actor.map(AuthenticatedUser::as_viewer);
    record
        .articles
        .retain(|article| CanViewArticleSpec::new(&article.article, viewer).is_satisfied());
    record
}
