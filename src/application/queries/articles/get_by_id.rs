// src/application/queries/articles/get_by_id.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, specifications::CanViewArticleSpec},
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Pending articles the viewer may not see are reported as missing.
    pub async fn get_article_by_id(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)?;
        let record = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let viewer = actor.map(AuthenticatedUser::as_viewer);
        if !CanViewArticleSpec::new(&record.article, viewer).is_satisfied() {
            return Err(ApplicationError::not_found("article not found"));
        }

        Ok(record.into())
    }
}
