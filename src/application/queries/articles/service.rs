// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::domain::article::{ArticleRecord, ArticleReadRepository};
use crate::application::dto::ArticleDto;

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }
}

pub(super) fn to_dtos(records: Vec<ArticleRecord>) -> Vec<ArticleDto> {
    records.into_iter().map(Into::into).collect()
}
