// src/application/commands/publishers/service.rs
use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::publisher::PublisherRepository};

pub struct PublisherCommandService {
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PublisherCommandService {
    pub fn new(publisher_repo: Arc<dyn PublisherRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            publisher_repo,
            clock,
        }
    }
}
