// src/application/dto/dashboard.rs
use crate::domain::user::Role;
use serde::{Deserialize, Serialize};

use super::{
    articles::ArticleDto, newsletters::NewsletterDto, publishers::PublisherSummaryDto,
    users::UserSummaryDto,
};

/// Role-specific landing data. Sections that do not apply to the role are
/// left empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardDto {
    pub role: Role,
    pub own_articles: Vec<ArticleDto>,
    pub own_newsletters: Vec<NewsletterDto>,
    pub pending_articles: Vec<ArticleDto>,
    pub approved_articles: Vec<ArticleDto>,
    pub subscribed_publishers: Vec<PublisherSummaryDto>,
    pub followed_journalists: Vec<UserSummaryDto>,
    pub feed: Vec<ArticleDto>,
}
