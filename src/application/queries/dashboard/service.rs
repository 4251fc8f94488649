// src/application/queries/dashboard/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, DashboardDto},
        error::ApplicationResult,
    },
    domain::{
        article::ArticleReadRepository, newsletter::NewsletterReadRepository,
        subscription::SubscriptionRepository, user::Role,
    },
};

pub struct DashboardQueryService {
    article_repo: Arc<dyn ArticleReadRepository>,
    newsletter_repo: Arc<dyn NewsletterReadRepository>,
    subscription_repo: Arc<dyn SubscriptionRepository>,
}

impl DashboardQueryService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        newsletter_repo: Arc<dyn NewsletterReadRepository>,
        subscription_repo: Arc<dyn SubscriptionRepository>,
    ) -> Self {
        Self {
            article_repo,
            newsletter_repo,
            subscription_repo,
        }
    }

    pub async fn dashboard(&self, actor: &AuthenticatedUser) -> ApplicationResult<DashboardDto> {
        let mut dashboard = DashboardDto {
            role: actor.role,
            ..DashboardDto::default()
        };

        match actor.role {
            Role::Journalist => {
                dashboard.own_articles = collect(self.article_repo.list_by_author(actor.id).await?);
                dashboard.own_newsletters =
                    collect(self.newsletter_repo.list_by_author(actor.id).await?);
            }
            Role::Editor => {
                dashboard.pending_articles = collect(self.article_repo.list_pending().await?);
                dashboard.approved_articles = collect(self.article_repo.list_approved().await?);
            }
            Role::Reader => {
                dashboard.subscribed_publishers =
                    collect(self.subscription_repo.subscribed_publishers(actor.id).await?);
                dashboard.followed_journalists =
                    collect(self.subscription_repo.followed_journalists(actor.id).await?);
                dashboard.feed = collect(self.article_repo.list_subscribed(actor.id).await?);
            }
        }

        Ok(dashboard)
    }
}

fn collect<T, U: From<T>>(items: Vec<T>) -> Vec<U> {
    items.into_iter().map(Into::into).collect()
}
