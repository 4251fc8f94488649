// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            articles::ArticleCommandService, newsletters::NewsletterCommandService,
            publishers::PublisherCommandService, subscriptions::SubscriptionCommandService,
            users::UserCommandService,
        },
        dto::AuthenticatedUser,
        notifications::{ApprovalNotifier, NotificationSettings},
        ports::{
            notification::{Mailer, SocialPublisher},
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::{
            articles::ArticleQueryService, dashboard::DashboardQueryService,
            newsletters::NewsletterQueryService, publishers::PublisherQueryService,
            subscriptions::SubscriptionQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        newsletter::{NewsletterReadRepository, NewsletterWriteRepository},
        publisher::PublisherRepository,
        subscription::SubscriptionRepository,
        user::UserRepository,
    },
};

/// Storage adapters the services are built over.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub article_writes: Arc<dyn ArticleWriteRepository>,
    pub article_reads: Arc<dyn ArticleReadRepository>,
    pub newsletter_writes: Arc<dyn NewsletterWriteRepository>,
    pub newsletter_reads: Arc<dyn NewsletterReadRepository>,
    pub publishers: Arc<dyn PublisherRepository>,
    pub subscriptions: Arc<dyn SubscriptionRepository>,
}

/// Outbound channels used when an article is approved.
#[derive(Clone)]
pub struct Outbound {
    pub mailer: Arc<dyn Mailer>,
    pub social: Arc<dyn SocialPublisher>,
    pub settings: NotificationSettings,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub newsletter_commands: Arc<NewsletterCommandService>,
    pub newsletter_queries: Arc<NewsletterQueryService>,
    pub publisher_commands: Arc<PublisherCommandService>,
    pub publisher_queries: Arc<PublisherQueryService>,
    pub subscription_commands: Arc<SubscriptionCommandService>,
    pub subscription_queries: Arc<SubscriptionQueryService>,
    pub dashboard_queries: Arc<DashboardQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        outbound: Outbound,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let notifier = Arc::new(ApprovalNotifier::new(
            Arc::clone(&repos.subscriptions),
            outbound.mailer,
            outbound.social,
            outbound.settings,
        ));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            password_hasher,
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_writes),
            Arc::clone(&repos.article_reads),
            Arc::clone(&repos.publishers),
            notifier,
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&repos.article_reads)));

        let newsletter_commands = Arc::new(NewsletterCommandService::new(
            Arc::clone(&repos.newsletter_writes),
            Arc::clone(&repos.newsletter_reads),
            Arc::clone(&repos.article_reads),
            Arc::clone(&clock),
        ));
        let newsletter_queries = Arc::new(NewsletterQueryService::new(Arc::clone(
            &repos.newsletter_reads,
        )));

        let publisher_commands = Arc::new(PublisherCommandService::new(
            Arc::clone(&repos.publishers),
            clock,
        ));
        let publisher_queries = Arc::new(PublisherQueryService::new(Arc::clone(&repos.publishers)));

        let subscription_commands = Arc::new(SubscriptionCommandService::new(
            Arc::clone(&repos.subscriptions),
            Arc::clone(&repos.publishers),
            Arc::clone(&repos.users),
        ));
        let subscription_queries = Arc::new(SubscriptionQueryService::new(
            Arc::clone(&repos.subscriptions),
            Arc::clone(&repos.publishers),
            Arc::clone(&repos.users),
        ));

        let dashboard_queries = Arc::new(DashboardQueryService::new(
            repos.article_reads,
            repos.newsletter_reads,
            repos.subscriptions,
        ));

        Self {
            user_commands,
            article_commands,
            article_queries,
            newsletter_commands,
            newsletter_queries,
            publisher_commands,
            publisher_queries,
            subscription_commands,
            subscription_queries,
            dashboard_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    /// Resolve a raw access token into the caller it was issued to.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
