// src/application/queries/subscriptions/service.rs
use std::{collections::HashSet, sync::Arc};

use crate::{
    application::{
        dto::{AuthenticatedUser, SubscriptionOverviewDto, SubscriptionTargetDto},
        error::ApplicationResult,
    },
    domain::{
        publisher::PublisherRepository,
        subscription::SubscriptionRepository,
        user::{Role, UserRepository},
    },
};

pub struct SubscriptionQueryService {
    subscription_repo: Arc<dyn SubscriptionRepository>,
    publisher_repo: Arc<dyn PublisherRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl SubscriptionQueryService {
    pub fn new(
        subscription_repo: Arc<dyn SubscriptionRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            subscription_repo,
            publisher_repo,
            user_repo,
        }
    }

    pub async fn overview(&self, actor: &AuthenticatedUser) -> ApplicationResult<SubscriptionOverviewDto> {
        let subscribed: HashSet<i64> = self
            .subscription_repo
            .subscribed_publishers(actor.id)
            .await?
            .into_iter()
            .map(|publisher| publisher.id.into())
            .collect();
        let followed: HashSet<i64> = self
            .subscription_repo
            .followed_journalists(actor.id)
            .await?
            .into_iter()
            .map(|journalist| journalist.id.into())
            .collect();

        let publishers = self
            .publisher_repo
            .list()
            .await?
            .into_iter()
            .map(|publisher| {
                let id = i64::from(publisher.id);
                SubscriptionTargetDto {
                    id,
                    name: publisher.name.into(),
                    subscribed: subscribed.contains(&id),
                }
            })
            .collect();

        let journalists = self
            .user_repo
            .list_by_role(Role::Journalist)
            .await?
            .into_iter()
            .map(|journalist| {
                let id = i64::from(journalist.id);
                SubscriptionTargetDto {
                    id,
                    name: journalist.username.into(),
                    subscribed: followed.contains(&id),
                }
            })
            .collect();

        Ok(SubscriptionOverviewDto {
            publishers,
            journalists,
        })
    }
}
