// src/application/queries/publishers/service.rs
use std::{collections::HashMap, sync::Arc};

use crate::{
    application::{
        dto::{AuthenticatedUser, PublisherDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::publisher::{MembershipRole, PublisherId, PublisherRepository},
};

pub struct PublisherQueryService {
    publisher_repo: Arc<dyn PublisherRepository>,
}

impl PublisherQueryService {
    pub fn new(publisher_repo: Arc<dyn PublisherRepository>) -> Self {
        Self { publisher_repo }
    }

    /// Publishers ordered by name, annotated with the viewer's membership.
    pub async fn list_publishers(
        &self,
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<Vec<PublisherDto>> {
        let memberships = self.memberships(actor).await?;
        let publishers = self.publisher_repo.list().await?;
        Ok(publishers
            .into_iter()
            .map(|publisher| {
                let membership = memberships.get(&publisher.id).copied();
                PublisherDto::new(publisher, membership)
            })
            .collect())
    }

    pub async fn get_publisher(
        &self,
        actor: Option<&AuthenticatedUser>,
        id: i64,
    ) -> ApplicationResult<PublisherDto> {
        let id = PublisherId::new(id)?;
        let publisher = self
            .publisher_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("publisher not found"))?;
        let membership = self.memberships(actor).await?.get(&id).copied();
        Ok(PublisherDto::new(publisher, membership))
    }

    async fn memberships(
        &self,
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<HashMap<PublisherId, MembershipRole>> {
        let Some(actor) = actor else {
            return Ok(HashMap::new());
        };
        Ok(self
            .publisher_repo
            .memberships_of(actor.id)
            .await?
            .into_iter()
            .collect())
    }
}
