// src/application/dto/publishers.rs
use crate::domain::publisher::{MembershipRole, Publisher};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublisherSummaryDto {
    pub id: i64,
    pub name: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Publisher> for PublisherSummaryDto {
    fn from(publisher: Publisher) -> Self {
        Self {
            id: publisher.id.into(),
            name: publisher.name.into(),
            created_at: publisher.created_at,
        }
    }
}

/// A publisher as seen by a particular viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublisherDto {
    pub id: i64,
    pub name: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub membership: Option<MembershipRole>,
}

impl PublisherDto {
    pub fn new(publisher: Publisher, membership: Option<MembershipRole>) -> Self {
        Self {
            id: publisher.id.into(),
            name: publisher.name.into(),
            created_at: publisher.created_at,
            membership,
        }
    }
}
