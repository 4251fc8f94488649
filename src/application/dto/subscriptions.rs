// src/application/dto/subscriptions.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionKind {
    Publisher,
    Journalist,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscriptionTargetDto {
    pub id: i64,
    pub name: String,
    pub subscribed: bool,
}

/// Every publisher and journalist with the reader's current state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscriptionOverviewDto {
    pub publishers: Vec<SubscriptionTargetDto>,
    pub journalists: Vec<SubscriptionTargetDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscriptionToggleDto {
    pub kind: SubscriptionKind,
    pub id: i64,
    pub name: String,
    pub subscribed: bool,
}
