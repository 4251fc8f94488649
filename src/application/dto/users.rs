// src/application/dto/users.rs
use crate::domain::user::{Role, User, UserSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummaryDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl From<UserSummary> for UserSummaryDto {
    fn from(user: UserSummary) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.into(),
            email: user.email.into(),
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.into(),
            email: user.email.into(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}
