// src/application/dto/auth.rs
use crate::domain::user::{Capability, Role, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::serde_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Refresh => "refresh",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokenDto {
    pub token: String,
    #[serde(with = "serde_time")]
    pub issued_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

/// Response of the token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPairDto {
    pub access: String,
    pub refresh: String,
    #[serde(with = "serde_time")]
    pub access_expires_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub refresh_expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

impl TokenPairDto {
    pub fn from_parts(access: AuthTokenDto, refresh: AuthTokenDto) -> Self {
        Self {
            access: access.token,
            refresh: refresh.token,
            access_expires_at: access.expires_at,
            refresh_expires_at: refresh.expires_at,
            expires_in: access.expires_in,
        }
    }
}

/// Response of the refresh endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenDto {
    pub access: String,
    #[serde(with = "serde_time")]
    pub access_expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

impl From<AuthTokenDto> for AccessTokenDto {
    fn from(token: AuthTokenDto) -> Self {
        Self {
            access: token.token,
            access_expires_at: token.expires_at,
            expires_in: token.expires_in,
        }
    }
}

/// The caller of a request, resolved from its credential and handed to
/// every service method explicitly.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub role: Role,
    pub capabilities: HashSet<Capability>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    pub fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(resource, action))
    }

    /// Capabilities and id in the shape the domain specifications take.
    pub const fn as_viewer(&self) -> (&HashSet<Capability>, UserId) {
        (&self.capabilities, self.id)
    }
}

#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub user_id: UserId,
    pub username: String,
    pub role: Role,
}
