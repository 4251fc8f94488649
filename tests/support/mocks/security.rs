// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use newsroom_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenKind, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use newsroom_core::domain::user::{Role, UserId};

use super::time::fixed_now;

/* -------------------------------- PasswordHasher -------------------------------- */

/// Deterministic and fast: `hash::<password>`.
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hash::{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/* -------------------------------- TokenManager -------------------------------- */

/// Tokens are readable strings: `<kind>.<id>.<role>.<username>`.
#[derive(Clone, Debug, Default)]
pub struct StaticTokenManager;

pub fn token_for(kind: TokenKind, id: i64, role: Role, username: &str) -> String {
    format!("{}.{id}.{}.{username}", kind.as_str(), role.as_str())
}

fn parse(token: &str, expected: TokenKind) -> ApplicationResult<TokenSubject> {
    let invalid = || ApplicationError::unauthorized("invalid token");
    let mut parts = token.splitn(4, '.');
    let kind = parts.next().ok_or_else(invalid)?;
    if kind != expected.as_str() {
        return Err(invalid());
    }
    let id: i64 = parts.next().and_then(|id| id.parse().ok()).ok_or_else(invalid)?;
    let role: Role = parts.next().and_then(|r| r.parse().ok()).ok_or_else(invalid)?;
    let username = parts.next().filter(|u| !u.is_empty()).ok_or_else(invalid)?;
    Ok(TokenSubject {
        user_id: UserId(id),
        username: username.to_string(),
        role,
    })
}

#[async_trait]
impl TokenManager for StaticTokenManager {
    async fn issue(&self, subject: TokenSubject, kind: TokenKind) -> ApplicationResult<AuthTokenDto> {
        let issued_at = fixed_now();
        let expires_in = match kind {
            TokenKind::Access => 3600,
            TokenKind::Refresh => 86_400,
        };
        Ok(AuthTokenDto {
            token: token_for(kind, subject.user_id.into(), subject.role, &subject.username),
            issued_at,
            expires_at: issued_at + Duration::seconds(expires_in),
            expires_in,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let subject = parse(token, TokenKind::Access)?;
        let now = fixed_now();
        Ok(AuthenticatedUser {
            id: subject.user_id,
            username: subject.username,
            role: subject.role,
            capabilities: subject.role.default_capabilities(),
            issued_at: now,
            expires_at: now + Duration::hours(1),
        })
    }

    async fn verify_refresh(&self, token: &str) -> ApplicationResult<TokenSubject> {
        parse(token, TokenKind::Refresh)
    }
}
