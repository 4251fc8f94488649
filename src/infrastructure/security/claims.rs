// src/infrastructure/security/claims.rs
use crate::application::{
    dto::{AuthenticatedUser, TokenKind, TokenSubject},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Role, UserId};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Everything a verified token says about its holder.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub subject: TokenSubject,
    pub kind: TokenKind,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl TokenClaims {
    /// Capabilities come from the role alone, so a token never carries more
    /// than its role grants.
    pub fn into_authenticated_user(self) -> AuthenticatedUser {
        AuthenticatedUser {
            id: self.subject.user_id,
            username: self.subject.username,
            role: self.subject.role,
            capabilities: self.subject.role.default_capabilities(),
            issued_at: self.issued_at,
            expires_at: self.expires_at,
        }
    }
}

pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<TokenClaims> {
    let mut ctx = ClaimsContext::default();
    for fact in facts {
        ctx.apply_predicate(&fact.predicate);
    }
    ctx.finish()
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    username: Option<String>,
    role: Option<Role>,
    kind: Option<TokenKind>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
}

impl ClaimsContext {
    fn apply_predicate(&mut self, predicate: &Predicate) {
        match predicate.name.as_str() {
            "user" => self.handle_user(predicate),
            "role" => {
                self.role = first_str(predicate).and_then(|name| name.parse().ok());
            }
            "token_type" => {
                self.kind = match first_str(predicate) {
                    Some("access") => Some(TokenKind::Access),
                    Some("refresh") => Some(TokenKind::Refresh),
                    _ => None,
                };
            }
            "issued_at" => self.issued_at = first_date(predicate),
            "expires_at" => self.expires_at = first_date(predicate),
            _ => {}
        }
    }

    fn handle_user(&mut self, predicate: &Predicate) {
        if let [Term::Integer(id), Term::Str(name)] = predicate.terms.as_slice() {
            self.user_id = Some(*id);
            self.username = Some(name.clone());
        }
    }

    fn finish(self) -> ApplicationResult<TokenClaims> {
        let user_id = self
            .user_id
            .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;
        let username = self
            .username
            .ok_or_else(|| ApplicationError::unauthorized("missing username"))?;
        let role = self
            .role
            .ok_or_else(|| ApplicationError::unauthorized("missing role"))?;
        let kind = self
            .kind
            .ok_or_else(|| ApplicationError::unauthorized("missing token type"))?;
        let issued_at = self
            .issued_at
            .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?;
        let expires_at = self
            .expires_at
            .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?;

        Ok(TokenClaims {
            subject: TokenSubject {
                user_id: UserId::new(user_id)?,
                username,
                role,
            },
            kind,
            issued_at: issued_at.into(),
            expires_at: expires_at.into(),
        })
    }
}

fn first_str(predicate: &Predicate) -> Option<&str> {
    match predicate.terms.first() {
        Some(Term::Str(value)) => Some(value.as_str()),
        _ => None,
    }
}

fn first_date(predicate: &Predicate) -> Option<SystemTime> {
    match predicate.terms.first() {
        Some(Term::Date(seconds)) => Some(UNIX_EPOCH + Duration::from_secs(*seconds)),
        _ => None,
    }
}
