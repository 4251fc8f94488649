// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenKind, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use crate::infrastructure::security::claims::{TokenClaims, parse_claims};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{DateTime, Utc};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

/// Issues and verifies Ed25519-signed biscuit tokens. Access and refresh
/// tokens differ only in their `token_type` fact and lifetime.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(
        private_key_hex: &str,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            access_ttl,
            refresh_ttl,
        })
    }

    const fn ttl(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        }
    }

    /// Verifies signature, time window and token type, then reads the facts
    /// back out of the authorizer.
    fn verify(&self, token: &str, kind: TokenKind) -> ApplicationResult<TokenClaims> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let policy = format!("allow if token_type(\"{}\");", kind.as_str());
        let mut authorizer = AuthorizerBuilder::new()
            .code(policy.as_str())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .time()
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let (facts, _, _, _) = authorizer.dump();
        let claims = parse_claims(facts)?;
        if claims.kind != kind {
            return Err(ApplicationError::unauthorized("wrong token type"));
        }
        Ok(claims)
    }
}

fn build_code_and_params(
    subject: &TokenSubject,
    kind: TokenKind,
    issued_at: SystemTime,
    expires_at: SystemTime,
) -> (&'static str, HashMap<String, Term>) {
    let mut params: HashMap<String, Term> = HashMap::new();
    params.insert("uid".to_string(), i64::from(subject.user_id).into());
    params.insert("uname".to_string(), subject.username.clone().into());
    params.insert("urole".to_string(), subject.role.as_str().into());
    params.insert("kind".to_string(), kind.as_str().into());
    params.insert("issued".to_string(), issued_at.into());
    params.insert("exp".to_string(), expires_at.into());

    let code = r"
        user({uid}, {uname});
        role({urole});
        token_type({kind});
        issued_at({issued});
        expires_at({exp});
        check if time($now), $now >= {issued};
        check if time($now), $now <= {exp};
    ";

    (code, params)
}

fn build_and_serialize_biscuit(
    code: &str,
    params: HashMap<String, Term>,
    root: &KeyPair,
) -> ApplicationResult<String> {
    let token = Biscuit::builder()
        .code_with_params(code, params, HashMap::new())
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .build(root)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

    token
        .seal()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .to_base64()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

fn ttl_to_expires_in_seconds(ttl: Duration) -> i64 {
    i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX)
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject, kind: TokenKind) -> ApplicationResult<AuthTokenDto> {
        let ttl = self.ttl(kind);
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;
        let (code, params) = build_code_and_params(&subject, kind, issued_at, expires_at);

        let token = build_and_serialize_biscuit(code, params, self.root.as_ref())?;

        Ok(AuthTokenDto {
            token,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: ttl_to_expires_in_seconds(ttl),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.verify(token, TokenKind::Access)
            .map(TokenClaims::into_authenticated_user)
    }

    async fn verify_refresh(&self, token: &str) -> ApplicationResult<TokenSubject> {
        self.verify(token, TokenKind::Refresh)
            .map(|claims| claims.subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{Role, UserId};

    const KEY: &str = "0101010101010101010101010101010101010101010101010101010101010101";

    fn manager() -> BiscuitTokenManager {
        BiscuitTokenManager::new(KEY, Duration::from_secs(60), Duration::from_secs(600)).unwrap()
    }

    fn subject(role: Role) -> TokenSubject {
        TokenSubject {
            user_id: UserId(7),
            username: "ed".into(),
            role,
        }
    }

    #[tokio::test]
    async fn access_token_carries_role_capabilities() {
        let manager = manager();
        let token = manager.issue(subject(Role::Editor), TokenKind::Access).await.unwrap();
        assert_eq!(token.expires_in, 60);

        let user = manager.authenticate(&token.token).await.unwrap();
        assert_eq!(user.id, UserId(7));
        assert_eq!(user.username, "ed");
        assert_eq!(user.role, Role::Editor);
        assert!(user.has_capability("articles", "approve"));
        assert!(!user.has_capability("articles", "create"));
    }

    #[tokio::test]
    async fn token_types_are_not_interchangeable() {
        let manager = manager();
        let access = manager.issue(subject(Role::Reader), TokenKind::Access).await.unwrap();
        let refresh = manager.issue(subject(Role::Reader), TokenKind::Refresh).await.unwrap();

        assert!(manager.authenticate(&refresh.token).await.is_err());
        assert!(manager.verify_refresh(&access.token).await.is_err());
        let verified = manager.verify_refresh(&refresh.token).await.unwrap();
        assert_eq!(verified.user_id, UserId(7));
        assert_eq!(verified.role, Role::Reader);
    }

    #[tokio::test]
    async fn tokens_from_another_key_are_rejected() {
        let other = BiscuitTokenManager::new(
            "0202020202020202020202020202020202020202020202020202020202020202",
            Duration::from_secs(60),
            Duration::from_secs(600),
        )
        .unwrap();
        let token = other.issue(subject(Role::Reader), TokenKind::Access).await.unwrap();
        assert!(manager().authenticate(&token.token).await.is_err());
        assert!(manager().authenticate("not-a-token").await.is_err());
    }
}
