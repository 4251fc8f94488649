// src/application/commands/users/service.rs
use std::sync::Arc;

use crate::application::{
    dto::{AuthTokenDto, TokenKind, TokenSubject},
    error::ApplicationResult,
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
};
use crate::domain::user::{User, UserRepository};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
            clock,
        }
    }

    pub(super) async fn issue_token(
        &self,
        user: &User,
        kind: TokenKind,
    ) -> ApplicationResult<AuthTokenDto> {
        let subject = TokenSubject {
            user_id: user.id,
            username: user.username.to_string(),
            role: user.role,
        };
        self.token_manager.issue(subject, kind).await
    }
}
