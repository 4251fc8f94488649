// src/application/commands/users/refresh.rs
use super::UserCommandService;
use crate::application::{
    dto::{AccessTokenDto, TokenKind},
    error::{ApplicationError, ApplicationResult},
};

pub struct RefreshTokenCommand {
    pub refresh: String,
}

impl UserCommandService {
    /// The user is re-read so a deleted account cannot mint new tokens.
    pub async fn refresh_token(
        &self,
        command: RefreshTokenCommand,
    ) -> ApplicationResult<AccessTokenDto> {
        let subject = self.token_manager.verify_refresh(&command.refresh).await?;

        let user = self
            .user_repo
            .find_by_id(subject.user_id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("user no longer exists"))?;

        let access = self.issue_token(&user, TokenKind::Access).await?;
        Ok(access.into())
    }
}
