// src/application/commands/users/login.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::{TokenKind, TokenPairDto, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{User, Username},
};

pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

pub struct LoginResult {
    pub tokens: TokenPairDto,
    pub user: UserDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let user = self
            .find_and_authenticate_user(command.username, &command.password)
            .await?;

        let access = self.issue_token(&user, TokenKind::Access).await?;
        let refresh = self.issue_token(&user, TokenKind::Refresh).await?;

        Ok(LoginResult {
            tokens: TokenPairDto::from_parts(access, refresh),
            user: user.into(),
        })
    }

    /// Unknown users and wrong passwords are reported identically.
    async fn find_and_authenticate_user(
        &self,
        username: String,
        password: &str,
    ) -> ApplicationResult<User> {
        let invalid = || ApplicationError::unauthorized("invalid credentials");
        let username = Username::new(username).map_err(|_| invalid())?;

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(invalid)?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await
            .map_err(|_| invalid())?;

        Ok(user)
    }
}
