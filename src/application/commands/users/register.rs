// src/application/commands/users/register.rs
use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{EmailAddress, NewUser, PasswordHash, Role, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Checked against `password` when present (form registrations).
    pub password_confirmation: Option<String>,
    pub role: Role,
}

impl UserCommandService {
    /// Open registration. The role is chosen by the registrant and fixed
    /// from then on.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let email = EmailAddress::new(command.email)?;

        if let Some(confirmation) = &command.password_confirmation {
            if confirmation != &command.password {
                return Err(ApplicationError::validation(
                    "The two password fields didn't match.",
                ));
            }
        }
        validate_password(&command.password, username.as_str())?;

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::validation(
                "A user with that username already exists.",
            ));
        }
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::validation(
                "This email is already registered!",
            ));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;
        let new_user = NewUser::new(username, email, password_hash, command.role, self.clock.now());
        let user = self.user_repo.insert(new_user).await?;

        tracing::info!(user_id = i64::from(user.id), role = %user.role, "user registered");
        Ok(user.into())
    }
}
