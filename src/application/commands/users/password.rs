// src/application/commands/users/password.rs
use crate::application::error::{ApplicationError, ApplicationResult};

pub(super) const MIN_PASSWORD_LENGTH: usize = 8;

pub(super) fn validate_password(password: &str, username: &str) -> ApplicationResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApplicationError::validation(format!(
            "This password is too short. It must contain at least {MIN_PASSWORD_LENGTH} characters."
        )));
    }

    if password.chars().all(|c| c.is_ascii_digit()) {
        return Err(ApplicationError::validation(
            "This password is entirely numeric.",
        ));
    }

    if password.eq_ignore_ascii_case(username) {
        return Err(ApplicationError::validation(
            "The password is too similar to the username.",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reasonable_passwords() {
        assert!(validate_password("correct horse", "alice").is_ok());
    }

    #[test]
    fn rejects_short_numeric_and_username_passwords() {
        assert!(validate_password("short", "alice").is_err());
        assert!(validate_password("1234567890", "alice").is_err());
        assert!(validate_password("AliceAlice", "alicealice").is_err());
    }
}
