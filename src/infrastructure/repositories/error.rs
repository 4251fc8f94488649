// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

/// SQLite reports the offending columns in the message, e.g.
/// `UNIQUE constraint failed: users.username`.
const UNIQUE_USER_USERNAME: &str = "users.username";
const UNIQUE_USER_EMAIL: &str = "users.email";
const APPROVAL_TRIGGER: &str = "article approval cannot be revoked";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            match db_err.kind() {
                ErrorKind::UniqueViolation if message.contains(UNIQUE_USER_USERNAME) => {
                    DomainError::Conflict("A user with that username already exists.".into())
                }
                ErrorKind::UniqueViolation if message.contains(UNIQUE_USER_EMAIL) => {
                    DomainError::Conflict("This email is already registered!".into())
                }
                ErrorKind::UniqueViolation => {
                    DomainError::Conflict("unique constraint violated".into())
                }
                ErrorKind::ForeignKeyViolation => {
                    DomainError::Validation("referenced record does not exist".into())
                }
                ErrorKind::CheckViolation => {
                    DomainError::Validation("check constraint violated".into())
                }
                _ if message.contains(APPROVAL_TRIGGER) => {
                    DomainError::Conflict(APPROVAL_TRIGGER.into())
                }
                _ => DomainError::Persistence(message.to_string()),
            }
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
