// src/presentation/web/handlers/mod.rs
pub mod accounts;
pub mod articles;
pub mod dashboard;
pub mod newsletters;
pub mod publishers;
pub mod subscriptions;

use crate::application::error::ApplicationError;
use crate::domain::errors::DomainError;

/// Errors a form page shows inline instead of redirecting away.
fn form_message(err: &ApplicationError) -> Option<String> {
    match err {
        ApplicationError::Validation(msg)
        | ApplicationError::Conflict(msg)
        | ApplicationError::Domain(DomainError::Validation(msg) | DomainError::Conflict(msg)) => {
            Some(msg.clone())
        }
        _ => None,
    }
}

/// Browsers send empty strings for untouched optional inputs.
fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
