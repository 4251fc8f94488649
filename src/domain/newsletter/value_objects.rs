// src/domain/newsletter/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NewsletterId(pub i64);

impl NewsletterId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "newsletter id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<NewsletterId> for i64 {
    fn from(value: NewsletterId) -> Self {
        value.0
    }
}

impl fmt::Display for NewsletterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const TITLE_MAX_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterTitle(String);

impl NewsletterTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if value.chars().count() > TITLE_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "title must be at most {TITLE_MAX_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NewsletterTitle> for String {
    fn from(value: NewsletterTitle) -> Self {
        value.0
    }
}

impl fmt::Display for NewsletterTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterDescription(String);

impl NewsletterDescription {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "description cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NewsletterDescription> for String {
    fn from(value: NewsletterDescription) -> Self {
        value.0
    }
}
