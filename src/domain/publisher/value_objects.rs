// src/domain/publisher/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublisherId(pub i64);

impl PublisherId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "publisher id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PublisherId> for i64 {
    fn from(value: PublisherId) -> Self {
        value.0
    }
}

impl fmt::Display for PublisherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const NAME_MAX_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherName(String);

impl PublisherName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("Publisher name is required!".into()));
        }
        if value.chars().count() > NAME_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "publisher name must be at most {NAME_MAX_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PublisherName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PublisherName> for String {
    fn from(value: PublisherName) -> Self {
        value.0
    }
}

/// Which member relation a user occupies in a publisher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipRole {
    Journalist,
    Editor,
}

impl MembershipRole {
    /// Readers have no member relation.
    pub const fn for_role(role: Role) -> Option<Self> {
        match role {
            Role::Journalist => Some(Self::Journalist),
            Role::Editor => Some(Self::Editor),
            Role::Reader => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Journalist => "journalist",
            Self::Editor => "editor",
        }
    }
}

impl fmt::Display for MembershipRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        assert!(PublisherName::new("   ").is_err());
        assert_eq!(PublisherName::new(" Daily ").unwrap().as_str(), "Daily");
    }

    #[test]
    fn readers_have_no_membership_role() {
        assert_eq!(MembershipRole::for_role(Role::Reader), None);
        assert_eq!(
            MembershipRole::for_role(Role::Editor),
            Some(MembershipRole::Editor)
        );
    }
}
