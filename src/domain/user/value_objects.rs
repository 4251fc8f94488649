// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("user id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capability {
    pub resource: String,
    pub action: String,
}

impl Capability {
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }

    pub fn matches(&self, resource: &str, action: &str) -> bool {
        self.resource == resource && self.action == action
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource, self.action)
    }
}

/// A flat role. Each role maps to a fixed capability set; roles do not
/// inherit from one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Reader,
    Journalist,
    Editor,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Reader, Self::Journalist, Self::Editor];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reader => "reader",
            Self::Journalist => "journalist",
            Self::Editor => "editor",
        }
    }

    /// Name of the persisted permission group that mirrors this role.
    pub const fn group_name(&self) -> &'static str {
        match self {
            Self::Reader => "Reader",
            Self::Journalist => "Journalist",
            Self::Editor => "Editor",
        }
    }

    pub fn default_capabilities(&self) -> HashSet<Capability> {
        use Capability as Cap;
        match self {
            Self::Reader => HashSet::from([
                Cap::new("articles", "view"),
                Cap::new("newsletters", "view"),
                Cap::new("subscriptions", "manage"),
            ]),
            Self::Journalist => HashSet::from([
                Cap::new("articles", "view"),
                Cap::new("articles", "create"),
                Cap::new("articles", "update:own"),
                Cap::new("articles", "delete:own"),
                Cap::new("newsletters", "view"),
                Cap::new("newsletters", "create"),
                Cap::new("newsletters", "update:own"),
                Cap::new("newsletters", "delete:own"),
                Cap::new("publishers", "create"),
                Cap::new("publishers", "join"),
            ]),
            Self::Editor => HashSet::from([
                Cap::new("articles", "view"),
                Cap::new("articles", "view:pending"),
                Cap::new("articles", "update:any"),
                Cap::new("articles", "delete:any"),
                Cap::new("articles", "approve"),
                Cap::new("newsletters", "view"),
                Cap::new("newsletters", "update:any"),
                Cap::new("newsletters", "delete:any"),
                Cap::new("publishers", "create"),
                Cap::new("publishers", "join"),
            ]),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reader" => Ok(Self::Reader),
            "journalist" => Ok(Self::Journalist),
            "editor" => Ok(Self::Editor),
            other => Err(DomainError::Validation(format!("unknown role '{other}'"))),
        }
    }
}

const USERNAME_MAX_LEN: usize = 150;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("username cannot be empty".into()));
        }
        if value.chars().count() > USERNAME_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "username must be at most {USERNAME_MAX_LEN} characters"
            )));
        }
        if !value
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
        {
            return Err(DomainError::Validation(
                "username may contain only letters, digits and @/./+/-/_".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const EMAIL_MAX_LEN: usize = 254;

/// An email address with its domain part lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("email cannot be empty".into()));
        }
        if value.len() > EMAIL_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "email must be at most {EMAIL_MAX_LEN} characters"
            )));
        }

        let invalid = || DomainError::Validation("enter a valid email address".into());
        let (local, domain) = value.rsplit_once('@').ok_or_else(invalid)?;
        let domain_ok = domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
            && !domain.contains('@');
        if local.is_empty() || local.contains('@') || !domain_ok {
            return Err(invalid());
        }
        if value.chars().any(char::is_whitespace) {
            return Err(invalid());
        }

        Ok(Self(format!("{local}@{}", domain.to_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "password hash cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PasswordHash> for String {
    fn from(value: PasswordHash) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(role: Role, resource: &str, action: &str) -> bool {
        role.default_capabilities()
            .iter()
            .any(|cap| cap.matches(resource, action))
    }

    #[test]
    fn only_editors_can_approve() {
        assert!(has(Role::Editor, "articles", "approve"));
        assert!(!has(Role::Journalist, "articles", "approve"));
        assert!(!has(Role::Reader, "articles", "approve"));
    }

    #[test]
    fn readers_cannot_mutate_content() {
        for action in ["create", "update:own", "update:any", "delete:own", "delete:any"] {
            assert!(!has(Role::Reader, "articles", action), "articles:{action}");
            assert!(!has(Role::Reader, "newsletters", action), "newsletters:{action}");
        }
        assert!(has(Role::Reader, "subscriptions", "manage"));
    }

    #[test]
    fn journalists_only_own_their_content() {
        assert!(has(Role::Journalist, "articles", "create"));
        assert!(has(Role::Journalist, "articles", "update:own"));
        assert!(!has(Role::Journalist, "articles", "update:any"));
        assert!(has(Role::Journalist, "newsletters", "delete:own"));
        assert!(!has(Role::Journalist, "newsletters", "delete:any"));
    }

    #[test]
    fn editors_do_not_author_content() {
        assert!(!has(Role::Editor, "articles", "create"));
        assert!(has(Role::Editor, "articles", "delete:any"));
        assert!(has(Role::Editor, "publishers", "join"));
        assert!(!has(Role::Reader, "publishers", "join"));
    }

    #[test]
    fn role_round_trips_through_its_name() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn username_rules() {
        assert_eq!(Username::new("  alice ").unwrap().as_str(), "alice");
        assert!(Username::new("a.b+c-d_e@f").is_ok());
        assert!(Username::new("").is_err());
        assert!(Username::new("has space").is_err());
        assert!(Username::new("x".repeat(151)).is_err());
    }

    #[test]
    fn email_domain_is_lowercased() {
        let email = EmailAddress::new("Jane.Doe@Example.COM").unwrap();
        assert_eq!(email.as_str(), "Jane.Doe@example.com");
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for raw in ["", "plain", "@example.com", "a@localhost", "a@@b.com", "a b@c.com", "a@.com"] {
            assert!(EmailAddress::new(raw).is_err(), "{raw:?} should be rejected");
        }
    }
}
