// src/infrastructure/repositories/rows.rs
use crate::domain::errors::DomainResult;
use crate::domain::publisher::{Publisher, PublisherId, PublisherName};
use crate::domain::user::{EmailAddress, Role, UserId, UserSummary, Username};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub(super) const USER_SUMMARY_COLUMNS: &str =
    "u.id AS id, u.username AS username, u.email AS email, u.role AS role";
pub(super) const PUBLISHER_COLUMNS: &str = "p.id AS id, p.name AS name, p.created_at AS created_at";

#[derive(Debug, FromRow)]
pub(super) struct UserSummaryRow {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl TryFrom<UserSummaryRow> for UserSummary {
    type Error = crate::domain::errors::DomainError;

    fn try_from(row: UserSummaryRow) -> Result<Self, Self::Error> {
        user_summary(row.id, row.username, row.email, &row.role)
    }
}

#[derive(Debug, FromRow)]
pub(super) struct PublisherRow {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<PublisherRow> for Publisher {
    type Error = crate::domain::errors::DomainError;

    fn try_from(row: PublisherRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PublisherId::new(row.id)?,
            name: PublisherName::new(row.name)?,
            created_at: row.created_at,
        })
    }
}

pub(super) fn user_summary(
    id: i64,
    username: String,
    email: String,
    role: &str,
) -> DomainResult<UserSummary> {
    Ok(UserSummary {
        id: UserId::new(id)?,
        username: Username::new(username)?,
        email: EmailAddress::new(email)?,
        role: role.parse::<Role>()?,
    })
}

pub(super) fn collect<R, T>(rows: Vec<R>) -> DomainResult<Vec<T>>
where
    T: TryFrom<R, Error = crate::domain::errors::DomainError>,
{
    rows.into_iter().map(T::try_from).collect()
}
