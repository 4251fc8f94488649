// src/infrastructure/repositories/sqlite_publisher.rs
use super::map_sqlx;
use super::rows::{PUBLISHER_COLUMNS, PublisherRow, USER_SUMMARY_COLUMNS, UserSummaryRow, collect};
use crate::domain::errors::DomainResult;
use crate::domain::publisher::{
    MembershipRole, NewPublisher, Publisher, PublisherId, PublisherRepository,
};
use crate::domain::user::{UserId, UserSummary};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct SqlitePublisherRepository {
    pool: SqlitePool,
}

impl SqlitePublisherRepository {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const fn membership_table(role: MembershipRole) -> &'static str {
    match role {
        MembershipRole::Journalist => "publisher_journalists",
        MembershipRole::Editor => "publisher_editors",
    }
}

#[async_trait]
impl PublisherRepository for SqlitePublisherRepository {
    async fn insert(&self, publisher: NewPublisher) -> DomainResult<Publisher> {
        let row = sqlx::query_as::<_, PublisherRow>(
            "INSERT INTO publishers (name, created_at) VALUES (?, ?)
             RETURNING id, name, created_at",
        )
        .bind(publisher.name.as_str())
        .bind(publisher.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Publisher::try_from(row)
    }

    async fn find_by_id(&self, id: PublisherId) -> DomainResult<Option<Publisher>> {
        let sql = format!("SELECT {PUBLISHER_COLUMNS} FROM publishers p WHERE p.id = ?");
        let row = sqlx::query_as::<_, PublisherRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Publisher::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Publisher>> {
        let sql = format!("SELECT {PUBLISHER_COLUMNS} FROM publishers p ORDER BY p.name, p.id");
        let rows = sqlx::query_as::<_, PublisherRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        collect(rows)
    }

    /// Joining twice leaves a single membership.
    async fn add_member(
        &self,
        publisher: PublisherId,
        user: UserId,
        role: MembershipRole,
    ) -> DomainResult<()> {
        let sql = format!(
            "INSERT OR IGNORE INTO {} (publisher_id, user_id) VALUES (?, ?)",
            membership_table(role)
        );
        sqlx::query(&sql)
            .bind(i64::from(publisher))
            .bind(i64::from(user))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn remove_member(
        &self,
        publisher: PublisherId,
        user: UserId,
        role: MembershipRole,
    ) -> DomainResult<bool> {
        let sql = format!(
            "DELETE FROM {} WHERE publisher_id = ? AND user_id = ?",
            membership_table(role)
        );
        let result = sqlx::query(&sql)
            .bind(i64::from(publisher))
            .bind(i64::from(user))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }

    async fn memberships_of(
        &self,
        user: UserId,
    ) -> DomainResult<Vec<(PublisherId, MembershipRole)>> {
        let rows = sqlx::query_as::<_, (i64, String)>(
            "SELECT publisher_id, 'journalist' FROM publisher_journalists WHERE user_id = ?
             UNION ALL
             SELECT publisher_id, 'editor' FROM publisher_editors WHERE user_id = ?",
        )
        .bind(i64::from(user))
        .bind(i64::from(user))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|(publisher_id, role)| {
                let role = if role == "editor" {
                    MembershipRole::Editor
                } else {
                    MembershipRole::Journalist
                };
                Ok((PublisherId::new(publisher_id)?, role))
            })
            .collect()
    }

    async fn members(
        &self,
        publisher: PublisherId,
        role: MembershipRole,
    ) -> DomainResult<Vec<UserSummary>> {
        let sql = format!(
            "SELECT {USER_SUMMARY_COLUMNS} FROM users u
             JOIN {} m ON m.user_id = u.id
             WHERE m.publisher_id = ?
             ORDER BY u.username",
            membership_table(role)
        );
        let rows = sqlx::query_as::<_, UserSummaryRow>(&sql)
            .bind(i64::from(publisher))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        collect(rows)
    }
}
