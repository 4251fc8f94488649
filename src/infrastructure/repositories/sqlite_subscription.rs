// src/infrastructure/repositories/sqlite_subscription.rs
use super::map_sqlx;
use super::rows::{PUBLISHER_COLUMNS, PublisherRow, USER_SUMMARY_COLUMNS, UserSummaryRow, collect};
use crate::domain::errors::DomainResult;
use crate::domain::publisher::{Publisher, PublisherId};
use crate::domain::subscription::{SubscriptionRepository, SubscriptionTarget, ToggleOutcome};
use crate::domain::user::{UserId, UserSummary};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct SqliteSubscriptionRepository {
    pool: SqlitePool,
}

impl SqliteSubscriptionRepository {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn users(&self, sql: &str, id: i64) -> DomainResult<Vec<UserSummary>> {
        let rows = sqlx::query_as::<_, UserSummaryRow>(sql)
            .bind(id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        collect(rows)
    }
}

/// Table and column naming the target side of a subscription.
const fn target_parts(target: SubscriptionTarget) -> (&'static str, &'static str, i64) {
    match target {
        SubscriptionTarget::Publisher(id) => ("publisher_subscriptions", "publisher_id", id.0),
        SubscriptionTarget::Journalist(id) => ("journalist_subscriptions", "journalist_id", id.0),
    }
}

#[async_trait]
impl SubscriptionRepository for SqliteSubscriptionRepository {
    /// Removes the subscription when present, creates it otherwise. Both
    /// steps share one transaction so concurrent toggles cannot interleave.
    async fn toggle(
        &self,
        reader: UserId,
        target: SubscriptionTarget,
    ) -> DomainResult<ToggleOutcome> {
        let (table, column, target_id) = target_parts(target);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let delete = format!("DELETE FROM {table} WHERE reader_id = ? AND {column} = ?");
        let removed = sqlx::query(&delete)
            .bind(i64::from(reader))
            .bind(target_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .rows_affected();

        let outcome = if removed > 0 {
            ToggleOutcome::Unsubscribed
        } else {
            let insert = format!("INSERT INTO {table} (reader_id, {column}) VALUES (?, ?)");
            sqlx::query(&insert)
                .bind(i64::from(reader))
                .bind(target_id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            ToggleOutcome::Subscribed
        };

        tx.commit().await.map_err(map_sqlx)?;
        Ok(outcome)
    }

    async fn is_subscribed(&self, reader: UserId, target: SubscriptionTarget) -> DomainResult<bool> {
        let (table, column, target_id) = target_parts(target);
        let sql = format!("SELECT COUNT(1) FROM {table} WHERE reader_id = ? AND {column} = ?");
        let count = sqlx::query_scalar::<_, i64>(&sql)
            .bind(i64::from(reader))
            .bind(target_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(count > 0)
    }

    async fn subscribed_publishers(&self, reader: UserId) -> DomainResult<Vec<Publisher>> {
        let sql = format!(
            "SELECT {PUBLISHER_COLUMNS} FROM publishers p
             JOIN publisher_subscriptions s ON s.publisher_id = p.id
             WHERE s.reader_id = ?
             ORDER BY p.name, p.id"
        );
        let rows = sqlx::query_as::<_, PublisherRow>(&sql)
            .bind(i64::from(reader))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        collect(rows)
    }

    async fn followed_journalists(&self, reader: UserId) -> DomainResult<Vec<UserSummary>> {
        let sql = format!(
            "SELECT {USER_SUMMARY_COLUMNS} FROM users u
             JOIN journalist_subscriptions s ON s.journalist_id = u.id
             WHERE s.reader_id = ?
             ORDER BY u.username"
        );
        self.users(&sql, i64::from(reader)).await
    }

    async fn publisher_subscribers(&self, publisher: PublisherId) -> DomainResult<Vec<UserSummary>> {
        let sql = format!(
            "SELECT {USER_SUMMARY_COLUMNS} FROM users u
             JOIN publisher_subscriptions s ON s.reader_id = u.id
             WHERE s.publisher_id = ?
             ORDER BY u.id"
        );
        self.users(&sql, i64::from(publisher)).await
    }

    async fn journalist_followers(&self, journalist: UserId) -> DomainResult<Vec<UserSummary>> {
        let sql = format!(
            "SELECT {USER_SUMMARY_COLUMNS} FROM users u
             JOIN journalist_subscriptions s ON s.reader_id = u.id
             WHERE s.journalist_id = ?
             ORDER BY u.id"
        );
        self.users(&sql, i64::from(journalist)).await
    }
}
