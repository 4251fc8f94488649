// src/infrastructure/repositories/sqlite_user.rs
use super::map_sqlx;
use super::rows::{USER_SUMMARY_COLUMNS, UserSummaryRow, collect};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    EmailAddress, NewUser, PasswordHash, Role, User, UserId, UserRepository, UserSummary, Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

const USER_COLUMNS: &str = "id, username, email, password_hash, role, created_at";

#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn find_one(&self, column: &str, value: &str) -> DomainResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = ?");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            email: EmailAddress::new(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            role: row.role.parse::<Role>()?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM users")
            .fetch_one(&self.pool)
            .await
            .map(|count| u64::try_from(count).unwrap_or_default())
            .map_err(map_sqlx)
    }

    /// Stores the user and places them in the permission group of their
    /// role in one transaction.
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            username,
            email,
            password_hash,
            role,
            created_at,
        } = new_user;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let sql = format!(
            "INSERT INTO users (username, email, password_hash, role, created_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {USER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(username.as_str())
            .bind(email.as_str())
            .bind(password_hash.as_str())
            .bind(role.as_str())
            .bind(created_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        sqlx::query(
            "INSERT INTO user_groups (user_id, group_id)
             SELECT ?, id FROM permission_groups WHERE name = ?",
        )
        .bind(row.id)
        .bind(role.group_name())
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        User::try_from(row)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        self.find_one("username", username.as_str()).await
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>> {
        self.find_one("email", email.as_str()).await
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn list_by_role(&self, role: Role) -> DomainResult<Vec<UserSummary>> {
        let sql = format!(
            "SELECT {USER_SUMMARY_COLUMNS} FROM users u WHERE u.role = ? ORDER BY u.username"
        );
        let rows = sqlx::query_as::<_, UserSummaryRow>(&sql)
            .bind(role.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        collect(rows)
    }
}
