// src/infrastructure/repositories/sqlite_article.rs
use super::map_sqlx;
use super::rows::user_summary;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleRecord, ArticleTitle,
    ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::{Publisher, PublisherId, PublisherName};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::collections::HashSet;

const ARTICLE_COLUMNS: &str =
    "id, title, content, author_id, publisher_id, approved, created_at, updated_at";

const RECORD_SELECT: &str = "SELECT a.id AS id, a.title AS title, a.content AS content,
        a.author_id AS author_id, a.publisher_id AS publisher_id, a.approved AS approved,
        a.created_at AS created_at, a.updated_at AS updated_at,
        u.username AS author_username, u.email AS author_email, u.role AS author_role,
        p.name AS publisher_name, p.created_at AS publisher_created_at
     FROM articles a
     JOIN users u ON u.id = a.author_id
     LEFT JOIN publishers p ON p.id = a.publisher_id";

const NEWEST_FIRST: &str = " ORDER BY a.created_at DESC, a.id DESC";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: SqlitePool,
}

impl SqliteArticleWriteRepository {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: SqlitePool,
}

impl SqliteArticleReadRepository {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch_records(
        &self,
        filter: &str,
        binds: &[i64],
    ) -> DomainResult<Vec<ArticleRecord>> {
        let sql = format!("{RECORD_SELECT} {filter}{NEWEST_FIRST}");
        let mut query = sqlx::query_as::<_, ArticleRecordRow>(&sql);
        for value in binds {
            query = query.bind(*value);
        }
        let rows = query.fetch_all(&self.pool).await.map_err(map_sqlx)?;

        rows.into_iter().map(ArticleRecord::try_from).collect()
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    author_id: i64,
    publisher_id: Option<i64>,
    approved: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            author_id: UserId::new(row.author_id)?,
            publisher_id: row.publisher_id.map(PublisherId::new).transpose()?,
            approved: row.approved,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub(super) struct ArticleRecordRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    author_username: String,
    author_email: String,
    author_role: String,
    publisher_name: Option<String>,
    publisher_created_at: Option<DateTime<Utc>>,
}

impl TryFrom<ArticleRecordRow> for ArticleRecord {
    type Error = DomainError;

    fn try_from(row: ArticleRecordRow) -> Result<Self, Self::Error> {
        let author = user_summary(
            row.article.author_id,
            row.author_username,
            row.author_email,
            &row.author_role,
        )?;
        let publisher = match (row.article.publisher_id, row.publisher_name, row.publisher_created_at) {
            (Some(id), Some(name), Some(created_at)) => Some(Publisher {
                id: PublisherId::new(id)?,
                name: PublisherName::new(name)?,
                created_at,
            }),
            _ => None,
        };
        Ok(Self {
            article: Article::try_from(row.article)?,
            author,
            publisher,
        })
    }
}

/// Loads article records by id, in the order the ids are given. Unknown ids
/// are skipped.
pub(super) async fn records_by_ids(
    pool: &SqlitePool,
    ids: &[i64],
) -> DomainResult<Vec<ArticleRecord>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(RECORD_SELECT);
    builder.push(" WHERE a.id IN (");
    let mut separated = builder.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(")");

    let rows = builder
        .build_query_as::<ArticleRecordRow>()
        .fetch_all(pool)
        .await
        .map_err(map_sqlx)?;

    let mut records = rows
        .into_iter()
        .map(ArticleRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    records.sort_by_key(|record| {
        ids.iter()
            .position(|id| *id == i64::from(record.article.id))
            .unwrap_or(usize::MAX)
    });
    Ok(records)
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            content,
            author_id,
            publisher_id,
            created_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (title, content, author_id, publisher_id, approved, created_at, updated_at)
             VALUES (?, ?, ?, ?, 0, ?, ?)
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.as_str())
            .bind(content.as_str())
            .bind(i64::from(author_id))
            .bind(publisher_id.map(i64::from))
            .bind(created_at)
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            content,
            publisher_id,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }

        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(String::from(content));
        }

        if let Some(publisher_id) = publisher_id {
            builder.push(", publisher_id = ");
            builder.push_bind(publisher_id.map(i64::from));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("article", id))?;

        Article::try_from(row)
    }

    /// Flips `approved` only while it is still false, so of two concurrent
    /// approvals exactly one observes `true`.
    async fn mark_approved(&self, id: ArticleId, at: DateTime<Utc>) -> DomainResult<bool> {
        let result = sqlx::query(
            "UPDATE articles SET approved = 1, updated_at = ? WHERE id = ? AND approved = 0",
        )
        .bind(at)
        .bind(i64::from(id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 1 {
            return Ok(true);
        }

        let exists = sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if exists == 0 {
            return Err(DomainError::not_found("article", id));
        }
        Ok(false)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("article", id));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleRecord>> {
        let records = records_by_ids(&self.pool, &[i64::from(id)]).await?;
        Ok(records.into_iter().next())
    }

    async fn list_approved(&self) -> DomainResult<Vec<ArticleRecord>> {
        self.fetch_records("WHERE a.approved = 1", &[]).await
    }

    async fn list_pending(&self) -> DomainResult<Vec<ArticleRecord>> {
        self.fetch_records("WHERE a.approved = 0", &[]).await
    }

    async fn list_by_author(&self, author: UserId) -> DomainResult<Vec<ArticleRecord>> {
        self.fetch_records("WHERE a.author_id = ?", &[i64::from(author)])
            .await
    }

    /// Each article appears once even when it matches both a subscribed
    /// publisher and a followed journalist.
    async fn list_subscribed(&self, reader: UserId) -> DomainResult<Vec<ArticleRecord>> {
        let reader = i64::from(reader);
        self.fetch_records(
            "WHERE a.approved = 1 AND (
                a.publisher_id IN (SELECT publisher_id FROM publisher_subscriptions WHERE reader_id = ?)
                OR a.author_id IN (SELECT journalist_id FROM journalist_subscriptions WHERE reader_id = ?)
             )",
            &[reader, reader],
        )
        .await
    }

    async fn missing_ids(&self, ids: &[ArticleId]) -> DomainResult<Vec<ArticleId>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id FROM articles WHERE id IN (");
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(i64::from(*id));
        }
        separated.push_unseparated(")");

        let found: HashSet<i64> = builder
            .build_query_scalar::<i64>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?
            .into_iter()
            .collect();

        Ok(ids
            .iter()
            .copied()
            .filter(|id| !found.contains(&i64::from(*id)))
            .collect())
    }
}
