// src/infrastructure/repositories/sqlite_newsletter.rs
use super::map_sqlx;
use super::rows::user_summary;
use super::sqlite_article::records_by_ids;
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::newsletter::{
    NewNewsletter, Newsletter, NewsletterDescription, NewsletterId, NewsletterReadRepository,
    NewsletterRecord, NewsletterTitle, NewsletterUpdate, NewsletterWriteRepository,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

const NEWSLETTER_COLUMNS: &str = "id, title, description, author_id, created_at";

const RECORD_SELECT: &str = "SELECT n.id AS id, n.title AS title, n.description AS description,
        n.author_id AS author_id, n.created_at AS created_at,
        u.username AS author_username, u.email AS author_email, u.role AS author_role
     FROM newsletters n
     JOIN users u ON u.id = n.author_id";

#[derive(Clone)]
pub struct SqliteNewsletterWriteRepository {
    pool: SqlitePool,
}

impl SqliteNewsletterWriteRepository {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteNewsletterReadRepository {
    pool: SqlitePool,
}

impl SqliteNewsletterReadRepository {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch_records(&self, filter: &str, bind: Option<i64>) -> DomainResult<Vec<NewsletterRecord>> {
        let sql = format!("{RECORD_SELECT} {filter} ORDER BY n.created_at DESC, n.id DESC");
        let mut query = sqlx::query_as::<_, NewsletterRecordRow>(&sql);
        if let Some(value) = bind {
            query = query.bind(value);
        }
        let rows = query.fetch_all(&self.pool).await.map_err(map_sqlx)?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            records.push(self.hydrate(row).await?);
        }
        Ok(records)
    }

    async fn hydrate(&self, row: NewsletterRecordRow) -> DomainResult<NewsletterRecord> {
        let article_ids = sqlx::query_scalar::<_, i64>(
            "SELECT article_id FROM newsletter_articles WHERE newsletter_id = ? ORDER BY position",
        )
        .bind(row.newsletter.id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let articles = records_by_ids(&self.pool, &article_ids).await?;
        let author = user_summary(
            row.newsletter.author_id,
            row.author_username,
            row.author_email,
            &row.author_role,
        )?;

        Ok(NewsletterRecord {
            newsletter: Newsletter::try_from(row.newsletter)?,
            author,
            articles,
        })
    }
}

#[derive(Debug, FromRow)]
struct NewsletterRow {
    id: i64,
    title: String,
    description: String,
    author_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<NewsletterRow> for Newsletter {
    type Error = DomainError;

    fn try_from(row: NewsletterRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: NewsletterId::new(row.id)?,
            title: NewsletterTitle::new(row.title)?,
            description: NewsletterDescription::new(row.description)?,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct NewsletterRecordRow {
    #[sqlx(flatten)]
    newsletter: NewsletterRow,
    author_username: String,
    author_email: String,
    author_role: String,
}

/// Replaces the article set of a newsletter, keeping the given order.
async fn replace_articles(
    conn: &mut SqliteConnection,
    newsletter: i64,
    article_ids: &[ArticleId],
) -> DomainResult<()> {
    sqlx::query("DELETE FROM newsletter_articles WHERE newsletter_id = ?")
        .bind(newsletter)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    if article_ids.is_empty() {
        return Ok(());
    }

    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new("INSERT INTO newsletter_articles (newsletter_id, article_id, position) ");
    builder.push_values(article_ids.iter().enumerate(), |mut row, (position, id)| {
        row.push_bind(newsletter)
            .push_bind(i64::from(*id))
            .push_bind(i64::try_from(position).unwrap_or(i64::MAX));
    });
    builder
        .build()
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;
    Ok(())
}

#[async_trait]
impl NewsletterWriteRepository for SqliteNewsletterWriteRepository {
    async fn insert(&self, newsletter: NewNewsletter) -> DomainResult<Newsletter> {
        let NewNewsletter {
            title,
            description,
            author_id,
            article_ids,
            created_at,
        } = newsletter;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let sql = format!(
            "INSERT INTO newsletters (title, description, author_id, created_at)
             VALUES (?, ?, ?, ?)
             RETURNING {NEWSLETTER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, NewsletterRow>(&sql)
            .bind(title.as_str())
            .bind(description.as_str())
            .bind(i64::from(author_id))
            .bind(created_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        replace_articles(&mut *tx, row.id, &article_ids).await?;
        tx.commit().await.map_err(map_sqlx)?;

        Newsletter::try_from(row)
    }

    async fn update(&self, update: NewsletterUpdate) -> DomainResult<Newsletter> {
        let NewsletterUpdate {
            id,
            title,
            description,
            article_ids,
        } = update;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE newsletters SET id = id");
        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }
        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(String::from(description));
        }
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(NEWSLETTER_COLUMNS);

        let row = builder
            .build_query_as::<NewsletterRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("newsletter", id))?;

        if let Some(article_ids) = article_ids {
            replace_articles(&mut *tx, row.id, &article_ids).await?;
        }
        tx.commit().await.map_err(map_sqlx)?;

        Newsletter::try_from(row)
    }

    async fn delete(&self, id: NewsletterId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM newsletters WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("newsletter", id));
        }
        Ok(())
    }
}

#[async_trait]
impl NewsletterReadRepository for SqliteNewsletterReadRepository {
    async fn find_by_id(&self, id: NewsletterId) -> DomainResult<Option<NewsletterRecord>> {
        let records = self
            .fetch_records("WHERE n.id = ?", Some(i64::from(id)))
            .await?;
        Ok(records.into_iter().next())
    }

    async fn list(&self) -> DomainResult<Vec<NewsletterRecord>> {
        self.fetch_records("", None).await
    }

    async fn list_by_author(&self, author: UserId) -> DomainResult<Vec<NewsletterRecord>> {
        self.fetch_records("WHERE n.author_id = ?", Some(i64::from(author)))
            .await
    }
}
