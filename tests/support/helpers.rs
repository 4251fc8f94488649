// tests/support/helpers.rs
use std::{str::FromStr, sync::Arc};

use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use chrono::{DateTime, Utc};
use newsroom_core::application::{
    dto::TokenKind,
    notifications::NotificationSettings,
    ports::{
        notification::{Mailer, SocialPublisher},
        time::Clock,
    },
    services::{ApplicationServices, Outbound},
};
use newsroom_core::domain::user::Role;
use newsroom_core::infrastructure::{database, repositories::sqlite_repositories};
use newsroom_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tower::util::ServiceExt as _;

use super::mocks::{
    CapturingMailer, CapturingSocial, StaticTokenManager, SteppingClock, StrictPasswordHasher,
    token_for,
};

pub const PASSWORD: &str = "correct-horse-battery";

#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

impl TestUser {
    pub fn token(&self) -> String {
        token_for(TokenKind::Access, self.id, self.role, &self.username)
    }

    pub fn refresh_token(&self) -> String {
        token_for(TokenKind::Refresh, self.id, self.role, &self.username)
    }

    /// Cookie header value for a signed-in browser.
    pub fn session_cookie(&self) -> String {
        format!("newsroom_session={}", self.token())
    }
}

/// The full application over a private in-memory database.
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub services: Arc<ApplicationServices>,
    pub clock: Arc<SteppingClock>,
    pub mailer: Arc<CapturingMailer>,
    pub social: Arc<CapturingSocial>,
}

/// In-memory SQLite disappears with its last connection, so the pool keeps
/// exactly one alive for the whole test.
pub async fn memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("memory url")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("open in-memory database");
    database::run_migrations(&pool).await.expect("migrations");
    pool
}

impl TestApp {
    pub async fn new() -> Self {
        let mailer = Arc::new(CapturingMailer::default());
        let social = Arc::new(CapturingSocial::default());
        let mut app = Self::with_outbound(mailer.clone(), social.clone()).await;
        app.mailer = mailer;
        app.social = social;
        app
    }

    /// Uses the given outbound adapters instead of the capturing ones; the
    /// `mailer`/`social` fields then stay empty.
    pub async fn with_outbound(mailer: Arc<dyn Mailer>, social: Arc<dyn SocialPublisher>) -> Self {
        let pool = memory_pool().await;
        let clock = Arc::new(SteppingClock::default());
        let clock_port: Arc<dyn Clock> = clock.clone();

        let services = Arc::new(ApplicationServices::new(
            sqlite_repositories(&pool),
            Outbound {
                mailer,
                social,
                settings: NotificationSettings::new("NewsApp"),
            },
            Arc::new(StrictPasswordHasher),
            Arc::new(StaticTokenManager),
            clock_port,
        ));

        let state = HttpState {
            services: Arc::clone(&services),
            cookie_secure: false,
            site_name: Arc::from("NewsApp"),
        };
        let router = build_router(state, &["http://localhost:3000".to_string()]);

        Self {
            router,
            pool,
            services,
            clock,
            mailer: Arc::new(CapturingMailer::default()),
            social: Arc::new(CapturingSocial::default()),
        }
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub async fn seed_user(&self, username: &str, role: Role) -> TestUser {
        let mut tx = self.pool.begin().await.expect("begin");
        let id = sqlx::query(
            "INSERT INTO users (username, email, password_hash, role, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(username)
        .bind(format!("{username}@example.com"))
        .bind(format!("hash::{PASSWORD}"))
        .bind(role.as_str())
        .bind(self.now())
        .execute(&mut *tx)
        .await
        .expect("insert user")
        .last_insert_rowid();
        sqlx::query(
            "INSERT INTO user_groups (user_id, group_id) SELECT ?, id FROM permission_groups WHERE name = ?",
        )
        .bind(id)
        .bind(role.group_name())
        .execute(&mut *tx)
        .await
        .expect("insert group");
        tx.commit().await.expect("commit");

        TestUser {
            id,
            username: username.to_string(),
            role,
        }
    }

    pub async fn seed_publisher(&self, name: &str) -> i64 {
        sqlx::query("INSERT INTO publishers (name, created_at) VALUES (?, ?)")
            .bind(name)
            .bind(self.now())
            .execute(&self.pool)
            .await
            .expect("insert publisher")
            .last_insert_rowid()
    }

    pub async fn seed_article(
        &self,
        author: &TestUser,
        title: &str,
        publisher: Option<i64>,
        approved: bool,
    ) -> i64 {
        let now = self.now();
        sqlx::query(
            "INSERT INTO articles (title, content, author_id, publisher_id, approved, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(title)
        .bind(format!("Body of {title}"))
        .bind(author.id)
        .bind(publisher)
        .bind(approved)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .expect("insert article")
        .last_insert_rowid()
    }

    pub async fn is_approved(&self, article_id: i64) -> bool {
        sqlx::query_scalar::<_, bool>("SELECT approved FROM articles WHERE id = ?")
            .bind(article_id)
            .fetch_one(&self.pool)
            .await
            .expect("article exists")
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.expect("router is infallible")
    }

    /// JSON API call. Returns the status and the decoded body (`Null` when
    /// empty).
    pub async fn api(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        let response = self.send(request).await;
        let status = response.status();
        (status, body_json(response).await)
    }

    pub async fn get_page(&self, uri: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder().method(Method::GET).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).expect("request")).await
    }

    pub async fn post_form(&self, uri: &str, cookie: Option<&str>, form: &str) -> Response {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(form.to_string())).expect("request"))
            .await
    }
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = body_bytes(response).await;
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    }
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).expect("utf-8 body")
}

pub fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

pub fn set_cookies(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok().map(ToString::to_string))
        .collect()
}

/// The `name=value` pair of a cookie set by `response`.
pub fn cookie_pair(response: &Response, name: &str) -> Option<String> {
    set_cookies(response)
        .into_iter()
        .find(|cookie| cookie.starts_with(&format!("{name}=")))
        .and_then(|cookie| cookie.split(';').next().map(ToString::to_string))
}

/// Ids of a JSON array of articles, in response order.
pub fn ids(articles: &Value) -> Vec<i64> {
    articles
        .as_array()
        .expect("array")
        .iter()
        .map(|article| article["id"].as_i64().expect("id"))
        .collect()
}

/// Errors always carry the canonical reason and a non-empty message.
pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode) {
    assert_eq!(status, expected, "unexpected status, body: {body}");
    assert_eq!(body["error"], expected.canonical_reason().unwrap_or("error"));
    assert!(
        body["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message, body: {body}"
    );
}
