// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{
    articles, auth, newsletters, publishers, subscriptions,
};
use crate::presentation::http::state::HttpState;
use crate::presentation::web;
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// The complete application: JSON API under `/api`, the health probe and
/// the server-rendered pages.
pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_router().layer(cors_layer(allowed_origins)))
        .merge(web::routes::web_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

fn api_router() -> Router {
    Router::new()
        .route("/token/", post(auth::obtain_token))
        .route("/token/refresh/", post(auth::refresh_token))
        .route("/register/", post(auth::register))
        .route(
            "/articles/",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/articles/subscribed/", get(articles::subscribed_articles))
        .route(
            "/articles/{id}/",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route("/articles/{id}/approve/", post(articles::approve_article))
        .route(
            "/newsletters/",
            get(newsletters::list_newsletters).post(newsletters::create_newsletter),
        )
        .route(
            "/newsletters/{id}/",
            get(newsletters::get_newsletter)
                .put(newsletters::update_newsletter)
                .delete(newsletters::delete_newsletter),
        )
        .route(
            "/publishers/",
            get(publishers::list_publishers).post(publishers::create_publisher),
        )
        .route("/publishers/{id}/join/", post(publishers::join_publisher))
        .route("/publishers/{id}/leave/", post(publishers::leave_publisher))
        .route("/subscriptions/", get(subscriptions::overview))
        .route(
            "/subscriptions/publishers/{id}/",
            post(subscriptions::toggle_publisher),
        )
        .route(
            "/subscriptions/journalists/{id}/",
            post(subscriptions::toggle_journalist),
        )
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ok" })
}
