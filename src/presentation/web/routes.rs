// src/presentation/web/routes.rs
use super::handlers::{accounts, articles, dashboard, newsletters, publishers, subscriptions};
use axum::{
    Router,
    routing::{get, post},
};

/// Server-rendered pages. State-changing actions are POST only; their GET
/// counterparts show a confirmation page.
pub fn web_router() -> Router {
    Router::new()
        .route("/", get(accounts::home))
        .route(
            "/register/",
            get(accounts::register_page).post(accounts::register),
        )
        .route("/login/", get(accounts::login_page).post(accounts::login))
        .route("/logout/", get(accounts::logout).post(accounts::logout))
        .route("/dashboard/", get(dashboard::dashboard))
        .route("/articles/", get(articles::list))
        .route(
            "/articles/create/",
            get(articles::create_page).post(articles::create),
        )
        .route("/articles/{id}/", get(articles::detail))
        .route(
            "/articles/{id}/edit/",
            get(articles::edit_page).post(articles::edit),
        )
        .route(
            "/articles/{id}/delete/",
            get(articles::delete_page).post(articles::delete),
        )
        .route(
            "/articles/{id}/approve/",
            get(articles::approve_page).post(articles::approve),
        )
        .route("/newsletters/", get(newsletters::list))
        .route(
            "/newsletters/create/",
            get(newsletters::create_page).post(newsletters::create),
        )
        .route("/newsletters/{id}/", get(newsletters::detail))
        .route(
            "/newsletters/{id}/edit/",
            get(newsletters::edit_page).post(newsletters::edit),
        )
        .route(
            "/newsletters/{id}/delete/",
            get(newsletters::delete_page).post(newsletters::delete),
        )
        .route("/subscriptions/", get(subscriptions::overview))
        .route(
            "/subscribe/publisher/{id}/",
            post(subscriptions::toggle_publisher),
        )
        .route(
            "/subscribe/journalist/{id}/",
            post(subscriptions::toggle_journalist),
        )
        .route("/publishers/", get(publishers::list))
        .route(
            "/publishers/create/",
            get(publishers::create_page).post(publishers::create),
        )
        .route(
            "/publishers/{id}/join/",
            get(publishers::join_page).post(publishers::join),
        )
        .route(
            "/publishers/{id}/leave/",
            get(publishers::leave_page).post(publishers::leave),
        )
}
