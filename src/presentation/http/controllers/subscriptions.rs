// src/presentation/http/controllers/subscriptions.rs
use crate::application::{
    commands::subscriptions::ToggleSubscriptionCommand,
    dto::{SubscriptionKind, SubscriptionOverviewDto, SubscriptionToggleDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, ResourceId};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

pub async fn overview(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<SubscriptionOverviewDto>> {
    state
        .services
        .subscription_queries
        .overview(&user)
        .await
        .into_http()
        .map(Json)
}

async fn toggle(
    state: &HttpState,
    user: &crate::application::dto::AuthenticatedUser,
    kind: SubscriptionKind,
    target_id: i64,
) -> HttpResult<Json<SubscriptionToggleDto>> {
    state
        .services
        .subscription_commands
        .toggle_subscription(user, ToggleSubscriptionCommand { kind, target_id })
        .await
        .into_http()
        .map(Json)
}

pub async fn toggle_publisher(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ResourceId(id): ResourceId,
) -> HttpResult<Json<SubscriptionToggleDto>> {
    toggle(&state, &user, SubscriptionKind::Publisher, id).await
}

pub async fn toggle_journalist(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ResourceId(id): ResourceId,
) -> HttpResult<Json<SubscriptionToggleDto>> {
    toggle(&state, &user, SubscriptionKind::Journalist, id).await
}
