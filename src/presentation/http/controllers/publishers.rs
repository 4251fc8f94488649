// src/presentation/http/controllers/publishers.rs
use crate::application::{
    commands::publishers::{CreatePublisherCommand, JoinPublisherCommand, LeavePublisherCommand},
    dto::PublisherDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, ResourceId, ValidJson};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreatePublisherRequest {
    pub name: String,
}

pub async fn list_publishers(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<PublisherDto>>> {
    state
        .services
        .publisher_queries
        .list_publishers(Some(&user))
        .await
        .into_http()
        .map(Json)
}

pub async fn create_publisher(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ValidJson(payload): ValidJson<CreatePublisherRequest>,
) -> HttpResult<(StatusCode, Json<PublisherDto>)> {
    let publisher = state
        .services
        .publisher_commands
        .create_publisher(&user, CreatePublisherCommand { name: payload.name })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(publisher)))
}

pub async fn join_publisher(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ResourceId(publisher_id): ResourceId,
) -> HttpResult<Json<PublisherDto>> {
    state
        .services
        .publisher_commands
        .join_publisher(&user, JoinPublisherCommand { publisher_id })
        .await
        .into_http()
        .map(Json)
}

pub async fn leave_publisher(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ResourceId(publisher_id): ResourceId,
) -> HttpResult<Json<PublisherDto>> {
    state
        .services
        .publisher_commands
        .leave_publisher(&user, LeavePublisherCommand { publisher_id })
        .await
        .into_http()
        .map(Json)
}
