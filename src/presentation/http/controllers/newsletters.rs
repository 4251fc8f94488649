// src/presentation/http/controllers/newsletters.rs
use crate::application::{
    commands::newsletters::{
        CreateNewsletterCommand, DeleteNewsletterCommand, UpdateNewsletterCommand,
    },
    dto::NewsletterDto,
    queries::newsletters::GetNewsletterQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, ResourceId, ValidJson};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateNewsletterRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub articles: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNewsletterRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub articles: Option<Vec<i64>>,
}

pub async fn list_newsletters(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<NewsletterDto>>> {
    state
        .services
        .newsletter_queries
        .list_newsletters(Some(&user))
        .await
        .into_http()
        .map(Json)
}

pub async fn get_newsletter(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ResourceId(id): ResourceId,
) -> HttpResult<Json<NewsletterDto>> {
    state
        .services
        .newsletter_queries
        .get_newsletter(Some(&user), GetNewsletterQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_newsletter(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ValidJson(payload): ValidJson<CreateNewsletterRequest>,
) -> HttpResult<(StatusCode, Json<NewsletterDto>)> {
    let command = CreateNewsletterCommand {
        title: payload.title,
        description: payload.description,
        article_ids: payload.articles,
    };

    let newsletter = state
        .services
        .newsletter_commands
        .create_newsletter(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(newsletter)))
}

pub async fn update_newsletter(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ResourceId(id): ResourceId,
    ValidJson(payload): ValidJson<UpdateNewsletterRequest>,
) -> HttpResult<Json<NewsletterDto>> {
    let command = UpdateNewsletterCommand {
        id,
        title: payload.title,
        description: payload.description,
        article_ids: payload.articles,
    };

    state
        .services
        .newsletter_commands
        .update_newsletter(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_newsletter(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ResourceId(id): ResourceId,
) -> HttpResult<StatusCode> {
    state
        .services
        .newsletter_commands
        .delete_newsletter(&user, DeleteNewsletterCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
