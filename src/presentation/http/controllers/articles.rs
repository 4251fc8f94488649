// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        ApproveArticleCommand, CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand,
    },
    dto::{ApprovalDto, ArticleDto},
    queries::articles::GetArticleByIdQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, ResourceId, ValidJson};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub publisher: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    /// Absent leaves the publisher alone; `null` clears it.
    #[serde(default, deserialize_with = "present")]
    pub publisher: Option<Option<i64>>,
}

/// Distinguishes a field sent as `null` from one left out.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()
        .map(Json)
}

pub async fn subscribed_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .subscribed_feed(&user)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ResourceId(id): ResourceId,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(Some(&user), GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ValidJson(payload): ValidJson<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        publisher_id: payload.publisher,
    };

    let article = state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(article)))
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ResourceId(id): ResourceId,
    ValidJson(payload): ValidJson<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        content: payload.content,
        publisher_id: payload.publisher,
    };

    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ResourceId(id): ResourceId,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn approve_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ResourceId(id): ResourceId,
) -> HttpResult<Json<ApprovalDto>> {
    let result = state
        .services
        .article_commands
        .approve_article(&user, ApproveArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(ApprovalDto {
        message: "Article approved!".into(),
        article: result.article,
    }))
}
