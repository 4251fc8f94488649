// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{LoginUserCommand, RefreshTokenCommand, RegisterUserCommand},
    dto::{AccessTokenDto, TokenPairDto, UserDto},
};
use crate::domain::user::Role;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ValidJson;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

pub async fn obtain_token(
    Extension(state): Extension<HttpState>,
    ValidJson(payload): ValidJson<TokenRequest>,
) -> HttpResult<Json<TokenPairDto>> {
    let command = LoginUserCommand {
        username: payload.username,
        password: payload.password,
    };

    let result = state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()?;

    Ok(Json(result.tokens))
}

pub async fn refresh_token(
    Extension(state): Extension<HttpState>,
    ValidJson(payload): ValidJson<RefreshRequest>,
) -> HttpResult<Json<AccessTokenDto>> {
    state
        .services
        .user_commands
        .refresh_token(RefreshTokenCommand {
            refresh: payload.refresh,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    ValidJson(payload): ValidJson<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<UserDto>)> {
    let command = RegisterUserCommand {
        username: payload.username,
        email: payload.email,
        password: payload.password,
        password_confirmation: None,
        role: payload.role,
    };

    let user = state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(user)))
}
