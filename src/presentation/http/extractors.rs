// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{
    Extension, Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::request::Parts,
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use serde::de::DeserializeOwned;

use super::error::HttpError;

/// A caller holding a valid access token. Rejects with 401 otherwise.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

/// A caller that may be anonymous. A present but invalid token is still
/// rejected.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

async fn http_state(parts: &mut Parts, state: &()) -> Result<HttpState, HttpError> {
    let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map_err(|_| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })?;
    Ok(app_state)
}

impl FromRequestParts<()> for Authenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &()) -> Result<Self, Self::Rejection> {
        let app_state = http_state(parts, state).await?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "authentication credentials were not provided",
                ))
            })?;

        let user = app_state
            .services
            .authenticate(header.token())
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(user))
    }
}

impl FromRequestParts<()> for MaybeAuthenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &()) -> Result<Self, Self::Rejection> {
        let app_state = http_state(parts, state).await?;

        match parts.headers.typed_get::<Authorization<Bearer>>() {
            Some(header) => {
                let user = app_state
                    .services
                    .authenticate(header.token())
                    .await
                    .map_err(HttpError::from_error)?;
                Ok(Self(Some(user)))
            }
            None => Ok(Self(None)),
        }
    }
}

/// `Json<T>` whose rejections use the API error body with status 400.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejection(&rejection)),
        }
    }
}

fn json_rejection(rejection: &JsonRejection) -> HttpError {
    HttpError::bad_request(rejection.body_text())
}

/// The `{id}` segment of a resource route. Ids are positive; anything else,
/// including text that is not a number, names a resource that does not exist.
#[derive(Debug, Clone, Copy)]
pub struct ResourceId(pub i64);

impl<S: Send + Sync> FromRequestParts<S> for ResourceId {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        path_id(parts, state)
            .await
            .map(Self)
            .ok_or_else(|| HttpError::not_found("resource not found"))
    }
}

pub(crate) async fn path_id<S: Send + Sync>(parts: &mut Parts, state: &S) -> Option<i64> {
    match Path::<i64>::from_request_parts(parts, state).await {
        Ok(Path(id)) if id > 0 => Some(id),
        _ => None,
    }
}
