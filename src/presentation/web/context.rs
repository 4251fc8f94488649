// src/presentation/web/context.rs
use crate::{
    application::dto::AuthenticatedUser,
    presentation::http::{extractors::path_id, state::HttpState},
};
use axum::{
    Extension,
    extract::FromRequestParts,
    http::{StatusCode, header::SET_COOKIE, request::Parts},
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
};
use headers::{Cookie, HeaderMapExt};
use minijinja::{Value, context};

use super::{
    error::{WebError, WebResult},
    session::{self, FLASH_COOKIE, Flash, SESSION_COOKIE},
    templates,
};

/// Everything a page handler needs: the services, the signed-in user (if
/// the session cookie still holds a valid token) and any pending flash.
#[derive(Clone)]
pub struct WebContext {
    pub state: HttpState,
    pub user: Option<AuthenticatedUser>,
    pub flash: Option<Flash>,
}

impl FromRequestParts<()> for WebContext {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &()) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                tracing::error!("application state missing from web request");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            })?;

        let cookies = parts.headers.typed_get::<Cookie>();
        let token = cookies
            .as_ref()
            .and_then(|c| c.get(SESSION_COOKIE))
            .filter(|t| !t.is_empty());

        // An expired or tampered session is treated as signed out.
        let user = match token {
            Some(token) => match app_state.services.authenticate(token).await {
                Ok(user) => Some(user),
                Err(err) => {
                    tracing::debug!(error = %err, "ignoring invalid session cookie");
                    None
                }
            },
            None => None,
        };

        let flash = cookies
            .as_ref()
            .and_then(|c| c.get(FLASH_COOKIE))
            .and_then(Flash::decode);

        Ok(Self {
            state: app_state,
            user,
            flash,
        })
    }
}

/// The `{id}` segment of a page route. A malformed or non-positive id
/// renders the 404 page.
#[derive(Debug, Clone, Copy)]
pub struct PageId(pub i64);

impl FromRequestParts<()> for PageId {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &()) -> Result<Self, Self::Rejection> {
        if let Some(id) = path_id(parts, state).await {
            return Ok(Self(id));
        }
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())?;
        Err(WebError::page_not_found(&app_state).into_response())
    }
}

impl WebContext {
    pub fn require_user(&self) -> WebResult<&AuthenticatedUser> {
        self.user.as_ref().ok_or_else(|| WebError::not_logged_in(self))
    }

    pub const fn cookie_secure(&self) -> bool {
        self.state.cookie_secure
    }

    pub fn site_name(&self) -> &str {
        &self.state.site_name
    }

    /// Renders `template` inside the shared layout. A flash shown on this
    /// page is cleared from the browser.
    pub fn render(&self, template: &str, page: Value) -> WebResult<Response> {
        self.render_with_status(StatusCode::OK, template, page)
    }

    pub fn render_with_status(
        &self,
        status: StatusCode,
        template: &str,
        page: Value,
    ) -> WebResult<Response> {
        let html = templates::render(template, self.layout(page)).map_err(|err| {
            tracing::error!(template, error = %err, "template rendering failed");
            WebError::internal(self)
        })?;

        if self.flash.is_some() {
            let clear = session::clear_flash_cookie(self.cookie_secure());
            Ok((status, AppendHeaders([(SET_COOKIE, clear)]), Html(html)).into_response())
        } else {
            Ok((status, Html(html)).into_response())
        }
    }

    pub fn layout(&self, page: Value) -> Value {
        let current_user = self.user.as_ref().map(|user| {
            context! {
                id => i64::from(user.id),
                username => user.username.clone(),
                role => user.role.as_str(),
                can_write => user.has_capability("articles", "create"),
                can_approve => user.has_capability("articles", "approve"),
                can_subscribe => user.has_capability("subscriptions", "manage"),
                can_join => user.has_capability("publishers", "join"),
            }
        });
        context! {
            site_name => self.site_name(),
            current_user => current_user,
            flash => self.flash.clone(),
            page => page,
        }
    }

    pub fn redirect(&self, to: &str, flash: &Flash) -> Response {
        let cookie = session::flash_cookie(flash, self.cookie_secure());
        (AppendHeaders([(SET_COOKIE, cookie)]), Redirect::to(to)).into_response()
    }

    /// Signs the user in by storing their access token.
    pub fn redirect_signed_in(&self, to: &str, token: &str, max_age: i64, flash: &Flash) -> Response {
        let secure = self.cookie_secure();
        (
            AppendHeaders([
                (SET_COOKIE, session::session_cookie(token, max_age, secure)),
                (SET_COOKIE, session::flash_cookie(flash, secure)),
            ]),
            Redirect::to(to),
        )
            .into_response()
    }

    pub fn redirect_signed_out(&self, to: &str, flash: &Flash) -> Response {
        let secure = self.cookie_secure();
        (
            AppendHeaders([
                (SET_COOKIE, session::clear_session_cookie(secure)),
                (SET_COOKIE, session::flash_cookie(flash, secure)),
            ]),
            Redirect::to(to),
        )
            .into_response()
    }
}
