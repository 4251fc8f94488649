// src/presentation/web/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use crate::presentation::http::state::HttpState;
use axum::{
    http::{StatusCode, header::SET_COOKIE},
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
};
use minijinja::context;
use std::sync::Arc;

use super::{
    context::WebContext,
    session::{self, Flash},
    templates,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebErrorKind {
    /// No usable session; send the browser to the login page.
    NotLoggedIn,
    /// Refused or invalid action outside a form; back to the dashboard.
    Rejected(String),
    NotFound(String),
    Internal,
}

/// A failed page request. Carries what it needs to render itself so that
/// handlers can return it with `?`.
#[derive(Debug)]
pub struct WebError {
    kind: WebErrorKind,
    cookie_secure: bool,
    site_name: Arc<str>,
}

pub type WebResult<T> = Result<T, WebError>;

impl WebError {
    fn new(kind: WebErrorKind, ctx: &WebContext) -> Self {
        Self::with_state(kind, &ctx.state)
    }

    fn with_state(kind: WebErrorKind, state: &HttpState) -> Self {
        Self {
            kind,
            cookie_secure: state.cookie_secure,
            site_name: Arc::clone(&state.site_name),
        }
    }

    /// For failures found before a `WebContext` exists.
    pub fn page_not_found(state: &HttpState) -> Self {
        Self::with_state(WebErrorKind::NotFound("That page does not exist.".into()), state)
    }

    pub fn not_logged_in(ctx: &WebContext) -> Self {
        Self::new(WebErrorKind::NotLoggedIn, ctx)
    }

    pub fn internal(ctx: &WebContext) -> Self {
        Self::new(WebErrorKind::Internal, ctx)
    }

    pub fn from_error(err: ApplicationError, ctx: &WebContext) -> Self {
        let kind = match err {
            ApplicationError::Unauthorized(_) => WebErrorKind::NotLoggedIn,
            ApplicationError::Forbidden(msg)
            | ApplicationError::Validation(msg)
            | ApplicationError::Conflict(msg)
            | ApplicationError::Domain(DomainError::Validation(msg) | DomainError::Conflict(msg)) => {
                WebErrorKind::Rejected(msg)
            }
            ApplicationError::NotFound(msg) | ApplicationError::Domain(DomainError::NotFound(msg)) => {
                WebErrorKind::NotFound(msg)
            }
            ApplicationError::Infrastructure(msg)
            | ApplicationError::Domain(DomainError::Persistence(msg)) => {
                tracing::error!(error = %msg, "page request failed");
                WebErrorKind::Internal
            }
        };
        Self::new(kind, ctx)
    }

    fn error_page(&self, status: StatusCode, message: &str) -> Response {
        let page = context! {
            site_name => self.site_name.as_ref(),
            page => context! { status => status.as_u16(), message => message },
        };
        match templates::render("error.html", page) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "error page failed to render");
                (status, message.to_string()).into_response()
            }
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match &self.kind {
            WebErrorKind::NotLoggedIn => (
                AppendHeaders([(SET_COOKIE, session::clear_session_cookie(self.cookie_secure))]),
                Redirect::to("/login/"),
            )
                .into_response(),
            WebErrorKind::Rejected(message) => {
                let cookie = session::flash_cookie(&Flash::error(message.clone()), self.cookie_secure);
                (AppendHeaders([(SET_COOKIE, cookie)]), Redirect::to("/dashboard/")).into_response()
            }
            WebErrorKind::NotFound(message) => self.error_page(StatusCode::NOT_FOUND, message),
            WebErrorKind::Internal => {
                self.error_page(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong.")
            }
        }
    }
}

pub trait IntoWebResult<T> {
    fn or_page(self, ctx: &WebContext) -> WebResult<T>;
}

impl<T> IntoWebResult<T> for ApplicationResult<T> {
    fn or_page(self, ctx: &WebContext) -> WebResult<T> {
        self.map_err(|err| WebError::from_error(err, ctx))
    }
}
