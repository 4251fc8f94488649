// src/presentation/web/handlers/publishers.rs
use crate::application::{
    commands::{
        ensure_capability,
        publishers::{CreatePublisherCommand, JoinPublisherCommand, LeavePublisherCommand},
    },
    error::ApplicationError,
};
use crate::domain::publisher::MembershipRole;
use crate::presentation::web::{
    context::{PageId, WebContext},
    error::{IntoWebResult, WebError, WebResult},
    session::Flash,
};
use axum::{Form, response::Response};
use minijinja::context;
use serde::Deserialize;

use super::form_message;

#[derive(Debug, Default, Deserialize)]
pub struct PublisherForm {
    #[serde(default)]
    pub name: String,
}

pub async fn list(ctx: WebContext) -> WebResult<Response> {
    let user = ctx.require_user()?;
    let publishers = ctx
        .state
        .services
        .publisher_queries
        .list_publishers(Some(user))
        .await
        .or_page(&ctx)?;
    ctx.render("publisher_list.html", context! { publishers => publishers })
}

pub async fn create_page(ctx: WebContext) -> WebResult<Response> {
    let user = ctx.require_user()?;
    ensure_capability(user, "publishers", "create").or_page(&ctx)?;
    render_form(&ctx, "", None)
}

pub async fn create(ctx: WebContext, Form(form): Form<PublisherForm>) -> WebResult<Response> {
    let user = ctx.require_user()?;
    let name = form.name.trim().to_string();
    if name.is_empty() {
        return render_form(&ctx, &form.name, Some("Publisher name is required!".into()));
    }

    match ctx
        .state
        .services
        .publisher_commands
        .create_publisher(user, CreatePublisherCommand { name })
        .await
    {
        Ok(publisher) => Ok(ctx.redirect(
            "/publishers/",
            &Flash::success(format!("Publisher \"{}\" created successfully!", publisher.name)),
        )),
        Err(err) => match form_message(&err) {
            Some(message) => render_form(&ctx, &form.name, Some(message)),
            None => Err(WebError::from_error(err, &ctx)),
        },
    }
}

fn render_form(ctx: &WebContext, name: &str, error: Option<String>) -> WebResult<Response> {
    ctx.render("publisher_form.html", context! { name => name, error => error })
}

pub async fn join_page(ctx: WebContext, PageId(id): PageId) -> WebResult<Response> {
    confirm_page(ctx, id, "join").await
}

pub async fn leave_page(ctx: WebContext, PageId(id): PageId) -> WebResult<Response> {
    confirm_page(ctx, id, "leave").await
}

async fn confirm_page(ctx: WebContext, id: i64, action: &str) -> WebResult<Response> {
    let user = ctx.require_user()?;
    let publisher = ctx
        .state
        .services
        .publisher_queries
        .get_publisher(Some(user), id)
        .await
        .or_page(&ctx)?;
    ctx.render(
        "publisher_confirm.html",
        context! { publisher => publisher, action => action },
    )
}

pub async fn join(ctx: WebContext, PageId(id): PageId) -> WebResult<Response> {
    let user = ctx.require_user()?;
    let result = ctx
        .state
        .services
        .publisher_commands
        .join_publisher(user, JoinPublisherCommand { publisher_id: id })
        .await;

    match result {
        Ok(publisher) => {
            let role = match publisher.membership {
                Some(MembershipRole::Editor) => "an editor",
                _ => "a journalist",
            };
            Ok(ctx.redirect(
                "/publishers/",
                &Flash::success(format!("You joined {} as {role}!", publisher.name)),
            ))
        }
        Err(ApplicationError::Forbidden(message)) => {
            Ok(ctx.redirect("/publishers/", &Flash::error(message)))
        }
        Err(err) => Err(WebError::from_error(err, &ctx)),
    }
}

pub async fn leave(ctx: WebContext, PageId(id): PageId) -> WebResult<Response> {
    let user = ctx.require_user()?;
    let result = ctx
        .state
        .services
        .publisher_commands
        .leave_publisher(user, LeavePublisherCommand { publisher_id: id })
        .await;

    match result {
        Ok(publisher) => Ok(ctx.redirect(
            "/publishers/",
            &Flash::info(format!("You left {}", publisher.name)),
        )),
        Err(ApplicationError::Forbidden(message)) => {
            Ok(ctx.redirect("/publishers/", &Flash::error(message)))
        }
        Err(err) => Err(WebError::from_error(err, &ctx)),
    }
}
