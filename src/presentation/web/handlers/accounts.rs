// src/presentation/web/handlers/accounts.rs
use crate::application::commands::users::{LoginUserCommand, RegisterUserCommand};
use crate::application::error::ApplicationError;
use crate::domain::user::Role;
use crate::presentation::web::{
    context::WebContext,
    error::{IntoWebResult, WebError, WebResult},
    session::Flash,
};
use axum::{Form, response::{IntoResponse, Redirect, Response}};
use minijinja::context;
use serde::Deserialize;

use super::form_message;

#[derive(Debug, Default, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password1: String,
    #[serde(default)]
    pub password2: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

pub async fn home(ctx: WebContext) -> WebResult<Response> {
    if ctx.user.is_some() {
        return Ok(Redirect::to("/dashboard/").into_response());
    }
    ctx.render("home.html", context! {})
}

pub async fn register_page(ctx: WebContext) -> WebResult<Response> {
    if ctx.user.is_some() {
        return Ok(Redirect::to("/dashboard/").into_response());
    }
    render_register(&ctx, &RegisterForm::default(), None)
}

pub async fn register(ctx: WebContext, Form(form): Form<RegisterForm>) -> WebResult<Response> {
    if ctx.user.is_some() {
        return Ok(Redirect::to("/dashboard/").into_response());
    }

    let role = match form.role.parse::<Role>() {
        Ok(role) => role,
        Err(_) => return render_register(&ctx, &form, Some("Select a valid role.".into())),
    };

    let command = RegisterUserCommand {
        username: form.username.clone(),
        email: form.email.clone(),
        password: form.password1.clone(),
        password_confirmation: Some(form.password2.clone()),
        role,
    };

    let user = match ctx.state.services.user_commands.register(command).await {
        Ok(user) => user,
        Err(err) => match form_message(&err) {
            Some(message) => return render_register(&ctx, &form, Some(message)),
            None => return Err(WebError::from_error(err, &ctx)),
        },
    };

    let login = ctx
        .state
        .services
        .user_commands
        .login(LoginUserCommand {
            username: user.username.clone(),
            password: form.password1,
        })
        .await
        .or_page(&ctx)?;

    let welcome = Flash::success(format!("Welcome to {}, {}!", ctx.site_name(), user.username));
    Ok(ctx.redirect_signed_in(
        "/dashboard/",
        &login.tokens.access,
        login.tokens.expires_in,
        &welcome,
    ))
}

fn render_register(ctx: &WebContext, form: &RegisterForm, error: Option<String>) -> WebResult<Response> {
    let roles: Vec<&str> = Role::ALL.iter().map(Role::as_str).collect();
    ctx.render(
        "register.html",
        context! {
            username => &form.username,
            email => &form.email,
            role => &form.role,
            roles => roles,
            error => error,
        },
    )
}

pub async fn login_page(ctx: WebContext) -> WebResult<Response> {
    if ctx.user.is_some() {
        return Ok(Redirect::to("/dashboard/").into_response());
    }
    ctx.render("login.html", context! { username => "", error => None::<String> })
}

pub async fn login(ctx: WebContext, Form(form): Form<LoginForm>) -> WebResult<Response> {
    let command = LoginUserCommand {
        username: form.username.clone(),
        password: form.password,
    };

    match ctx.state.services.user_commands.login(command).await {
        Ok(login) => {
            let welcome = Flash::success(format!("Welcome, {}!", login.user.username));
            Ok(ctx.redirect_signed_in(
                "/dashboard/",
                &login.tokens.access,
                login.tokens.expires_in,
                &welcome,
            ))
        }
        Err(ApplicationError::Unauthorized(_)) => ctx.render(
            "login.html",
            context! {
                username => form.username,
                error => "Please enter a correct username and password.",
            },
        ),
        Err(err) => Err(WebError::from_error(err, &ctx)),
    }
}

pub async fn logout(ctx: WebContext) -> Response {
    ctx.redirect_signed_out("/login/", &Flash::info("You have been logged out"))
}
