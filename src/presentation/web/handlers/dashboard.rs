// src/presentation/web/handlers/dashboard.rs
use crate::presentation::web::{
    context::WebContext,
    error::{IntoWebResult, WebResult},
};
use axum::response::Response;
use minijinja::context;

pub async fn dashboard(ctx: WebContext) -> WebResult<Response> {
    let user = ctx.require_user()?;
    let dashboard = ctx
        .state
        .services
        .dashboard_queries
        .dashboard(user)
        .await
        .or_page(&ctx)?;
    ctx.render("dashboard.html", context! { dashboard => dashboard })
}
