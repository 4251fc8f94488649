// src/presentation/web/handlers/articles.rs
use crate::application::{
    commands::{
        articles::{
            ApproveArticleCommand, CreateArticleCommand, DeleteArticleCommand,
            UpdateArticleCommand,
        },
        ensure_capability,
    },
    dto::{ArticleDto, AuthenticatedUser},
    queries::articles::GetArticleByIdQuery,
};
use crate::presentation::web::{
    context::{PageId, WebContext},
    error::{IntoWebResult, WebError, WebResult},
    session::Flash,
};
use axum::{Form, response::Response};
use minijinja::context;
use serde::Deserialize;

use super::{blank_to_none, form_message};

#[derive(Debug, Default, Deserialize)]
pub struct ArticleForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub publisher: Option<String>,
}

impl ArticleForm {
    fn from_article(article: &ArticleDto) -> Self {
        Self {
            title: article.title.clone(),
            content: article.content.clone(),
            publisher: article.publisher.as_ref().map(|p| p.id.to_string()),
        }
    }

    fn publisher_id(&self) -> Result<Option<i64>, String> {
        blank_to_none(self.publisher.clone())
            .map(|raw| raw.trim().parse::<i64>())
            .transpose()
            .map_err(|_| "Select a valid publisher.".to_string())
    }
}

pub async fn list(ctx: WebContext) -> WebResult<Response> {
    let articles = ctx
        .state
        .services
        .article_queries
        .list_articles()
        .await
        .or_page(&ctx)?;
    ctx.render("article_list.html", context! { articles => articles })
}

pub async fn detail(ctx: WebContext, PageId(id): PageId) -> WebResult<Response> {
    let article = ctx
        .state
        .services
        .article_queries
        .get_article_by_id(ctx.user.as_ref(), GetArticleByIdQuery { id })
        .await
        .or_page(&ctx)?;
    ctx.render("article_detail.html", context! { article => article })
}

pub async fn create_page(ctx: WebContext) -> WebResult<Response> {
    let user = ctx.require_user()?;
    ensure_capability(user, "articles", "create").or_page(&ctx)?;
    render_form(&ctx, user, "Create", None, &ArticleForm::default(), None).await
}

pub async fn create(ctx: WebContext, Form(form): Form<ArticleForm>) -> WebResult<Response> {
    let user = ctx.require_user()?;
    let publisher_id = match form.publisher_id() {
        Ok(id) => id,
        Err(message) => return render_form(&ctx, user, "Create", None, &form, Some(message)).await,
    };

    let command = CreateArticleCommand {
        title: form.title.clone(),
        content: form.content.clone(),
        publisher_id,
    };
    match ctx.state.services.article_commands.create_article(user, command).await {
        Ok(_) => Ok(ctx.redirect("/dashboard/", &Flash::success("Article submitted for approval!"))),
        Err(err) => match form_message(&err) {
            Some(message) => render_form(&ctx, user, "Create", None, &form, Some(message)).await,
            None => Err(WebError::from_error(err, &ctx)),
        },
    }
}

pub async fn edit_page(ctx: WebContext, PageId(id): PageId) -> WebResult<Response> {
    let user = ctx.require_user()?;
    let article = ctx
        .state
        .services
        .article_commands
        .editable_article(user, id)
        .await
        .or_page(&ctx)?;
    render_form(&ctx, user, "Edit", Some(id), &ArticleForm::from_article(&article), None).await
}

pub async fn edit(
    ctx: WebContext,
    PageId(id): PageId,
    Form(form): Form<ArticleForm>,
) -> WebResult<Response> {
    let user = ctx.require_user()?;
    let publisher_id = match form.publisher_id() {
        Ok(id) => id,
        Err(message) => return render_form(&ctx, user, "Edit", Some(id), &form, Some(message)).await,
    };

    let command = UpdateArticleCommand {
        id,
        title: Some(form.title.clone()),
        content: Some(form.content.clone()),
        publisher_id: Some(publisher_id),
    };
    match ctx.state.services.article_commands.update_article(user, command).await {
        Ok(_) => Ok(ctx.redirect("/dashboard/", &Flash::success("Article updated successfully!"))),
        Err(err) => match form_message(&err) {
            Some(message) => render_form(&ctx, user, "Edit", Some(id), &form, Some(message)).await,
            None => Err(WebError::from_error(err, &ctx)),
        },
    }
}

pub async fn delete_page(ctx: WebContext, PageId(id): PageId) -> WebResult<Response> {
    let user = ctx.require_user()?;
    let article = ctx
        .state
        .services
        .article_commands
        .deletable_article(user, id)
        .await
        .or_page(&ctx)?;
    ctx.render("article_confirm_delete.html", context! { article => article })
}

pub async fn delete(ctx: WebContext, PageId(id): PageId) -> WebResult<Response> {
    let user = ctx.require_user()?;
    ctx.state
        .services
        .article_commands
        .delete_article(user, DeleteArticleCommand { id })
        .await
        .or_page(&ctx)?;
    Ok(ctx.redirect("/dashboard/", &Flash::success("Article deleted successfully!")))
}

pub async fn approve_page(ctx: WebContext, PageId(id): PageId) -> WebResult<Response> {
    let user = ctx.require_user()?;
    ensure_capability(user, "articles", "approve").or_page(&ctx)?;
    let article = ctx
        .state
        .services
        .article_queries
        .get_article_by_id(Some(user), GetArticleByIdQuery { id })
        .await
        .or_page(&ctx)?;
    ctx.render("article_confirm_approve.html", context! { article => article })
}

pub async fn approve(ctx: WebContext, PageId(id): PageId) -> WebResult<Response> {
    let user = ctx.require_user()?;
    let result = ctx
        .state
        .services
        .article_commands
        .approve_article(user, ApproveArticleCommand { id })
        .await
        .or_page(&ctx)?;

    let title = &result.article.title;
    let flash = if result.notifications.is_some() {
        Flash::success(format!("Article \"{title}\" approved!"))
    } else {
        Flash::info(format!("Article \"{title}\" was already approved."))
    };
    Ok(ctx.redirect("/dashboard/", &flash))
}

async fn render_form(
    ctx: &WebContext,
    user: &AuthenticatedUser,
    action: &str,
    article_id: Option<i64>,
    form: &ArticleForm,
    error: Option<String>,
) -> WebResult<Response> {
    let publishers = ctx
        .state
        .services
        .publisher_queries
        .list_publishers(Some(user))
        .await
        .or_page(ctx)?;
    ctx.render(
        "article_form.html",
        context! {
            action => action,
            article_id => article_id,
            title => &form.title,
            content => &form.content,
            publisher => form.publisher.as_deref().unwrap_or(""),
            publishers => publishers,
            error => error,
        },
    )
}
