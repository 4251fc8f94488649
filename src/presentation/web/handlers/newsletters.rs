// src/presentation/web/handlers/newsletters.rs
use crate::application::{
    commands::{
        ensure_capability,
        newsletters::{CreateNewsletterCommand, DeleteNewsletterCommand, UpdateNewsletterCommand},
    },
    dto::NewsletterDto,
    queries::newsletters::GetNewsletterQuery,
};
use crate::presentation::web::{
    context::{PageId, WebContext},
    error::{IntoWebResult, WebError, WebResult},
    session::Flash,
};
use axum::{Form, response::Response};
use minijinja::context;

use super::form_message;

/// Newsletter form fields. `articles` repeats once per selected option,
/// which the derive-based `Form` cannot collect, so the raw pairs are
/// folded by hand.
#[derive(Debug, Default)]
pub struct NewsletterForm {
    pub title: String,
    pub description: String,
    pub articles: Vec<String>,
}

impl NewsletterForm {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "title" => form.title = value,
                "description" => form.description = value,
                "articles" => form.articles.push(value),
                _ => {}
            }
        }
        form
    }

    fn from_newsletter(newsletter: &NewsletterDto) -> Self {
        Self {
            title: newsletter.title.clone(),
            description: newsletter.description.clone(),
            articles: newsletter
                .articles
                .iter()
                .map(|article| article.id.to_string())
                .collect(),
        }
    }

    fn article_ids(&self) -> Result<Vec<i64>, String> {
        self.articles
            .iter()
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| {
                raw.trim()
                    .parse::<i64>()
                    .map_err(|_| format!("\"{raw}\" is not a valid article."))
            })
            .collect()
    }
}

pub async fn list(ctx: WebContext) -> WebResult<Response> {
    let newsletters = ctx
        .state
        .services
        .newsletter_queries
        .list_newsletters(ctx.user.as_ref())
        .await
        .or_page(&ctx)?;
    ctx.render("newsletter_list.html", context! { newsletters => newsletters })
}

pub async fn detail(ctx: WebContext, PageId(id): PageId) -> WebResult<Response> {
    let newsletter = ctx
        .state
        .services
        .newsletter_queries
        .get_newsletter(ctx.user.as_ref(), GetNewsletterQuery { id })
        .await
        .or_page(&ctx)?;
    ctx.render("newsletter_detail.html", context! { newsletter => newsletter })
}

pub async fn create_page(ctx: WebContext) -> WebResult<Response> {
    let user = ctx.require_user()?;
    ensure_capability(user, "newsletters", "create").or_page(&ctx)?;
    render_form(&ctx, "Create", None, &NewsletterForm::default(), None).await
}

pub async fn create(ctx: WebContext, Form(pairs): Form<Vec<(String, String)>>) -> WebResult<Response> {
    let user = ctx.require_user()?;
    let form = NewsletterForm::from_pairs(pairs);
    let article_ids = match form.article_ids() {
        Ok(ids) => ids,
        Err(message) => return render_form(&ctx, "Create", None, &form, Some(message)).await,
    };

    let command = CreateNewsletterCommand {
        title: form.title.clone(),
        description: form.description.clone(),
        article_ids,
    };
    match ctx.state.services.newsletter_commands.create_newsletter(user, command).await {
        Ok(newsletter) => Ok(ctx.redirect(
            &format!("/newsletters/{}/", newsletter.id),
            &Flash::success("Newsletter created successfully!"),
        )),
        Err(err) => match form_message(&err) {
            Some(message) => render_form(&ctx, "Create", None, &form, Some(message)).await,
            None => Err(WebError::from_error(err, &ctx)),
        },
    }
}

pub async fn edit_page(ctx: WebContext, PageId(id): PageId) -> WebResult<Response> {
    let user = ctx.require_user()?;
    let newsletter = ctx
        .state
        .services
        .newsletter_commands
        .editable_newsletter(user, id)
        .await
        .or_page(&ctx)?;
    render_form(&ctx, "Edit", Some(id), &NewsletterForm::from_newsletter(&newsletter), None).await
}

pub async fn edit(
    ctx: WebContext,
    PageId(id): PageId,
    Form(pairs): Form<Vec<(String, String)>>,
) -> WebResult<Response> {
    let user = ctx.require_user()?;
    let form = NewsletterForm::from_pairs(pairs);
    let article_ids = match form.article_ids() {
        Ok(ids) => ids,
        Err(message) => return render_form(&ctx, "Edit", Some(id), &form, Some(message)).await,
    };

    let command = UpdateNewsletterCommand {
        id,
        title: Some(form.title.clone()),
        description: Some(form.description.clone()),
        article_ids: Some(article_ids),
    };
    match ctx.state.services.newsletter_commands.update_newsletter(user, command).await {
        Ok(_) => Ok(ctx.redirect(&format!("/newsletters/{id}/"), &Flash::success("Newsletter updated!"))),
        Err(err) => match form_message(&err) {
            Some(message) => render_form(&ctx, "Edit", Some(id), &form, Some(message)).await,
            None => Err(WebError::from_error(err, &ctx)),
        },
    }
}

pub async fn delete_page(ctx: WebContext, PageId(id): PageId) -> WebResult<Response> {
    let user = ctx.require_user()?;
    let newsletter = ctx
        .state
        .services
        .newsletter_commands
        .deletable_newsletter(user, id)
        .await
        .or_page(&ctx)?;
    ctx.render("newsletter_confirm_delete.html", context! { newsletter => newsletter })
}

pub async fn delete(ctx: WebContext, PageId(id): PageId) -> WebResult<Response> {
    let user = ctx.require_user()?;
    ctx.state
        .services
        .newsletter_commands
        .delete_newsletter(user, DeleteNewsletterCommand { id })
        .await
        .or_page(&ctx)?;
    Ok(ctx.redirect("/newsletters/", &Flash::success("Newsletter deleted!")))
}

/// The selectable articles are the approved ones plus whatever the
/// newsletter already references.
async fn render_form(
    ctx: &WebContext,
    action: &str,
    newsletter_id: Option<i64>,
    form: &NewsletterForm,
    error: Option<String>,
) -> WebResult<Response> {
    let mut choices = ctx
        .state
        .services
        .article_queries
        .list_articles()
        .await
        .or_page(ctx)?;

    if let Some(id) = newsletter_id {
        let current = ctx
            .state
            .services
            .newsletter_queries
            .get_newsletter(ctx.user.as_ref(), GetNewsletterQuery { id })
            .await
            .or_page(ctx)?;
        for article in current.articles {
            if !choices.iter().any(|choice| choice.id == article.id) {
                choices.push(article);
            }
        }
    }

    ctx.render(
        "newsletter_form.html",
        context! {
            action => action,
            newsletter_id => newsletter_id,
            title => &form.title,
            description => &form.description,
            selected => &form.articles,
            articles => choices,
            error => error,
        },
    )
}
