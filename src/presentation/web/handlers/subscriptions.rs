// src/presentation/web/handlers/subscriptions.rs
use crate::application::{
    commands::subscriptions::ToggleSubscriptionCommand,
    dto::{SubscriptionKind, SubscriptionToggleDto},
};
use crate::presentation::web::{
    context::{PageId, WebContext},
    error::{IntoWebResult, WebResult},
    session::Flash,
};
use axum::response::Response;
use minijinja::context;

pub async fn overview(ctx: WebContext) -> WebResult<Response> {
    let user = ctx.require_user()?;
    let overview = ctx
        .state
        .services
        .subscription_queries
        .overview(user)
        .await
        .or_page(&ctx)?;
    ctx.render("subscriptions.html", context! { overview => overview })
}

pub async fn toggle_publisher(ctx: WebContext, PageId(id): PageId) -> WebResult<Response> {
    toggle(ctx, SubscriptionKind::Publisher, id).await
}

pub async fn toggle_journalist(ctx: WebContext, PageId(id): PageId) -> WebResult<Response> {
    toggle(ctx, SubscriptionKind::Journalist, id).await
}

async fn toggle(ctx: WebContext, kind: SubscriptionKind, target_id: i64) -> WebResult<Response> {
    let user = ctx.require_user()?;
    let outcome = ctx
        .state
        .services
        .subscription_commands
        .toggle_subscription(user, ToggleSubscriptionCommand { kind, target_id })
        .await
        .or_page(&ctx)?;
    Ok(ctx.redirect("/subscriptions/", &toggle_message(&outcome)))
}

fn toggle_message(outcome: &SubscriptionToggleDto) -> Flash {
    let name = &outcome.name;
    match (outcome.kind, outcome.subscribed) {
        (SubscriptionKind::Publisher, true) => Flash::success(format!("Subscribed to {name}!")),
        (SubscriptionKind::Publisher, false) => Flash::info(format!("Unsubscribed from {name}")),
        (SubscriptionKind::Journalist, true) => Flash::success(format!("Following {name}!")),
        (SubscriptionKind::Journalist, false) => Flash::info(format!("Unfollowed {name}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::web::session::FlashLevel;

    fn outcome(kind: SubscriptionKind, subscribed: bool) -> SubscriptionToggleDto {
        SubscriptionToggleDto {
            kind,
            id: 1,
            name: "Daily".into(),
            subscribed,
        }
    }

    #[test]
    fn messages_follow_the_new_state() {
        let on = toggle_message(&outcome(SubscriptionKind::Publisher, true));
        assert_eq!(on.message, "Subscribed to Daily!");
        assert_eq!(on.level, FlashLevel::Success);

        let off = toggle_message(&outcome(SubscriptionKind::Journalist, false));
        assert_eq!(off.message, "Unfollowed Daily");
        assert_eq!(off.level, FlashLevel::Info);
    }
}
