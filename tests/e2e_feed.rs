// tests/e2e_feed.rs
use axum::http::{Method, StatusCode};
use newsroom_core::domain::user::Role;
use serde_json::Value;

mod support;

use support::{TestApp, TestUser, assert_error, ids};

async fn feed(app: &TestApp, reader: &TestUser) -> Value {
    let (status, body) = app
        .api(Method::GET, "/api/articles/subscribed/", Some(&reader.token()), None)
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body
}

async fn toggle(app: &TestApp, reader: &TestUser, kind: &str, id: i64) -> Value {
    let (status, body) = app
        .api(
            Method::POST,
            &format!("/api/subscriptions/{kind}/{id}/"),
            Some(&reader.token()),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body
}

#[tokio::test]
async fn empty_without_subscriptions() {
    let app = TestApp::new().await;
    let author = app.seed_user("jane", Role::Journalist).await;
    let reader = app.seed_user("rita", Role::Reader).await;
    app.seed_article(&author, "Story", None, true).await;

    assert!(ids(&feed(&app, &reader).await).is_empty());
}

#[tokio::test]
async fn following_a_journalist_shows_only_their_approved_articles() {
    let app = TestApp::new().await;
    let followed = app.seed_user("jane", Role::Journalist).await;
    let other = app.seed_user("jim", Role::Journalist).await;
    let reader = app.seed_user("rita", Role::Reader).await;

    let older = app.seed_article(&followed, "Older", None, true).await;
    app.seed_article(&followed, "Pending", None, false).await;
    app.seed_article(&other, "Elsewhere", None, true).await;
    let newer = app.seed_article(&followed, "Newer", None, true).await;

    let body = toggle(&app, &reader, "journalists", followed.id).await;
    assert_eq!(body["subscribed"], true);
    assert_eq!(body["name"], "jane");

    assert_eq!(ids(&feed(&app, &reader).await), vec![newer, older]);
}

#[tokio::test]
async fn subscribing_to_a_publisher_shows_its_approved_articles() {
    let app = TestApp::new().await;
    let author = app.seed_user("jane", Role::Journalist).await;
    let reader = app.seed_user("rita", Role::Reader).await;
    let planet = app.seed_publisher("Daily Planet").await;
    let bugle = app.seed_publisher("Daily Bugle").await;

    let in_planet = app.seed_article(&author, "Planet news", Some(planet), true).await;
    app.seed_article(&author, "Planet draft", Some(planet), false).await;
    app.seed_article(&author, "Bugle news", Some(bugle), true).await;
    app.seed_article(&author, "Independent", None, true).await;

    toggle(&app, &reader, "publishers", planet).await;
    assert_eq!(ids(&feed(&app, &reader).await), vec![in_planet]);
}

#[tokio::test]
async fn overlapping_subscriptions_do_not_duplicate() {
    let app = TestApp::new().await;
    let author = app.seed_user("jane", Role::Journalist).await;
    let reader = app.seed_user("rita", Role::Reader).await;
    let planet = app.seed_publisher("Daily Planet").await;

    let first = app.seed_article(&author, "Both", Some(planet), true).await;
    let second = app.seed_article(&author, "Author only", None, true).await;

    toggle(&app, &reader, "publishers", planet).await;
    toggle(&app, &reader, "journalists", author.id).await;

    assert_eq!(ids(&feed(&app, &reader).await), vec![second, first]);
}

#[tokio::test]
async fn toggling_twice_restores_the_original_state() {
    let app = TestApp::new().await;
    let author = app.seed_user("jane", Role::Journalist).await;
    let reader = app.seed_user("rita", Role::Reader).await;
    let planet = app.seed_publisher("Daily Planet").await;
    app.seed_article(&author, "Story", Some(planet), true).await;

    assert_eq!(toggle(&app, &reader, "publishers", planet).await["subscribed"], true);
    assert_eq!(ids(&feed(&app, &reader).await).len(), 1);

    assert_eq!(toggle(&app, &reader, "publishers", planet).await["subscribed"], false);
    assert!(ids(&feed(&app, &reader).await).is_empty());

    let (_, overview) = app
        .api(Method::GET, "/api/subscriptions/", Some(&reader.token()), None)
        .await;
    assert_eq!(overview["publishers"][0]["subscribed"], false);
    assert_eq!(overview["journalists"][0]["name"], "jane");
}

#[tokio::test]
async fn only_readers_subscribe() {
    let app = TestApp::new().await;
    let author = app.seed_user("jane", Role::Journalist).await;
    let editor = app.seed_user("ed", Role::Editor).await;
    let planet = app.seed_publisher("Daily Planet").await;

    for user in [&author, &editor] {
        let (status, body) = app
            .api(
                Method::POST,
                &format!("/api/subscriptions/publishers/{planet}/"),
                Some(&user.token()),
                None,
            )
            .await;
        assert_error(status, &body, StatusCode::FORBIDDEN);
    }
}

#[tokio::test]
async fn unknown_targets_are_404() {
    let app = TestApp::new().await;
    let reader = app.seed_user("rita", Role::Reader).await;
    let other_reader = app.seed_user("ralph", Role::Reader).await;

    let (status, body) = app
        .api(Method::POST, "/api/subscriptions/publishers/77/", Some(&reader.token()), None)
        .await;
    assert_error(status, &body, StatusCode::NOT_FOUND);

    let (status, body) = app
        .api(
            Method::POST,
            &format!("/api/subscriptions/journalists/{}/", other_reader.id),
            Some(&reader.token()),
            None,
        )
        .await;
    assert_error(status, &body, StatusCode::NOT_FOUND);
}
