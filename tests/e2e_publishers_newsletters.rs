// tests/e2e_publishers_newsletters.rs
use axum::http::{Method, StatusCode};
use newsroom_core::domain::user::Role;
use serde_json::json;

mod support;

use support::{TestApp, assert_error};

#[tokio::test]
async fn readers_cannot_join_or_create_publishers() {
    let app = TestApp::new().await;
    let reader = app.seed_user("rita", Role::Reader).await;
    let planet = app.seed_publisher("Daily Planet").await;

    let (status, body) = app
        .api(
            Method::POST,
            &format!("/api/publishers/{planet}/join/"),
            Some(&reader.token()),
            None,
        )
        .await;
    assert_error(status, &body, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Only journalists and editors can join publishers!");

    let (status, body) = app
        .api(
            Method::POST,
            "/api/publishers/",
            Some(&reader.token()),
            Some(json!({ "name": "Reader Times" })),
        )
        .await;
    assert_error(status, &body, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn journalists_join_idempotently_and_leave() {
    let app = TestApp::new().await;
    let journalist = app.seed_user("jane", Role::Journalist).await;
    let planet = app.seed_publisher("Daily Planet").await;
    let join = format!("/api/publishers/{planet}/join/");

    for _ in 0..2 {
        let (status, body) = app.api(Method::POST, &join, Some(&journalist.token()), None).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(body["membership"], "journalist");
    }

    let rows: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM publisher_journalists WHERE publisher_id = ? AND user_id = ?",
    )
    .bind(planet)
    .bind(journalist.id)
    .fetch_one(&app.pool)
    .await
    .unwrap();
    assert_eq!(rows, 1);

    let (_, list) = app
        .api(Method::GET, "/api/publishers/", Some(&journalist.token()), None)
        .await;
    assert_eq!(list[0]["membership"], "journalist");

    let (status, body) = app
        .api(
            Method::POST,
            &format!("/api/publishers/{planet}/leave/"),
            Some(&journalist.token()),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["membership"].is_null());

    let (_, list) = app
        .api(Method::GET, "/api/publishers/", Some(&journalist.token()), None)
        .await;
    assert!(list[0]["membership"].is_null());
}

#[tokio::test]
async fn editors_join_as_editors() {
    let app = TestApp::new().await;
    let editor = app.seed_user("ed", Role::Editor).await;
    let (status, created) = app
        .api(
            Method::POST,
            "/api/publishers/",
            Some(&editor.token()),
            Some(json!({ "name": "Evening Post" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{created}");

    let id = created["id"].as_i64().unwrap();
    let (status, body) = app
        .api(
            Method::POST,
            &format!("/api/publishers/{id}/join/"),
            Some(&editor.token()),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["membership"], "editor");
}

#[tokio::test]
async fn joining_a_missing_publisher_is_404() {
    let app = TestApp::new().await;
    let journalist = app.seed_user("jane", Role::Journalist).await;
    let (status, body) = app
        .api(Method::POST, "/api/publishers/404/join/", Some(&journalist.token()), None)
        .await;
    assert_error(status, &body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn newsletter_crud_follows_ownership() {
    let app = TestApp::new().await;
    let author = app.seed_user("jane", Role::Journalist).await;
    let other = app.seed_user("jim", Role::Journalist).await;
    let editor = app.seed_user("ed", Role::Editor).await;
    let reader = app.seed_user("rita", Role::Reader).await;
    let story = app.seed_article(&author, "Story", None, true).await;
    let other_story = app.seed_article(&other, "Other", None, true).await;

    let (status, body) = app
        .api(
            Method::POST,
            "/api/newsletters/",
            Some(&reader.token()),
            Some(json!({ "title": "Mine", "description": "Nope" })),
        )
        .await;
    assert_error(status, &body, StatusCode::FORBIDDEN);

    let (status, created) = app
        .api(
            Method::POST,
            "/api/newsletters/",
            Some(&author.token()),
            Some(json!({
                "title": "Weekly",
                "description": "Best of the week",
                "articles": [story, story],
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    assert_eq!(created["author"]["id"], author.id);
    assert_eq!(support::ids(&created["articles"]), vec![story]);
    let uri = format!("/api/newsletters/{}/", created["id"]);

    let (status, body) = app
        .api(Method::PUT, &uri, Some(&other.token()), Some(json!({ "title": "Hijacked" })))
        .await;
    assert_error(status, &body, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "You can only edit your own newsletters!");

    let (status, body) = app.api(Method::DELETE, &uri, Some(&other.token()), None).await;
    assert_error(status, &body, StatusCode::FORBIDDEN);

    let (status, updated) = app
        .api(
            Method::PUT,
            &uri,
            Some(&author.token()),
            Some(json!({ "articles": [other_story, story] })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(updated["title"], "Weekly");
    assert_eq!(support::ids(&updated["articles"]).len(), 2);

    let (status, fetched) = app.api(Method::GET, &uri, Some(&reader.token()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["description"], "Best of the week");

    let (status, _) = app.api(Method::DELETE, &uri, Some(&editor.token()), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.api(Method::GET, &uri, Some(&reader.token()), None).await;
    assert_error(status, &body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn newsletters_reject_unknown_articles() {
    let app = TestApp::new().await;
    let author = app.seed_user("jane", Role::Journalist).await;
    let (status, body) = app
        .api(
            Method::POST,
            "/api/newsletters/",
            Some(&author.token()),
            Some(json!({ "title": "Weekly", "description": "d", "articles": [999] })),
        )
        .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn newsletters_hide_pending_articles_from_readers() {
    let app = TestApp::new().await;
    let author = app.seed_user("jane", Role::Journalist).await;
    let reader = app.seed_user("rita", Role::Reader).await;
    let approved = app.seed_article(&author, "Out", None, true).await;
    let pending = app.seed_article(&author, "Draft", None, false).await;

    let (status, created) = app
        .api(
            Method::POST,
            "/api/newsletters/",
            Some(&author.token()),
            Some(json!({ "title": "Mixed", "description": "d", "articles": [approved, pending] })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    assert_eq!(support::ids(&created["articles"]).len(), 2);

    let (_, list) = app
        .api(Method::GET, "/api/newsletters/", Some(&reader.token()), None)
        .await;
    assert_eq!(support::ids(&list[0]["articles"]), vec![approved]);
}
