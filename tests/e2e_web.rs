// tests/e2e_web.rs
use axum::http::StatusCode;
use newsroom_core::domain::user::Role;

mod support;

use support::{PASSWORD, TestApp, body_text, cookie_pair, location, set_cookies};

/// Cookie header carrying both the session and a pending flash.
fn with_flash(session: &str, flash_pair: &str) -> String {
    format!("{session}; {flash_pair}")
}

#[tokio::test]
async fn dashboard_requires_a_session() {
    let app = TestApp::new().await;
    let response = app.get_page("/dashboard/", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login/"));
}

#[tokio::test]
async fn invalid_session_is_treated_as_signed_out() {
    let app = TestApp::new().await;
    let response = app
        .get_page("/dashboard/", Some("newsroom_session=garbage"))
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login/"));
}

#[tokio::test]
async fn login_sets_session_and_flash_then_dashboard_consumes_the_flash() {
    let app = TestApp::new().await;
    app.seed_user("alice", Role::Reader).await;

    let response = app
        .post_form("/login/", None, &format!("username=alice&password={PASSWORD}"))
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/dashboard/"));
    let session = cookie_pair(&response, "newsroom_session").expect("session cookie");
    let flash = cookie_pair(&response, "newsroom_flash").expect("flash cookie");
    assert!(set_cookies(&response).iter().all(|c| c.contains("HttpOnly")));

    let page = app
        .get_page("/dashboard/", Some(&with_flash(&session, &flash)))
        .await;
    assert_eq!(page.status(), StatusCode::OK);
    let cleared = cookie_pair(&page, "newsroom_flash").expect("flash cleared");
    assert_eq!(cleared, "newsroom_flash=");
    let html = body_text(page).await;
    assert!(html.contains("Welcome, alice!"), "{html}");

    let again = app.get_page("/dashboard/", Some(&session)).await;
    assert!(cookie_pair(&again, "newsroom_flash").is_none());
    assert!(!body_text(again).await.contains("Welcome, alice!"));
}

#[tokio::test]
async fn bad_credentials_rerender_the_login_form() {
    let app = TestApp::new().await;
    app.seed_user("alice", Role::Reader).await;

    let response = app
        .post_form("/login/", None, "username=alice&password=wrong-password")
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(cookie_pair(&response, "newsroom_session").is_none());
    let html = body_text(response).await;
    assert!(html.contains("Please enter a correct username and password."));
    assert!(html.contains("value=\"alice\""));
}

#[tokio::test]
async fn mismatched_passwords_rerender_registration() {
    let app = TestApp::new().await;
    let response = app
        .post_form(
            "/register/",
            None,
            "username=bob&email=bob%40example.com&password1=correct-horse-1&password2=correct-horse-2&role=reader",
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(cookie_pair(&response, "newsroom_session").is_none());
    let html = body_text(response).await;
    assert!(html.contains("The two password fields didn"), "{html}");

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(users, 0);
}

#[tokio::test]
async fn registration_signs_the_user_in() {
    let app = TestApp::new().await;
    let response = app
        .post_form(
            "/register/",
            None,
            &format!(
                "username=bob&email=bob%40example.com&password1={PASSWORD}&password2={PASSWORD}&role=journalist"
            ),
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/dashboard/"));
    let session = cookie_pair(&response, "newsroom_session").expect("session cookie");
    assert!(session.starts_with("newsroom_session=access."));
}

#[tokio::test]
async fn readers_are_bounced_from_the_article_form() {
    let app = TestApp::new().await;
    let reader = app.seed_user("rita", Role::Reader).await;

    let response = app
        .get_page("/articles/create/", Some(&reader.session_cookie()))
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/dashboard/"));
    assert!(cookie_pair(&response, "newsroom_flash").is_some());
}

#[tokio::test]
async fn journalists_submit_articles_through_the_form() {
    let app = TestApp::new().await;
    let journalist = app.seed_user("jane", Role::Journalist).await;
    let cookie = journalist.session_cookie();

    let form = app.get_page("/articles/create/", Some(&cookie)).await;
    assert_eq!(form.status(), StatusCode::OK);

    let response = app
        .post_form(
            "/articles/create/",
            Some(&cookie),
            "title=Town+hall+meeting&content=It+went+long.&publisher=",
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/dashboard/"));
    let flash = cookie_pair(&response, "newsroom_flash").expect("flash");

    let page = app
        .get_page("/dashboard/", Some(&with_flash(&cookie, &flash)))
        .await;
    let html = body_text(page).await;
    assert!(html.contains("Article submitted for approval!"));
    assert!(html.contains("Town hall meeting"));

    let approved: bool = sqlx::query_scalar("SELECT approved FROM articles WHERE title = ?")
        .bind("Town hall meeting")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert!(!approved);
}

#[tokio::test]
async fn blank_article_title_rerenders_the_form() {
    let app = TestApp::new().await;
    let journalist = app.seed_user("jane", Role::Journalist).await;
    let response = app
        .post_form(
            "/articles/create/",
            Some(&journalist.session_cookie()),
            "title=&content=Body",
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn editors_approve_from_the_web() {
    let app = TestApp::new().await;
    let author = app.seed_user("jane", Role::Journalist).await;
    let editor = app.seed_user("ed", Role::Editor).await;
    let id = app.seed_article(&author, "Story", None, false).await;
    let uri = format!("/articles/{id}/approve/");

    let confirm = app.get_page(&uri, Some(&editor.session_cookie())).await;
    assert_eq!(confirm.status(), StatusCode::OK);
    assert!(!app.is_approved(id).await, "GET must not approve");

    let response = app.post_form(&uri, Some(&editor.session_cookie()), "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(app.is_approved(id).await);
    assert_eq!(app.social.posts().len(), 1);
}

#[tokio::test]
async fn subscription_toggle_flashes_and_returns_to_the_overview() {
    let app = TestApp::new().await;
    let reader = app.seed_user("rita", Role::Reader).await;
    let planet = app.seed_publisher("Daily Planet").await;
    let cookie = reader.session_cookie();

    let response = app
        .post_form(&format!("/subscribe/publisher/{planet}/"), Some(&cookie), "")
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/subscriptions/"));
    let flash = cookie_pair(&response, "newsroom_flash").expect("flash");

    let page = app
        .get_page("/subscriptions/", Some(&with_flash(&cookie, &flash)))
        .await;
    let html = body_text(page).await;
    assert!(html.contains("Subscribed to Daily Planet!"), "{html}");

    let response = app
        .post_form(&format!("/subscribe/publisher/{planet}/"), Some(&cookie), "")
        .await;
    let flash = cookie_pair(&response, "newsroom_flash").expect("flash");
    let page = app
        .get_page("/subscriptions/", Some(&with_flash(&cookie, &flash)))
        .await;
    assert!(body_text(page).await.contains("Unsubscribed from Daily Planet"));
}

#[tokio::test]
async fn missing_article_renders_a_404_page() {
    let app = TestApp::new().await;
    let reader = app.seed_user("rita", Role::Reader).await;
    let response = app
        .get_page("/articles/9999/", Some(&reader.session_cookie()))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Page not found"));
}

#[tokio::test]
async fn malformed_page_ids_render_a_404_page() {
    let app = TestApp::new().await;
    let reader = app.seed_user("rita", Role::Reader).await;
    for uri in ["/articles/0/", "/articles/abc/", "/newsletters/-3/"] {
        let response = app.get_page(uri, Some(&reader.session_cookie())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert!(body_text(response).await.contains("Page not found"), "{uri}");
    }
}

#[tokio::test]
async fn public_article_list_works_without_a_session() {
    let app = TestApp::new().await;
    let author = app.seed_user("jane", Role::Journalist).await;
    app.seed_article(&author, "Public story", None, true).await;
    app.seed_article(&author, "Secret draft", None, false).await;

    let response = app.get_page("/articles/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Public story"));
    assert!(!html.contains("Secret draft"));
}

#[tokio::test]
async fn readers_joining_a_publisher_get_an_error_flash() {
    let app = TestApp::new().await;
    let reader = app.seed_user("rita", Role::Reader).await;
    let planet = app.seed_publisher("Daily Planet").await;

    let response = app
        .post_form(
            &format!("/publishers/{planet}/join/"),
            Some(&reader.session_cookie()),
            "",
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let flash = cookie_pair(&response, "newsroom_flash").expect("flash");
    assert!(flash.contains("level=error"));
}

#[tokio::test]
async fn logout_clears_the_session() {
    let app = TestApp::new().await;
    let reader = app.seed_user("rita", Role::Reader).await;

    let response = app
        .post_form("/logout/", Some(&reader.session_cookie()), "")
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login/"));
    let cookies = set_cookies(&response);
    assert!(
        cookies
            .iter()
            .any(|c| c.starts_with("newsroom_session=;") && c.contains("Max-Age=0"))
    );
}
