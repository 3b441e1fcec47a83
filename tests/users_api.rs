//! User profile API integration tests

mod common;

use axum::http::StatusCode;
use common::{signed_up, TestApp};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_get_me_returns_profile_without_hash() {
    let app = TestApp::new().await;
    let token = signed_up(&app, "me@dada.com").await;

    let (status, body) = app.get("/users/me", &token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "me@dada.com");
    assert_eq!(body["firstName"], json!(null));
    assert!(body["createdAt"].is_string());
    assert!(body["updatedAt"].is_string());
    assert!(body.get("hash").is_none());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_edit_user_updates_only_given_fields() {
    let app = TestApp::new().await;
    let token = signed_up(&app, "me@dada.com").await;

    let (status, body) = app
        .patch("/users", &token, json!({ "firstName": "Kek" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["firstName"], "Kek");
    assert_eq!(body["lastName"], json!(null));
    assert_eq!(body["email"], "me@dada.com");

    let (status, body) = app
        .patch(
            "/users",
            &token,
            json!({ "email": "new@dada.com", "lastName": "Lol" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["firstName"], "Kek");
    assert_eq!(body["lastName"], "Lol");
    assert_eq!(body["email"], "new@dada.com");

    let (_, me) = app.get("/users/me", &token).await;
    assert_eq!(me, body);
}

#[tokio::test]
async fn test_edit_user_to_taken_email_is_forbidden() {
    let app = TestApp::new().await;
    signed_up(&app, "taken@dada.com").await;
    let token = signed_up(&app, "me@dada.com").await;

    let (status, body) = app
        .patch("/users", &token, json!({ "email": "taken@dada.com" }))
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "error": "Credentials taken", "status": 403 }));
}

#[tokio::test]
async fn test_edit_user_with_invalid_email_is_bad_request() {
    let app = TestApp::new().await;
    let token = signed_up(&app, "me@dada.com").await;

    let (status, body) = app
        .patch("/users", &token, json!({ "email": "nope" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "email must be an email");

    let (_, me) = app.get("/users/me", &token).await;
    assert_eq!(me["email"], "me@dada.com");
}

#[tokio::test]
async fn test_new_email_signs_in() {
    let app = TestApp::new().await;
    let token = common::sign_up(&app, "old@dada.com", "asd123").await;

    app.patch("/users", &token, json!({ "email": "new@dada.com" }))
        .await;

    let (status, _) = app
        .post(
            "/auth/sign-in",
            None,
            json!({ "email": "new@dada.com", "password": "asd123" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .post(
            "/auth/sign-in",
            None,
            json!({ "email": "old@dada.com", "password": "asd123" }),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_token_issued_before_email_change_sees_new_email() {
    let app = TestApp::new().await;
    let token = signed_up(&app, "old@dada.com").await;

    let (status, _) = app
        .patch("/users", &token, json!({ "email": "new@dada.com" }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, me) = app.get("/users/me", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "new@dada.com");
}
