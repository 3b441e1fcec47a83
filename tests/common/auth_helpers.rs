//! Authentication test helpers

use axum::http::StatusCode;
use serde_json::json;

use super::app::TestApp;

/// Sign up through the API and return the access token
pub async fn sign_up(app: &TestApp, email: &str, password: &str) -> String {
    let (status, body) = app
        .post(
            "/auth/sign-up",
            None,
            json!({ "email": email, "password": password }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED, "sign-up failed: {}", body);
    body["access_token"]
        .as_str()
        .expect("access_token missing")
        .to_string()
}

/// Sign up an account with a fixed password and return its token
pub async fn signed_up(app: &TestApp, email: &str) -> String {
    sign_up(app, email, "test_password_123").await
}
