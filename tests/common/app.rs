//! Application test fixture
//!
//! Each `TestApp` owns a fresh, migrated in-memory SQLite database and the
//! full router built on top of it, so tests never share state.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use bookmark_api::backend::auth::TokenIssuer;
use bookmark_api::backend::routes::create_router;
use bookmark_api::backend::server::config::in_memory_database;
use bookmark_api::backend::server::{AppState, JwtSecret};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Router plus direct handles on its database and token issuer
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub tokens: TokenIssuer,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = in_memory_database().await.expect("Failed to create test database");
        let secret = JwtSecret::new(TEST_SECRET).expect("Test secret is too short");

        let router = create_router(AppState::new(pool.clone(), &secret));
        let tokens = TokenIssuer::new(&secret);

        Self {
            router,
            pool,
            tokens,
        }
    }

    /// Send a request and return the status and the parsed JSON body
    ///
    /// An empty body comes back as `Value::Null`.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send(request).await
    }

    /// Send a prebuilt request
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body is not JSON")
        };

        (status, body)
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PATCH, uri, Some(token), Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, Some(token), None).await
    }

    /// Number of rows in `users`
    pub async fn account_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}
