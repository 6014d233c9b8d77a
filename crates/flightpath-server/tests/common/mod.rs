//! Shared helpers for server integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use flightpath_server::{build_router, ServerConfig};
use serde_json::Value;
use tower::ServiceExt;

/// Router with default configuration (4 MiB body limit, no timeouts, any origin).
pub fn create_test_app() -> Router {
    build_router(&ServerConfig::default())
}

/// Router built from a custom configuration.
pub fn create_app_with(config: &ServerConfig) -> Router {
    build_router(config)
}

/// Send a JSON `POST` and return the raw response.
pub async fn post_json(app: Router, uri: &str, body: impl Into<Body>) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .expect("Failed to build request"),
    )
    .await
    .expect("Request failed")
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&body).expect("Invalid JSON")
}

/// Read a response body as text.
pub async fn body_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(body.to_vec()).expect("Invalid UTF-8")
}
