//! Router-level integration tests: health, docs and CORS.

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use common::{body_json, create_app_with, create_test_app};
use flightpath_server::ServerConfig;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .uri("/collections")
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document_lists_calculate() {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["paths"]["/calculate"]["post"].is_object());
    assert!(json["paths"]["/health"]["get"].is_object());
    assert!(json["components"]["schemas"]["FlightPathResponse"].is_object());
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/calculate")
                .header(header::ORIGIN, "https://anywhere.example")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let allow_origin = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .expect("CORS header missing");
    assert_eq!(allow_origin, "*");
}

#[tokio::test]
async fn test_cors_restricted_origins() {
    let config = ServerConfig {
        cors_origin: Some("https://allowed.example, https://other.example".to_string()),
        ..ServerConfig::default()
    };

    let allowed = create_app_with(&config)
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "https://allowed.example")
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");
    assert_eq!(
        allowed
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .expect("CORS header missing"),
        "https://allowed.example"
    );

    let denied = create_app_with(&config)
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "https://denied.example")
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");
    assert!(denied
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
