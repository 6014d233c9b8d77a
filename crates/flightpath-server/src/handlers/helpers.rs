//! Shared handler helpers.
//!
//! Keeps error bodies consistent across handlers: every failure is answered
//! with an [`ErrorResponse`] JSON object.

use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::types::ErrorResponse;

/// Build the response for a request body that could not be decoded.
///
/// Oversized bodies keep their 413 status; every other decode failure,
/// including a missing JSON content type, is a 400.
pub fn unmarshal_error(rejection: &JsonRejection) -> (StatusCode, Json<ErrorResponse>) {
    let status = match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
        _ => StatusCode::BAD_REQUEST,
    };
    let message = rejection.body_text();
    tracing::warn!(%status, error = %message, "Rejected request body");
    (
        status,
        Json(ErrorResponse {
            error: format!("can't unmarshal request: {message}"),
        }),
    )
}

/// Build an internal server error response without leaking implementation details.
///
/// Logs the full error server-side via `tracing::error!` and returns a generic
/// message to the client.
pub fn internal_error(
    context: &str,
    err: &dyn std::fmt::Display,
) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!(%context, error = %err, "Internal server error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("{context}: internal error"),
        }),
    )
}

/// Serialize `body` as a 200 JSON response, or a 500 if encoding fails.
pub fn json_ok<T: Serialize>(body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            bytes,
        )
            .into_response(),
        Err(e) => internal_error("can't marshal result", &e).into_response(),
    }
}
