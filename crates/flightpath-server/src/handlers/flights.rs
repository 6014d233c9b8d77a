//! Itinerary endpoint resolution handler.

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    Json,
};

use crate::types::{ErrorResponse, FlightPathRequest, FlightPathResponse};

use super::helpers::{json_ok, unmarshal_error};

/// Resolve the origin and final destination of an itinerary.
///
/// Segments are resolved in the order they appear in `flights`. Duplicated
/// or retraced segments cancel out.
#[utoipa::path(
    post,
    path = "/calculate",
    tag = "flights",
    request_body = FlightPathRequest,
    responses(
        (status = 200, description = "Resolved endpoints", body = FlightPathResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 413, description = "Request body too large", body = ErrorResponse),
        (status = 500, description = "Response encoding failed", body = ErrorResponse)
    )
)]
pub async fn calculate(payload: Result<Json<FlightPathRequest>, JsonRejection>) -> Response {
    let Json(req) = match payload {
        Ok(req) => req,
        Err(rejection) => return unmarshal_error(&rejection).into_response(),
    };

    let endpoints = req.flights.endpoints();
    tracing::debug!(
        flights = req.flights.len(),
        origin = ?endpoints.origin(),
        destination = ?endpoints.destination(),
        "Resolved itinerary endpoints"
    );

    json_ok(&FlightPathResponse::from(endpoints))
}
