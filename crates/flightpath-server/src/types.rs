//! Request and response bodies for the REST API.

use flightpath_core::{City, Endpoints, Itinerary};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Itinerary endpoint resolution request.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct FlightPathRequest {
    /// Flight segments as `[source, destination]` pairs, in input order.
    #[serde(default)]
    #[schema(value_type = Vec<Vec<String>>, example = json!([["SFO", "ATL"], ["ATL", "EWR"]]))]
    pub flights: Itinerary,
}

/// Resolved itinerary endpoints. Unset endpoints are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct FlightPathResponse {
    /// Overall origin.
    #[schema(example = "SFO")]
    pub source: String,
    /// Final destination.
    #[schema(example = "EWR")]
    pub destination: String,
}

impl From<Endpoints> for FlightPathResponse {
    fn from(endpoints: Endpoints) -> Self {
        let (origin, destination) = endpoints.into_parts();
        Self {
            source: origin.map(City::into_inner).unwrap_or_default(),
            destination: destination.map(City::into_inner).unwrap_or_default(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}

/// Health check response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `healthy` while the server accepts requests.
    pub status: String,
    /// Server version.
    pub version: String,
}
