//! # Flightpath Server
//!
//! REST API around [`flightpath_core::resolve_endpoints`].
//!
//! ## Endpoints
//!
//! - `POST /calculate` — `{"flights": [["SFO", "ATL"], ["ATL", "EWR"]]}` →
//!   `{"source": "SFO", "destination": "EWR"}`
//! - `GET /health` — liveness probe
//! - `GET /api-docs/openapi.json` — OpenAPI document

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod types;

pub use config::{ServerConfig, ServerOpts, CONFIG_PATH_ENV};
pub use error::ConfigError;
pub use handlers::{calculate, health_check};
pub use router::{build_cors_layer, build_router, ApiDoc};
pub use types::{ErrorResponse, FlightPathRequest, FlightPathResponse, HealthResponse};
