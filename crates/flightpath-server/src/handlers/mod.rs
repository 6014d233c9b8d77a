//! HTTP handlers for the Flightpath REST API.
//!
//! - `flights`: itinerary endpoint resolution
//! - `health`: health check endpoint

pub mod flights;
pub mod health;
mod helpers;

pub use flights::calculate;
pub use health::health_check;
