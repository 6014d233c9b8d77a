//! # Flightpath Core
//!
//! Resolves the overall origin and final destination of a travel itinerary
//! given as an unordered collection of directed flight segments.
//!
//! Segments may be duplicated or retraced (`A → B` followed by `B → A`); the
//! resolver cancels those out instead of treating every repeated city as an
//! interior hop.
//!
//! ## Quick Start
//!
//! ```rust
//! use flightpath_core::{resolve_endpoints, City, Edge};
//!
//! let edges = vec![
//!     Edge::new("IND", "EWR"),
//!     Edge::new("SFO", "ATL"),
//!     Edge::new("GSO", "IND"),
//!     Edge::new("ATL", "GSO"),
//! ];
//!
//! let endpoints = resolve_endpoints(&edges);
//! assert_eq!(endpoints.origin(), Some(&City::from("SFO")));
//! assert_eq!(endpoints.destination(), Some(&City::from("EWR")));
//! ```

#![warn(missing_docs)]

mod resolver;
mod types;

pub use resolver::resolve_endpoints;
pub use types::{City, Edge, Endpoints, Itinerary};
