//! Path-endpoint resolution over an ordered list of flight segments.

use std::collections::HashSet;

use crate::types::{City, Edge, Endpoints};

/// Resolves the origin and final destination of the itinerary described by
/// `edges`.
///
/// A city that is both some segment's source and some segment's destination
/// is an interior hop. Membership is consumed: each appearance of a city as a
/// destination can mask at most one later appearance of it as a source, and
/// the same holds the other way round. This is what lets duplicated or
/// retraced segments cancel out.
///
/// Segments are scanned in input order and every unmatched segment overwrites
/// the current candidate, so the last unmatched segment wins.
///
/// The function is total: empty input yields unset endpoints and empty tokens
/// are ordinary cities. Inputs made of several disjoint itineraries are not
/// detected; the result then follows the same mechanical rule.
///
/// # Example
///
/// ```rust
/// use flightpath_core::{resolve_endpoints, City, Edge};
///
/// let edges: Vec<Edge> = [
///     ["EWR", "IND"],
///     ["IND", "EWR"],
///     ["SFO", "ATL"],
///     ["GSO", "IND"],
///     ["ATL", "GSO"],
///     ["IND", "EWR"],
/// ]
/// .into_iter()
/// .map(Edge::from)
/// .collect();
///
/// let endpoints = resolve_endpoints(&edges);
/// assert_eq!(endpoints.origin(), Some(&City::from("IND")));
/// assert_eq!(endpoints.destination(), Some(&City::from("EWR")));
/// ```
#[must_use]
pub fn resolve_endpoints(edges: &[Edge]) -> Endpoints {
    let mut source_cities: HashSet<&City> = HashSet::with_capacity(edges.len());
    let mut dest_cities: HashSet<&City> = HashSet::with_capacity(edges.len());

    for edge in edges {
        source_cities.insert(edge.source());
        dest_cities.insert(edge.destination());
    }

    let mut origin: Option<&City> = None;
    let mut destination: Option<&City> = None;

    for edge in edges {
        // `remove` doubles as the membership test and the consumption.
        if !dest_cities.remove(edge.source()) {
            origin = Some(edge.source());
        }
        if !source_cities.remove(edge.destination()) {
            destination = Some(edge.destination());
        }
    }

    Endpoints::new(origin.cloned(), destination.cloned())
}
