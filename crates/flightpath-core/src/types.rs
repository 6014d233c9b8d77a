//! Itinerary data model: cities, flight segments and resolved endpoints.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::resolver::resolve_endpoints;

/// An opaque city identifier, typically an airport code.
///
/// No internal structure is inspected. Two cities are the same city when
/// their tokens are byte-for-byte equal; the empty token is a valid city.
/// A `null` token deserializes as the empty city.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct City(String);

impl<'de> Deserialize<'de> for City {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<String>::deserialize(deserializer).map(|token| Self(token.unwrap_or_default()))
    }
}

impl City {
    /// Creates a city from any string-like token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the city and returns the raw token.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for City {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for City {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for City {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// One directed flight segment.
///
/// Serialized as the two-element array `[source, destination]`. Arrays of any
/// other length are rejected on deserialization.
///
/// # Example
///
/// ```rust
/// use flightpath_core::Edge;
///
/// let edge: Edge = serde_json::from_str(r#"["SFO", "EWR"]"#).unwrap();
/// assert_eq!(edge.source().as_str(), "SFO");
/// assert_eq!(edge.destination().as_str(), "EWR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(City, City)", into = "(City, City)")]
pub struct Edge {
    source: City,
    destination: City,
}

impl Edge {
    /// Creates a segment flying from `source` to `destination`.
    #[must_use]
    pub fn new(source: impl Into<City>, destination: impl Into<City>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Returns the departure city.
    #[must_use]
    pub fn source(&self) -> &City {
        &self.source
    }

    /// Returns the arrival city.
    #[must_use]
    pub fn destination(&self) -> &City {
        &self.destination
    }
}

impl From<(City, City)> for Edge {
    fn from((source, destination): (City, City)) -> Self {
        Self {
            source,
            destination,
        }
    }
}

impl From<Edge> for (City, City) {
    fn from(edge: Edge) -> Self {
        (edge.source, edge.destination)
    }
}

impl<T: Into<City>> From<[T; 2]> for Edge {
    fn from([source, destination]: [T; 2]) -> Self {
        Self::new(source, destination)
    }
}

/// The resolved origin and final destination of an itinerary.
///
/// A side is `None` when no segment left it unmatched, which is always the
/// case for empty input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoints {
    origin: Option<City>,
    destination: Option<City>,
}

impl Endpoints {
    /// Creates endpoints from explicit values.
    #[must_use]
    pub fn new(origin: Option<City>, destination: Option<City>) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Returns the itinerary's origin, if any.
    #[must_use]
    pub fn origin(&self) -> Option<&City> {
        self.origin.as_ref()
    }

    /// Returns the itinerary's final destination, if any.
    #[must_use]
    pub fn destination(&self) -> Option<&City> {
        self.destination.as_ref()
    }

    /// Returns true when neither endpoint was resolved.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.origin.is_none() && self.destination.is_none()
    }

    /// Splits into `(origin, destination)`.
    #[must_use]
    pub fn into_parts(self) -> (Option<City>, Option<City>) {
        (self.origin, self.destination)
    }
}

/// An ordered collection of flight segments.
///
/// Order of the segments is preserved exactly as supplied; it decides which
/// candidate wins when several segments are left unmatched.
/// A `null` list deserializes as the empty itinerary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Itinerary(Vec<Edge>);

impl<'de> Deserialize<'de> for Itinerary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<Vec<Edge>>::deserialize(deserializer).map(|edges| Self(edges.unwrap_or_default()))
    }
}

impl Itinerary {
    /// Wraps an ordered list of segments.
    #[must_use]
    pub fn new(edges: Vec<Edge>) -> Self {
        Self(edges)
    }

    /// Returns the segments in input order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.0
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolves the itinerary's origin and final destination.
    #[must_use]
    pub fn endpoints(&self) -> Endpoints {
        resolve_endpoints(&self.0)
    }
}

impl FromIterator<Edge> for Itinerary {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Edge>> for Itinerary {
    fn from(edges: Vec<Edge>) -> Self {
        Self(edges)
    }
}
