//! Normalizers turning portal payloads into flat tables.
//!
//! Both normalizers are pure single-pass functions: they take a parsed JSON
//! value, return freshly built rows, and keep no state between calls. A
//! payload that does not have the expected shape fails the whole call with
//! [`Error::MalformedResponse`](crate::Error::MalformedResponse); no partial
//! table is returned.

mod countries;
mod facets;

pub use countries::{geo_points, normalize_countries, parse_countries, summary_table};
pub use facets::normalize_facets;

use serde::{Deserialize, Serialize};

/// Decides which coordinate values count as present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinatePolicy {
    /// A coordinate of exactly `0.0` is treated like a missing one. Points on
    /// the equator or the prime meridian are dropped. This is how the portal
    /// dashboard has always filtered its map.
    #[default]
    Truthy,

    /// Any non-null coordinate is kept, zero included.
    Present,
}

impl CoordinatePolicy {
    /// Whether a non-null coordinate value is kept.
    pub fn accepts(self, value: f64) -> bool {
        match self {
            CoordinatePolicy::Truthy => value != 0.0,
            CoordinatePolicy::Present => true,
        }
    }
}
