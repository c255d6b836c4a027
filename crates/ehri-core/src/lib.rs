//! ehri-core - Core types, normalizers and traits for the EHRI portal dashboard.
//!
//! The portal answers two fixed queries: a GraphQL listing of countries with
//! their archival repositories, and a REST search whose date facets describe
//! how many archival descriptions fall into each period. This crate turns
//! both payloads into flat row sets that a chart or map can consume.
//!
//! # Example
//!
//! ```
//! use ehri_core::normalize::{CoordinatePolicy, normalize_countries};
//! use serde_json::json;
//!
//! let data = json!({
//!     "countries": { "items": [{
//!         "name": "France",
//!         "itemCount": 12,
//!         "repositories": { "items": [{ "latitude": 48.85, "longitude": 2.35 }] }
//!     }]}
//! });
//!
//! let tables = normalize_countries(&data, CoordinatePolicy::Truthy).unwrap();
//! assert_eq!(tables.summary[0].name, "France");
//! assert_eq!(tables.points.len(), 1);
//! ```

pub mod error;
pub mod graphql;
pub mod model;
pub mod normalize;
pub mod traits;
pub mod types;

pub use error::Error;
pub use model::{
    CountryRecord, CountrySummaryRow, CountryTables, FacetRecord, GeoPoint, RepositoryPoint,
};
pub use normalize::CoordinatePolicy;
pub use traits::ArchiveSource;
pub use types::{PortalUrl, SearchQuery};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
