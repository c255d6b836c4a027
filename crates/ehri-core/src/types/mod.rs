//! Validated input types.
//!
//! These types check their invariants at construction time so that the
//! sources never have to.

mod portal_url;
mod search_query;

pub use portal_url::PortalUrl;
pub use search_query::SearchQuery;
