//! ehri-http - Network-backed archive source.
//!
//! Talks to a live EHRI portal: one GraphQL POST for the country listing and
//! one facet-only GET against the REST search API. Requests are one-shot; a
//! failure is returned to the caller as is.

mod client;
mod endpoints;
mod source;

pub use client::PortalClient;
pub use endpoints::{GRAPHQL_PATH, SEARCH_PATH};
pub use source::HttpSource;
