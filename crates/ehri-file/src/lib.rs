//! ehri-file - Filesystem-backed archive source.
//!
//! A capture directory holds the raw response bodies of a previous portal
//! session. Replaying it runs the exact same normalization as a live portal,
//! which makes dashboards reproducible and testable offline.
//!
//! Layout:
//!
//! ```text
//! <root>/countries.json          GraphQL body of the Countries query
//! <root>/search/all.json         search body for the empty term
//! <root>/search/q-<term>.json    search body for a given term
//! ```
//!
//! `<term>` is the percent-encoded search term. Very long terms are cut and
//! suffixed with `~<digest>` so every name fits the filesystem limit.

mod source;
mod store;

pub use source::FileSource;
pub use store::CaptureStore;
