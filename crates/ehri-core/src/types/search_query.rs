//! Free-text search term for the archival description histogram.

use serde::Serialize;
use std::fmt;

/// Item type the date histogram is restricted to.
pub const DOCUMENTARY_UNIT: &str = "DocumentaryUnit";

/// Facet the search endpoint is asked to aggregate on.
pub const DATES_FACET: &str = "dates";

/// A free-text search term.
///
/// An empty term is a valid query meaning "match everything"; the search
/// endpoint interprets it, not this crate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    term: String,
}

impl SearchQuery {
    /// Create a query from user input. The term is sent to the portal
    /// exactly as given.
    pub fn new(term: impl AsRef<str>) -> Self {
        Self {
            term: term.as_ref().to_string(),
        }
    }

    /// A query matching every archival description.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Query-string parameters for a facet-only search request.
    pub fn params(&self) -> SearchParams<'_> {
        SearchParams {
            q: &self.term,
            item_type: DOCUMENTARY_UNIT,
            limit: 0,
            facet: DATES_FACET,
        }
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.term.is_empty() {
            write!(f, "(all)")
        } else {
            write!(f, "{}", self.term)
        }
    }
}

/// Query parameters of the REST search request.
///
/// `limit` is always zero: only facet metadata is wanted, no item rows.
#[derive(Debug, Serialize)]
pub struct SearchParams<'a> {
    pub q: &'a str,
    #[serde(rename = "type")]
    pub item_type: &'a str,
    pub limit: u32,
    pub facet: &'a str,
}
