//! Date facet normalizer.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::model::FacetRecord;
use crate::{Error, Result};

const PAYLOAD: &str = "search facets";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    meta: SearchMeta,
}

#[derive(Debug, Deserialize)]
struct SearchMeta {
    facets: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct FacetGroup {
    facets: Vec<FacetRecord>,
}

/// Extract the first facet group of a search response as a flat table.
///
/// Only the first group is read; any later groups are not inspected.
///
/// # Errors
///
/// Returns [`Error::MalformedResponse`] if `meta` or `facets` is missing,
/// if there is no facet group, or if an entry lacks `count`, `value` or
/// `name`.
pub fn normalize_facets(response: &Value) -> Result<Vec<FacetRecord>> {
    let malformed = |e: serde_json::Error| Error::malformed(PAYLOAD, e.to_string());

    let response = SearchResponse::deserialize(response).map_err(malformed)?;
    let first = response
        .meta
        .facets
        .first()
        .ok_or_else(|| Error::malformed(PAYLOAD, "no facet group in response"))?;
    let group = FacetGroup::deserialize(first).map_err(malformed)?;

    debug!(buckets = group.facets.len(), "normalized date facets");

    Ok(group.facets)
}
