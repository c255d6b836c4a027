//! Endpoint paths and wire types of the portal APIs.

use serde::Deserialize;

/// GraphQL endpoint, relative to the portal root.
pub const GRAPHQL_PATH: &str = "api/graphql";

/// REST search endpoint, relative to the portal root.
pub const SEARCH_PATH: &str = "api/v1/search";

/// Header asking the GraphQL endpoint to stream the whole result at once
/// instead of paging it.
pub const STREAM_HEADER: &str = "X-Stream";

/// Error body some portal endpoints return alongside a failure status.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
