//! Archive source trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::model::{CountryTables, FacetRecord};
use crate::normalize::{CoordinatePolicy, normalize_countries, normalize_facets};
use crate::types::{PortalUrl, SearchQuery};
use crate::{Result, graphql};

/// Somewhere portal responses come from.
///
/// Implementations only fetch raw response bodies. Unwrapping and
/// normalization are shared by the provided methods, so a live portal and a
/// replayed capture go through exactly the same code.
#[async_trait]
pub trait ArchiveSource: Send + Sync {
    /// Returns the portal URL for this source.
    fn url(&self) -> &PortalUrl;

    /// Full body of the Countries GraphQL response, `data` envelope included.
    async fn countries_response(&self) -> Result<Value>;

    /// Full body of a facet-only search response.
    async fn search_response(&self, query: &SearchQuery) -> Result<Value>;

    /// Fetch the Countries response and build the summary and map tables.
    async fn country_tables(&self, policy: CoordinatePolicy) -> Result<CountryTables> {
        let body = self.countries_response().await?;
        let data = graphql::into_data(body)?;
        normalize_countries(&data, policy)
    }

    /// Fetch a search response and build the date histogram table.
    async fn date_facets(&self, query: &SearchQuery) -> Result<Vec<FacetRecord>> {
        let body = self.search_response(query).await?;
        normalize_facets(&body)
    }
}
