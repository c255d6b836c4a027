//! Network-backed archive source.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use ehri_core::error::InvalidInputError;
use ehri_core::graphql::GraphQlRequest;
use ehri_core::{ArchiveSource, PortalUrl, Result, SearchQuery};

use crate::client::PortalClient;
use crate::endpoints::SEARCH_PATH;

/// Archive source backed by a live portal.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: PortalClient,
}

impl HttpSource {
    /// Create a source for the given portal.
    ///
    /// # Errors
    ///
    /// Returns an error if the portal URL is a `file://` URL or the HTTP
    /// client cannot be built.
    pub fn new(portal: PortalUrl) -> Result<Self> {
        if portal.is_local() {
            return Err(InvalidInputError::PortalUrl {
                value: portal.to_string(),
                reason: "network source needs an http(s) URL".to_string(),
            }
            .into());
        }

        Ok(Self {
            client: PortalClient::new(portal)?,
        })
    }
}

#[async_trait]
impl ArchiveSource for HttpSource {
    fn url(&self) -> &PortalUrl {
        self.client.portal()
    }

    #[instrument(skip(self))]
    async fn countries_response(&self) -> Result<Value> {
        debug!("Fetching countries via GraphQL");
        self.client.graphql(&GraphQlRequest::countries()).await
    }

    #[instrument(skip(self, query), fields(query = %query))]
    async fn search_response(&self, query: &SearchQuery) -> Result<Value> {
        debug!("Fetching date facets via search API");
        self.client.get_json(SEARCH_PATH, &query.params()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_file_url() {
        let portal = PortalUrl::new("file:///tmp/capture").unwrap();
        assert!(HttpSource::new(portal).is_err());
    }
}
