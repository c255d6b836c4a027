//! File-backed archive source.

use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use ehri_core::error::InvalidInputError;
use ehri_core::{ArchiveSource, PortalUrl, Result, SearchQuery};

use crate::store::CaptureStore;

/// Archive source replaying a capture directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    store: CaptureStore,
    url: PortalUrl,
}

impl FileSource {
    /// Create a source over the capture directory at `root`.
    pub fn new(root: impl AsRef<Path>, url: PortalUrl) -> Self {
        Self {
            store: CaptureStore::new(root),
            url,
        }
    }

    /// Create a source from a `file://` portal URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not name a local directory.
    pub fn from_url(url: PortalUrl) -> Result<Self> {
        let root = url.to_file_path().ok_or_else(|| InvalidInputError::PortalUrl {
            value: url.to_string(),
            reason: "capture source needs a file:// URL".to_string(),
        })?;
        Ok(Self::new(root, url))
    }

    /// Access the underlying capture store.
    pub fn store(&self) -> &CaptureStore {
        &self.store
    }
}

#[async_trait]
impl ArchiveSource for FileSource {
    fn url(&self) -> &PortalUrl {
        &self.url
    }

    #[instrument(skip(self), fields(root = %self.store.root().display()))]
    async fn countries_response(&self) -> Result<Value> {
        debug!("Replaying captured countries response");
        self.store.read_countries().await
    }

    #[instrument(
        skip(self, query),
        fields(root = %self.store.root().display(), query = %query)
    )]
    async fn search_response(&self, query: &SearchQuery) -> Result<Value> {
        debug!("Replaying captured search response");
        self.store.read_search(query).await
    }
}
