//! Archive source selection for CLI use.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use ehri_core::{ArchiveSource, PortalUrl, SearchQuery};
use ehri_file::FileSource;
use ehri_http::HttpSource;

/// Source wrapper picking the backend from the portal URL scheme.
#[derive(Debug)]
pub enum CliSource {
    File(FileSource),
    Http(HttpSource),
}

impl CliSource {
    /// Open the source named by `portal`: a capture directory for
    /// `file://` URLs, the live portal otherwise.
    pub fn open(portal: &str) -> Result<Self> {
        let url = PortalUrl::new(portal).context("Invalid portal URL")?;
        debug!(portal = %url, local = url.is_local(), "Opening archive source");

        if url.is_local() {
            let source = FileSource::from_url(url).context("Invalid capture directory")?;
            Ok(CliSource::File(source))
        } else {
            let source = HttpSource::new(url).context("Failed to create portal client")?;
            Ok(CliSource::Http(source))
        }
    }
}

#[async_trait]
impl ArchiveSource for CliSource {
    fn url(&self) -> &PortalUrl {
        match self {
            CliSource::File(source) => source.url(),
            CliSource::Http(source) => source.url(),
        }
    }

    async fn countries_response(&self) -> ehri_core::Result<Value> {
        match self {
            CliSource::File(source) => source.countries_response().await,
            CliSource::Http(source) => source.countries_response().await,
        }
    }

    async fn search_response(&self, query: &SearchQuery) -> ehri_core::Result<Value> {
        match self {
            CliSource::File(source) => source.search_response(query).await,
            CliSource::Http(source) => source.search_response(query).await,
        }
    }
}
