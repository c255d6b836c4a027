//! Capture directory storage.

use std::path::{Path, PathBuf};

use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::{debug, instrument};

use ehri_core::error::{Error, TransportError};
use ehri_core::{Result, SearchQuery};

const COUNTRIES_FILE: &str = "countries.json";
const SEARCH_DIR: &str = "search";

fn map_io(path: &Path, err: std::io::Error) -> Error {
    Error::Transport(TransportError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

/// Longest encoded term kept verbatim in a search file name. Longer terms
/// are cut here and suffixed with a digest so names stay under the usual
/// 255-byte file name limit.
const MAX_ENCODED_TERM: usize = 200;

/// Hex digits of the SHA-256 digest appended to cut names.
const DIGEST_LEN: usize = 16;

/// File name for a search term. Bytes outside `[A-Za-z0-9_-]` are
/// percent-encoded. Terms whose encoding exceeds `MAX_ENCODED_TERM` keep
/// an encoded prefix (never splitting an escape) followed by `~` and a
/// digest of the full term. `~` is itself encoded, so cut and uncut names
/// never collide.
fn search_file_name(query: &SearchQuery) -> String {
    if query.is_empty() {
        return "all.json".to_string();
    }

    let mut encoded = String::new();
    let mut truncated = false;
    for byte in query.term().bytes() {
        let piece = if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            char::from(byte).to_string()
        } else {
            format!("%{byte:02X}")
        };
        if encoded.len() + piece.len() > MAX_ENCODED_TERM {
            truncated = true;
            break;
        }
        encoded.push_str(&piece);
    }

    if truncated {
        let digest = hex::encode(Sha256::digest(query.term().as_bytes()));
        format!("q-{encoded}~{}.json", &digest[..DIGEST_LEN])
    } else {
        format!("q-{encoded}.json")
    }
}

/// Directory of captured portal responses.
#[derive(Debug, Clone)]
pub struct CaptureStore {
    root: PathBuf,
}

impl CaptureStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn countries_path(&self) -> PathBuf {
        self.root.join(COUNTRIES_FILE)
    }

    pub fn search_path(&self, query: &SearchQuery) -> PathBuf {
        self.root.join(SEARCH_DIR).join(search_file_name(query))
    }

    /// Read the captured Countries GraphQL body.
    pub async fn read_countries(&self) -> Result<Value> {
        read_json(&self.countries_path()).await
    }

    /// Read the captured search body for `query`.
    pub async fn read_search(&self, query: &SearchQuery) -> Result<Value> {
        read_json(&self.search_path(query)).await
    }

    /// Store a Countries GraphQL body, replacing any earlier capture.
    pub async fn write_countries(&self, body: &Value) -> Result<PathBuf> {
        let path = self.countries_path();
        write_json(&path, body).await?;
        Ok(path)
    }

    /// Store a search body for `query`, replacing any earlier capture.
    pub async fn write_search(&self, query: &SearchQuery, body: &Value) -> Result<PathBuf> {
        let path = self.search_path(query);
        write_json(&path, body).await?;
        Ok(path)
    }
}

#[instrument]
async fn read_json(path: &Path) -> Result<Value> {
    let bytes = tokio::fs::read(path).await.map_err(|e| map_io(path, e))?;
    debug!(bytes = bytes.len(), "read capture");

    serde_json::from_slice(&bytes)
        .map_err(|e| Error::malformed("captured response", e.to_string()))
}

#[instrument(skip(body))]
async fn write_json(path: &Path, body: &Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| map_io(parent, e))?;
    }

    let mut json = serde_json::to_vec_pretty(body)
        .map_err(|e| Error::malformed("captured response", e.to_string()))?;
    json.push(b'\n');

    tokio::fs::write(path, &json)
        .await
        .map_err(|e| map_io(path, e))?;
    debug!(bytes = json.len(), "wrote capture");

    Ok(())
}
