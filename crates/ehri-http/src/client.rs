//! HTTP client for the portal APIs.

use reqwest::header::{ACCEPT, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, trace};

use ehri_core::error::{Error, ProtocolError, TransportError};
use ehri_core::{PortalUrl, Result};

use crate::endpoints::{ApiErrorResponse, GRAPHQL_PATH, STREAM_HEADER};

/// Map a reqwest failure onto the transport taxonomy.
pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let message = err.to_string();
    let err = if err.is_timeout() {
        TransportError::Timeout { message }
    } else if err.is_connect() {
        TransportError::Connection { message }
    } else {
        TransportError::Http { message }
    };
    Error::Transport(err)
}

/// HTTP client bound to one portal.
#[derive(Debug, Clone)]
pub struct PortalClient {
    client: reqwest::Client,
    portal: PortalUrl,
}

impl PortalClient {
    /// Create a new client for the given portal.
    pub fn new(portal: PortalUrl) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("ehri-http/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(transport_error)?;

        Ok(Self { client, portal })
    }

    /// Returns the portal URL this client is configured for.
    pub fn portal(&self) -> &PortalUrl {
        &self.portal
    }

    /// POST a GraphQL request and return the raw response body.
    #[instrument(skip(self, body), fields(portal = %self.portal))]
    pub async fn graphql<B>(&self, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let url = self.portal.api_url(GRAPHQL_PATH);
        debug!(%url, "GraphQL request");

        let response = self
            .client
            .post(&url)
            .header(STREAM_HEADER, HeaderValue::from_static("true"))
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// GET a JSON resource below the portal root.
    #[instrument(skip(self), fields(portal = %self.portal))]
    pub async fn get_json<Q>(&self, path: &str, params: &Q) -> Result<Value>
    where
        Q: Serialize + std::fmt::Debug + ?Sized,
    {
        let url = self.portal.api_url(path);
        debug!(%url, "GET request");
        trace!(?params, "query parameters");

        let response = self
            .client
            .get(&url)
            .query(params)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Parse a success body as JSON, or turn a failure status into an error.
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        trace!(status = %status, "portal response");

        if !status.is_success() {
            return Err(Error::Protocol(self.parse_error_response(response).await));
        }

        let bytes = response.bytes().await.map_err(transport_error)?;
        serde_json::from_slice(&bytes)
            .map_err(|e| Error::malformed("response body", e.to_string()))
    }

    async fn parse_error_response(&self, response: reqwest::Response) -> ProtocolError {
        let status = response.status().as_u16();

        match response.json::<ApiErrorResponse>().await {
            Ok(body) => ProtocolError::new(status, body.error, body.message),
            Err(_) => ProtocolError::new(status, None, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let portal = PortalUrl::new("https://portal.ehri-project.eu").unwrap();
        let client = PortalClient::new(portal.clone()).unwrap();
        assert_eq!(client.portal(), &portal);
    }
}
