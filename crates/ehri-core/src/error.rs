//! Error types for the EHRI toolkit.
//!
//! A single error type covers every failure a source or normalizer can hit.
//! Nothing is retried: each variant aborts the call that produced it.

use std::fmt;
use thiserror::Error;

/// The unified error type for portal operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network or filesystem transport errors.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The portal answered, but with a failure (HTTP status or GraphQL errors).
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The response parsed, but did not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] MalformedResponseError),

    /// Input validation errors (invalid portal URL).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Shorthand for a [`MalformedResponseError`] wrapped in [`Error`].
    pub fn malformed(payload: &'static str, reason: impl Into<String>) -> Self {
        Error::MalformedResponse(MalformedResponseError::new(payload, reason))
    }

    /// Returns true if this error came from an unexpected payload shape.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedResponse(_))
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },

    /// Reading or writing a captured response failed.
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },
}

/// Protocol-level errors reported by the portal.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code (200 when a GraphQL body carried `errors`).
    pub status: u16,
    /// Error code, if the body had one.
    pub error: Option<String>,
    /// Error message from the server.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, error: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            error,
            message,
        }
    }
}

/// A payload did not match the shape the normalizers expect.
#[derive(Debug, Error)]
#[error("{payload}: {reason}")]
pub struct MalformedResponseError {
    /// Which payload was being read ("countries", "search facets", ...).
    pub payload: &'static str,
    /// What was wrong with it.
    pub reason: String,
}

impl MalformedResponseError {
    pub fn new(payload: &'static str, reason: impl Into<String>) -> Self {
        Self {
            payload,
            reason: reason.into(),
        }
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid portal URL format.
    #[error("invalid portal URL '{value}': {reason}")]
    PortalUrl { value: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_error_display_includes_all_parts() {
        let err = ProtocolError::new(
            502,
            Some("BadGateway".to_string()),
            Some("upstream down".to_string()),
        );
        assert_eq!(err.to_string(), "HTTP 502 [BadGateway]: upstream down");
    }

    #[test]
    fn protocol_error_display_status_only() {
        assert_eq!(ProtocolError::new(404, None, None).to_string(), "HTTP 404");
    }

    #[test]
    fn malformed_helper() {
        let err = Error::malformed("countries", "missing field `items`");
        assert!(err.is_malformed());
        assert_eq!(
            err.to_string(),
            "malformed response: countries: missing field `items`"
        );
    }

    #[test]
    fn invalid_portal_url_display() {
        let err: Error = InvalidInputError::PortalUrl {
            value: "ftp://portal".to_string(),
            reason: "unsupported scheme".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "invalid input: invalid portal URL 'ftp://portal': unsupported scheme"
        );
    }
}
