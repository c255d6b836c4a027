//! GraphQL request and response envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProtocolError;
use crate::{Error, Result};

/// Countries with their item counts and repository locations.
pub const COUNTRIES_QUERY: &str = r#"
query Countries {
    countries {
        items {
            name
            itemCount
            repositories {
                items {
                    latitude
                    longitude
                }
            }
        }
    }
}
"#;

/// Body of a GraphQL POST. The dashboard never sends variables.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
}

impl GraphQlRequest<'static> {
    pub fn countries() -> Self {
        Self {
            query: COUNTRIES_QUERY,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Unwrap the `data` member of a GraphQL response body.
///
/// # Errors
///
/// - [`Error::Protocol`] if the body lists any `errors`.
/// - [`Error::MalformedResponse`] if the body is not an object or has no
///   `data`.
pub fn into_data(body: Value) -> Result<Value> {
    let envelope: Envelope = serde_json::from_value(body)
        .map_err(|e| Error::malformed("graphql response", e.to_string()))?;

    if let Some(first) = envelope.errors.first() {
        let message = if envelope.errors.len() > 1 {
            format!("{} (+{} more)", first.message, envelope.errors.len() - 1)
        } else {
            first.message.clone()
        };
        let error = ProtocolError::new(200, Some("GraphQLError".to_string()), Some(message));
        return Err(error.into());
    }

    match envelope.data {
        Some(Value::Null) | None => Err(Error::malformed("graphql response", "missing `data`")),
        Some(data) => Ok(data),
    }
}
