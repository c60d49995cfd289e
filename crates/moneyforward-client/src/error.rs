//! Error types for the MoneyForward client.

use thiserror::Error;


/// Client error types.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP transport failed (connection, DNS, timeout).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid base URL or request path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A header override could not be turned into an HTTP header.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Query parameters could not be encoded.
    #[error("Query encoding failed: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// API returned a non-200 response.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Response body did not match the expected shape.
    #[error("Failed to decode response: {source}")]
    Decode {
        /// Underlying JSON error.
        source: serde_json::Error,
        /// Raw response body.
        body: String,
    },

    /// Identifier was neither a JSON string nor a JSON integer.
    ///
    /// Produced when a [`SchemaError`] from
    /// [`StringId::from_json`](crate::StringId::from_json) is propagated with
    /// `?`. A bad identifier inside a response body surfaces as
    /// [`Error::Decode`] instead, with the schema message in its source.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl Error {
    /// Returns the HTTP status for API errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body carried by API and decode errors.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } | Self::Decode { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// A [`StringId`](crate::StringId) value that was neither a string nor an integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("value must be string or number, got {raw}")]
pub struct SchemaError {
    /// The JSON text that could not be interpreted.
    pub raw: String,
}
