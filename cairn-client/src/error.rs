//! Error types for the catalogue client.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur when talking to the catalogue API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure before a response was received. Propagated from the
    /// transport untouched.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status. The display form is
    /// the raw response body, which is all the API guarantees on failure.
    #[error("{body}")]
    Request { status: StatusCode, body: String },

    /// The response parsed as JSON but lacks fields a helper requires.
    #[error("unexpected response shape: {0}")]
    Shape(String),

    /// GraphQL-level errors, surfaced only by the opt-in strict helpers.
    #[error("GraphQL errors: {0}")]
    Graphql(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Missing or invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// The HTTP status of a [`ClientError::Request`], if that is what
    /// this is.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}
