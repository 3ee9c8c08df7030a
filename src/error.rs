//! Error types for the Library Manager client

use thiserror::Error;

/// Main client error type
///
/// Nothing in this taxonomy is fatal: every variant carries a message that is
/// fit to surface to the user as a recoverable notification.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Client-side precondition failure. Never reaches the network.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Authentication failure confirmed by the backend (HTTP 401).
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Lookup miss (HTTP 404). Callers may render this as an empty state.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-2xx response or transport-level failure.
    #[error("Request failed: {0}")]
    Request(String),

    /// A 2xx response whose body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Request(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

impl ClientError {
    /// True when the error should be rendered as an empty/placeholder state
    /// rather than a failure banner.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
