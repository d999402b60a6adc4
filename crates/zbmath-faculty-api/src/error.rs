//! Error types for the zbMATH client layer.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations. These errors stay internal to the fetch pipeline: the
//! client's public search methods collapse them to empty result sets, so the
//! distinction between "call failed" and "zero results" is only visible
//! through the `try_` variants.

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the API.
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// Response body parsed as JSON but did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ClientError {
    /// Create an unexpected-status error.
    #[must_use]
    pub fn unexpected_status(status: u16, message: impl Into<String>) -> Self {
        Self::UnexpectedStatus { status, message: message.into() }
    }

    /// Returns true if this error is a request timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(err) if err.is_timeout())
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
