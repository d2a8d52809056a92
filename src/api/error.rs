//! Error types for image search requests.
//!
//! The search controller does not distinguish between these variants;
//! it only shows the message. The variants exist for logging and tests.

use thiserror::Error;

/// Longest upstream error body carried into a message.
const MAX_BODY_CHARS: usize = 200;

/// Errors that can occur while fetching a page of results.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No API key configured
    #[error("Pixabay API key is missing: {reason}")]
    MissingApiKey { reason: String },

    /// Request could not be built (bad base URL, etc.)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Failed to reach the API
    #[error("Connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded total timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// API answered with a non-success status
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// Body was not the expected JSON
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Build a `Status` error from an upstream body, trimming it to a
    /// displayable length.
    pub fn status(status: u16, body: &str) -> Self {
        let body = body.trim();
        let message = if body.is_empty() {
            "no details".to_string()
        } else {
            body.chars().take(MAX_BODY_CHARS).collect()
        };
        FetchError::Status { status, message }
    }

    /// Get error type string for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            FetchError::MissingApiKey { .. } => "missing_api_key",
            FetchError::InvalidRequest(_) => "invalid_request",
            FetchError::Connection { .. } => "connection_error",
            FetchError::Timeout { .. } => "timeout",
            FetchError::Status { .. } => "status_error",
            FetchError::Decode(_) => "decode_error",
        }
    }
}
