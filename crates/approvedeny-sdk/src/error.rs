//! Error types for Approvedeny SDK operations.
//!
//! Every fallible operation in this crate returns [`Error`]. Variants map
//! one-to-one onto the stages of the request pipeline, plus the remote
//! error shape returned by the API itself.

use thiserror::Error;

/// Result type alias used throughout the SDK.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the Approvedeny client and its request pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The client was constructed with invalid settings (non-retryable).
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// The request payload could not be serialized to JSON (non-retryable).
    #[error("Failed to encode request payload: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The HTTP request could not be sent (network or TLS failure).
    #[error("Failed to send request: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be read from the connection.
    #[error("Failed to read response body: {0}")]
    Io(#[source] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("Failed to decode response body: {0}")]
    Decoding(#[source] serde_json::Error),

    /// The API answered with a non-200 status.
    ///
    /// Carries the server's `message` field verbatim with no added context
    /// and no status code. Callers that need per-status handling have to
    /// match on the message text; the API does not expose more.
    #[error("{message}")]
    Remote { message: String },
}

impl Error {
    /// Create a configuration error.
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Check if this error represents a transient condition that may succeed
    /// if retried.
    ///
    /// The SDK itself never retries; this classification is advisory for
    /// callers that wrap operations in their own retry policy. Transport and
    /// body-read failures are transient; everything else (bad configuration,
    /// malformed payloads or responses, remote rejections) is not.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Configuration { .. } => false,
            Self::Encoding(_) => false,
            Self::Transport(_) => true,
            Self::Io(_) => true,
            Self::Decoding(_) => false,
            Self::Remote { .. } => false,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
