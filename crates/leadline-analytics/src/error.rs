//! Analytics sink error types

use thiserror::Error;

/// Result type for sink operations
pub type Result<T> = std::result::Result<T, SinkError>;

/// Analytics delivery errors
///
/// These never escape the dispatcher; they exist so individual sinks can
/// report what went wrong to the log.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Network request failed
    #[error("Network request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Beacon endpoint rejected the payload
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        status: reqwest::StatusCode,
        message: String,
    },

    /// Failed to build the HTTP client
    #[error("Failed to build HTTP client: {0}")]
    BuildError(String),
}
