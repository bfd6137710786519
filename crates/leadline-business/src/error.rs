//! Business-data error types

use thiserror::Error;

/// Result type for business-data operations
pub type Result<T> = std::result::Result<T, BusinessError>;

/// Business-data proxy errors
#[derive(Debug, Error)]
pub enum BusinessError {
    /// Network request failed
    #[error("Network request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Places API returned a non-success HTTP status
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        status: reqwest::StatusCode,
        message: String,
    },

    /// Places API answered with a non-OK application status
    #[error("Places API status {status}: {message}")]
    Upstream { status: String, message: String },

    /// Failed to build the HTTP client
    #[error("Failed to build HTTP client: {0}")]
    BuildError(String),
}
