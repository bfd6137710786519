//! Contact pipeline error types

use thiserror::Error;

/// Result type for contact operations
pub type Result<T> = std::result::Result<T, ContactError>;

/// Contact notification errors
#[derive(Debug, Error)]
pub enum ContactError {
    /// Network request to the email provider failed
    #[error("Network request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Email provider rejected the send
    #[error("Email provider error ({status}): {message}")]
    Provider {
        status: reqwest::StatusCode,
        message: String,
    },

    /// Notification template failed to render
    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),

    /// Failed to build the HTTP client
    #[error("Failed to build HTTP client: {0}")]
    BuildError(String),
}
