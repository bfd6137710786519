//! API error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use leadline_contact::FieldError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Contact payload failed validation
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// Notification email could not be rendered or delivered
    #[error("Email delivery failed: {0}")]
    EmailDelivery(String),

    /// A required integration credential is absent
    #[error("{0}")]
    NotConfigured(&'static str),

    /// The business listing returned no result
    #[error("No business data found")]
    BusinessNotFound,

    /// The Places API call failed
    #[error("Failed to fetch business data: {0}")]
    BusinessUpstream(String),
}

impl From<leadline_contact::ContactError> for ApiError {
    fn from(err: leadline_contact::ContactError) -> Self {
        ApiError::EmailDelivery(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "success": false,
                    "error": "Validation failed",
                    "details": details,
                }),
            ),
            ApiError::EmailDelivery(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "success": false,
                    "error": "Failed to send message. Please try again or email us directly.",
                    "message": message,
                }),
            ),
            ApiError::NotConfigured(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": message }),
            ),
            ApiError::BusinessNotFound => (
                StatusCode::NOT_FOUND,
                json!({ "error": "No business data found" }),
            ),
            ApiError::BusinessUpstream(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Failed to fetch business data",
                    "fallback": true,
                    "message": message,
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
