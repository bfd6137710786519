//! API request and response models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use leadline_contact::ContactRequest;

/// Inbound contact-form payload
///
/// Every field arrives as a raw string; validation happens after
/// deserialization so a bad enum value yields a field-level error
/// instead of a 422.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ContactFormBody {
    /// Visitor name
    #[serde(default)]
    pub name: String,
    /// Visitor email, used as the reply-to address
    #[serde(default)]
    pub email: String,
    /// Optional phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Optional company name
    #[serde(default)]
    pub company: Option<String>,
    /// Requested service (kebab-case)
    #[serde(default)]
    pub service: String,
    /// Free-form message
    #[serde(default)]
    pub message: String,
    /// Optional budget range
    #[serde(default)]
    pub budget: Option<String>,
    /// Anti-spam field; humans never fill it
    #[serde(default)]
    pub honeypot: Option<String>,
}

impl From<ContactFormBody> for ContactRequest {
    fn from(body: ContactFormBody) -> Self {
        ContactRequest {
            name: body.name,
            email: body.email,
            phone: body.phone,
            company: body.company,
            service: body.service,
            message: body.message,
            budget: body.budget,
            honeypot: body.honeypot,
        }
    }
}

/// Accepted contact submission
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContactAccepted {
    /// Always true
    pub success: bool,
    /// Human-readable confirmation
    pub message: String,
    /// Set to `development` when the email relay is not configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl ContactAccepted {
    /// Response for a relayed submission
    pub fn sent() -> Self {
        Self {
            success: true,
            message: "Thank you! We will get back to you within 24 hours.".to_string(),
            mode: None,
        }
    }

    /// Response for the no-credential degraded path
    pub fn development() -> Self {
        Self {
            success: true,
            message: "Contact form submitted successfully (email not configured)".to_string(),
            mode: Some("development".to_string()),
        }
    }
}

/// Rejected contact submission (docs only; built by the error type)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContactRejected {
    /// Always false
    pub success: bool,
    /// Always "Validation failed"
    pub error: String,
    /// One entry per violated field
    pub details: Vec<ValidationDetail>,
}

/// A single field-level validation error
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationDetail {
    /// Offending field name
    pub field: String,
    /// Human-readable message
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Crate version
    pub version: String,
    /// Seconds since startup
    pub uptime: u64,
    /// Whether the email relay credential is present
    pub email_configured: bool,
    /// Whether the business-data proxy is configured
    pub business_configured: bool,
    /// Number of configured analytics sinks
    pub analytics_sinks: usize,
}
