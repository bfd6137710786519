//! Leadline Site Configuration
//!
//! Environment-driven configuration for the marketing-site backend. Every
//! third-party credential is optional: a missing credential degrades the
//! owning feature (email falls back to log-and-succeed, business data to the
//! fallback dataset, analytics sinks to a no-op) instead of failing startup.

pub mod error;
pub mod types;

pub use error::{ConfigError, Result};
pub use types::{
    AnalyticsConfig, BusinessConfig, EmailConfig, IntegrationsConfig, ServerConfig, SiteConfig,
};
