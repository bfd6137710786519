//! Site configuration types and loading

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Top-level site configuration
///
/// Loaded from an optional `leadline.toml` file overridden by `LEADLINE_*`
/// environment variables (section and key joined with `__`, e.g.
/// `LEADLINE_EMAIL__RESEND_API_KEY`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Contact-form email relay
    #[serde(default)]
    pub email: EmailConfig,
    /// Google business profile lookup
    #[serde(default)]
    pub business: BusinessConfig,
    /// Analytics sink credentials
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    /// Optional third-party embeds
    #[serde(default)]
    pub integrations: IntegrationsConfig,
    /// HTTP server binding
    #[serde(default)]
    pub server: ServerConfig,
}

/// Email relay configuration (Resend)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Resend API key; absent means log-and-succeed development mode
    #[serde(default)]
    pub resend_api_key: Option<String>,

    /// Destination address for contact-form notifications
    #[serde(default = "default_contact_email")]
    pub contact_email: String,

    /// From header for outbound notifications
    #[serde(default = "default_from_address")]
    pub from_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            resend_api_key: None,
            contact_email: default_contact_email(),
            from_address: default_from_address(),
        }
    }
}

impl EmailConfig {
    /// Whether an email provider credential is present
    pub fn is_configured(&self) -> bool {
        self.resend_api_key.is_some()
    }
}

/// Google Places business-data configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BusinessConfig {
    /// Google Place ID of the business listing
    #[serde(default)]
    pub google_place_id: Option<String>,

    /// Server-side Maps API key
    #[serde(default)]
    pub maps_api_key: Option<String>,

    /// Public (browser) Maps API key, used as a fallback for server calls
    #[serde(default)]
    pub public_maps_api_key: Option<String>,
}

impl BusinessConfig {
    /// Effective API key: server key preferred over the public one
    pub fn effective_api_key(&self) -> Option<&str> {
        self.maps_api_key
            .as_deref()
            .or(self.public_maps_api_key.as_deref())
    }

    /// Whether both a place id and an API key are present
    pub fn is_configured(&self) -> bool {
        self.google_place_id.is_some() && self.effective_api_key().is_some()
    }
}

/// Analytics sink credentials; each sink is independently optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// GA4 measurement id (`G-XXXXXXX`)
    #[serde(default)]
    pub ga4_measurement_id: Option<String>,
    /// GA4 Measurement Protocol API secret
    #[serde(default)]
    pub ga4_api_secret: Option<String>,
    /// Meta Pixel id
    #[serde(default)]
    pub meta_pixel_id: Option<String>,
    /// Meta Conversions API access token
    #[serde(default)]
    pub meta_access_token: Option<String>,
    /// Microsoft Clarity project id (embed-only, no server-side ingestion)
    #[serde(default)]
    pub clarity_project_id: Option<String>,
}

impl AnalyticsConfig {
    /// Whether the GA4 Measurement Protocol sink can be constructed
    pub fn ga4_configured(&self) -> bool {
        self.ga4_measurement_id.is_some() && self.ga4_api_secret.is_some()
    }

    /// Whether the Meta Conversions API sink can be constructed
    pub fn meta_configured(&self) -> bool {
        self.meta_pixel_id.is_some() && self.meta_access_token.is_some()
    }
}

/// Capability-gated third-party embeds
///
/// Only presence/absence matters here: an unconfigured embed renders nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntegrationsConfig {
    /// Tawk.to live-chat property id
    #[serde(default)]
    pub tawk_property_id: Option<String>,
    /// Tawk.to widget id
    #[serde(default)]
    pub tawk_widget_id: Option<String>,
    /// Cal.com scheduling link identifier
    #[serde(default)]
    pub calcom_link: Option<String>,
}

impl IntegrationsConfig {
    /// Whether the live-chat widget is configured
    pub fn chat_configured(&self) -> bool {
        self.tawk_property_id.is_some() && self.tawk_widget_id.is_some()
    }

    /// Whether the scheduling embed is configured
    pub fn scheduling_configured(&self) -> bool {
        self.calcom_link.is_some()
    }
}

/// HTTP server binding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from `leadline.toml` (optional) and environment
    pub fn load() -> Result<Self> {
        // .env is a development convenience; missing file is fine
        let _ = dotenv::dotenv();

        let builder = Config::builder()
            .add_source(File::with_name("leadline").required(false))
            .add_source(Environment::with_prefix("LEADLINE").separator("__"));

        let config = builder.build()?;
        let site: SiteConfig = config.try_deserialize()?;
        site.validate()?;
        Ok(site)
    }

    /// Validate loaded values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "Server port cannot be 0".to_string(),
            ));
        }
        Ok(())
    }
}

// Default value functions for serde
fn default_contact_email() -> String {
    "sales@shadowmarket.ai".to_string()
}

fn default_from_address() -> String {
    "SHADOW MARKET Website <noreply@shadowmarket.ai>".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}
