//! Application state for the API server

use std::sync::Arc;

use tracing::{info, warn};

use leadline_analytics::SinkSet;
use leadline_business::{GooglePlacesClient, PlacesClient};
use leadline_config::SiteConfig;
use leadline_contact::{Mailer, ResendMailer};

/// Application state shared across all API handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded site configuration
    pub config: Arc<SiteConfig>,
    /// Email relay; `None` means the development degraded path
    pub mailer: Option<Arc<dyn Mailer>>,
    /// Places client; `None` when no Maps API key is configured
    pub places: Option<Arc<dyn PlacesClient>>,
    /// Analytics fan-out
    pub sinks: SinkSet,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Build state from configuration, skipping unconfigured integrations
    pub fn from_config(config: SiteConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let mailer: Option<Arc<dyn Mailer>> = match config.email.resend_api_key.as_deref() {
            Some(key) => {
                info!("Email relay configured");
                Some(Arc::new(ResendMailer::new(key)?))
            }
            None => {
                warn!("No Resend API key; contact form runs in development mode");
                None
            }
        };

        let places: Option<Arc<dyn PlacesClient>> = match config.business.effective_api_key() {
            Some(key) => Some(Arc::new(GooglePlacesClient::new(key)?)),
            None => {
                warn!("No Maps API key; business endpoint will report unconfigured");
                None
            }
        };

        let sinks = SinkSet::from_config(&config.analytics);
        info!("{} analytics sink(s) configured", sinks.len());

        Ok(Self {
            config: Arc::new(config),
            mailer,
            places,
            sinks,
            start_time: std::time::Instant::now(),
        })
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
