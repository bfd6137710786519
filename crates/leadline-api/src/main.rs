//! Leadline API server binary

use tracing_subscriber::EnvFilter;

use leadline_api::{ApiServer, AppState};
use leadline_config::SiteConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SiteConfig::load()?;
    let host = config.server.host.clone();
    let port = config.server.port;

    let state = AppState::from_config(config)?;
    ApiServer::new(state, &host, port).run().await
}
