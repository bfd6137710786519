//! HTTP server lifecycle

use tracing::info;

use crate::{routes, state::AppState};

/// API server wrapping an axum router and a bind address
pub struct ApiServer {
    state: AppState,
    host: String,
    port: u16,
}

impl ApiServer {
    /// Create a server for the given state and bind address
    pub fn new(state: AppState, host: &str, port: u16) -> Self {
        Self {
            state,
            host: host.to_string(),
            port,
        }
    }

    /// Bind and serve until the process is stopped
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let app = routes::all_routes().with_state(self.state);
        let listener = tokio::net::TcpListener::bind((self.host.as_str(), self.port)).await?;
        info!("Listening on {}:{}", self.host, self.port);
        axum::serve(listener, app).await?;
        Ok(())
    }
}
