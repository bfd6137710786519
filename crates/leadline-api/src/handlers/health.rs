//! Health check endpoint

use axum::{extract::State, Json};

use crate::{models::HealthResponse, state::AppState};

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.uptime_seconds(),
        email_configured: state.mailer.is_some(),
        business_configured: state.config.business.is_configured(),
        analytics_sinks: state.sinks.len(),
    })
}
