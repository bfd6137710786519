//! Business-data proxy endpoint

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

const CACHE_CONTROL: &str = "public, s-maxage=3600, stale-while-revalidate=7200";

/// Fetch the business's Google Places listing
///
/// Misconfiguration and upstream failures return distinct error shapes so
/// the widgets can decide to render the fallback dataset.
#[utoipa::path(
    get,
    path = "/api/business",
    responses(
        (status = 200, description = "Place details", body = serde_json::Value),
        (status = 404, description = "No business data found"),
        (status = 500, description = "Unconfigured or upstream failure")
    )
)]
pub async fn business_data(State(state): State<AppState>) -> ApiResult<Response> {
    let place_id = state
        .config
        .business
        .google_place_id
        .as_deref()
        .ok_or(ApiError::NotConfigured("Google Place ID not configured"))?;

    let places = state
        .places
        .as_ref()
        .ok_or(ApiError::NotConfigured("Google Maps API key not configured"))?;

    match places.place_details(place_id).await {
        Ok(Some(details)) => {
            let mut response = Json(details).into_response();
            response.headers_mut().insert(
                header::CACHE_CONTROL,
                HeaderValue::from_static(CACHE_CONTROL),
            );
            Ok(response)
        }
        Ok(None) => Err(ApiError::BusinessNotFound),
        Err(e) => {
            warn!("Places lookup failed: {}", e);
            Err(ApiError::BusinessUpstream(e.to_string()))
        }
    }
}
