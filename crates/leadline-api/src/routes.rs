//! API route definitions

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    handlers::{business, contact, health},
    middleware::logging::logging_middleware,
    state::AppState,
};

/// API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Contact form
        .route("/api/contact", post(contact::submit_contact))
        // Business data
        .route("/api/business", get(business::business_data))
        .layer(axum::middleware::from_fn(logging_middleware))
        // CORS
        .layer(CorsLayer::permissive())
}

/// Swagger UI routes
pub fn swagger_routes() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Combined routes
pub fn all_routes() -> Router<AppState> {
    api_routes().merge(swagger_routes())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        contact::submit_contact,
        business::business_data,
    ),
    components(schemas(
        crate::models::ContactFormBody,
        crate::models::ContactAccepted,
        crate::models::ContactRejected,
        crate::models::ValidationDetail,
        crate::models::HealthResponse,
    )),
    info(
        title = "Leadline API",
        version = "1.0.0",
        description = "Marketing-site backend: contact relay, business data, health"
    )
)]
struct ApiDoc;
