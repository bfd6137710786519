//! Request logging middleware

use std::time::{Duration, Instant};

use axum::{
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};

/// Duration above which a request is flagged as slow
///
/// The contact and business handlers proxy to Resend and the Places API,
/// so an entry over this threshold usually points at a slow upstream, not
/// local work.
const SLOW_REQUEST: Duration = Duration::from_millis(100);

/// Log method, path, status, and duration for every request
pub async fn logging_middleware(
    request: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let start = Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed();

    if duration > SLOW_REQUEST {
        tracing::warn!("Slow request: {} {} took {:?}", method, uri, duration);
    }

    tracing::info!(
        "{} {} -> {} in {}ms",
        method,
        uri,
        response.status(),
        duration.as_millis()
    );

    Ok(response)
}
