//! Contact-form submission endpoint

use axum::{extract::State, Json};
use tracing::info;

use leadline_analytics::AnalyticsEvent;
use leadline_contact::{notification_email, ContactRequest};

use crate::{
    error::{ApiError, ApiResult},
    models::{ContactAccepted, ContactFormBody},
    state::AppState,
};

/// Validate and relay a contact-form submission
///
/// Without a configured email relay the submission is logged and accepted,
/// so a missing credential never loses a lead.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactFormBody,
    responses(
        (status = 200, description = "Submission accepted", body = ContactAccepted),
        (status = 400, description = "Validation failed", body = crate::models::ContactRejected),
        (status = 500, description = "Email delivery failed")
    )
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(body): Json<ContactFormBody>,
) -> ApiResult<Json<ContactAccepted>> {
    let request: ContactRequest = body.into();
    let submission = request.validate().map_err(ApiError::Validation)?;

    let response = match &state.mailer {
        Some(mailer) => {
            let email = notification_email(
                &state.config.email.from_address,
                &state.config.email.contact_email,
                &submission,
            )?;
            let receipt = mailer.send(&email).await?;
            info!(
                "Contact submission from {} relayed (message id: {})",
                submission.email,
                receipt.id.as_deref().unwrap_or("unknown"),
            );
            ContactAccepted::sent()
        }
        None => {
            info!(
                "Contact submission (email not configured): {} <{}> service={} message={:?}",
                submission.name,
                submission.email,
                submission.service.as_str(),
                submission.message,
            );
            ContactAccepted::development()
        }
    };

    state
        .sinks
        .dispatch(&AnalyticsEvent::FormSubmit {
            form: "contact_form".to_string(),
            success: true,
        })
        .await;

    Ok(Json(response))
}
