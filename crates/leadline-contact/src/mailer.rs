//! Email delivery through the Resend API

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::error::{ContactError, Result};

const DEFAULT_ENDPOINT: &str = "https://api.resend.com/emails";

/// An outbound notification email
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
}

/// Provider acknowledgement of an accepted send
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendReceipt {
    /// Provider-assigned message id
    pub id: Option<String>,
}

/// Mockable email delivery trait
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send one email, returning the provider receipt
    async fn send(&self, email: &OutboundEmail) -> Result<SendReceipt>;
}

/// Production mailer backed by the Resend HTTP API
pub struct ResendMailer {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl ResendMailer {
    /// Create a mailer with the given API key
    pub fn new(api_key: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ContactError::BuildError(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Override the API endpoint (tests)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<SendReceipt> {
        debug!("Sending notification email to {}", email.to);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "from": email.from,
                "to": email.to,
                "reply_to": email.reply_to,
                "subject": email.subject,
                "html": email.html,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ContactError::Provider { status, message });
        }

        Ok(response.json().await.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn email() -> OutboundEmail {
        OutboundEmail {
            from: "Site <noreply@example.com>".to_string(),
            to: "sales@example.com".to_string(),
            reply_to: Some("visitor@example.com".to_string()),
            subject: "New Contact Form: other - Test".to_string(),
            html: "<p>hi</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_success_returns_receipt() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(header("authorization", "Bearer re_test"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "id": "msg_123" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mailer = ResendMailer::new("re_test")
            .unwrap()
            .with_endpoint(format!("{}/emails", server.uri()));

        let receipt = mailer.send(&email()).await.unwrap();
        assert_eq!(receipt.id.as_deref(), Some("msg_123"));
    }

    #[tokio::test]
    async fn test_provider_error_surfaces_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_string("invalid from address"))
            .mount(&server)
            .await;

        let mailer = ResendMailer::new("re_test")
            .unwrap()
            .with_endpoint(format!("{}/emails", server.uri()));

        let err = mailer.send(&email()).await.unwrap_err();
        match err {
            ContactError::Provider { status, message } => {
                assert_eq!(status.as_u16(), 422);
                assert_eq!(message, "invalid from address");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
