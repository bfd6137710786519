//! Meta Pixel sink (Conversions API)

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::{
    error::{Result, SinkError},
    event::AnalyticsEvent,
    sink::AnalyticsSink,
};

const DEFAULT_ENDPOINT: &str = "https://graph.facebook.com/v18.0";

/// Meta (Facebook) Pixel sink via the server-side Conversions API
pub struct MetaPixelSink {
    client: reqwest::Client,
    pixel_id: String,
    access_token: String,
    endpoint: String,
}

impl MetaPixelSink {
    /// Create a sink for the given pixel id and access token
    pub fn new(pixel_id: &str, access_token: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| SinkError::BuildError(e.to_string()))?;

        Ok(Self {
            client,
            pixel_id: pixel_id.to_string(),
            access_token: access_token.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Override the Graph API endpoint (tests)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Map an event onto its Meta event name and custom data
    fn meta_event(event: &AnalyticsEvent) -> (&'static str, Value) {
        match event {
            AnalyticsEvent::PageView { path } => ("PageView", json!({ "path": path })),
            AnalyticsEvent::ScrollDepth { percent } => {
                ("ScrollDepth", json!({ "percent": percent }))
            }
            AnalyticsEvent::TimeOnPage { seconds } => ("TimeOnPage", json!({ "seconds": seconds })),
            AnalyticsEvent::FormStart { form, location } => (
                "FormStart",
                json!({ "form_name": form, "form_location": location }),
            ),
            AnalyticsEvent::FormSubmit { form, success } => (
                "Contact",
                json!({ "form_name": form, "success": success }),
            ),
            AnalyticsEvent::Lead {
                value,
                method,
                source,
            } => (
                "Lead",
                json!({
                    "currency": "INR",
                    "value": value,
                    "method": method,
                    "lead_source": source,
                }),
            ),
            AnalyticsEvent::CtaClick {
                text,
                location,
                destination,
            } => (
                "CTAClick",
                json!({
                    "cta_text": text,
                    "cta_location": location,
                    "cta_destination": destination,
                }),
            ),
        }
    }

    fn payload(event: &AnalyticsEvent) -> Value {
        let (name, custom_data) = Self::meta_event(event);
        json!({
            "data": [{
                "event_name": name,
                "event_time": chrono::Utc::now().timestamp(),
                "action_source": "website",
                "custom_data": custom_data,
            }],
        })
    }
}

#[async_trait]
impl AnalyticsSink for MetaPixelSink {
    fn name(&self) -> &str {
        "meta_pixel"
    }

    async fn send(&self, event: &AnalyticsEvent) -> Result<()> {
        let url = format!("{}/{}/events", self.endpoint, self.pixel_id);
        let response = self
            .client
            .post(&url)
            .query(&[("access_token", self.access_token.as_str())])
            .json(&Self::payload(event))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SinkError::HttpStatus {
                status: response.status(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_scroll_event_uses_custom_name() {
        let (name, data) = MetaPixelSink::meta_event(&AnalyticsEvent::ScrollDepth { percent: 50 });
        assert_eq!(name, "ScrollDepth");
        assert_eq!(data["percent"], 50);
    }

    #[test]
    fn test_lead_event_uses_standard_name() {
        let event = AnalyticsEvent::Lead {
            value: 500,
            method: "exit_intent_popup".to_string(),
            source: "website_exit_intent".to_string(),
        };
        let (name, data) = MetaPixelSink::meta_event(&event);
        assert_eq!(name, "Lead");
        assert_eq!(data["value"], 500);
    }

    #[test]
    fn test_payload_shape() {
        let payload = MetaPixelSink::payload(&AnalyticsEvent::TimeOnPage { seconds: 60 });
        let entry = &payload["data"][0];
        assert_eq!(entry["event_name"], "TimeOnPage");
        assert_eq!(entry["action_source"], "website");
        assert!(entry["event_time"].is_i64());
    }

    #[tokio::test]
    async fn test_send_posts_to_pixel_events_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/12345/events"))
            .and(query_param("access_token", "token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "events_received": 1 })))
            .expect(1)
            .mount(&server)
            .await;

        let sink = MetaPixelSink::new("12345", "token")
            .unwrap()
            .with_endpoint(server.uri());

        let result = sink.send(&AnalyticsEvent::PageView { path: "/".to_string() }).await;
        assert!(result.is_ok());
    }
}
