//! GA4 Measurement Protocol sink

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::{
    error::{Result, SinkError},
    event::AnalyticsEvent,
    sink::AnalyticsSink,
};

const DEFAULT_ENDPOINT: &str = "https://www.google-analytics.com/mp/collect";

/// Google Analytics 4 sink (Measurement Protocol)
pub struct Ga4Sink {
    client: reqwest::Client,
    measurement_id: String,
    api_secret: String,
    /// Stable per-process client id required by the Measurement Protocol
    client_id: String,
    endpoint: String,
}

impl Ga4Sink {
    /// Create a sink for the given measurement id and API secret
    pub fn new(measurement_id: &str, api_secret: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| SinkError::BuildError(e.to_string()))?;

        Ok(Self {
            client,
            measurement_id: measurement_id.to_string(),
            api_secret: api_secret.to_string(),
            client_id: uuid::Uuid::new_v4().to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Override the collection endpoint (tests)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Map an event onto its GA4 name and params
    fn ga4_event(event: &AnalyticsEvent) -> (&'static str, Value) {
        match event {
            AnalyticsEvent::PageView { path } => ("page_view", json!({ "page_location": path })),
            AnalyticsEvent::ScrollDepth { percent } => {
                ("scroll", json!({ "percent_scrolled": percent }))
            }
            AnalyticsEvent::TimeOnPage { seconds } => (
                "engagement",
                json!({ "engagement_type": "time_on_page", "engagement_value": seconds }),
            ),
            AnalyticsEvent::FormStart { form, location } => (
                "form_start",
                json!({ "form_name": form, "form_location": location }),
            ),
            AnalyticsEvent::FormSubmit { form, success } => (
                "form_submit",
                json!({ "form_name": form, "success": success }),
            ),
            AnalyticsEvent::Lead {
                value,
                method,
                source,
            } => (
                "generate_lead",
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
                "cta_click",
                json!({
                    "cta_text": text,
                    "cta_location": location,
                    "cta_destination": destination,
                }),
            ),
        }
    }

    fn payload(&self, event: &AnalyticsEvent) -> Value {
        let (name, params) = Self::ga4_event(event);
        json!({
            "client_id": self.client_id,
            "events": [{ "name": name, "params": params }],
        })
    }
}

#[async_trait]
impl AnalyticsSink for Ga4Sink {
    fn name(&self) -> &str {
        "ga4"
    }

    async fn send(&self, event: &AnalyticsEvent) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[
                ("measurement_id", self.measurement_id.as_str()),
                ("api_secret", self.api_secret.as_str()),
            ])
            .json(&self.payload(event))
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
