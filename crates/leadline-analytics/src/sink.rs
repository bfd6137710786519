//! Sink trait and fan-out dispatcher

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::{
    error::Result,
    event::AnalyticsEvent,
    ga4::Ga4Sink,
    meta_pixel::MetaPixelSink,
};
use leadline_config::AnalyticsConfig;

/// A destination for analytics events
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    /// Sink name used in logs
    fn name(&self) -> &str;

    /// Deliver a single event
    async fn send(&self, event: &AnalyticsEvent) -> Result<()>;
}

/// Ordered set of sinks invoked uniformly for every event
///
/// Dispatch is best-effort: a failing sink is logged at `warn` and the rest
/// of the set still runs. Errors never propagate to the caller.
#[derive(Clone, Default)]
pub struct SinkSet {
    sinks: Vec<Arc<dyn AnalyticsSink>>,
}

impl SinkSet {
    /// Create an empty sink set
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble sinks from configuration; unconfigured sinks are skipped
    pub fn from_config(config: &AnalyticsConfig) -> Self {
        let mut set = Self::new();

        if let (Some(id), Some(secret)) = (
            config.ga4_measurement_id.as_deref(),
            config.ga4_api_secret.as_deref(),
        ) {
            match Ga4Sink::new(id, secret) {
                Ok(sink) => set.push(Arc::new(sink)),
                Err(e) => warn!("Skipping GA4 sink: {}", e),
            }
        }

        if let (Some(pixel), Some(token)) = (
            config.meta_pixel_id.as_deref(),
            config.meta_access_token.as_deref(),
        ) {
            match MetaPixelSink::new(pixel, token) {
                Ok(sink) => set.push(Arc::new(sink)),
                Err(e) => warn!("Skipping Meta Pixel sink: {}", e),
            }
        }

        set
    }

    /// Add a sink to the end of the set
    pub fn push(&mut self, sink: Arc<dyn AnalyticsSink>) {
        self.sinks.push(sink);
    }

    /// Number of configured sinks
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Whether no sink is configured
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Deliver one event to every sink in order, swallowing failures
    pub async fn dispatch(&self, event: &AnalyticsEvent) {
        for sink in &self.sinks {
            match sink.send(event).await {
                Ok(()) => debug!("Sent {} event to {}", event.kind(), sink.name()),
                Err(e) => warn!("Failed to send {} event to {}: {}", event.kind(), sink.name(), e),
            }
        }
    }

    /// Deliver a batch of events in order
    pub async fn dispatch_all(&self, events: &[AnalyticsEvent]) {
        for event in events {
            self.dispatch(event).await;
        }
    }
}

/// Sink that writes events to the log
///
/// Used in development when no provider credential is configured, so event
/// flow stays observable.
#[derive(Default)]
pub struct TracingSink;

#[async_trait]
impl AnalyticsSink for TracingSink {
    fn name(&self) -> &str {
        "tracing"
    }

    async fn send(&self, event: &AnalyticsEvent) -> Result<()> {
        debug!("Analytics event: {:?}", event);
        Ok(())
    }
}

/// In-memory sink that records every event it receives
///
/// Intended for tests asserting on emitted event sequences.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl RecordingSink {
    /// Create an empty recording sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().clone()
    }
}

#[async_trait]
impl AnalyticsSink for RecordingSink {
    fn name(&self) -> &str {
        "recording"
    }

    async fn send(&self, event: &AnalyticsEvent) -> Result<()> {
        self.events.lock().push(event.clone());
        Ok(())
    }
}
