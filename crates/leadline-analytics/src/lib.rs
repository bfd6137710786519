//! Leadline Analytics Sinks
//!
//! Event model and pluggable delivery sinks for the site's analytics
//! beacons. Sinks are fire-and-forget: delivery failures are logged and
//! swallowed so tracking can never break the surrounding request flow.
//! Call sites talk to a [`SinkSet`] and stay unchanged when sinks are
//! added or removed.

pub mod error;
pub mod event;
pub mod ga4;
pub mod meta_pixel;
pub mod sink;

pub use error::{Result, SinkError};
pub use event::AnalyticsEvent;
pub use ga4::Ga4Sink;
pub use meta_pixel::MetaPixelSink;
pub use sink::{AnalyticsSink, RecordingSink, SinkSet, TracingSink};
