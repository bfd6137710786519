//! Leadline Engagement Tracking
//!
//! Session-scoped engagement heuristics for the marketing site: scroll-depth
//! and time-on-page milestone tracking with per-page-view deduplication, an
//! exit-intent popup state machine, the sticky CTA bar, and rotating trust
//! signals. All trackers are plain state machines that return the analytics
//! events they produce; delivery goes through `leadline-analytics` sinks and
//! is always best-effort.

pub mod driver;
pub mod exit_intent;
pub mod sticky;
pub mod tracker;
pub mod trust;

pub use driver::EngagementDriver;
pub use exit_intent::{ExitIntentSession, ExitIntentState, LeadCapture, NoopLeadCapture, PopupForm};
pub use sticky::{CtaLayout, StickyCtaBar};
pub use tracker::{EngagementTracker, SCROLL_DEPTHS, TIME_MILESTONES};
pub use trust::{RecentConversion, TrustSignals};
