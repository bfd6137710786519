//! Scroll-depth and time-on-page milestone tracking
//!
//! Each milestone fires at most once per page view. The dedup sets are
//! cleared on navigation, and the unload beacon deliberately bypasses the
//! time dedup set: it is a best-effort final reading, not a milestone.

use std::collections::BTreeSet;

use leadline_analytics::AnalyticsEvent;

/// Scroll-depth milestones, percent of the page, ascending
pub const SCROLL_DEPTHS: [u8; 4] = [25, 50, 75, 100];

/// Time-on-page milestones in seconds, ascending
pub const TIME_MILESTONES: [u64; 4] = [30, 60, 120, 300];

/// Minimum dwell before the unload beacon is worth sending
pub const MIN_DWELL_SECS: u64 = 10;

/// Per-page-view engagement state
///
/// Pure state machine: callers feed it observations and dispatch whatever
/// events come back. This keeps the dedup logic testable without a browser
/// or a clock.
#[derive(Debug, Default)]
pub struct EngagementTracker {
    path: String,
    scroll_recorded: BTreeSet<u8>,
    time_recorded: BTreeSet<u64>,
}

impl EngagementTracker {
    /// Create a tracker for the given path
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            scroll_recorded: BTreeSet::new(),
            time_recorded: BTreeSet::new(),
        }
    }

    /// Current page path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Reset all dedup state for a new page view and emit the page view
    pub fn navigate(&mut self, path: impl Into<String>) -> Vec<AnalyticsEvent> {
        self.path = path.into();
        self.scroll_recorded.clear();
        self.time_recorded.clear();
        vec![AnalyticsEvent::PageView {
            path: self.path.clone(),
        }]
    }

    /// Record a scroll position observation
    ///
    /// Computes `scroll_top / (document_height - window_height) * 100` and
    /// fires every not-yet-recorded depth threshold that the position
    /// crosses, in ascending order. Pages no taller than the viewport have
    /// no scrollable range and are skipped entirely.
    pub fn record_scroll(
        &mut self,
        scroll_top: f64,
        document_height: f64,
        window_height: f64,
    ) -> Vec<AnalyticsEvent> {
        let scrollable = document_height - window_height;
        if scrollable <= 0.0 {
            return Vec::new();
        }
        let scroll_percent = scroll_top / scrollable * 100.0;

        let mut events = Vec::new();
        for depth in SCROLL_DEPTHS {
            if scroll_percent >= f64::from(depth) && self.scroll_recorded.insert(depth) {
                events.push(AnalyticsEvent::ScrollDepth { percent: depth });
            }
        }
        events
    }

    /// Record elapsed time on the page
    ///
    /// Fires every not-yet-recorded time threshold at or below the elapsed
    /// time, in ascending order, regardless of how coarse the polling was.
    pub fn record_time(&mut self, seconds_on_page: u64) -> Vec<AnalyticsEvent> {
        let mut events = Vec::new();
        for milestone in TIME_MILESTONES {
            if seconds_on_page >= milestone && self.time_recorded.insert(milestone) {
                events.push(AnalyticsEvent::TimeOnPage { seconds: milestone });
            }
        }
        events
    }

    /// Final time reading on page unload
    ///
    /// Emitted unconditionally when dwell exceeds the minimum, without
    /// touching the dedup set.
    pub fn record_unload(&self, seconds_on_page: u64) -> Vec<AnalyticsEvent> {
        if seconds_on_page > MIN_DWELL_SECS {
            vec![AnalyticsEvent::TimeOnPage {
                seconds: seconds_on_page,
            }]
        } else {
            Vec::new()
        }
    }
}
