//! Exit-intent popup session state
//!
//! The popup fires at most once per browser session: the `shown` flag lives
//! on the session object and survives page navigations. Arming waits out a
//! warm-up delay so immediate visitors are not interrupted.

use async_trait::async_trait;
use tokio::time::Duration;
use tracing::{info, warn};

use leadline_analytics::{AnalyticsEvent, SinkSet};

/// Delay before pointer-leave events are honored
pub const WARMUP: Duration = Duration::from_secs(5);

/// Delay before the popup closes itself after a successful submission
pub const AUTO_CLOSE: Duration = Duration::from_secs(3);

/// Estimated value attributed to an exit-intent lead
pub const LEAD_VALUE: u32 = 500;

/// Exit-intent lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitIntentState {
    /// Warm-up delay has not elapsed yet
    NotArmed,
    /// Waiting for a pointer-leaves-top signal
    Armed,
    /// Popup was shown; terminal for the session
    Shown,
}

/// Popup form submission substate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupForm {
    /// No submission in flight
    #[default]
    Idle,
    /// Submission in flight
    Submitting,
    /// Submission completed; popup auto-closes after [`AUTO_CLOSE`]
    Submitted,
}

/// Destination for emails captured by the popup
///
/// No CRM integration is wired up by default; plug a real implementation in
/// when a lead store exists.
#[async_trait]
pub trait LeadCapture: Send + Sync {
    /// Persist a captured email address
    async fn capture(&self, email: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Lead capture that only logs the address
#[derive(Default)]
pub struct NoopLeadCapture;

#[async_trait]
impl LeadCapture for NoopLeadCapture {
    async fn capture(&self, email: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!("Captured exit-intent lead (no CRM configured): {}", email);
        Ok(())
    }
}

/// Session-scoped exit-intent state machine
///
/// Time is fed in by the caller as elapsed-since-session-start, which keeps
/// the machine deterministic under test.
#[derive(Debug, Default)]
pub struct ExitIntentSession {
    shown: bool,
    open: bool,
    form: PopupForm,
}

impl ExitIntentSession {
    /// Fresh session: popup not yet shown
    pub fn new() -> Self {
        Self::default()
    }

    /// Lifecycle state for the given elapsed session time
    pub fn state(&self, elapsed: Duration) -> ExitIntentState {
        if self.shown {
            ExitIntentState::Shown
        } else if elapsed < WARMUP {
            ExitIntentState::NotArmed
        } else {
            ExitIntentState::Armed
        }
    }

    /// Whether the popup is currently open
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current form substate
    pub fn form(&self) -> PopupForm {
        self.form
    }

    /// Pointer left the viewport; `y` is the pointer's viewport Y coordinate
    ///
    /// Shows the popup when armed and the pointer exited through the top
    /// edge. Returns the events to dispatch (empty when nothing happened).
    pub fn pointer_leave(&mut self, y: i32, elapsed: Duration) -> Vec<AnalyticsEvent> {
        if y > 0 || self.open || self.state(elapsed) != ExitIntentState::Armed {
            return Vec::new();
        }

        self.open = true;
        self.shown = true;
        vec![AnalyticsEvent::FormStart {
            form: "exit_intent_popup".to_string(),
            location: "exit_popup".to_string(),
        }]
    }

    /// Dismiss the popup; the session flag keeps it from re-arming
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Submit the captured email
    ///
    /// Fires the form-start and lead events, hands the address to the
    /// capture destination, and lands in [`PopupForm::Submitted`]. The
    /// caller is responsible for closing after [`AUTO_CLOSE`]. Capture
    /// failures are logged and do not fail the submission, matching the
    /// best-effort analytics policy.
    pub async fn submit(
        &mut self,
        email: &str,
        capture: &dyn LeadCapture,
        sinks: &SinkSet,
    ) -> PopupForm {
        if self.form != PopupForm::Idle || !self.open {
            return self.form;
        }
        self.form = PopupForm::Submitting;

        sinks
            .dispatch(&AnalyticsEvent::FormStart {
                form: "exit_intent_lead_form".to_string(),
                location: "exit_popup".to_string(),
            })
            .await;

        if let Err(e) = capture.capture(email).await {
            warn!("Lead capture failed: {}", e);
        }

        sinks
            .dispatch(&AnalyticsEvent::Lead {
                value: LEAD_VALUE,
                method: "exit_intent_popup".to_string(),
                source: "website_exit_intent".to_string(),
            })
            .await;

        self.form = PopupForm::Submitted;
        self.form
    }
}
