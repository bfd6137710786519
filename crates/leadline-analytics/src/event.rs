//! Analytics event model
//!
//! The shared vocabulary emitted by the engagement tracker and conversion
//! components. Each sink maps these onto its own provider-specific names.

use serde::{Deserialize, Serialize};

/// A single analytics event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    /// A page view on route change
    PageView {
        /// Path of the viewed page
        path: String,
    },
    /// Scroll-depth milestone crossed (25/50/75/100)
    ScrollDepth {
        /// Percent of the page scrolled
        percent: u8,
    },
    /// Time-on-page milestone crossed, or the final unload beacon
    TimeOnPage {
        /// Seconds spent on the page
        seconds: u64,
    },
    /// A visitor started interacting with a form
    FormStart {
        /// Form identifier
        form: String,
        /// Where on the site the form lives
        location: String,
    },
    /// A form submission completed
    FormSubmit {
        /// Form identifier
        form: String,
        /// Whether the submission succeeded
        success: bool,
    },
    /// A lead was captured
    Lead {
        /// Estimated lead value
        value: u32,
        /// Capture mechanism (form, exit popup, ...)
        method: String,
        /// Attribution source
        source: String,
    },
    /// A call-to-action was clicked
    CtaClick {
        /// CTA label
        text: String,
        /// Placement of the CTA
        location: String,
        /// Link destination
        destination: String,
    },
}

impl AnalyticsEvent {
    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            AnalyticsEvent::PageView { .. } => "page_view",
            AnalyticsEvent::ScrollDepth { .. } => "scroll_depth",
            AnalyticsEvent::TimeOnPage { .. } => "time_on_page",
            AnalyticsEvent::FormStart { .. } => "form_start",
            AnalyticsEvent::FormSubmit { .. } => "form_submit",
            AnalyticsEvent::Lead { .. } => "lead",
            AnalyticsEvent::CtaClick { .. } => "cta_click",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind() {
        let event = AnalyticsEvent::ScrollDepth { percent: 50 };
        assert_eq!(event.kind(), "scroll_depth");

        let event = AnalyticsEvent::Lead {
            value: 500,
            method: "exit_intent_popup".to_string(),
            source: "website_exit_intent".to_string(),
        };
        assert_eq!(event.kind(), "lead");
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let event = AnalyticsEvent::TimeOnPage { seconds: 30 };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "time_on_page");
        assert_eq!(json["seconds"], 30);
    }
}
