//! Sticky CTA bar state

use leadline_analytics::AnalyticsEvent;

/// Scroll offset in pixels after which the bar becomes visible
pub const SHOW_SCROLL_OFFSET: f64 = 300.0;

/// Viewport width in pixels below which the mobile layout is used
pub const MOBILE_BREAKPOINT: u32 = 768;

/// Layout branch for the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaLayout {
    /// Bottom sticky bar
    Mobile,
    /// Top sticky bar
    Desktop,
}

/// Visibility and layout state for the sticky CTA bar
#[derive(Debug)]
pub struct StickyCtaBar {
    visible: bool,
    layout: CtaLayout,
}

impl Default for StickyCtaBar {
    fn default() -> Self {
        Self {
            visible: false,
            layout: CtaLayout::Desktop,
        }
    }
}

impl StickyCtaBar {
    /// Hidden, desktop-layout bar
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll observation toggles visibility
    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.visible = scroll_y > SHOW_SCROLL_OFFSET;
    }

    /// Viewport resize selects the layout branch
    pub fn on_resize(&mut self, viewport_width: u32) {
        self.layout = if viewport_width < MOBILE_BREAKPOINT {
            CtaLayout::Mobile
        } else {
            CtaLayout::Desktop
        };
    }

    /// Whether the bar is currently shown
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current layout branch
    pub fn layout(&self) -> CtaLayout {
        self.layout
    }

    /// Event for a CTA click on the bar
    pub fn click(&self, text: &str, destination: &str) -> AnalyticsEvent {
        AnalyticsEvent::CtaClick {
            text: text.to_string(),
            location: "sticky_cta_bar".to_string(),
            destination: destination.to_string(),
        }
    }
}
