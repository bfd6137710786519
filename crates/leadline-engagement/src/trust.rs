//! Rotating trust-signal notifications
//!
//! Social-proof notifications rotate through a caller-supplied list on a
//! fixed timer. The list is a replaceable data source; the bundled sample
//! rotation is simulated proof for development, not real conversion data,
//! as is the visitor count.

use rand::Rng;
use tokio::time::Duration;

/// Rotation timer for the conversion notifications
pub const ROTATION_INTERVAL: Duration = Duration::from_secs(8);

/// A recent-conversion notification entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentConversion {
    pub name: String,
    pub location: String,
    pub service: String,
    pub time: String,
}

impl RecentConversion {
    fn new(name: &str, location: &str, service: &str, time: &str) -> Self {
        Self {
            name: name.to_string(),
            location: location.to_string(),
            service: service.to_string(),
            time: time.to_string(),
        }
    }

    /// Sample rotation for development environments
    pub fn sample_rotation() -> Vec<Self> {
        vec![
            Self::new("Raj Kumar", "Chennai", "Digital Marketing Package", "5 minutes ago"),
            Self::new("Priya S.", "Coimbatore", "Web Development", "12 minutes ago"),
            Self::new("Arjun M.", "Bangalore", "AI Chatbot Solution", "23 minutes ago"),
            Self::new("Lakshmi V.", "Madurai", "Google Ads Campaign", "31 minutes ago"),
            Self::new("Karthik R.", "Trichy", "Free Consultation", "45 minutes ago"),
            Self::new("Divya P.", "Salem", "Mobile App Development", "1 hour ago"),
        ]
    }
}

/// Trust-signal widget state: rotating conversions plus a visitor count
#[derive(Debug)]
pub struct TrustSignals {
    conversions: Vec<RecentConversion>,
    current: usize,
    visitor_count: u32,
}

impl TrustSignals {
    /// Create with the given conversion source
    pub fn new(conversions: Vec<RecentConversion>) -> Self {
        // Simulated count; wire to a real analytics feed when one exists
        let visitor_count = 42 + rand::thread_rng().gen_range(0..20);
        Self {
            conversions,
            current: 0,
            visitor_count,
        }
    }

    /// Currently displayed conversion, if the source is non-empty
    pub fn current(&self) -> Option<&RecentConversion> {
        self.conversions.get(self.current)
    }

    /// Advance the rotation by one entry, wrapping around
    pub fn advance(&mut self) {
        if !self.conversions.is_empty() {
            self.current = (self.current + 1) % self.conversions.len();
        }
    }

    /// Simulated live visitor count
    pub fn visitor_count(&self) -> u32 {
        self.visitor_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_wraps_around() {
        let mut signals = TrustSignals::new(RecentConversion::sample_rotation());
        let first = signals.current().unwrap().clone();

        for _ in 0..6 {
            signals.advance();
        }
        assert_eq!(signals.current(), Some(&first));
    }

    #[test]
    fn test_empty_source_is_safe() {
        let mut signals = TrustSignals::new(Vec::new());
        assert!(signals.current().is_none());
        signals.advance();
        assert!(signals.current().is_none());
    }

    #[test]
    fn test_visitor_count_in_simulated_range() {
        let signals = TrustSignals::new(Vec::new());
        assert!((42..62).contains(&signals.visitor_count()));
    }

    #[test]
    fn test_custom_source_replaces_fixtures() {
        let source = vec![RecentConversion::new("A", "B", "C", "now")];
        let mut signals = TrustSignals::new(source.clone());
        assert_eq!(signals.current(), Some(&source[0]));
        signals.advance();
        assert_eq!(signals.current(), Some(&source[0]));
    }
}
