//! Property-based tests for scroll-depth milestone tracking
//!
//! For any monotonically increasing scroll sequence, each depth threshold
//! fires at most once and milestones are reported in ascending order,
//! regardless of how coarse the observations are.

use proptest::prelude::*;

use leadline_analytics::AnalyticsEvent;
use leadline_engagement::{EngagementTracker, SCROLL_DEPTHS};

const DOCUMENT_HEIGHT: f64 = 5000.0;
const WINDOW_HEIGHT: f64 = 1000.0;

/// Strategy for monotonically increasing scroll positions
fn monotonic_scroll_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..=(DOCUMENT_HEIGHT - WINDOW_HEIGHT), 1..40).prop_map(
        |mut positions| {
            positions.sort_by(|a, b| a.partial_cmp(b).expect("positions are finite"));
            positions
        },
    )
}

fn fired_depths(positions: &[f64]) -> Vec<u8> {
    let mut tracker = EngagementTracker::new("/");
    let mut depths = Vec::new();
    for &position in positions {
        for event in tracker.record_scroll(position, DOCUMENT_HEIGHT, WINDOW_HEIGHT) {
            match event {
                AnalyticsEvent::ScrollDepth { percent } => depths.push(percent),
                other => panic!("unexpected event: {other:?}"),
            }
        }
    }
    depths
}

proptest! {
    /// Each threshold fires at most once across the whole sequence
    #[test]
    fn prop_each_threshold_fires_at_most_once(positions in monotonic_scroll_strategy()) {
        let depths = fired_depths(&positions);
        for threshold in SCROLL_DEPTHS {
            let count = depths.iter().filter(|&&d| d == threshold).count();
            prop_assert!(count <= 1, "threshold {} fired {} times", threshold, count);
        }
    }

    /// Milestones come out in strictly ascending order even when a single
    /// observation crosses several thresholds
    #[test]
    fn prop_milestones_ascend(positions in monotonic_scroll_strategy()) {
        let depths = fired_depths(&positions);
        for pair in depths.windows(2) {
            prop_assert!(pair[0] < pair[1], "out of order: {:?}", depths);
        }
    }

    /// Every fired milestone is justified by the deepest position observed
    #[test]
    fn prop_fired_milestones_are_reached(positions in monotonic_scroll_strategy()) {
        let depths = fired_depths(&positions);
        let deepest = positions.last().copied().unwrap_or(0.0);
        let percent = deepest / (DOCUMENT_HEIGHT - WINDOW_HEIGHT) * 100.0;
        for depth in depths {
            prop_assert!(f64::from(depth) <= percent + 1e-9);
        }
    }
}

proptest! {
    /// A page no taller than the viewport never produces scroll events
    #[test]
    fn prop_short_page_fires_nothing(positions in prop::collection::vec(0.0f64..2000.0, 1..20)) {
        let mut tracker = EngagementTracker::new("/");
        for position in positions {
            let events = tracker.record_scroll(position, WINDOW_HEIGHT, WINDOW_HEIGHT);
            prop_assert!(events.is_empty());
        }
    }
}
