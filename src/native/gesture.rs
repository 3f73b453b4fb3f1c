//! # Triple-click gesture state machine.
//!
//! Synthesizes the `"tripleclick"` event type from raw clicks. One tracker
//! lives on the hub, shared by every triple-click subscription made through
//! it, matching the single-listener model of the gesture.
//!
//! ## Rules
//! - Clicks landing within the window of the sequence anchor increment the
//!   count; the third fires and resets the count to zero, **keeping the
//!   anchor**, so continued rapid clicking inside the same window can fire
//!   again.
//! - A click outside the window starts a fresh sequence: count one, anchor
//!   now.
//! - The window is measured strictly (`elapsed < window`).

use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Shared click-sequence state for triple-click detection.
pub(crate) struct ClickTracker {
    window: Duration,
    state: Mutex<ClickState>,
}

struct ClickState {
    count: u32,
    start: Option<Instant>,
}

impl ClickTracker {
    pub(crate) fn new(window: Duration) -> Self {
        Self {
            window,
            state: Mutex::new(ClickState {
                count: 0,
                start: None,
            }),
        }
    }

    /// Records a click observed at `now`; returns `true` when it completes
    /// a triple.
    pub(crate) fn observe(&self, now: Instant) -> bool {
        let mut state = self.state.lock();
        let within = state
            .start
            .map(|start| now.duration_since(start) < self.window)
            .unwrap_or(false);
        if within {
            state.count += 1;
            if state.count == 3 {
                state.count = 0;
                return true;
            }
        } else {
            state.count = 1;
            state.start = Some(now);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(400);

    fn clicks(tracker: &ClickTracker, start: Instant, offsets_ms: &[u64]) -> usize {
        offsets_ms
            .iter()
            .filter(|ms| tracker.observe(start + Duration::from_millis(**ms)))
            .count()
    }

    #[test]
    fn test_three_rapid_clicks_fire_once() {
        let tracker = ClickTracker::new(WINDOW);
        let start = Instant::now();
        assert_eq!(clicks(&tracker, start, &[0, 50, 100]), 1);
    }

    #[test]
    fn test_two_clicks_do_not_fire() {
        let tracker = ClickTracker::new(WINDOW);
        let start = Instant::now();
        assert_eq!(clicks(&tracker, start, &[0, 50]), 0);
    }

    #[test]
    fn test_continued_rapid_clicking_fires_again() {
        let tracker = ClickTracker::new(WINDOW);
        let start = Instant::now();
        // All six land inside the original window; the anchor survives the
        // first fire, so the second triple completes too.
        assert_eq!(clicks(&tracker, start, &[0, 50, 100, 150, 200, 250]), 2);
    }

    #[test]
    fn test_slow_click_restarts_the_sequence() {
        let tracker = ClickTracker::new(WINDOW);
        let start = Instant::now();
        assert_eq!(
            clicks(&tracker, start, &[0, 100, 500, 550]),
            0,
            "the 500ms click restarts counting as one"
        );
        // One more inside the new window completes the triple.
        assert_eq!(clicks(&tracker, start, &[600]), 1);
    }

    #[test]
    fn test_window_boundary_is_strict() {
        let tracker = ClickTracker::new(WINDOW);
        let start = Instant::now();
        assert_eq!(
            clicks(&tracker, start, &[0, 100, 400]),
            0,
            "a click exactly at the window must start a new sequence"
        );
    }
}
