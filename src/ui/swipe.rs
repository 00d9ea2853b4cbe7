//! Horizontal swipe detection.
//!
//! A terminal has no touch events, so a left-button drag stands in for a
//! swipe. Positions are in device-independent pixels; callers convert
//! columns with the configured cell width.

use crate::ui::input::NavRequest;

pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    threshold_px: f32,
    start_x: Option<f32>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

impl SwipeTracker {
    pub fn new(threshold_px: f32) -> Self {
        Self {
            threshold_px,
            start_x: None,
        }
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Finish the gesture. Dragging left by more than the threshold asks for
    /// the next slide, dragging right for the previous one. Shorter moves
    /// and releases without a press are not swipes.
    pub fn end(&mut self, x: f32) -> Option<NavRequest> {
        let start = self.start_x.take()?;
        let delta = start - x;
        if delta.abs() <= self.threshold_px {
            return None;
        }
        if delta > 0.0 {
            Some(NavRequest::Next)
        } else {
            Some(NavRequest::Previous)
        }
    }

    pub fn reset(&mut self) {
        self.start_x = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_left_past_threshold_is_next() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(300.0);
        assert_eq!(swipe.end(249.0), Some(NavRequest::Next));
        // The gesture is finished; a stray release is not another swipe.
        assert_eq!(swipe.end(100.0), None);
    }

    #[test]
    fn drag_right_past_threshold_is_previous() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(100.0);
        assert_eq!(swipe.end(151.0), Some(NavRequest::Previous));
    }

    #[test]
    fn short_drag_is_ignored() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(100.0);
        assert_eq!(swipe.end(51.0), None);
        swipe.begin(100.0);
        assert_eq!(swipe.end(50.0), None);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut swipe = SwipeTracker::default();
        assert_eq!(swipe.end(0.0), None);
    }

    #[test]
    fn reset_drops_gesture() {
        let mut swipe = SwipeTracker::new(10.0);
        swipe.begin(100.0);
        swipe.reset();
        assert_eq!(swipe.end(0.0), None);
    }
}
