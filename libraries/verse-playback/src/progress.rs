//! Progress tracking state machine
//!
//! Keeps the normalized play position shown by a progress indicator in sync
//! with the live handle, and suppresses continuous updates while a pointer
//! seek gesture is in flight.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Progress tracker state
///
/// Tagged replacement for the seek-in-progress boolean. `Seeking` carries
/// whether playback should resume when the gesture ends, recorded at gesture
/// start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackerState {
    /// No handle; nothing to track
    Idle,

    /// Handle present; the frame tick refreshes the displayed value
    Tracking,

    /// Pointer gesture in flight; frame ticks leave the value alone
    Seeking {
        /// Whether playback resumes when the gesture ends
        resume_on_release: bool,
    },
}

/// Progress tracker
///
/// Owns the displayed [0,1] play-position value and the gesture state that
/// gates continuous updates.
#[derive(Debug, Clone)]
pub(crate) struct ProgressTracker {
    state: TrackerState,
    value: f32,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressTracker {
    pub(crate) fn new() -> Self {
        Self {
            state: TrackerState::Idle,
            value: 0.0,
        }
    }

    pub(crate) fn state(&self) -> TrackerState {
        self.state
    }

    /// Displayed progress value (0.0-1.0)
    pub(crate) fn value(&self) -> f32 {
        self.value
    }

    pub(crate) fn is_seeking(&self) -> bool {
        matches!(self.state, TrackerState::Seeking { .. })
    }

    /// Handle created: begin tracking from the start of the track
    pub(crate) fn attach(&mut self) {
        self.state = TrackerState::Tracking;
        self.value = 0.0;
    }

    /// Handle destroyed: detach and reset
    pub(crate) fn detach(&mut self) {
        self.state = TrackerState::Idle;
        self.value = 0.0;
    }

    /// Per-frame refresh from the handle; ignored unless tracking
    pub(crate) fn update(&mut self, position: Duration, duration: Duration) {
        if self.state == TrackerState::Tracking {
            self.value = fraction_of(position, duration);
        }
    }

    /// Enter the seek gesture
    ///
    /// Returns false when there is no handle or a gesture is already active.
    pub(crate) fn begin_seek(&mut self, resume_on_release: bool) -> bool {
        if self.state == TrackerState::Tracking {
            self.state = TrackerState::Seeking { resume_on_release };
            true
        } else {
            false
        }
    }

    /// Set the displayed value during a gesture; ignored otherwise
    pub(crate) fn set_fraction(&mut self, fraction: f32) {
        if self.is_seeking() {
            self.value = fraction.clamp(0.0, 1.0);
        }
    }

    /// Leave the seek gesture
    ///
    /// Returns the resume flag recorded at gesture start, or `None` if no
    /// gesture was active.
    pub(crate) fn end_seek(&mut self) -> Option<bool> {
        match self.state {
            TrackerState::Seeking { resume_on_release } => {
                self.state = TrackerState::Tracking;
                Some(resume_on_release)
            }
            TrackerState::Idle | TrackerState::Tracking => None,
        }
    }
}

/// Normalized playback position
///
/// An unknown (zero) duration is treated as one second, so an unprobed track
/// reads 0 instead of dividing by zero. The result is clamped to [0,1].
pub(crate) fn fraction_of(position: Duration, duration: Duration) -> f32 {
    let secs = duration.as_secs_f64();
    let denominator = if secs == 0.0 { 1.0 } else { secs };

    ((position.as_secs_f64() / denominator) as f32).clamp(0.0, 1.0)
}

/// Pointer press/drag on the progress indicator
///
/// Horizontal offset of the pointer relative to the indicator's left edge,
/// plus the indicator's width. Out-of-bounds offsets clamp to the edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    /// Horizontal offset from the indicator's left edge, in pixels
    pub offset_x: f32,

    /// Indicator width in pixels
    pub width: f32,
}

impl PointerInput {
    /// Create a pointer input
    pub fn new(offset_x: f32, width: f32) -> Self {
        Self { offset_x, width }
    }

    /// Pointer position as a fraction of the indicator width
    ///
    /// Clamped to [0,1]; a non-positive width yields 0.
    pub fn fraction(&self) -> f32 {
        if self.width <= 0.0 {
            return 0.0;
        }

        (self.offset_x / self.width).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let tracker = ProgressTracker::new();
        assert_eq!(tracker.state(), TrackerState::Idle);
        assert_eq!(tracker.value(), 0.0);
    }

    #[test]
    fn attach_begins_tracking() {
        let mut tracker = ProgressTracker::new();
        tracker.attach();
        assert_eq!(tracker.state(), TrackerState::Tracking);
    }

    #[test]
    fn update_refreshes_value_while_tracking() {
        let mut tracker = ProgressTracker::new();
        tracker.attach();

        tracker.update(Duration::from_secs(30), Duration::from_secs(120));
        assert_eq!(tracker.value(), 0.25);
    }

    #[test]
    fn update_is_ignored_while_idle() {
        let mut tracker = ProgressTracker::new();
        tracker.update(Duration::from_secs(30), Duration::from_secs(120));
        assert_eq!(tracker.value(), 0.0);
    }

    #[test]
    fn seek_gesture_suppresses_updates() {
        let mut tracker = ProgressTracker::new();
        tracker.attach();

        assert!(tracker.begin_seek(true));
        tracker.set_fraction(0.5);

        // Continuous polling must not overwrite the manual value mid-gesture
        tracker.update(Duration::from_secs(10), Duration::from_secs(100));
        assert_eq!(tracker.value(), 0.5);

        assert_eq!(tracker.end_seek(), Some(true));
        tracker.update(Duration::from_secs(10), Duration::from_secs(100));
        assert_eq!(tracker.value(), 0.1);
    }

    #[test]
    fn begin_seek_requires_a_handle() {
        let mut tracker = ProgressTracker::new();
        assert!(!tracker.begin_seek(false));
        assert_eq!(tracker.end_seek(), None);
    }

    #[test]
    fn detach_resets_everything() {
        let mut tracker = ProgressTracker::new();
        tracker.attach();
        tracker.update(Duration::from_secs(60), Duration::from_secs(120));

        tracker.detach();
        assert_eq!(tracker.state(), TrackerState::Idle);
        assert_eq!(tracker.value(), 0.0);
    }

    #[test]
    fn zero_duration_reads_zero() {
        assert_eq!(fraction_of(Duration::ZERO, Duration::ZERO), 0.0);
    }

    #[test]
    fn fraction_is_clamped() {
        // Elapsed past the (unknown) duration clamps to 1
        assert_eq!(fraction_of(Duration::from_secs(5), Duration::ZERO), 1.0);
        assert_eq!(
            fraction_of(Duration::from_secs(500), Duration::from_secs(100)),
            1.0
        );
    }

    #[test]
    fn pointer_fraction_maps_edges() {
        assert_eq!(PointerInput::new(0.0, 200.0).fraction(), 0.0);
        assert_eq!(PointerInput::new(100.0, 200.0).fraction(), 0.5);
        assert_eq!(PointerInput::new(200.0, 200.0).fraction(), 1.0);
    }

    #[test]
    fn pointer_fraction_clamps_out_of_bounds() {
        assert_eq!(PointerInput::new(-40.0, 200.0).fraction(), 0.0);
        assert_eq!(PointerInput::new(350.0, 200.0).fraction(), 1.0);
    }

    #[test]
    fn degenerate_width_reads_zero() {
        assert_eq!(PointerInput::new(50.0, 0.0).fraction(), 0.0);
        assert_eq!(PointerInput::new(50.0, -10.0).fraction(), 0.0);
    }
}
