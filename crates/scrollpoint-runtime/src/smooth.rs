#![forbid(unsafe_code)]

//! Smooth scrolling to checkpoint targets.
//!
//! An explicitly constructed, controller-owned glide helper with a
//! lifecycle tied to mount/unmount: `init` on mount, `dispose` on unmount.
//! One glide is active at a time; retargeting cancels the previous glide
//! and starts fresh from wherever the surface currently sits.

use std::time::Duration;

use scrollpoint_core::animation::{ease_out_expo, EasingFn, Glide};
use tracing::trace;

#[derive(Debug, Clone, Copy)]
struct ActiveGlide {
    from: f32,
    to: f32,
    glide: Glide,
}

/// Animates the host's scroll offset toward a target.
#[derive(Debug, Clone)]
pub struct SmoothScroller {
    duration: Duration,
    easing: EasingFn,
    offset_adjust: f32,
    initialized: bool,
    active: Option<ActiveGlide>,
}

impl SmoothScroller {
    /// Create a scroller with the given glide duration and a fixed target
    /// offset adjustment (for sticky headers overlapping the surface).
    #[must_use]
    pub fn new(duration: Duration, offset_adjust: f32) -> Self {
        Self {
            duration,
            easing: ease_out_expo,
            offset_adjust,
            initialized: false,
            active: None,
        }
    }

    /// Set the easing curve.
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Enable the scroller. Idempotent; called on controller mount.
    pub fn init(&mut self) {
        self.initialized = true;
    }

    /// Cancel any active glide and disable the scroller. Idempotent;
    /// called on controller unmount.
    pub fn dispose(&mut self) {
        self.initialized = false;
        self.active = None;
    }

    /// Whether the scroller is between `init` and `dispose`.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether a glide is currently running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Start a glide from the current offset to a target offset.
    ///
    /// Cancels any glide already running. Ignored before `init` and after
    /// `dispose`.
    pub fn scroll_to(&mut self, from: f32, to: f32) {
        if !self.initialized {
            trace!("scroller not initialized, ignoring glide request");
            return;
        }
        let to = (to - self.offset_adjust).max(0.0);
        trace!(from, to, "starting glide");
        self.active = Some(ActiveGlide {
            from,
            to,
            glide: Glide::new(self.duration).easing(self.easing),
        });
    }

    /// Advance the active glide by `dt`.
    ///
    /// Returns the offset to write to the host, or `None` when idle. The
    /// final tick lands exactly on the target and clears the glide.
    pub fn tick(&mut self, dt: Duration) -> Option<f32> {
        let active = self.active.as_mut()?;
        active.glide.tick(dt);

        if active.glide.is_complete() {
            let to = active.to;
            self.active = None;
            return Some(to);
        }
        let eased = active.glide.value();
        Some(active.from + (active.to - active.from) * eased)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollpoint_core::animation::linear;

    fn scroller() -> SmoothScroller {
        let mut s = SmoothScroller::new(Duration::from_millis(100), 0.0).easing(linear);
        s.init();
        s
    }

    #[test]
    fn glide_interpolates_toward_target() {
        let mut s = scroller();
        s.scroll_to(0.0, 1000.0);

        let mid = s.tick(Duration::from_millis(50)).unwrap();
        assert!((mid - 500.0).abs() < 1.0);
        assert!(s.is_active());
    }

    #[test]
    fn glide_lands_exactly_on_target_and_clears() {
        let mut s = scroller();
        s.scroll_to(200.0, 800.0);
        let end = s.tick(Duration::from_millis(150)).unwrap();
        assert_eq!(end, 800.0);
        assert!(!s.is_active());
        assert!(s.tick(Duration::from_millis(16)).is_none());
    }

    #[test]
    fn retarget_cancels_previous_glide() {
        let mut s = scroller();
        s.scroll_to(0.0, 1000.0);
        s.tick(Duration::from_millis(50));

        // New target restarts from the caller-provided position.
        s.scroll_to(500.0, 0.0);
        let v = s.tick(Duration::from_millis(50)).unwrap();
        assert!((v - 250.0).abs() < 1.0);
    }

    #[test]
    fn requests_before_init_are_ignored() {
        let mut s = SmoothScroller::new(Duration::from_millis(100), 0.0);
        s.scroll_to(0.0, 1000.0);
        assert!(!s.is_active());
    }

    #[test]
    fn dispose_stops_offset_writes() {
        let mut s = scroller();
        s.scroll_to(0.0, 1000.0);
        s.dispose();
        assert!(!s.is_active());
        assert!(s.tick(Duration::from_millis(16)).is_none());
        // And further requests are ignored until re-init.
        s.scroll_to(0.0, 500.0);
        assert!(!s.is_active());
    }

    #[test]
    fn offset_adjust_shifts_and_clamps_the_target() {
        let mut s = SmoothScroller::new(Duration::from_millis(100), 80.0).easing(linear);
        s.init();
        s.scroll_to(500.0, 300.0);
        let end = s.tick(Duration::from_millis(150)).unwrap();
        assert_eq!(end, 220.0);

        // Targets above the top clamp to zero rather than going negative.
        s.scroll_to(100.0, 50.0);
        let end = s.tick(Duration::from_millis(150)).unwrap();
        assert_eq!(end, 0.0);
    }
}
