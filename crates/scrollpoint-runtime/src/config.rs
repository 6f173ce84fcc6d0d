#![forbid(unsafe_code)]

//! Timing configuration for the controller.
//!
//! Phase durations are fixed wall-clock timeouts, scheduled at the moment a
//! navigation is accepted. They are deliberately not adaptive: a slow host
//! does not get longer timers.

use std::time::Duration;

/// Motion tier for constrained hosts.
///
/// Chosen once at construction; the controller never re-tiers at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionProfile {
    /// Full durations and decorative motion.
    #[default]
    Full,
    /// Shortened durations, decorative motion disabled.
    Reduced,
}

impl MotionProfile {
    /// Multiplier applied to every animated duration.
    #[must_use]
    pub const fn duration_scale(self) -> f32 {
        match self {
            Self::Full => 1.0,
            Self::Reduced => 0.4,
        }
    }

    /// Whether decorative motion (card spin, particles) should run.
    #[must_use]
    pub const fn decorative_motion(self) -> bool {
        matches!(self, Self::Full)
    }
}

/// Configuration for the controller's timers and thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingConfig {
    /// Duration of the `Centering` phase (card moves to screen center).
    /// Default: 800ms
    pub center_duration: Duration,

    /// Duration of the `Zooming` phase (card scales to fill the viewport).
    /// Default: 700ms
    pub zoom_duration: Duration,

    /// Duration of the `Exiting` phase (card shrinks away from a detail
    /// surface). Default: 500ms
    pub exit_duration: Duration,

    /// Minimum interval between emitted scroll samples.
    /// Default: 30ms
    pub sample_throttle: Duration,

    /// Quiet window after the last sample before the scroll position is
    /// considered settled and snapped to the nearest checkpoint.
    /// Default: 120ms
    pub snap_debounce: Duration,

    /// Margin (in normalized progress) by which the nearest checkpoint must
    /// beat the current one before a snap fires. Prevents oscillation when
    /// progress rests near the midpoint between two targets.
    /// Default: 0.03
    pub snap_hysteresis: f32,

    /// Accumulated wheel delta (host pixels) that triggers a step.
    /// Default: 30.0
    pub wheel_threshold: f32,

    /// Duration of a smooth-scroll glide to a checkpoint target.
    /// Default: 1200ms
    pub glide_duration: Duration,

    /// Fixed offset (host pixels) subtracted from glide targets, for hosts
    /// with a sticky header overlapping the surface.
    /// Default: 0.0
    pub glide_offset: f32,

    /// Motion tier this config was built for.
    pub motion_profile: MotionProfile,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            center_duration: Duration::from_millis(800),
            zoom_duration: Duration::from_millis(700),
            exit_duration: Duration::from_millis(500),
            sample_throttle: Duration::from_millis(30),
            snap_debounce: Duration::from_millis(120),
            snap_hysteresis: 0.03,
            wheel_threshold: 30.0,
            glide_duration: Duration::from_millis(1200),
            glide_offset: 0.0,
            motion_profile: MotionProfile::Full,
        }
    }
}

impl TimingConfig {
    /// Set the centering phase duration.
    #[must_use]
    pub const fn center_duration(mut self, duration: Duration) -> Self {
        self.center_duration = duration;
        self
    }

    /// Set the zooming phase duration.
    #[must_use]
    pub const fn zoom_duration(mut self, duration: Duration) -> Self {
        self.zoom_duration = duration;
        self
    }

    /// Set the exiting phase duration.
    #[must_use]
    pub const fn exit_duration(mut self, duration: Duration) -> Self {
        self.exit_duration = duration;
        self
    }

    /// Set the snap debounce window.
    #[must_use]
    pub const fn snap_debounce(mut self, window: Duration) -> Self {
        self.snap_debounce = window;
        self
    }

    /// Set the snap hysteresis margin.
    #[must_use]
    pub const fn snap_hysteresis(mut self, margin: f32) -> Self {
        self.snap_hysteresis = margin;
        self
    }

    /// Set the wheel step threshold.
    #[must_use]
    pub const fn wheel_threshold(mut self, threshold: f32) -> Self {
        self.wheel_threshold = threshold;
        self
    }

    /// Set the glide target offset.
    #[must_use]
    pub const fn glide_offset(mut self, offset: f32) -> Self {
        self.glide_offset = offset;
        self
    }

    /// Apply a motion profile, scaling every animated duration.
    #[must_use]
    pub fn with_motion_profile(mut self, profile: MotionProfile) -> Self {
        let scale = profile.duration_scale();
        self.center_duration = self.center_duration.mul_f32(scale);
        self.zoom_duration = self.zoom_duration.mul_f32(scale);
        self.exit_duration = self.exit_duration.mul_f32(scale);
        self.glide_duration = self.glide_duration.mul_f32(scale);
        self.motion_profile = profile;
        self
    }
}
