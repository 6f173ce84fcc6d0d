#![forbid(unsafe_code)]

//! Time-based progression primitives.
//!
//! A [`Glide`] advances a normalized `f32` value from 0.0 to 1.0 over a
//! fixed duration with a configurable easing curve. The smooth scroller
//! drives host offsets with it, and view models use the easing functions
//! to shape per-phase motion. Zero allocation during tick.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Easing functions
// ---------------------------------------------------------------------------

/// Easing function signature: maps `t` in [0, 1] to output in [0, 1].
pub type EasingFn = fn(f32) -> f32;

/// Identity easing (constant velocity).
#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in (slow start).
#[inline]
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out (slow end).
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out (slow start and end).
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Exponential ease-out.
///
/// Fast initial approach that settles asymptotically; the curve used for
/// smooth scrolling so long glides feel responsive up front.
#[inline]
pub fn ease_out_expo(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t >= 1.0 {
        1.0
    } else {
        (1.001 - 2.0_f32.powf(-10.0 * t)).min(1.0)
    }
}

// ---------------------------------------------------------------------------
// Glide
// ---------------------------------------------------------------------------

/// Progression from 0.0 to 1.0 over a duration, with configurable easing.
///
/// Tracks elapsed time as [`Duration`] internally for precise accumulation
/// (no floating-point drift).
#[derive(Debug, Clone, Copy)]
pub struct Glide {
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Glide {
    /// Create a glide with the given duration and linear easing.
    ///
    /// A zero duration is bumped to one nanosecond so the glide completes
    /// on the first tick instead of dividing by zero.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            easing: linear,
        }
    }

    /// Set the easing function.
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Advance by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    /// Whether the glide has reached its end.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Raw linear progress (before easing), in [0.0, 1.0].
    #[must_use]
    pub fn raw_progress(&self) -> f32 {
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }

    /// Current eased output value, clamped to [0.0, 1.0].
    #[must_use]
    pub fn value(&self) -> f32 {
        (self.easing)(self.raw_progress()).clamp(0.0, 1.0)
    }

    /// Reset to the initial state.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
