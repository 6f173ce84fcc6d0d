#![forbid(unsafe_code)]

//! Throttled scroll observation.
//!
//! Hosts can deliver a flood of scroll events during fast flicks; without
//! throttling, each one would re-resolve checkpoints and re-publish
//! snapshots. The sampler bounds the emission rate and normalizes raw
//! geometry into [`ScrollSample`]s, suppressing samples entirely while the
//! surface has no scrollable range.

use std::time::{Duration, Instant};

use scrollpoint_core::progress::{ScrollMetrics, ScrollSample};
use tracing::trace;

/// The scrollable surface the controller is attached to.
///
/// The browser container is one implementation; the test simulator is
/// another. The controller only ever reads geometry and writes the scroll
/// offset.
pub trait ScrollHost {
    /// Current surface geometry.
    fn metrics(&self) -> ScrollMetrics;

    /// Move the surface's scroll offset (smooth-scroll output).
    fn set_scroll_top(&mut self, offset: f32);
}

/// Converts live scroll geometry into throttled, normalized samples.
#[derive(Debug, Clone)]
pub struct ScrollSampler {
    throttle: Duration,
    observing: bool,
    last_emit: Option<Instant>,
    latest: Option<ScrollSample>,
}

impl ScrollSampler {
    /// Create a sampler emitting at most once per throttle window.
    #[must_use]
    pub fn new(throttle: Duration) -> Self {
        Self {
            throttle,
            observing: false,
            last_emit: None,
            latest: None,
        }
    }

    /// Begin observing. Idempotent.
    pub fn observe(&mut self) {
        self.observing = true;
    }

    /// Stop observing and forget prior samples. Idempotent.
    pub fn unobserve(&mut self) {
        self.observing = false;
        self.last_emit = None;
        self.latest = None;
    }

    /// Whether the sampler is currently observing.
    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Feed raw geometry; returns a sample when one is due.
    ///
    /// Returns `None` while not observing, while the surface has no
    /// scrollable range (progress would be meaningless until layout
    /// changes), or while inside the throttle window. Throttled events are
    /// dropped, not deferred.
    pub fn sample(&mut self, metrics: ScrollMetrics, now: Instant) -> Option<ScrollSample> {
        if !self.observing {
            return None;
        }
        if !metrics.has_scrollable_range() {
            trace!("no scrollable range, suppressing sample");
            return None;
        }
        if let Some(last) = self.last_emit
            && now.duration_since(last) < self.throttle
        {
            return None;
        }

        let sample = ScrollSample {
            raw_offset: metrics.scroll_top,
            progress: metrics.progress(),
            at: now,
        };
        self.last_emit = Some(now);
        self.latest = Some(sample);
        Some(sample)
    }

    /// The most recently emitted sample.
    #[must_use]
    pub fn latest(&self) -> Option<ScrollSample> {
        self.latest
    }
}
