#![forbid(unsafe_code)]

//! Scroll geometry and normalized progress.
//!
//! Progress is the scroll offset normalized to `[0.0, 1.0]` across the full
//! scrollable range. A surface whose content fits entirely in the viewport
//! has no scrollable range; its progress is defined as 0 and samplers treat
//! it as unobservable until layout changes.

use std::time::Instant;

/// Geometry of a scrollable surface at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Current scroll offset from the top, in host pixels.
    pub scroll_top: f32,
    /// Total content height, in host pixels.
    pub scroll_height: f32,
    /// Visible viewport height, in host pixels.
    pub client_height: f32,
}

impl ScrollMetrics {
    /// Create metrics from raw host values.
    #[must_use]
    pub const fn new(scroll_top: f32, scroll_height: f32, client_height: f32) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// The scrollable range in host pixels (`scroll_height - client_height`).
    ///
    /// May be zero or negative when the content fits in the viewport or the
    /// host reported transient mid-resize geometry.
    #[must_use]
    pub fn range(&self) -> f32 {
        self.scroll_height - self.client_height
    }

    /// Whether the surface currently has a scrollable range.
    #[must_use]
    pub fn has_scrollable_range(&self) -> bool {
        self.range() > 0.0 && self.range().is_finite()
    }

    /// Normalized progress in `[0.0, 1.0]`.
    ///
    /// Zero or negative range resolves to 0 rather than dividing by zero, so
    /// a resize that collapses the range mid-sample can never produce NaN.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if !self.has_scrollable_range() {
            return 0.0;
        }
        (self.scroll_top / self.range()).clamp(0.0, 1.0)
    }

    /// The scroll offset corresponding to a normalized progress value.
    ///
    /// Inverse of [`progress`](Self::progress); used to turn a checkpoint's
    /// target progress back into a host offset.
    #[must_use]
    pub fn offset_for_progress(&self, progress: f32) -> f32 {
        if !self.has_scrollable_range() {
            return 0.0;
        }
        progress.clamp(0.0, 1.0) * self.range()
    }
}

/// One observation of the scroll surface, produced by the sampler.
///
/// Ephemeral: consumers only ever look at the most recent sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    /// Raw scroll offset at the time of the sample.
    pub raw_offset: f32,
    /// Normalized progress in `[0.0, 1.0]`.
    pub progress: f32,
    /// When the sample was taken.
    pub at: Instant,
}
