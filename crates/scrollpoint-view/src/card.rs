#![forbid(unsafe_code)]

//! The floating transitional card.
//!
//! Shown while a navigation is in flight: it slides in from its resting
//! spot, centers, scales up to fill the viewport, and hands off to the
//! detail surface (or shrinks away on exit). One parameterized card serves
//! every section; per-section look comes entirely from the registry's
//! theme tokens.

use std::time::Duration;

use scrollpoint_core::animation::{ease_in_out, EasingFn};
use scrollpoint_core::registry::CheckpointRegistry;
use scrollpoint_core::theme::SectionTheme;
use scrollpoint_runtime::{Phase, Snapshot};

/// Render-ready card parameters for one snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisual {
    /// Whether the card should be in the tree at all.
    pub visible: bool,
    /// Target scale for the current phase.
    pub scale: f32,
    /// Target opacity for the current phase.
    pub opacity: f32,
    /// Horizontal offset the card animates in from.
    pub offset_x: f32,
    /// Vertical offset the card animates in from.
    pub offset_y: f32,
    /// Whether the decorative zoom spin should run.
    pub spin: bool,
}

impl CardVisual {
    const HIDDEN: Self = Self {
        visible: false,
        scale: 0.0,
        opacity: 0.0,
        offset_x: 0.0,
        offset_y: 0.0,
        spin: false,
    };
}

/// Suggested motion parameters for animating toward a [`CardVisual`].
#[derive(Debug, Clone, Copy)]
pub struct CardMotion {
    /// How long the host animation should take.
    pub duration: Duration,
    /// Easing curve to apply.
    pub easing: EasingFn,
}

/// View model for the transitional card.
#[derive(Debug, Clone, Copy)]
pub struct FloatingCard {
    entry_offset: (f32, f32),
    decorative_motion: bool,
}

impl Default for FloatingCard {
    fn default() -> Self {
        Self {
            entry_offset: (200.0, 100.0),
            decorative_motion: true,
        }
    }
}

impl FloatingCard {
    /// Create a card with default entry offset and decoration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set where the card slides in from, relative to screen center.
    #[must_use]
    pub fn entry_offset(mut self, x: f32, y: f32) -> Self {
        self.entry_offset = (x, y);
        self
    }

    /// Enable or disable decorative motion (the zoom spin).
    #[must_use]
    pub fn decorative_motion(mut self, enabled: bool) -> Self {
        self.decorative_motion = enabled;
        self
    }

    /// Card parameters for the given snapshot.
    #[must_use]
    pub fn visual(&self, snapshot: &Snapshot) -> CardVisual {
        match snapshot.phase {
            Phase::Centering => CardVisual {
                visible: true,
                scale: 1.0,
                opacity: 1.0,
                offset_x: self.entry_offset.0,
                offset_y: self.entry_offset.1,
                spin: false,
            },
            Phase::Zooming => CardVisual {
                visible: true,
                scale: 3.0,
                opacity: 1.0,
                offset_x: 0.0,
                offset_y: 0.0,
                spin: self.decorative_motion,
            },
            Phase::Exiting => CardVisual {
                visible: true,
                scale: 0.5,
                opacity: 0.0,
                offset_x: 0.0,
                offset_y: 0.0,
                spin: false,
            },
            Phase::Idle | Phase::DetailActive => CardVisual::HIDDEN,
        }
    }

    /// Motion parameters for the given phase.
    #[must_use]
    pub fn motion(&self, phase: Phase) -> CardMotion {
        let duration = match phase {
            Phase::Zooming => Duration::from_millis(1200),
            _ => Duration::from_millis(800),
        };
        CardMotion {
            duration,
            easing: ease_in_out,
        }
    }

    /// Theme tokens for the section the card is presenting.
    #[must_use]
    pub fn theme<'a>(
        &self,
        snapshot: &Snapshot,
        registry: &'a CheckpointRegistry,
    ) -> &'a SectionTheme {
        let index = snapshot.presented_checkpoint().min(registry.last_index());
        &registry.checkpoint(index).display.theme
    }
}
