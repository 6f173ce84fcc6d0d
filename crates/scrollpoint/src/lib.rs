#![forbid(unsafe_code)]

//! Scrollpoint public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use scrollpoint_core::animation::{ease_in_out, ease_out_expo, EasingFn, Glide};
pub use scrollpoint_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, WheelEvent,
};
pub use scrollpoint_core::progress::{ScrollMetrics, ScrollSample};
pub use scrollpoint_core::registry::{
    CheckpointDescriptor, CheckpointRegistry, DisplayMeta, RegistryError,
};
pub use scrollpoint_core::resolver::resolve_nearest;
pub use scrollpoint_core::theme::{Rgb, Rgba, SectionTheme};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use scrollpoint_runtime::{
    CloseDirection, Controller, ControllerSimulator, MotionProfile, NavError, Navigator, Phase,
    ScrollHost, SimHost, SmoothScroller, Snapshot, SubscriptionId, TimingConfig,
};

// --- View re-exports -------------------------------------------------------

#[cfg(feature = "view")]
pub use scrollpoint_view::{
    BackgroundScene, CardVisual, DetailSurface, FloatingCard, HitTarget, IndicatorDot,
    ProgressIndicator, Rect,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CheckpointDescriptor, CheckpointRegistry, DisplayMeta, Event, KeyCode, KeyEvent,
        Modifiers, Rgb, Rgba, ScrollMetrics, SectionTheme,
    };

    #[cfg(feature = "runtime")]
    pub use crate::{
        CloseDirection, Controller, MotionProfile, Phase, ScrollHost, Snapshot, TimingConfig,
    };

    #[cfg(feature = "view")]
    pub use crate::{BackgroundScene, DetailSurface, FloatingCard, ProgressIndicator};
}
