#![forbid(unsafe_code)]

//! View models for Scrollpoint render consumers.
//!
//! Each type here is a read-only consumer of controller [`Snapshot`]s: it
//! turns the published state into render-ready parameters (visibility,
//! scale, opacity, colors) and nothing else. View models never mutate
//! controller state; interaction they surface (a hit target, a close
//! affordance) is returned as data for the host to route through the
//! navigation facade.
//!
//! [`Snapshot`]: scrollpoint_runtime::Snapshot

pub mod card;
pub mod detail;
pub mod indicator;
pub mod scene;

pub use card::{CardMotion, CardVisual, FloatingCard};
pub use detail::DetailSurface;
pub use indicator::{IndicatorDot, ProgressIndicator};
pub use scene::{BackgroundScene, HitTarget, Rect};
