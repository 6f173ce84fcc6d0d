#![forbid(unsafe_code)]

//! Core: input events, checkpoint registry, progress math, and animation
//! primitives for the Scrollpoint controller.
//!
//! Everything in this crate is leaf data and pure computation: no timers,
//! no side effects, no host access. The runtime crate builds the actual
//! controller on top of these types.

pub mod animation;
pub mod event;
pub mod progress;
pub mod registry;
pub mod resolver;
pub mod theme;

pub use event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, WheelEvent};
pub use progress::{ScrollMetrics, ScrollSample};
pub use registry::{CheckpointDescriptor, CheckpointRegistry, DisplayMeta, RegistryError};
pub use resolver::resolve_nearest;
pub use theme::{Rgb, Rgba, SectionTheme};
