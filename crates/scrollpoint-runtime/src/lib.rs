#![forbid(unsafe_code)]

//! Scrollpoint Runtime
//!
//! This crate ties the core types into a working scroll checkpoint
//! controller: it consumes input events, drives the transition state
//! machine through its timer-ordered phases, and publishes read-only
//! snapshots to render consumers.
//!
//! # Key Components
//!
//! - [`Controller`] - mount/unmount lifecycle, event dispatch, timer drain
//! - [`Navigator`] - the navigation facade every intent funnels through
//! - [`TransitionMachine`] - checkpoint index + phase state machine
//! - [`ScrollSampler`] - throttled scroll observation over a [`ScrollHost`]
//! - [`SmoothScroller`] - owned, lifecycle-bound glide helper
//! - [`ControllerSimulator`] - deterministic driver for tests and demos
//!
//! # How it fits in the system
//!
//! The runtime is the center of the architecture: raw events flow in
//! through adapters, every navigation intent passes through the facade,
//! the state machine advances on scheduled deadlines, and consumers only
//! ever see published [`Snapshot`]s. Nothing renders here; view models
//! live one crate up.

pub mod adapters;
pub mod config;
pub mod controller;
pub mod facade;
pub mod machine;
pub mod sampler;
pub mod simulator;
pub mod smooth;
pub mod subscription;
pub mod timer;

pub use adapters::{NavIntent, SnapAdapter, WheelAdapter, WheelIntent, map_key};
pub use config::{MotionProfile, TimingConfig};
pub use controller::Controller;
pub use facade::{CloseDirection, NavOutcome, Navigator};
pub use machine::{Effect, NavError, Phase, PhaseTimer, TransitionMachine, TransitionState};
pub use sampler::{ScrollHost, ScrollSampler};
pub use simulator::{ControllerSimulator, SimHost};
pub use smooth::SmoothScroller;
pub use subscription::{Snapshot, Subscribers, SubscriptionId};
pub use timer::TimerQueue;
