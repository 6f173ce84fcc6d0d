#![forbid(unsafe_code)]

//! Deterministic controller simulator for testing.
//!
//! `ControllerSimulator` runs a [`Controller`] without a real host,
//! enabling scripted input, manual time advancement, and snapshot capture.
//! Time only moves when the test advances it, so phase sequences and
//! deadline handling are fully reproducible.
//!
//! # Example
//!
//! ```ignore
//! let mut sim = ControllerSimulator::new(registry, TimingConfig::default());
//! sim.go_to_id("about");
//! sim.advance(Duration::from_secs(2));
//! assert_eq!(sim.phase(), Phase::DetailActive);
//! assert_eq!(sim.phases(), vec![Phase::Idle, Phase::Centering, Phase::Zooming, Phase::DetailActive]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use scrollpoint_core::event::{Event, KeyCode, KeyEvent, WheelEvent};
use scrollpoint_core::progress::ScrollMetrics;
use scrollpoint_core::registry::CheckpointRegistry;

use crate::config::TimingConfig;
use crate::controller::Controller;
use crate::facade::CloseDirection;
use crate::machine::Phase;
use crate::sampler::ScrollHost;
use crate::subscription::Snapshot;

/// Frame cadence the simulator ticks at while advancing time.
const FRAME: Duration = Duration::from_millis(16);

/// An in-memory scroll surface.
#[derive(Debug, Clone, Copy)]
pub struct SimHost {
    scroll_top: f32,
    scroll_height: f32,
    client_height: f32,
}

impl SimHost {
    /// Create a surface with the given content and viewport heights.
    #[must_use]
    pub fn new(scroll_height: f32, client_height: f32) -> Self {
        Self {
            scroll_top: 0.0,
            scroll_height,
            client_height,
        }
    }

    /// Move the scroll offset directly, as a user drag would.
    pub fn drag_to(&mut self, offset: f32) {
        self.set_scroll_top(offset);
    }

    /// Change the surface geometry, as a layout change would.
    pub fn resize(&mut self, scroll_height: f32, client_height: f32) {
        self.scroll_height = scroll_height;
        self.client_height = client_height;
        self.set_scroll_top(self.scroll_top);
    }
}

impl ScrollHost for SimHost {
    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(self.scroll_top, self.scroll_height, self.client_height)
    }

    fn set_scroll_top(&mut self, offset: f32) {
        let range = (self.scroll_height - self.client_height).max(0.0);
        self.scroll_top = offset.clamp(0.0, range);
    }
}

/// Drives a [`Controller`] over a [`SimHost`] with manual time.
pub struct ControllerSimulator {
    controller: Controller<SimHost>,
    now: Instant,
    snapshots: Rc<RefCell<Vec<Snapshot>>>,
}

impl ControllerSimulator {
    /// Create a simulator mounted on a 5000x1000 surface and recording
    /// every published snapshot.
    #[must_use]
    pub fn new(registry: Arc<CheckpointRegistry>, config: TimingConfig) -> Self {
        Self::with_host(registry, config, SimHost::new(5000.0, 1000.0))
    }

    /// Create a simulator mounted on a specific host surface.
    #[must_use]
    pub fn with_host(
        registry: Arc<CheckpointRegistry>,
        config: TimingConfig,
        host: SimHost,
    ) -> Self {
        let mut controller = Controller::new(registry, config);
        let snapshots: Rc<RefCell<Vec<Snapshot>>> = Rc::new(RefCell::new(Vec::new()));
        let log = snapshots.clone();
        let now = Instant::now();
        controller.subscribe(move |s: &Snapshot| log.borrow_mut().push(s.clone()));
        controller.mount(host, now);
        Self {
            controller,
            now,
            snapshots,
        }
    }

    /// The simulated current time.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// The controller under simulation.
    #[must_use]
    pub fn controller(&self) -> &Controller<SimHost> {
        &self.controller
    }

    /// Mutable access to the controller under simulation.
    pub fn controller_mut(&mut self) -> &mut Controller<SimHost> {
        &mut self.controller
    }

    // -- time ----------------------------------------------------------------

    /// Advance simulated time, ticking the controller at frame cadence.
    pub fn advance(&mut self, dt: Duration) {
        let mut remaining = dt;
        while !remaining.is_zero() {
            let step = remaining.min(FRAME);
            self.now += step;
            remaining -= step;
            self.controller.tick(self.now);
        }
    }

    // -- scripted input ------------------------------------------------------

    /// Drag the surface to an offset and deliver the scroll event.
    pub fn scroll_to_offset(&mut self, offset: f32) {
        let metrics = match self.controller.host_mut() {
            Some(host) => {
                host.drag_to(offset);
                host.metrics()
            }
            None => return,
        };
        self.controller.handle_event(Event::Scroll(metrics), self.now);
    }

    /// Drag the surface to a normalized progress and deliver the event.
    pub fn scroll_to_progress(&mut self, progress: f32) {
        let offset = match self.controller.host() {
            Some(host) => host.metrics().offset_for_progress(progress),
            None => return,
        };
        self.scroll_to_offset(offset);
    }

    /// Deliver a key press.
    pub fn key(&mut self, code: KeyCode) {
        self.controller
            .handle_event(Event::Key(KeyEvent::new(code)), self.now);
    }

    /// Deliver a vertical wheel event.
    pub fn wheel(&mut self, delta_y: f32) {
        self.controller
            .handle_event(Event::Wheel(WheelEvent::vertical(delta_y)), self.now);
    }

    // -- facade passthroughs -------------------------------------------------

    /// Navigate to a checkpoint index.
    pub fn go_to(&mut self, index: usize) -> bool {
        self.controller.go_to_index(index, self.now)
    }

    /// Navigate to a checkpoint id.
    pub fn go_to_id(&mut self, id: &str) -> bool {
        self.controller.go_to_id(id, self.now)
    }

    /// Step forward.
    pub fn next(&mut self) -> bool {
        self.controller.next(self.now)
    }

    /// Step backward.
    pub fn previous(&mut self) -> bool {
        self.controller.previous(self.now)
    }

    /// Close the detail surface, optionally chaining onward.
    pub fn close_detail(&mut self, direction: Option<CloseDirection>) -> bool {
        self.controller.close_detail_and_navigate(direction, self.now)
    }

    /// Unmount the controller.
    pub fn unmount(&mut self) {
        self.controller.unmount();
    }

    // -- observation ---------------------------------------------------------

    /// The controller's current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    /// A fresh snapshot of the controller state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.controller.snapshot()
    }

    /// Every snapshot published so far.
    #[must_use]
    pub fn snapshots(&self) -> Vec<Snapshot> {
        self.snapshots.borrow().clone()
    }

    /// The sequence of distinct phases observed, consecutive duplicates
    /// collapsed, starting from the mount snapshot.
    #[must_use]
    pub fn phases(&self) -> Vec<Phase> {
        let mut phases = Vec::new();
        for snapshot in self.snapshots.borrow().iter() {
            if phases.last() != Some(&snapshot.phase) {
                phases.push(snapshot.phase);
            }
        }
        phases
    }

    /// Forget recorded snapshots (the live subscription stays).
    pub fn clear_log(&mut self) {
        self.snapshots.borrow_mut().clear();
    }
}

impl std::fmt::Debug for ControllerSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControllerSimulator")
            .field("controller", &self.controller)
            .field("recorded", &self.snapshots.borrow().len())
            .finish()
    }
}
