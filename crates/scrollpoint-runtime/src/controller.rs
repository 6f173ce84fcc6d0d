#![forbid(unsafe_code)]

//! The controller: lifecycle, event dispatch, and timer drain.
//!
//! Owns every moving part — facade, sampler, adapters, smooth scroller,
//! deadline queue, subscriber registry — and wires them into the one-way
//! flow: raw events in, facade-mediated state changes, snapshots out.
//!
//! Hosts drive the controller with [`handle_event`](Controller::handle_event)
//! for input and a [`tick`](Controller::tick) per frame for time. All
//! methods take an explicit `now` so behavior is reproducible under test.
//!
//! # Lifecycle
//!
//! [`mount`](Controller::mount) attaches the host, arms the sampler, and
//! enables the smooth scroller; [`unmount`](Controller::unmount) cancels
//! every outstanding deadline, detaches the sampler, disposes the
//! scroller, clears subscribers, and releases the host. After unmount no
//! timer can fire and no snapshot is delivered.

use std::sync::Arc;
use std::time::{Duration, Instant};

use scrollpoint_core::event::Event;
use scrollpoint_core::progress::ScrollMetrics;
use scrollpoint_core::registry::CheckpointRegistry;
use tracing::{debug, info, trace, warn};

use crate::adapters::{map_key, NavIntent, SnapAdapter, WheelAdapter, WheelIntent};
use crate::config::TimingConfig;
use crate::facade::{CloseDirection, NavOutcome, Navigator};
use crate::machine::{Effect, Phase, PhaseTimer};
use crate::sampler::{ScrollHost, ScrollSampler};
use crate::smooth::SmoothScroller;
use crate::subscription::{Snapshot, Subscribers, SubscriptionId};
use crate::timer::TimerQueue;

/// Tokens in the controller's deadline queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerToken {
    /// A phase deadline, stamped with the generation it belongs to.
    Phase {
        timer: PhaseTimer,
        generation: u64,
    },
    /// A scroll-settle debounce deadline.
    SnapSettle { seq: u64 },
}

/// The scroll checkpoint controller.
pub struct Controller<H: ScrollHost> {
    config: TimingConfig,
    navigator: Navigator,
    sampler: ScrollSampler,
    wheel: WheelAdapter,
    snap: SnapAdapter,
    smooth: SmoothScroller,
    timers: TimerQueue<TimerToken>,
    subscribers: Subscribers,
    host: Option<H>,
    last_tick: Option<Instant>,
    keys_delegated: bool,
}

impl<H: ScrollHost> Controller<H> {
    /// Create an unmounted controller over the given registry.
    #[must_use]
    pub fn new(registry: Arc<CheckpointRegistry>, config: TimingConfig) -> Self {
        Self {
            navigator: Navigator::new(registry, config),
            sampler: ScrollSampler::new(config.sample_throttle),
            wheel: WheelAdapter::new(config.wheel_threshold),
            snap: SnapAdapter::new(config.snap_debounce, config.snap_hysteresis),
            smooth: SmoothScroller::new(config.glide_duration, config.glide_offset),
            timers: TimerQueue::new(),
            subscribers: Subscribers::new(),
            host: None,
            last_tick: None,
            keys_delegated: false,
            config,
        }
    }

    // -- lifecycle -----------------------------------------------------------

    /// Attach the scroll host and begin observing.
    pub fn mount(&mut self, host: H, now: Instant) {
        if self.host.is_some() {
            warn!("controller already mounted, ignoring");
            return;
        }
        self.host = Some(host);
        self.sampler.observe();
        self.smooth.init();
        self.last_tick = Some(now);
        info!("controller mounted");
        self.publish();
    }

    /// Detach from the host, cancel all deadlines, and drop subscribers.
    ///
    /// Idempotent. After this returns, no timer fires and no snapshot is
    /// delivered until the controller is mounted again.
    pub fn unmount(&mut self) {
        if self.host.is_none() {
            trace!("controller not mounted, nothing to unmount");
            return;
        }
        self.timers.clear();
        self.sampler.unobserve();
        self.smooth.dispose();
        self.wheel.reset();
        self.snap.reset();
        self.subscribers.clear();
        self.host = None;
        self.last_tick = None;
        info!("controller unmounted");
    }

    /// Whether a host is currently attached.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.host.is_some()
    }

    /// Whether the host should suppress its native wheel handling.
    ///
    /// True for the whole mounted lifetime: once checkpoint snapping owns
    /// the surface, raw wheel deltas must reach the adapter instead of
    /// scrolling natively.
    #[must_use]
    pub fn captures_wheel(&self) -> bool {
        self.host.is_some()
    }

    /// The attached host, if mounted.
    #[must_use]
    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    /// Mutable access to the attached host.
    #[must_use]
    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    // -- state reads ---------------------------------------------------------

    /// The current transition phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.navigator.machine().state().phase
    }

    /// Index of the settled (or departing) checkpoint.
    #[must_use]
    pub fn current_checkpoint(&self) -> usize {
        self.navigator.current()
    }

    /// Whether a navigation is in flight.
    #[must_use]
    pub fn is_navigating(&self) -> bool {
        self.navigator.is_navigating()
    }

    /// The registry this controller navigates over.
    #[must_use]
    pub fn registry(&self) -> Arc<CheckpointRegistry> {
        self.navigator.machine().registry().clone()
    }

    /// Build a fresh consumer snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let progress = self
            .sampler
            .latest()
            .map(|s| s.progress)
            .or_else(|| self.host.as_ref().map(|h| h.metrics().progress()))
            .unwrap_or(0.0);
        self.navigator.machine().snapshot(progress)
    }

    // -- subscriptions -------------------------------------------------------

    /// Subscribe to snapshots; the callback fires on every state mutation.
    pub fn subscribe(&mut self, callback: impl FnMut(&Snapshot) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    /// Remove a subscription. Idempotent.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Let keyboard navigation through while a detail surface is active.
    ///
    /// A detail surface normally holds its own focus trap, so navigation
    /// keys are ignored while one is open; a surface that wants the
    /// controller to keep handling keys delegates explicitly.
    pub fn set_key_delegation(&mut self, delegated: bool) {
        self.keys_delegated = delegated;
    }

    // -- navigation facade ---------------------------------------------------

    /// Navigate to a checkpoint index. Returns acceptance immediately; the
    /// visual sequence runs on scheduled deadlines.
    pub fn go_to_index(&mut self, index: usize, now: Instant) -> bool {
        let outcome = self.navigator.go_to_index(index);
        self.apply(outcome, now)
    }

    /// Navigate to a checkpoint id.
    pub fn go_to_id(&mut self, id: &str, now: Instant) -> bool {
        let outcome = self.navigator.go_to_id(id);
        self.apply(outcome, now)
    }

    /// Step to the next checkpoint. No-op at the end.
    pub fn next(&mut self, now: Instant) -> bool {
        let outcome = self.navigator.next();
        self.apply(outcome, now)
    }

    /// Step to the previous checkpoint. No-op at the start.
    pub fn previous(&mut self, now: Instant) -> bool {
        let outcome = self.navigator.previous();
        self.apply(outcome, now)
    }

    /// Close the active detail surface, optionally chaining onward.
    pub fn close_detail_and_navigate(
        &mut self,
        direction: Option<CloseDirection>,
        now: Instant,
    ) -> bool {
        let outcome = self.navigator.close_detail_and_navigate(direction);
        self.apply(outcome, now)
    }

    // -- event dispatch ------------------------------------------------------

    /// Feed one input event.
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        if self.host.is_none() {
            trace!(?event, "controller not mounted, dropping event");
            return;
        }
        match event {
            Event::Key(key) => {
                if self.phase() == Phase::DetailActive && !self.keys_delegated {
                    trace!(?key, "detail surface holds focus, ignoring key");
                    return;
                }
                match map_key(&key) {
                    Some(NavIntent::Next) => {
                        self.next(now);
                    }
                    Some(NavIntent::Previous) => {
                        self.previous(now);
                    }
                    Some(NavIntent::First) => {
                        self.go_to_index(0, now);
                    }
                    Some(NavIntent::Last) => {
                        let last = self.navigator.machine().registry().last_index();
                        self.go_to_index(last, now);
                    }
                    None => {}
                }
            }
            Event::Wheel(wheel) => {
                let locked = self.navigator.is_navigating();
                match self.wheel.push(&wheel, locked) {
                    WheelIntent::Next => {
                        self.next(now);
                    }
                    WheelIntent::Previous => {
                        self.previous(now);
                    }
                    WheelIntent::None => {}
                }
            }
            Event::Scroll(metrics) => self.ingest_metrics(metrics, now),
            Event::Resize { width, height } => {
                debug!(width, height, "host resized, re-reading geometry");
                let metrics = self.host.as_ref().map(|h| h.metrics());
                if let Some(metrics) = metrics {
                    self.ingest_metrics(metrics, now);
                }
            }
            Event::Tick => self.tick(now),
        }
    }

    /// Advance time: step the smooth scroller and drain due deadlines.
    pub fn tick(&mut self, now: Instant) {
        if self.host.is_none() {
            return;
        }
        let dt = self
            .last_tick
            .map(|t| now.saturating_duration_since(t))
            .unwrap_or(Duration::ZERO);
        self.last_tick = Some(now);

        if let Some(offset) = self.smooth.tick(dt) {
            let metrics = self.host.as_mut().map(|host| {
                host.set_scroll_top(offset);
                host.metrics()
            });
            if let Some(metrics) = metrics {
                self.ingest_metrics(metrics, now);
            }
        }

        self.drain_timers(now);
    }

    // -- internals -----------------------------------------------------------

    fn ingest_metrics(&mut self, metrics: ScrollMetrics, now: Instant) {
        if let Some(sample) = self.sampler.sample(metrics, now) {
            let deadline = self.snap.note_sample(sample);
            self.timers
                .schedule(deadline.fire_at, TimerToken::SnapSettle { seq: deadline.seq });
            self.publish();
        }
    }

    fn drain_timers(&mut self, now: Instant) {
        while let Some((fired_at, token)) = self.timers.pop_due(now) {
            match token {
                TimerToken::Phase { timer, generation } => {
                    let effects = self.navigator.timer_fired(timer, generation);
                    // Chained deadlines are scheduled relative to this
                    // deadline, not the drain time.
                    self.execute(effects, fired_at);
                }
                TimerToken::SnapSettle { seq } => {
                    let locked = self.navigator.is_navigating() || self.smooth.is_active();
                    let registry = self.navigator.machine().registry().clone();
                    let target =
                        self.snap
                            .settle(seq, &registry, self.navigator.current(), locked);
                    if let Some(target) = target {
                        let outcome = self.navigator.go_to_index(target);
                        self.execute(outcome.effects, fired_at);
                    }
                }
            }
        }
    }

    fn apply(&mut self, outcome: NavOutcome, now: Instant) -> bool {
        self.execute(outcome.effects, now);
        outcome.accepted
    }

    fn execute(&mut self, effects: Vec<Effect>, base: Instant) {
        for effect in effects {
            match effect {
                Effect::Schedule {
                    timer,
                    generation,
                    delay,
                } => {
                    self.timers
                        .schedule(base + delay, TimerToken::Phase { timer, generation });
                }
                Effect::CancelPhaseTimers => {
                    self.timers
                        .cancel_where(|t| matches!(t, TimerToken::Phase { .. }));
                }
                Effect::GlideTo { progress } => {
                    if let Some(host) = self.host.as_ref() {
                        let metrics = host.metrics();
                        self.smooth
                            .scroll_to(metrics.scroll_top, metrics.offset_for_progress(progress));
                    }
                }
                Effect::Publish => self.publish(),
            }
        }
    }

    fn publish(&mut self) {
        let snapshot = self.snapshot();
        self.subscribers.publish(&snapshot);
    }
}

impl<H: ScrollHost> std::fmt::Debug for Controller<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("mounted", &self.host.is_some())
            .field("state", self.navigator.machine().state())
            .field("pending_timers", &self.timers.len())
            .field("subscribers", &self.subscribers.len())
            .field("config", &self.config)
            .finish()
    }
}
