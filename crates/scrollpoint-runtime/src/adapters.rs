#![forbid(unsafe_code)]

//! Input adapters: wheel, keyboard, and scroll-snap.
//!
//! Adapters translate raw input into navigation intents; they never touch
//! the state machine themselves. The controller feeds them, applies the
//! lock and focus-trap gates, and routes the resulting intents through the
//! facade. External click sources skip this layer entirely and call the
//! facade directly.

use std::time::{Duration, Instant};

use scrollpoint_core::event::{KeyCode, KeyEvent, KeyEventKind, Modifiers, WheelEvent};
use scrollpoint_core::progress::ScrollSample;
use scrollpoint_core::registry::CheckpointRegistry;
use scrollpoint_core::resolver::resolve_nearest;
use tracing::{debug, trace};

// ---------------------------------------------------------------------------
// Wheel
// ---------------------------------------------------------------------------

/// Step intent produced by the wheel adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelIntent {
    /// Not enough accumulated delta yet.
    None,
    /// Step forward.
    Next,
    /// Step backward.
    Previous,
}

/// Accumulates wheel deltas into discrete checkpoint steps.
///
/// While the controller is mounted it owns scrolling: hosts must suppress
/// their native wheel handling (the `preventDefault` analog) and let the
/// emitted intents drive navigation instead.
#[derive(Debug, Clone)]
pub struct WheelAdapter {
    accumulated: f32,
    threshold: f32,
}

impl WheelAdapter {
    /// Create an adapter with the given step threshold in host pixels.
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            accumulated: 0.0,
            threshold,
        }
    }

    /// Feed a wheel event.
    ///
    /// Deltas arriving while a navigation is in flight are discarded along
    /// with any accumulation, so an unlock never releases a burst of
    /// queued-up steps.
    pub fn push(&mut self, event: &WheelEvent, locked: bool) -> WheelIntent {
        if locked {
            self.accumulated = 0.0;
            return WheelIntent::None;
        }

        self.accumulated += event.delta_y;
        if self.accumulated.abs() <= self.threshold {
            return WheelIntent::None;
        }

        let intent = if self.accumulated > 0.0 {
            WheelIntent::Next
        } else {
            WheelIntent::Previous
        };
        trace!(accumulated = self.accumulated, ?intent, "wheel step");
        self.accumulated = 0.0;
        intent
    }

    /// Drop any accumulated delta.
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}

// ---------------------------------------------------------------------------
// Keyboard
// ---------------------------------------------------------------------------

/// Navigation intent produced by the keyboard adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    /// Step to the next checkpoint.
    Next,
    /// Step to the previous checkpoint.
    Previous,
    /// Jump to the first checkpoint.
    First,
    /// Jump to the last checkpoint.
    Last,
}

/// Map a key event to a navigation intent.
///
/// Key releases never navigate; repeats do, so holding an arrow key walks
/// through checkpoints at the host's repeat rate. Chorded keys (Ctrl, Alt,
/// Meta) are left for the host — only plain and Shift-modified keys map.
#[must_use]
pub fn map_key(event: &KeyEvent) -> Option<NavIntent> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    if event
        .modifiers
        .intersects(Modifiers::CTRL | Modifiers::ALT | Modifiers::META)
    {
        return None;
    }

    match event.code {
        KeyCode::ArrowDown | KeyCode::PageDown => Some(NavIntent::Next),
        KeyCode::ArrowUp | KeyCode::PageUp => Some(NavIntent::Previous),
        // Space pages forward, Shift+Space pages back.
        KeyCode::Char(' ') => {
            if event.modifiers.contains(Modifiers::SHIFT) {
                Some(NavIntent::Previous)
            } else {
                Some(NavIntent::Next)
            }
        }
        KeyCode::Home => Some(NavIntent::First),
        KeyCode::End => Some(NavIntent::Last),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Scroll snap
// ---------------------------------------------------------------------------

/// A debounce deadline the controller schedules after each sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapDeadline {
    /// Sequence number identifying the sample run this deadline closes.
    pub seq: u64,
    /// When the scroll counts as settled.
    pub fire_at: Instant,
}

/// Snaps a resting scroll position to its nearest checkpoint.
///
/// Every sample restarts the debounce window; only the deadline matching
/// the newest sample run settles. On settle, the nearest checkpoint must
/// beat the current one by a hysteresis margin before a navigation fires —
/// progress resting near the midpoint between two targets would otherwise
/// flip-flop between them on every jitter.
#[derive(Debug, Clone)]
pub struct SnapAdapter {
    debounce: Duration,
    hysteresis: f32,
    seq: u64,
    latest: Option<ScrollSample>,
}

impl SnapAdapter {
    /// Create a snap adapter with the given debounce window and margin.
    #[must_use]
    pub fn new(debounce: Duration, hysteresis: f32) -> Self {
        Self {
            debounce,
            hysteresis,
            seq: 0,
            latest: None,
        }
    }

    /// Note a fresh sample; returns the deadline to schedule.
    pub fn note_sample(&mut self, sample: ScrollSample) -> SnapDeadline {
        self.seq += 1;
        self.latest = Some(sample);
        SnapDeadline {
            seq: self.seq,
            fire_at: sample.at + self.debounce,
        }
    }

    /// Handle an elapsed debounce deadline.
    ///
    /// Returns the checkpoint to navigate to, or `None` when the deadline
    /// is stale, the controller is busy, or the position should hold.
    pub fn settle(
        &self,
        seq: u64,
        registry: &CheckpointRegistry,
        current: usize,
        locked: bool,
    ) -> Option<usize> {
        if seq != self.seq {
            trace!(seq, newest = self.seq, "stale snap deadline, ignoring");
            return None;
        }
        if locked {
            trace!("navigation in flight, skipping snap");
            return None;
        }
        let sample = self.latest?;

        let nearest = resolve_nearest(sample.progress, registry);
        if nearest == current {
            return None;
        }

        let to_current = (sample.progress - registry.checkpoint(current).target_progress).abs();
        let to_nearest = (sample.progress - registry.checkpoint(nearest).target_progress).abs();
        if to_current - to_nearest <= self.hysteresis {
            trace!(
                progress = sample.progress,
                nearest,
                current,
                "within hysteresis margin, holding"
            );
            return None;
        }

        debug!(progress = sample.progress, from = current, to = nearest, "snap");
        Some(nearest)
    }

    /// Forget prior samples and invalidate outstanding deadlines.
    pub fn reset(&mut self) {
        self.seq += 1;
        self.latest = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollpoint_core::registry::{CheckpointDescriptor, DisplayMeta};

    fn registry() -> CheckpointRegistry {
        let targets = [0.0, 0.25, 0.5, 0.75, 1.0];
        let entries = targets
            .iter()
            .enumerate()
            .map(|(i, &t)| {
                CheckpointDescriptor::new(
                    format!("cp{i}"),
                    i as u32,
                    t,
                    DisplayMeta::new(format!("cp{i}"), "", ""),
                )
            })
            .collect();
        CheckpointRegistry::new(entries).unwrap()
    }

    fn sample(progress: f32, at: Instant) -> ScrollSample {
        ScrollSample {
            raw_offset: progress * 4000.0,
            progress,
            at,
        }
    }

    // -- wheel ---------------------------------------------------------------

    #[test]
    fn wheel_steps_after_threshold() {
        let mut w = WheelAdapter::new(30.0);
        assert_eq!(w.push(&WheelEvent::vertical(20.0), false), WheelIntent::None);
        assert_eq!(w.push(&WheelEvent::vertical(15.0), false), WheelIntent::Next);
        // Accumulator reset after the step.
        assert_eq!(w.push(&WheelEvent::vertical(20.0), false), WheelIntent::None);
    }

    #[test]
    fn wheel_steps_backward_on_negative_delta() {
        let mut w = WheelAdapter::new(30.0);
        assert_eq!(
            w.push(&WheelEvent::vertical(-31.0), false),
            WheelIntent::Previous
        );
    }

    #[test]
    fn wheel_exactly_at_threshold_does_not_step() {
        let mut w = WheelAdapter::new(30.0);
        assert_eq!(w.push(&WheelEvent::vertical(30.0), false), WheelIntent::None);
    }

    #[test]
    fn wheel_discards_deltas_while_locked() {
        let mut w = WheelAdapter::new(30.0);
        assert_eq!(w.push(&WheelEvent::vertical(100.0), true), WheelIntent::None);
        // The locked burst left nothing behind.
        assert_eq!(w.push(&WheelEvent::vertical(20.0), false), WheelIntent::None);
    }

    #[test]
    fn wheel_opposite_deltas_cancel() {
        let mut w = WheelAdapter::new(30.0);
        w.push(&WheelEvent::vertical(25.0), false);
        w.push(&WheelEvent::vertical(-20.0), false);
        assert_eq!(w.push(&WheelEvent::vertical(20.0), false), WheelIntent::None);
    }

    // -- keyboard ------------------------------------------------------------

    #[test]
    fn arrow_and_space_keys_map() {
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::ArrowDown)),
            Some(NavIntent::Next)
        );
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::ArrowUp)),
            Some(NavIntent::Previous)
        );
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::Char(' '))),
            Some(NavIntent::Next)
        );
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::Char(' ')).with_modifiers(Modifiers::SHIFT)),
            Some(NavIntent::Previous)
        );
        assert_eq!(map_key(&KeyEvent::new(KeyCode::Home)), Some(NavIntent::First));
        assert_eq!(map_key(&KeyEvent::new(KeyCode::End)), Some(NavIntent::Last));
    }

    #[test]
    fn releases_and_chords_do_not_navigate() {
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::ArrowDown).with_kind(KeyEventKind::Release)),
            None
        );
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::ArrowDown).with_modifiers(Modifiers::CTRL)),
            None
        );
        assert_eq!(map_key(&KeyEvent::new(KeyCode::Char('j'))), None);
    }

    #[test]
    fn repeats_navigate() {
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::ArrowDown).with_kind(KeyEventKind::Repeat)),
            Some(NavIntent::Next)
        );
    }

    // -- snap ----------------------------------------------------------------

    #[test]
    fn settle_snaps_to_clearly_nearest_checkpoint() {
        let reg = registry();
        let mut snap = SnapAdapter::new(Duration::from_millis(120), 0.03);
        let t0 = Instant::now();
        let deadline = snap.note_sample(sample(0.45, t0));
        assert_eq!(deadline.fire_at, t0 + Duration::from_millis(120));
        assert_eq!(snap.settle(deadline.seq, &reg, 1, false), Some(2));
    }

    #[test]
    fn stale_deadline_is_ignored() {
        let reg = registry();
        let mut snap = SnapAdapter::new(Duration::from_millis(120), 0.03);
        let t0 = Instant::now();
        let first = snap.note_sample(sample(0.45, t0));
        let _second = snap.note_sample(sample(0.26, t0 + Duration::from_millis(50)));
        assert_eq!(snap.settle(first.seq, &reg, 1, false), None);
    }

    #[test]
    fn settle_holds_when_already_at_nearest() {
        let reg = registry();
        let mut snap = SnapAdapter::new(Duration::from_millis(120), 0.03);
        let deadline = snap.note_sample(sample(0.26, Instant::now()));
        assert_eq!(snap.settle(deadline.seq, &reg, 1, false), None);
    }

    #[test]
    fn settle_holds_inside_hysteresis_margin() {
        let reg = registry();
        let mut snap = SnapAdapter::new(Duration::from_millis(120), 0.03);
        // 0.38 is barely past the midpoint between targets 0.25 and 0.5;
        // the 0.01 advantage is inside the margin.
        let deadline = snap.note_sample(sample(0.38, Instant::now()));
        assert_eq!(snap.settle(deadline.seq, &reg, 1, false), None);
    }

    #[test]
    fn settle_moves_once_margin_is_cleared() {
        let reg = registry();
        let mut snap = SnapAdapter::new(Duration::from_millis(120), 0.03);
        let deadline = snap.note_sample(sample(0.42, Instant::now()));
        assert_eq!(snap.settle(deadline.seq, &reg, 1, false), Some(2));
    }

    #[test]
    fn settle_defers_while_locked() {
        let reg = registry();
        let mut snap = SnapAdapter::new(Duration::from_millis(120), 0.03);
        let deadline = snap.note_sample(sample(0.45, Instant::now()));
        assert_eq!(snap.settle(deadline.seq, &reg, 1, true), None);
    }

    #[test]
    fn reset_invalidates_outstanding_deadlines() {
        let reg = registry();
        let mut snap = SnapAdapter::new(Duration::from_millis(120), 0.03);
        let deadline = snap.note_sample(sample(0.45, Instant::now()));
        snap.reset();
        assert_eq!(snap.settle(deadline.seq, &reg, 1, false), None);
    }
}
