#![forbid(unsafe_code)]

//! Deadline queue for timer-driven phase advancement.
//!
//! The controller never blocks; all waiting is expressed as deadlines in
//! this queue, drained by `Controller::tick`. Entries fire in deadline
//! order, with insertion order breaking ties, so chained phase timers are
//! never re-ordered by later events.

use std::time::Instant;

#[derive(Debug, Clone)]
struct TimerEntry<T> {
    fire_at: Instant,
    seq: u64,
    token: T,
}

/// An unordered store of pending deadlines, popped in firing order.
///
/// Capacity stays tiny (a couple of phase timers plus one snap debounce),
/// so a plain vector beats a heap here.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue<T> {
    entries: Vec<TimerEntry<T>>,
    next_seq: u64,
}

impl<T> TimerQueue<T> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    /// Schedule a token to fire at `fire_at`.
    pub fn schedule(&mut self, fire_at: Instant, token: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(TimerEntry {
            fire_at,
            seq,
            token,
        });
    }

    /// Pop the earliest entry whose deadline has passed.
    ///
    /// Returns the entry's deadline alongside its token; chained timers are
    /// scheduled relative to that deadline rather than the drain time, so a
    /// late tick does not stretch a phase sequence.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, T)> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.fire_at <= now)
            .min_by_key(|(_, e)| (e.fire_at, e.seq))
            .map(|(i, _)| i)?;
        let entry = self.entries.remove(idx);
        Some((entry.fire_at, entry.token))
    }

    /// Drop every entry matching the predicate.
    pub fn cancel_where(&mut self, mut pred: impl FnMut(&T) -> bool) {
        self.entries.retain(|e| !pred(&e.token));
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|e| e.fire_at).min()
    }

    /// Number of pending entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
