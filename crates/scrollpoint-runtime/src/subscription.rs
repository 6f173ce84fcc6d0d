#![forbid(unsafe_code)]

//! Snapshot subscriptions for render consumers.
//!
//! Consumers subscribe to a read-only snapshot of the controller state and
//! re-render on each publish. Everything runs on the one logical UI
//! thread, so delivery is a plain synchronous callback; there is no queue
//! and no cross-thread handoff. Consumers must never mutate controller
//! state from a callback — navigation intents go through the facade.

use tracing::trace;

use crate::machine::Phase;

/// Read-only view of the controller state, published on every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Index of the checkpoint the controller is settled on (or leaving).
    pub current_checkpoint: usize,
    /// In-flight target while a navigation is running.
    pub target_checkpoint: Option<usize>,
    /// Current transition phase.
    pub phase: Phase,
    /// Id of the active detail surface, if one is showing.
    pub active_detail_id: Option<String>,
    /// Latest normalized scroll progress.
    pub progress: f32,
}

impl Snapshot {
    /// The checkpoint render consumers should present: the in-flight
    /// target while navigating, the settled checkpoint otherwise.
    #[must_use]
    pub fn presented_checkpoint(&self) -> usize {
        self.target_checkpoint.unwrap_or(self.current_checkpoint)
    }
}

/// Handle identifying one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&Snapshot)>;

/// Registry of snapshot subscribers.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback; returns the handle used to unsubscribe.
    pub fn subscribe(&mut self, callback: impl FnMut(&Snapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        trace!(id = id.0, count = self.entries.len(), "subscriber added");
        id
    }

    /// Remove a subscription. Idempotent: returns false when the handle
    /// was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(sid, _)| *sid != id);
        before != self.entries.len()
    }

    /// Deliver a snapshot to every subscriber, in subscription order.
    pub fn publish(&mut self, snapshot: &Snapshot) {
        for (_, callback) in &mut self.entries {
            callback(snapshot);
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every subscription.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}
