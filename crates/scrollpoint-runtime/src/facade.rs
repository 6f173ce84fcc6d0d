#![forbid(unsafe_code)]

//! The navigation facade.
//!
//! Every navigation intent — click, keyboard, wheel step, scroll snap,
//! programmatic call — funnels through [`Navigator`]. It is the only legal
//! mutator of the transition state: it validates targets, normalizes
//! machine errors to a boolean acceptance, and hands back the effects the
//! controller must execute. Nothing here throws across the public surface;
//! an invalid or locked request resolves to a rejected no-op.

use std::sync::Arc;

use scrollpoint_core::registry::CheckpointRegistry;
use tracing::{debug, trace};

use crate::config::TimingConfig;
use crate::machine::{Effect, TransitionMachine};

/// Where a detail surface's close affordance should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDirection {
    /// Close, then continue to the next checkpoint.
    Next,
    /// Close, then return to the previous checkpoint.
    Previous,
    /// Close and return home.
    Home,
}

/// Result of a facade operation: synchronous acceptance plus the effects
/// the caller must execute. The visual sequence itself is asynchronous.
#[derive(Debug, Clone, PartialEq)]
pub struct NavOutcome {
    /// Whether the request was accepted.
    pub accepted: bool,
    /// Effects to execute (empty for rejected or no-op requests).
    pub effects: Vec<Effect>,
}

impl NavOutcome {
    fn accepted(effects: Vec<Effect>) -> Self {
        Self {
            accepted: true,
            effects,
        }
    }

    fn rejected() -> Self {
        Self {
            accepted: false,
            effects: Vec::new(),
        }
    }
}

/// The single sanctioned entry point for navigation intents.
#[derive(Debug)]
pub struct Navigator {
    registry: Arc<CheckpointRegistry>,
    machine: TransitionMachine,
}

impl Navigator {
    /// Create a navigator over the given registry.
    #[must_use]
    pub fn new(registry: Arc<CheckpointRegistry>, config: TimingConfig) -> Self {
        let machine = TransitionMachine::new(registry.clone(), config);
        Self { registry, machine }
    }

    /// The underlying state machine, read-only.
    #[must_use]
    pub fn machine(&self) -> &TransitionMachine {
        &self.machine
    }

    /// Index of the settled (or departing) checkpoint.
    #[must_use]
    pub fn current(&self) -> usize {
        self.machine.state().current
    }

    /// Whether a navigation is in flight.
    #[must_use]
    pub fn is_navigating(&self) -> bool {
        self.machine.is_navigating()
    }

    /// Request navigation to a checkpoint index.
    pub fn go_to_index(&mut self, index: usize) -> NavOutcome {
        match self.machine.navigate(index) {
            Ok(effects) => NavOutcome::accepted(effects),
            Err(err) => {
                debug!(index, %err, "navigation rejected");
                NavOutcome::rejected()
            }
        }
    }

    /// Request navigation to a checkpoint id.
    pub fn go_to_id(&mut self, id: &str) -> NavOutcome {
        match self.registry.by_id(id) {
            Some((index, _)) => self.go_to_index(index),
            None => {
                debug!(id, "unknown checkpoint id, navigation rejected");
                NavOutcome::rejected()
            }
        }
    }

    /// Step to the next checkpoint. No-op at the last checkpoint.
    pub fn next(&mut self) -> NavOutcome {
        let current = self.current();
        if current >= self.registry.last_index() {
            trace!(current, "next at last checkpoint, ignoring");
            return NavOutcome::rejected();
        }
        self.go_to_index(current + 1)
    }

    /// Step to the previous checkpoint. No-op at the first checkpoint.
    pub fn previous(&mut self) -> NavOutcome {
        let current = self.current();
        if current == 0 {
            trace!("previous at first checkpoint, ignoring");
            return NavOutcome::rejected();
        }
        self.go_to_index(current - 1)
    }

    /// Close the active detail surface, optionally chaining into a
    /// follow-up navigation.
    ///
    /// With no direction the surface closes in place and the controller
    /// settles idle at the current checkpoint. A direction that would step
    /// past a boundary degrades to a plain close.
    pub fn close_detail_and_navigate(&mut self, direction: Option<CloseDirection>) -> NavOutcome {
        let current = self.current();
        let destination = match direction {
            None => None,
            Some(CloseDirection::Home) => Some(self.registry.home()),
            Some(CloseDirection::Next) => {
                (current < self.registry.last_index()).then(|| current + 1)
            }
            Some(CloseDirection::Previous) => current.checked_sub(1),
        };

        match destination {
            Some(index) if index != current => self.go_to_index(index),
            _ => match self.machine.dismiss_detail() {
                Ok(effects) => NavOutcome::accepted(effects),
                Err(err) => {
                    debug!(%err, "detail dismissal rejected");
                    NavOutcome::rejected()
                }
            },
        }
    }

    /// Handle an elapsed phase deadline (controller plumbing).
    pub(crate) fn timer_fired(
        &mut self,
        timer: crate::machine::PhaseTimer,
        generation: u64,
    ) -> Vec<Effect> {
        self.machine.timer_fired(timer, generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::{Phase, PhaseTimer};
    use scrollpoint_core::registry::{CheckpointDescriptor, DisplayMeta};

    fn registry() -> Arc<CheckpointRegistry> {
        let entries = vec![
            CheckpointDescriptor::new("home", 0, 0.0, DisplayMeta::new("Home", "", ""))
                .without_detail_surface(),
            CheckpointDescriptor::new("about", 1, 0.25, DisplayMeta::new("About", "", "")),
            CheckpointDescriptor::new("skills", 2, 0.5, DisplayMeta::new("Skills", "", "")),
        ];
        Arc::new(CheckpointRegistry::new(entries).unwrap())
    }

    fn navigator() -> Navigator {
        Navigator::new(registry(), TimingConfig::default())
    }

    /// Run all scheduled deadlines so the navigator comes to rest.
    fn settle(nav: &mut Navigator, outcome: &NavOutcome) {
        let mut pending: Vec<(PhaseTimer, u64)> = outcome
            .effects
            .iter()
            .filter_map(|e| match e {
                Effect::Schedule {
                    timer, generation, ..
                } => Some((*timer, *generation)),
                _ => None,
            })
            .collect();
        while let Some((timer, generation)) = pending.pop() {
            let effects = nav.timer_fired(timer, generation);
            pending.extend(effects.iter().filter_map(|e| match e {
                Effect::Schedule {
                    timer, generation, ..
                } => Some((*timer, *generation)),
                _ => None,
            }));
        }
    }

    #[test]
    fn go_to_id_resolves_and_accepts() {
        let mut nav = navigator();
        let outcome = nav.go_to_id("skills");
        assert!(outcome.accepted);
        assert_eq!(nav.machine().state().target, Some(2));
    }

    #[test]
    fn unknown_id_is_rejected_without_state_change() {
        let mut nav = navigator();
        let outcome = nav.go_to_id("blog");
        assert!(!outcome.accepted);
        assert!(outcome.effects.is_empty());
        assert_eq!(nav.machine().state().phase, Phase::Idle);
    }

    #[test]
    fn second_request_while_locked_returns_false() {
        let mut nav = navigator();
        assert!(nav.go_to_index(2).accepted);
        let second = nav.go_to_index(1);
        assert!(!second.accepted);
        // The first navigation still lands.
        assert_eq!(nav.machine().state().target, Some(2));
    }

    #[test]
    fn previous_at_home_is_a_quiet_no_op() {
        let mut nav = navigator();
        let outcome = nav.previous();
        assert!(!outcome.accepted);
        assert!(outcome.effects.is_empty());
        assert_eq!(nav.current(), 0);
        assert_eq!(nav.machine().state().phase, Phase::Idle);
    }

    #[test]
    fn next_at_last_is_a_quiet_no_op() {
        let mut nav = navigator();
        let outcome = nav.go_to_index(2);
        settle(&mut nav, &outcome);
        assert_eq!(nav.current(), 2);

        let outcome = nav.next();
        assert!(!outcome.accepted);
        assert_eq!(nav.current(), 2);
        assert_eq!(nav.machine().state().phase, Phase::DetailActive);
    }

    #[test]
    fn next_steps_through_the_sequence() {
        let mut nav = navigator();
        let outcome = nav.next();
        assert!(outcome.accepted);
        assert_eq!(nav.machine().state().target, Some(1));
    }

    #[test]
    fn close_detail_home_returns_to_idle_at_home() {
        let mut nav = navigator();
        let outcome = nav.go_to_id("about");
        settle(&mut nav, &outcome);
        assert_eq!(nav.machine().state().phase, Phase::DetailActive);

        let outcome = nav.close_detail_and_navigate(Some(CloseDirection::Home));
        assert!(outcome.accepted);
        settle(&mut nav, &outcome);
        assert_eq!(nav.current(), 0);
        assert_eq!(nav.machine().state().phase, Phase::Idle);
        assert_eq!(nav.machine().state().target, None);
    }

    #[test]
    fn close_detail_without_direction_settles_in_place() {
        let mut nav = navigator();
        let outcome = nav.go_to_id("skills");
        settle(&mut nav, &outcome);

        let outcome = nav.close_detail_and_navigate(None);
        assert!(outcome.accepted);
        settle(&mut nav, &outcome);
        assert_eq!(nav.current(), 2);
        assert_eq!(nav.machine().state().phase, Phase::Idle);
    }

    #[test]
    fn close_detail_next_at_last_degrades_to_plain_close() {
        let mut nav = navigator();
        let outcome = nav.go_to_index(2);
        settle(&mut nav, &outcome);

        let outcome = nav.close_detail_and_navigate(Some(CloseDirection::Next));
        assert!(outcome.accepted);
        settle(&mut nav, &outcome);
        assert_eq!(nav.current(), 2);
        assert_eq!(nav.machine().state().phase, Phase::Idle);
    }

    #[test]
    fn close_detail_previous_steps_back() {
        let mut nav = navigator();
        let outcome = nav.go_to_index(2);
        settle(&mut nav, &outcome);

        let outcome = nav.close_detail_and_navigate(Some(CloseDirection::Previous));
        assert!(outcome.accepted);
        settle(&mut nav, &outcome);
        assert_eq!(nav.current(), 1);
        assert_eq!(nav.machine().state().phase, Phase::DetailActive);
    }
}
