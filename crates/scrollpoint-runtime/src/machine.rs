#![forbid(unsafe_code)]

//! The transition state machine.
//!
//! Owns the current checkpoint index, the transition phase, and the
//! navigation lock. Accepted navigations advance through their phases on a
//! fixed timing schedule:
//!
//! ```text
//! Idle ──navigate──▶ Centering ──T1──▶ Zooming ──T2──▶ DetailActive
//!                        ▲                                   │
//!                        └────────────── T3 ◀──navigate──────┘
//!                                     (Exiting)
//! ```
//!
//! Leaving `DetailActive` always passes through `Exiting`, mirroring the
//! entry animation in reverse, before the next target's sequence begins
//! (or `Idle`, when the target has no detail surface).
//!
//! # Invariants
//!
//! 1. At most one navigation is in flight: while the lock is held, new
//!    requests are dropped (re-requesting the in-flight target is an
//!    idempotent no-op).
//! 2. Phase advancement for one navigation is strictly ordered; deadlines
//!    are stamped with the machine's generation, and a deadline whose
//!    stamp no longer matches is discarded when it fires. Accepting a
//!    navigation increments the generation, so no stale timer can ever
//!    force a phase transition.
//!
//! The machine performs no scheduling itself: every operation returns the
//! [`Effect`]s the caller must execute (schedule/cancel deadlines, glide
//! the scroll surface, publish a snapshot). That keeps it synchronous and
//! fully deterministic under test.

use std::sync::Arc;
use std::time::Duration;

use scrollpoint_core::registry::CheckpointRegistry;
use tracing::{debug, trace};

use crate::config::TimingConfig;
use crate::subscription::Snapshot;

/// The current step of an in-flight (or idle) transition sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No active transition; the detail surface is inactive.
    #[default]
    Idle,
    /// The card is moving toward screen center.
    Centering,
    /// The card is scaling up to fill the viewport.
    Zooming,
    /// The detail surface is the active render target.
    DetailActive,
    /// The card is shrinking away after leaving a detail surface.
    Exiting,
}

/// Timers that advance the phase sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseTimer {
    /// Centering finished; enter `Zooming`.
    CenterDone,
    /// Zooming finished; enter `DetailActive`.
    ZoomDone,
    /// Exiting finished; settle or chain into the next sequence.
    ExitDone,
}

/// Side effects the caller must execute after a machine operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Schedule a phase deadline `delay` from the operation's base time,
    /// stamped with the generation it belongs to.
    Schedule {
        timer: PhaseTimer,
        generation: u64,
        delay: Duration,
    },
    /// Cancel every outstanding phase deadline.
    CancelPhaseTimers,
    /// Glide the scroll surface to the given normalized progress.
    GlideTo { progress: f32 },
    /// State changed; publish a fresh snapshot to subscribers.
    Publish,
}

/// Why a navigation request was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavError {
    /// The requested index is outside the registry.
    InvalidCheckpoint { index: usize },
    /// A navigation is already in flight; the request was dropped.
    Locked,
}

impl std::fmt::Display for NavError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCheckpoint { index } => {
                write!(f, "checkpoint index {index} is out of range")
            }
            Self::Locked => write!(f, "a navigation is already in flight"),
        }
    }
}

impl std::error::Error for NavError {}

/// Mutable transition state, owned exclusively by the machine.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionState {
    /// Index of the checkpoint the controller is settled on (or leaving).
    pub current: usize,
    /// Current transition phase.
    pub phase: Phase,
    /// Navigation lock; true from acceptance until the sequence settles.
    pub navigating: bool,
    /// The in-flight target while navigating.
    pub target: Option<usize>,
    /// Stamp identifying the currently-valid navigation sequence.
    pub generation: u64,
}

impl Default for TransitionState {
    fn default() -> Self {
        Self {
            current: 0,
            phase: Phase::Idle,
            navigating: false,
            target: None,
            generation: 0,
        }
    }
}

/// The checkpoint transition state machine.
#[derive(Debug, Clone)]
pub struct TransitionMachine {
    registry: Arc<CheckpointRegistry>,
    config: TimingConfig,
    state: TransitionState,
}

impl TransitionMachine {
    /// Create a machine settled at the home checkpoint.
    #[must_use]
    pub fn new(registry: Arc<CheckpointRegistry>, config: TimingConfig) -> Self {
        Self {
            registry,
            config,
            state: TransitionState::default(),
        }
    }

    /// Read-only view of the transition state.
    #[must_use]
    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    /// The registry this machine navigates over.
    #[must_use]
    pub fn registry(&self) -> &Arc<CheckpointRegistry> {
        &self.registry
    }

    /// Whether a navigation is currently in flight.
    #[must_use]
    pub fn is_navigating(&self) -> bool {
        self.state.navigating
    }

    /// Request navigation to a checkpoint index.
    ///
    /// Synchronous acceptance: `Ok` means the request was taken (possibly
    /// as a no-op when already settled on the target); the visual sequence
    /// then advances via [`timer_fired`](Self::timer_fired). While locked,
    /// requests for other targets are dropped with [`NavError::Locked`];
    /// re-requesting the in-flight target is idempotent.
    pub fn navigate(&mut self, target: usize) -> Result<Vec<Effect>, NavError> {
        if target >= self.registry.len() {
            return Err(NavError::InvalidCheckpoint { index: target });
        }

        if self.state.navigating {
            if self.state.target == Some(target) {
                trace!(target, "navigation already in flight to target, ignoring");
                return Ok(Vec::new());
            }
            trace!(target, "navigation locked, dropping request");
            return Err(NavError::Locked);
        }

        // Unlocked, so the phase is a resting one.
        if target == self.state.current
            && matches!(self.state.phase, Phase::Idle | Phase::DetailActive)
        {
            trace!(target, "already at target, ignoring");
            return Ok(Vec::new());
        }

        self.state.generation += 1;
        let generation = self.state.generation;
        let destination = self.registry.checkpoint(target);

        let mut effects = vec![
            Effect::CancelPhaseTimers,
            Effect::GlideTo {
                progress: destination.target_progress,
            },
        ];

        match self.state.phase {
            Phase::Idle => {
                if destination.has_detail_surface {
                    self.state.navigating = true;
                    self.state.target = Some(target);
                    self.state.phase = Phase::Centering;
                    effects.push(Effect::Schedule {
                        timer: PhaseTimer::CenterDone,
                        generation,
                        delay: self.config.center_duration,
                    });
                } else {
                    // No entry animation for surfaces without detail
                    // content; the glide alone carries the move.
                    self.state.current = target;
                }
            }
            Phase::DetailActive => {
                self.state.navigating = true;
                self.state.target = Some(target);
                self.state.phase = Phase::Exiting;
                effects.push(Effect::Schedule {
                    timer: PhaseTimer::ExitDone,
                    generation,
                    delay: self.config.exit_duration,
                });
            }
            Phase::Centering | Phase::Zooming | Phase::Exiting => {
                // Transitional phases always hold the lock; reaching here
                // would mean the lock invariant was broken upstream.
                return Err(NavError::Locked);
            }
        }

        effects.push(Effect::Publish);
        debug!(
            target,
            generation,
            phase = ?self.state.phase,
            "navigation accepted"
        );
        Ok(effects)
    }

    /// Close the active detail surface without changing checkpoint.
    ///
    /// From `DetailActive`, runs the exit animation and settles `Idle` at
    /// the current checkpoint. Anywhere else this is a no-op.
    pub fn dismiss_detail(&mut self) -> Result<Vec<Effect>, NavError> {
        if self.state.navigating {
            return Err(NavError::Locked);
        }
        if self.state.phase != Phase::DetailActive {
            trace!(phase = ?self.state.phase, "no detail surface to dismiss");
            return Ok(Vec::new());
        }

        self.state.generation += 1;
        let generation = self.state.generation;
        self.state.navigating = true;
        self.state.target = Some(self.state.current);
        self.state.phase = Phase::Exiting;

        debug!(
            current = self.state.current,
            generation, "detail surface dismissed"
        );
        Ok(vec![
            Effect::CancelPhaseTimers,
            Effect::Schedule {
                timer: PhaseTimer::ExitDone,
                generation,
                delay: self.config.exit_duration,
            },
            Effect::Publish,
        ])
    }

    /// Handle an elapsed phase deadline.
    ///
    /// Deadlines stamped with an older generation are discarded: they
    /// belong to a navigation that was superseded, and acting on them
    /// would force an incorrect phase transition.
    pub fn timer_fired(&mut self, timer: PhaseTimer, generation: u64) -> Vec<Effect> {
        if generation != self.state.generation {
            trace!(
                ?timer,
                stale = generation,
                current = self.state.generation,
                "discarding stale phase deadline"
            );
            return Vec::new();
        }

        match (self.state.phase, timer) {
            (Phase::Centering, PhaseTimer::CenterDone) => {
                self.state.phase = Phase::Zooming;
                debug!(generation, "centering complete, zooming");
                vec![
                    Effect::Schedule {
                        timer: PhaseTimer::ZoomDone,
                        generation,
                        delay: self.config.zoom_duration,
                    },
                    Effect::Publish,
                ]
            }
            (Phase::Zooming, PhaseTimer::ZoomDone) => {
                if let Some(target) = self.state.target.take() {
                    self.state.current = target;
                }
                self.state.phase = Phase::DetailActive;
                self.state.navigating = false;
                debug!(
                    current = self.state.current,
                    generation, "zoom complete, detail surface active"
                );
                vec![Effect::Publish]
            }
            (Phase::Exiting, PhaseTimer::ExitDone) => {
                let target = self.state.target.unwrap_or(self.state.current);
                let destination = self.registry.checkpoint(target);
                if target != self.state.current && destination.has_detail_surface {
                    // Chain into the new target's entry sequence.
                    self.state.phase = Phase::Centering;
                    debug!(target, generation, "exit complete, centering on new target");
                    vec![
                        Effect::Schedule {
                            timer: PhaseTimer::CenterDone,
                            generation,
                            delay: self.config.center_duration,
                        },
                        Effect::Publish,
                    ]
                } else {
                    self.state.current = target;
                    self.state.phase = Phase::Idle;
                    self.state.navigating = false;
                    self.state.target = None;
                    debug!(current = self.state.current, generation, "exit complete, idle");
                    vec![Effect::Publish]
                }
            }
            (phase, timer) => {
                debug!(?phase, ?timer, "deadline does not match phase, ignoring");
                Vec::new()
            }
        }
    }

    /// Build a consumer snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self, progress: f32) -> Snapshot {
        let active_detail_id = if self.state.phase == Phase::DetailActive {
            let current = self.registry.checkpoint(self.state.current);
            current
                .has_detail_surface
                .then(|| current.id.clone())
        } else {
            None
        };
        Snapshot {
            current_checkpoint: self.state.current,
            target_checkpoint: self.state.target,
            phase: self.state.phase,
            active_detail_id,
            progress,
        }
    }
}
