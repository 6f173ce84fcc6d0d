//! Phase ordering, the navigation lock, and teardown, driven end-to-end
//! through the deterministic simulator.

use std::sync::Arc;
use std::time::Duration;

use scrollpoint_core::registry::{CheckpointDescriptor, CheckpointRegistry, DisplayMeta};
use scrollpoint_runtime::{CloseDirection, ControllerSimulator, Phase, TimingConfig};

fn registry() -> Arc<CheckpointRegistry> {
    let entries = vec![
        CheckpointDescriptor::new("home", 0, 0.0, DisplayMeta::new("Home", "", ""))
            .without_detail_surface(),
        CheckpointDescriptor::new("about", 1, 0.25, DisplayMeta::new("About", "", "")),
        CheckpointDescriptor::new("skills", 2, 0.5, DisplayMeta::new("Skills", "", "")),
        CheckpointDescriptor::new("projects", 3, 0.75, DisplayMeta::new("Projects", "", "")),
    ];
    Arc::new(CheckpointRegistry::new(entries).unwrap())
}

fn simulator() -> ControllerSimulator {
    ControllerSimulator::new(registry(), TimingConfig::default())
}

#[test]
fn accepted_navigation_walks_phases_in_order() {
    let mut sim = simulator();
    assert!(sim.go_to(1));

    sim.advance(Duration::from_secs(3));

    assert_eq!(
        sim.phases(),
        vec![
            Phase::Idle,
            Phase::Centering,
            Phase::Zooming,
            Phase::DetailActive
        ]
    );
    assert_eq!(sim.snapshot().active_detail_id.as_deref(), Some("about"));
    assert_eq!(sim.snapshot().current_checkpoint, 1);
}

#[test]
fn phases_never_repeat_out_of_order() {
    let mut sim = simulator();
    sim.go_to(2);
    // Advance in awkward unaligned steps; ordering must not depend on
    // tick granularity.
    for _ in 0..40 {
        sim.advance(Duration::from_millis(77));
    }

    let phases = sim.phases();
    let positions: Vec<usize> = [Phase::Centering, Phase::Zooming, Phase::DetailActive]
        .iter()
        .map(|p| phases.iter().position(|q| q == p).unwrap())
        .collect();
    assert!(positions[0] < positions[1]);
    assert!(positions[1] < positions[2]);
    assert_eq!(
        phases.iter().filter(|p| **p == Phase::Zooming).count(),
        1,
        "zooming must be entered exactly once"
    );
}

#[test]
fn second_navigation_before_t1_is_dropped() {
    let mut sim = simulator();
    assert!(sim.go_to(2));
    // Still well inside the centering window.
    sim.advance(Duration::from_millis(100));
    assert!(!sim.go_to(3));

    sim.advance(Duration::from_secs(3));
    assert_eq!(sim.phase(), Phase::DetailActive);
    assert_eq!(sim.snapshot().current_checkpoint, 2);
    assert_eq!(sim.snapshot().active_detail_id.as_deref(), Some("skills"));
}

#[test]
fn renavigating_to_in_flight_target_stays_idempotent() {
    let mut sim = simulator();
    assert!(sim.go_to(1));
    sim.advance(Duration::from_millis(100));
    // Same target: accepted as a no-op, sequence unaffected.
    assert!(sim.go_to(1));

    sim.advance(Duration::from_secs(3));
    assert_eq!(
        sim.phases(),
        vec![
            Phase::Idle,
            Phase::Centering,
            Phase::Zooming,
            Phase::DetailActive
        ]
    );
}

#[test]
fn boundary_steps_are_no_ops() {
    let mut sim = simulator();
    assert!(!sim.previous());
    assert_eq!(sim.phase(), Phase::Idle);
    assert_eq!(sim.snapshot().current_checkpoint, 0);

    sim.go_to(3);
    sim.advance(Duration::from_secs(3));
    assert_eq!(sim.snapshot().current_checkpoint, 3);

    assert!(!sim.next());
    assert_eq!(sim.phase(), Phase::DetailActive);
    assert_eq!(sim.snapshot().current_checkpoint, 3);
}

#[test]
fn unmount_cancels_pending_phase_timers() {
    let mut sim = simulator();
    sim.go_to(1);
    assert_eq!(sim.phase(), Phase::Centering);

    sim.unmount();
    sim.advance(Duration::from_secs(5));

    // The sequence froze where teardown caught it; no stale timer may
    // advance it.
    assert_eq!(sim.phase(), Phase::Centering);
    let phases = sim.phases();
    assert!(!phases.contains(&Phase::Zooming));
    assert!(!phases.contains(&Phase::DetailActive));
}

#[test]
fn unmount_is_idempotent() {
    let mut sim = simulator();
    sim.unmount();
    sim.unmount();
    assert!(!sim.controller().is_mounted());
}

#[test]
fn leaving_detail_passes_through_exiting_then_new_sequence() {
    let mut sim = simulator();
    sim.go_to(1);
    sim.advance(Duration::from_secs(3));
    assert_eq!(sim.phase(), Phase::DetailActive);
    sim.clear_log();

    sim.go_to(2);
    sim.advance(Duration::from_secs(4));

    assert_eq!(
        sim.phases(),
        vec![
            Phase::Exiting,
            Phase::Centering,
            Phase::Zooming,
            Phase::DetailActive
        ]
    );
    assert_eq!(sim.snapshot().current_checkpoint, 2);
}

#[test]
fn full_journey_and_return_home() {
    let mut sim = simulator();

    assert!(sim.go_to(1));
    sim.advance(Duration::from_secs(3));
    assert_eq!(
        sim.phases(),
        vec![
            Phase::Idle,
            Phase::Centering,
            Phase::Zooming,
            Phase::DetailActive
        ]
    );
    assert_eq!(sim.snapshot().active_detail_id.as_deref(), Some("about"));

    assert!(sim.close_detail(Some(CloseDirection::Home)));
    sim.advance(Duration::from_secs(3));

    let snapshot = sim.snapshot();
    assert_eq!(snapshot.current_checkpoint, 0);
    assert_eq!(snapshot.phase, Phase::Idle);
    assert_eq!(snapshot.active_detail_id, None);
    assert_eq!(snapshot.target_checkpoint, None);
}

#[test]
fn close_detail_in_place_keeps_checkpoint() {
    let mut sim = simulator();
    sim.go_to_id("skills");
    sim.advance(Duration::from_secs(3));

    assert!(sim.close_detail(None));
    assert_eq!(sim.phase(), Phase::Exiting);
    sim.advance(Duration::from_secs(2));

    assert_eq!(sim.phase(), Phase::Idle);
    assert_eq!(sim.snapshot().current_checkpoint, 2);
    assert_eq!(sim.snapshot().active_detail_id, None);
}

#[test]
fn unknown_id_is_rejected() {
    let mut sim = simulator();
    assert!(!sim.go_to_id("blog"));
    assert_eq!(sim.phase(), Phase::Idle);
}

#[test]
fn out_of_range_index_is_rejected() {
    let mut sim = simulator();
    assert!(!sim.go_to(42));
    assert_eq!(sim.phase(), Phase::Idle);
    assert_eq!(sim.snapshot().current_checkpoint, 0);
}

#[test]
fn reduced_motion_profile_still_orders_phases() {
    let mut sim = ControllerSimulator::new(
        registry(),
        TimingConfig::default().with_motion_profile(scrollpoint_runtime::MotionProfile::Reduced),
    );
    sim.go_to(1);
    sim.advance(Duration::from_secs(1));
    assert_eq!(
        sim.phases(),
        vec![
            Phase::Idle,
            Phase::Centering,
            Phase::Zooming,
            Phase::DetailActive
        ]
    );
}
