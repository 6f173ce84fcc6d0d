#![forbid(unsafe_code)]

//! Scripted portfolio walkthrough.
//!
//! Drives the controller through a typical visitor session on the
//! simulated host — drag-scroll into a section, snap, watch the phase
//! sequence land on the detail surface, step around with wheel and
//! keyboard, and return home — logging what each render consumer would
//! draw along the way.
//!
//! Run with `RUST_LOG=debug` for the controller's own transition logs.

mod sections;

use std::time::Duration;

use scrollpoint_runtime::{CloseDirection, ControllerSimulator, Phase, TimingConfig};
use scrollpoint_view::{BackgroundScene, DetailSurface, FloatingCard, ProgressIndicator, Rect};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let registry = sections::portfolio_registry();
    let mut sim = ControllerSimulator::new(registry.clone(), TimingConfig::default());

    let scene = BackgroundScene::new()
        .with_target("about", Rect::new(0.0, 0.0, 320.0, 240.0))
        .with_target("projects", Rect::new(320.0, 0.0, 320.0, 240.0));
    let card = FloatingCard::new();
    let indicator = ProgressIndicator::new();
    let surfaces: Vec<DetailSurface> = registry
        .all()
        .iter()
        .filter(|entry| entry.has_detail_surface)
        .map(|entry| DetailSurface::new(entry.id.clone()).close_toward(CloseDirection::Home))
        .collect();

    info!("visitor lands on the hero");
    report(&sim, &scene, &card, &indicator, &surfaces, &registry);

    info!("visitor drags the page toward the about section");
    sim.scroll_to_progress(0.22);
    sim.advance(Duration::from_millis(300));
    report(&sim, &scene, &card, &indicator, &surfaces, &registry);

    info!("snap navigation plays out");
    sim.advance(Duration::from_secs(3));
    report(&sim, &scene, &card, &indicator, &surfaces, &registry);

    info!("visitor clicks the projects tile in the scene");
    if let Some(id) = scene.hit_target(400.0, 120.0) {
        let id = id.to_owned();
        let now = sim.now();
        sim.controller_mut().go_to_id(&id, now);
    }
    sim.advance(Duration::from_secs(4));
    report(&sim, &scene, &card, &indicator, &surfaces, &registry);

    info!("wheel steps forward to contact");
    sim.wheel(40.0);
    sim.advance(Duration::from_secs(4));
    report(&sim, &scene, &card, &indicator, &surfaces, &registry);

    info!("the detail surface's close affordance returns home");
    let close = surfaces
        .iter()
        .find(|s| s.is_active(&sim.snapshot()))
        .and_then(|s| s.close_intent());
    sim.close_detail(close);
    sim.advance(Duration::from_secs(3));
    report(&sim, &scene, &card, &indicator, &surfaces, &registry);

    info!(phases = ?sim.phases(), "session phase history");
    sim.unmount();
}

fn report(
    sim: &ControllerSimulator,
    scene: &BackgroundScene,
    card: &FloatingCard,
    indicator: &ProgressIndicator,
    surfaces: &[DetailSurface],
    registry: &scrollpoint_core::registry::CheckpointRegistry,
) {
    let snapshot = sim.snapshot();
    let section = registry.checkpoint(snapshot.presented_checkpoint());
    info!(
        phase = ?snapshot.phase,
        section = %section.id,
        progress = format!("{:.2}", snapshot.progress),
        "snapshot"
    );

    if scene.is_visible(&snapshot) {
        let backdrop = scene.backdrop(&snapshot, registry);
        info!(
            hero = scene.hero_visible(&snapshot, registry),
            backdrop = format!(
                "rgba({}, {}, {}, {:.1})",
                backdrop.rgb.r, backdrop.rgb.g, backdrop.rgb.b, backdrop.alpha
            ),
            "scene"
        );
    }

    let visual = card.visual(&snapshot);
    if visual.visible {
        info!(
            scale = visual.scale,
            opacity = visual.opacity,
            spin = visual.spin,
            title = %section.display.title,
            "card"
        );
    }

    if let Some(active) = surfaces.iter().find(|s| s.is_active(&snapshot)) {
        info!(
            id = %active.id(),
            traps_focus = active.traps_focus(&snapshot),
            "detail surface"
        );
    }

    if indicator.is_visible(&snapshot, registry) {
        let dots: String = indicator
            .dots(&snapshot, registry)
            .iter()
            .map(|d| if d.active { '*' } else { '.' })
            .collect();
        info!(dots = %dots, "indicator");
    }

    if snapshot.phase == Phase::Idle && snapshot.current_checkpoint == registry.home() {
        info!("back at the hero");
    }
}
