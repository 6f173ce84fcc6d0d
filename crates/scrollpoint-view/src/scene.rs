#![forbid(unsafe_code)]

//! The background scene.
//!
//! Always present behind the narrative except while a detail surface
//! covers the viewport. Exposes the backdrop tint for the presented
//! section, the home hero's visibility, and clickable hit targets that
//! map scene geometry to checkpoint ids. Hits are returned as ids for the
//! host to route through the facade; the scene itself never navigates.

use scrollpoint_core::registry::CheckpointRegistry;
use scrollpoint_core::theme::Rgba;
use scrollpoint_runtime::{Phase, Snapshot};
use tracing::trace;

/// Axis-aligned region in host pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a rect from origin and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether a point falls inside this rect.
    #[must_use]
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// A clickable region of the scene mapped to a checkpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct HitTarget {
    /// The checkpoint this region navigates to.
    pub checkpoint_id: String,
    /// Region bounds in host pixels.
    pub bounds: Rect,
}

/// View model for the background scene.
#[derive(Debug, Clone, Default)]
pub struct BackgroundScene {
    targets: Vec<HitTarget>,
    fallback_backdrop: Rgba,
}

impl BackgroundScene {
    /// Create a scene with no hit targets and a neutral backdrop.
    #[must_use]
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            fallback_backdrop: Rgba::new(55, 65, 81, 0.3),
        }
    }

    /// Register a clickable region for a checkpoint.
    #[must_use]
    pub fn with_target(mut self, checkpoint_id: impl Into<String>, bounds: Rect) -> Self {
        self.targets.push(HitTarget {
            checkpoint_id: checkpoint_id.into(),
            bounds,
        });
        self
    }

    /// Set the backdrop used at home, where no section tint applies.
    #[must_use]
    pub fn fallback_backdrop(mut self, backdrop: Rgba) -> Self {
        self.fallback_backdrop = backdrop;
        self
    }

    /// Whether the scene should render: everywhere except behind an
    /// active detail surface.
    #[must_use]
    pub fn is_visible(&self, snapshot: &Snapshot) -> bool {
        snapshot.phase != Phase::DetailActive
    }

    /// Whether the home hero block should render.
    #[must_use]
    pub fn hero_visible(&self, snapshot: &Snapshot, registry: &CheckpointRegistry) -> bool {
        snapshot.phase == Phase::Idle
            && snapshot.target_checkpoint.is_none()
            && snapshot.current_checkpoint == registry.home()
    }

    /// Backdrop tint for the presented section.
    #[must_use]
    pub fn backdrop(&self, snapshot: &Snapshot, registry: &CheckpointRegistry) -> Rgba {
        let index = snapshot.presented_checkpoint();
        if index == registry.home() {
            return self.fallback_backdrop;
        }
        registry
            .by_index(index)
            .map(|entry| entry.display.theme.backdrop)
            .unwrap_or(self.fallback_backdrop)
    }

    /// Resolve a click position to a checkpoint id, if it lands on a
    /// registered target. First registered target wins overlaps.
    #[must_use]
    pub fn hit_target(&self, x: f32, y: f32) -> Option<&str> {
        let hit = self
            .targets
            .iter()
            .find(|t| t.bounds.contains(x, y))
            .map(|t| t.checkpoint_id.as_str());
        if let Some(id) = hit {
            trace!(x, y, id, "scene hit");
        }
        hit
    }

    /// Registered hit targets.
    #[must_use]
    pub fn targets(&self) -> &[HitTarget] {
        &self.targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollpoint_core::registry::{CheckpointDescriptor, DisplayMeta};
    use scrollpoint_core::theme::{Rgb, Rgba, SectionTheme};

    fn registry() -> CheckpointRegistry {
        let entries = vec![
            CheckpointDescriptor::new("home", 0, 0.0, DisplayMeta::new("Home", "", ""))
                .without_detail_surface(),
            CheckpointDescriptor::new(
                "about",
                1,
                0.25,
                DisplayMeta::new("About", "", "").with_theme(SectionTheme::new(
                    Rgb::new(59, 130, 246),
                    Rgba::new(59, 130, 246, 0.3),
                )),
            ),
        ];
        CheckpointRegistry::new(entries).unwrap()
    }

    fn snapshot(phase: Phase, current: usize, target: Option<usize>) -> Snapshot {
        Snapshot {
            current_checkpoint: current,
            target_checkpoint: target,
            phase,
            active_detail_id: None,
            progress: 0.0,
        }
    }

    #[test]
    fn scene_hides_only_behind_detail() {
        let scene = BackgroundScene::new();
        assert!(scene.is_visible(&snapshot(Phase::Idle, 0, None)));
        assert!(scene.is_visible(&snapshot(Phase::Centering, 0, Some(1))));
        assert!(!scene.is_visible(&snapshot(Phase::DetailActive, 1, None)));
    }

    #[test]
    fn hero_shows_only_at_settled_home() {
        let scene = BackgroundScene::new();
        let reg = registry();
        assert!(scene.hero_visible(&snapshot(Phase::Idle, 0, None), &reg));
        assert!(!scene.hero_visible(&snapshot(Phase::Centering, 0, Some(1)), &reg));
        assert!(!scene.hero_visible(&snapshot(Phase::Idle, 1, None), &reg));
    }

    #[test]
    fn backdrop_tracks_the_presented_section() {
        let scene = BackgroundScene::new();
        let reg = registry();
        let tinted = scene.backdrop(&snapshot(Phase::Centering, 0, Some(1)), &reg);
        assert_eq!(tinted.rgb, Rgb::new(59, 130, 246));

        let neutral = scene.backdrop(&snapshot(Phase::Idle, 0, None), &reg);
        assert_eq!(neutral.rgb, Rgb::new(55, 65, 81));
    }

    #[test]
    fn hit_targets_resolve_by_region() {
        let scene = BackgroundScene::new()
            .with_target("about", Rect::new(0.0, 0.0, 100.0, 100.0))
            .with_target("skills", Rect::new(100.0, 0.0, 100.0, 100.0));

        assert_eq!(scene.hit_target(50.0, 50.0), Some("about"));
        assert_eq!(scene.hit_target(150.0, 50.0), Some("skills"));
        assert_eq!(scene.hit_target(250.0, 50.0), None);
    }

    #[test]
    fn rect_edges_are_half_open() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(r.contains(0.0, 0.0));
        assert!(!r.contains(100.0, 50.0));
        assert!(!r.contains(50.0, 100.0));
    }
}
