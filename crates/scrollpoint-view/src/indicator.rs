#![forbid(unsafe_code)]

//! The section progress indicator.
//!
//! A dot per checkpoint, tinted with the section accent. The presented
//! section's dot fills to full scale once its detail surface is active
//! and stays dimmed during transit; the indicator hides entirely at home.

use scrollpoint_core::registry::CheckpointRegistry;
use scrollpoint_core::theme::Rgb;
use scrollpoint_runtime::{Phase, Snapshot};

/// Render-ready state for one indicator dot.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorDot {
    /// Checkpoint id the dot stands for.
    pub id: String,
    /// Label shown next to the active dot.
    pub label: String,
    /// Section accent color.
    pub accent: Rgb,
    /// Whether this dot is the presented checkpoint.
    pub active: bool,
    /// Dot fill scale.
    pub scale: f32,
    /// Dot fill opacity.
    pub opacity: f32,
}

/// View model for the progress indicator.
#[derive(Debug, Clone, Copy)]
pub struct ProgressIndicator {
    settled_scale: f32,
    transit_scale: f32,
    transit_opacity: f32,
}

impl Default for ProgressIndicator {
    fn default() -> Self {
        Self {
            settled_scale: 1.0,
            transit_scale: 0.3,
            transit_opacity: 0.5,
        }
    }
}

impl ProgressIndicator {
    /// Create an indicator with default dot styling.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the indicator should render: anywhere but settled home.
    #[must_use]
    pub fn is_visible(&self, snapshot: &Snapshot, registry: &CheckpointRegistry) -> bool {
        snapshot.presented_checkpoint() != registry.home()
    }

    /// Dot states for every checkpoint, in navigation order.
    #[must_use]
    pub fn dots(&self, snapshot: &Snapshot, registry: &CheckpointRegistry) -> Vec<IndicatorDot> {
        let presented = snapshot.presented_checkpoint();
        let settled = snapshot.phase == Phase::DetailActive;
        registry
            .all()
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let active = index == presented;
                IndicatorDot {
                    id: entry.id.clone(),
                    label: entry.display.title.clone(),
                    accent: entry.display.theme.accent,
                    active,
                    scale: if active && settled {
                        self.settled_scale
                    } else {
                        self.transit_scale
                    },
                    opacity: if active && settled {
                        1.0
                    } else {
                        self.transit_opacity
                    },
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollpoint_core::registry::{CheckpointDescriptor, DisplayMeta};

    fn registry() -> CheckpointRegistry {
        let entries = vec![
            CheckpointDescriptor::new("home", 0, 0.0, DisplayMeta::new("Home", "", ""))
                .without_detail_surface(),
            CheckpointDescriptor::new("about", 1, 0.25, DisplayMeta::new("About Me", "", "")),
            CheckpointDescriptor::new("skills", 2, 0.5, DisplayMeta::new("Skills", "", "")),
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
    fn hidden_at_settled_home() {
        let indicator = ProgressIndicator::new();
        let reg = registry();
        assert!(!indicator.is_visible(&snapshot(Phase::Idle, 0, None), &reg));
        assert!(indicator.is_visible(&snapshot(Phase::Centering, 0, Some(1)), &reg));
        assert!(indicator.is_visible(&snapshot(Phase::DetailActive, 2, None), &reg));
    }

    #[test]
    fn one_dot_per_checkpoint_in_order() {
        let indicator = ProgressIndicator::new();
        let reg = registry();
        let dots = indicator.dots(&snapshot(Phase::DetailActive, 1, None), &reg);
        assert_eq!(dots.len(), 3);
        assert_eq!(dots[1].id, "about");
        assert_eq!(dots[1].label, "About Me");
    }

    #[test]
    fn active_dot_fills_only_once_settled() {
        let indicator = ProgressIndicator::new();
        let reg = registry();

        let transit = indicator.dots(&snapshot(Phase::Zooming, 0, Some(1)), &reg);
        assert!(transit[1].active);
        assert_eq!(transit[1].scale, 0.3);
        assert_eq!(transit[1].opacity, 0.5);

        let settled = indicator.dots(&snapshot(Phase::DetailActive, 1, None), &reg);
        assert!(settled[1].active);
        assert_eq!(settled[1].scale, 1.0);
        assert_eq!(settled[1].opacity, 1.0);
    }

    #[test]
    fn inactive_dots_stay_dimmed() {
        let indicator = ProgressIndicator::new();
        let reg = registry();
        let dots = indicator.dots(&snapshot(Phase::DetailActive, 1, None), &reg);
        assert!(!dots[2].active);
        assert_eq!(dots[2].scale, 0.3);
    }
}
