#![forbid(unsafe_code)]

//! Per-section detail surfaces.
//!
//! A detail surface is the full-content overlay for one checkpoint. It
//! activates when the published snapshot names its id and deactivates the
//! moment a new navigation is accepted. While active it normally holds a
//! focus trap, which the controller respects by ignoring navigation keys;
//! a surface can delegate keys back instead.

use scrollpoint_runtime::{CloseDirection, Snapshot};

/// View model for one checkpoint's detail surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSurface {
    id: String,
    focus_trap: bool,
    delegate_keys: bool,
    close_direction: Option<CloseDirection>,
}

impl DetailSurface {
    /// Create a surface bound to a checkpoint id, with a focus trap and a
    /// close affordance that dismisses in place.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            focus_trap: true,
            delegate_keys: false,
            close_direction: None,
        }
    }

    /// Disable the focus trap entirely.
    #[must_use]
    pub fn without_focus_trap(mut self) -> Self {
        self.focus_trap = false;
        self
    }

    /// Keep the focus trap but let navigation keys through to the
    /// controller.
    #[must_use]
    pub fn delegate_keys(mut self) -> Self {
        self.delegate_keys = true;
        self
    }

    /// The checkpoint id this surface renders for.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether this surface is the active render target.
    #[must_use]
    pub fn is_active(&self, snapshot: &Snapshot) -> bool {
        snapshot.active_detail_id.as_deref() == Some(self.id.as_str())
    }

    /// Whether the controller should ignore navigation keys right now.
    #[must_use]
    pub fn traps_focus(&self, snapshot: &Snapshot) -> bool {
        self.is_active(snapshot) && self.focus_trap && !self.delegate_keys
    }

    /// Configure where this surface's close affordance lands.
    #[must_use]
    pub fn close_toward(mut self, direction: CloseDirection) -> Self {
        self.close_direction = Some(direction);
        self
    }

    /// The intent behind this surface's close affordance.
    ///
    /// Returned as data; the host routes it through the facade's
    /// close-and-navigate operation.
    #[must_use]
    pub fn close_intent(&self) -> Option<CloseDirection> {
        self.close_direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollpoint_runtime::Phase;

    fn snapshot(active_detail_id: Option<&str>) -> Snapshot {
        Snapshot {
            current_checkpoint: 1,
            target_checkpoint: None,
            phase: if active_detail_id.is_some() {
                Phase::DetailActive
            } else {
                Phase::Idle
            },
            active_detail_id: active_detail_id.map(str::to_owned),
            progress: 0.25,
        }
    }

    #[test]
    fn activates_only_for_its_own_id() {
        let surface = DetailSurface::new("about");
        assert!(surface.is_active(&snapshot(Some("about"))));
        assert!(!surface.is_active(&snapshot(Some("skills"))));
        assert!(!surface.is_active(&snapshot(None)));
    }

    #[test]
    fn traps_focus_while_active_by_default() {
        let surface = DetailSurface::new("about");
        assert!(surface.traps_focus(&snapshot(Some("about"))));
        assert!(!surface.traps_focus(&snapshot(None)));
    }

    #[test]
    fn delegation_releases_the_trap() {
        let surface = DetailSurface::new("about").delegate_keys();
        assert!(surface.is_active(&snapshot(Some("about"))));
        assert!(!surface.traps_focus(&snapshot(Some("about"))));
    }

    #[test]
    fn disabled_trap_never_blocks_keys() {
        let surface = DetailSurface::new("about").without_focus_trap();
        assert!(!surface.traps_focus(&snapshot(Some("about"))));
    }

    #[test]
    fn close_intent_defaults_to_dismiss_in_place() {
        assert_eq!(DetailSurface::new("about").close_intent(), None);
        assert_eq!(
            DetailSurface::new("about")
                .close_toward(CloseDirection::Home)
                .close_intent(),
            Some(CloseDirection::Home)
        );
    }
}
