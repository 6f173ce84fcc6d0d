#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! The controller is host-agnostic: it never touches a concrete scroll
//! surface API. Whatever owns the real surface (a browser binding, a test
//! simulator, a demo script) translates its native input into these types
//! and feeds them to the controller.
//!
//! All events derive `Clone` and `PartialEq` for use in tests and pattern
//! matching.

use bitflags::bitflags;

use crate::progress::ScrollMetrics;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// A wheel event with signed deltas in host pixels.
    Wheel(WheelEvent),

    /// The scroll surface moved; carries the surface geometry at the time
    /// of the event.
    Scroll(ScrollMetrics),

    /// The host surface was resized.
    ///
    /// The controller re-reads surface geometry after a resize so a changed
    /// scrollable range is picked up before the next scroll event.
    Resize {
        /// New surface width in host pixels.
        width: f32,
        /// New surface height in host pixels.
        height: f32,
    },

    /// A clock tick from the host event loop.
    ///
    /// Hosts deliver this at their frame cadence; it drives timer deadlines
    /// and the smooth scroller.
    Tick,
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with no modifiers and `Press` kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Set the modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the event kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Check if Ctrl is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }
}

/// Key codes the controller cares about, plus a catch-all character variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// A printable character. Space arrives as `Char(' ')`.
    Char(char),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    Enter,
    Escape,
    Tab,
}

/// The type of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyEventKind {
    /// Initial press.
    #[default]
    Press,
    /// Auto-repeat while held.
    Repeat,
    /// Key released.
    Release,
}

bitflags! {
    /// Modifier keys held during a key or wheel event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const NONE  = 0b0000;
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
        const META  = 0b1000;
    }
}

/// A wheel event with signed scroll deltas.
///
/// Positive `delta_y` means scrolling down (content moves up), matching the
/// usual host convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    /// Horizontal delta in host pixels.
    pub delta_x: f32,
    /// Vertical delta in host pixels.
    pub delta_y: f32,
    /// Modifiers held during the event.
    pub modifiers: Modifiers,
}

impl WheelEvent {
    /// Create a vertical-only wheel event.
    #[must_use]
    pub const fn vertical(delta_y: f32) -> Self {
        Self {
            delta_x: 0.0,
            delta_y,
            modifiers: Modifiers::NONE,
        }
    }
}
