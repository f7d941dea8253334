#![forbid(unsafe_code)]

//! Canonical pointer event types.
//!
//! The host platform translates its native input into these events and pumps
//! them through the component's `handle_event`. Coordinates are viewport
//! pixels, matching [`crate::geometry`].

use bitflags::bitflags;

use crate::geometry::Point;

/// A pointer event delivered by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerKind,

    /// Horizontal viewport position.
    pub x: i32,

    /// Vertical viewport position.
    pub y: i32,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a new pointer event with no modifiers.
    #[must_use]
    pub const fn new(kind: PointerKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a pointer event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Primary-button press at the given position.
    #[must_use]
    pub const fn down(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Down(PointerButton::Primary), x, y)
    }

    /// Pointer movement to the given position.
    #[must_use]
    pub const fn moved(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Moved, x, y)
    }

    /// Position as a [`Point`].
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Check if this is a press of the given button.
    #[must_use]
    pub fn is_down(&self, button: PointerButton) -> bool {
        matches!(self.kind, PointerKind::Down(b) if b == button)
    }

    /// Check if this event counts as an activation (primary-button press).
    #[must_use]
    pub const fn is_activation(&self) -> bool {
        matches!(self.kind, PointerKind::Down(PointerButton::Primary))
    }
}

/// Kinds of pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Pointer button pressed down.
    Down(PointerButton),

    /// Pointer button released.
    Up(PointerButton),

    /// Pointer entered the tracked region.
    Enter,

    /// Pointer left the tracked region.
    Leave,

    /// Pointer moved (no button pressed).
    Moved,
}

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Usually the left mouse button, or a tap.
    Primary,
    /// Usually the right mouse button.
    Secondary,
    /// Usually the wheel button.
    Auxiliary,
}

bitflags! {
    /// Modifier keys held during a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const NONE = 0;
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
        const META = 1 << 3;
    }
}
