#![forbid(unsafe_code)]

//! Test harness for popform.
//!
//! Provides [`MemoryHost`], an in-memory element tree implementing the
//! [`Host`] trait, plus pointer-event constructors for driving components in
//! tests. The memory host keeps live field state (`value`, `checked`),
//! settable bounding boxes, and supports removing elements out from under a
//! component to exercise lookup-miss tolerance.
//!
//! ```ignore
//! let mut host = MemoryHost::new();
//! host.seed_element("open", Rect::new(50, 100, 80, 20));
//! let mut popover = Popover::attach(&host, "#open", config).unwrap();
//! popover.handle_event(&mut host, &click_at(60, 110));
//! ```

pub mod memory_host;

pub use memory_host::MemoryHost;

use popform_core::event::{PointerEvent, PointerKind};

// Re-export types harness users always need.
pub use popform_core::geometry::{Point, Rect, Size};

/// A primary-button press at the given viewport position.
pub fn click_at(x: i32, y: i32) -> PointerEvent {
    PointerEvent::down(x, y)
}

/// A primary-button press at the center of a rectangle.
pub fn click_inside(rect: Rect) -> PointerEvent {
    PointerEvent::down(rect.x + rect.width / 2, rect.y + rect.height / 2)
}

/// A pointer movement to the given viewport position.
pub fn move_to(x: i32, y: i32) -> PointerEvent {
    PointerEvent::moved(x, y)
}

/// A pointer-leave at the given viewport position.
pub fn leave_at(x: i32, y: i32) -> PointerEvent {
    PointerEvent::new(PointerKind::Leave, x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_inside_hits_the_center() {
        let event = click_inside(Rect::new(50, 100, 80, 20));
        assert_eq!((event.x, event.y), (90, 110));
        assert!(event.is_activation());
    }

    #[test]
    fn move_and_leave_are_not_activations() {
        assert!(!move_to(1, 2).is_activation());
        assert!(!leave_at(1, 2).is_activation());
    }
}
