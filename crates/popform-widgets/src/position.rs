#![forbid(unsafe_code)]

//! Anchored positioning.
//!
//! Computes the overlay's absolute top-left from the trigger's bounding box,
//! the overlay's own size, and the requested placement. Top/bottom center
//! the overlay horizontally against the trigger; left/right center it
//! vertically. There is no viewport clamping: a trigger near an edge may
//! push the overlay partially or fully off-screen, and that is the caller's
//! problem to avoid.

use popform_core::geometry::{Point, Rect, Size};

use crate::config::Placement;

/// Compute the overlay position for a placement.
pub fn anchored_position(trigger: Rect, overlay: Size, placement: Placement) -> Point {
    match placement {
        Placement::Top => Point::new(
            trigger.x + (trigger.width - overlay.width) / 2,
            trigger.y - overlay.height,
        ),
        Placement::Bottom => Point::new(
            trigger.x + (trigger.width - overlay.width) / 2,
            trigger.bottom(),
        ),
        Placement::Left => Point::new(
            trigger.x - overlay.width,
            trigger.y + (trigger.height - overlay.height) / 2,
        ),
        Placement::Right => Point::new(
            trigger.right(),
            trigger.y + (trigger.height - overlay.height) / 2,
        ),
    }
}
