#![forbid(unsafe_code)]

//! Core primitives for popform: pixel geometry, pointer events, and the
//! logging shim shared by the rest of the workspace.

pub mod event;
pub mod geometry;
pub mod logging;

pub use event::{Modifiers, PointerButton, PointerEvent, PointerKind};
pub use geometry::{Point, Rect, Size};
