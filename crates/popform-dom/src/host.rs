#![forbid(unsafe_code)]

//! The host platform trait.

use popform_core::geometry::{Point, Rect};

use crate::node::Node;

/// Opaque handle to a live element owned by the host.
///
/// Handles stay valid for the life of the element; operations on a removed
/// element are no-ops and reads return defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

impl ElementId {
    /// Create a new element handle.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Capabilities popform needs from a UI platform.
///
/// This is the entire surface the widget crates touch: everything else about
/// the page (layout, painting, native event translation) stays on the host
/// side. Geometry is exchanged in viewport pixels.
pub trait Host {
    /// Materialize a fragment at the document root, returning its root handle.
    fn mount(&mut self, fragment: &Node) -> ElementId;

    /// Remove an element and its subtree from the document.
    fn remove(&mut self, element: ElementId);

    /// Look up a live element by its identifier.
    fn element_by_id(&self, id: &str) -> Option<ElementId>;

    /// Apply an absolute top/left position to an element.
    fn set_position(&mut self, element: ElementId, position: Point);

    /// Show or hide an element.
    fn set_visible(&mut self, element: ElementId, visible: bool);

    /// Read an element's bounding box in viewport coordinates.
    ///
    /// Returns an empty [`Rect`] for unknown or removed elements.
    fn bounding_box(&self, element: ElementId) -> Rect;

    /// Read a field element's current value, if it has one.
    fn value(&self, element: ElementId) -> Option<String>;

    /// Read a checkbox element's current checked state.
    fn is_checked(&self, element: ElementId) -> bool;
}
