#![forbid(unsafe_code)]

//! popform public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the internal crates and offers a lightweight
//! prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use popform_core::event::{Modifiers, PointerButton, PointerEvent, PointerKind};
pub use popform_core::geometry::{Point, Rect, Size};

// --- Host re-exports -------------------------------------------------------

pub use popform_dom::{ElementId, Host, Node};

// --- Widget re-exports -----------------------------------------------------

pub use popform_widgets::{
    ButtonAction, ButtonDescriptor, CancelButton, CheckboxItem, Chrome, CollectedValue,
    ContentItem, DismissDispatcher, DismissToken, FieldValue, FormData, Outcome, OverlayPhase,
    Placement, Popover, PopoverConfig, PopoverGroup, RegionStyle, SchemaViolation, SubmitButton,
    TriggerMode, anchored_position, validate,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for popform APIs.
pub use popform_widgets::PopoverError as Error;

/// Standard result type for popform APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ButtonDescriptor, CancelButton, CheckboxItem, ContentItem, Error, FieldValue, FormData,
        Host, Outcome, OverlayPhase, Placement, PointerEvent, Popover, PopoverConfig,
        PopoverGroup, Rect, Result, SubmitButton, TriggerMode,
    };
}
