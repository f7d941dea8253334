#![forbid(unsafe_code)]

//! Schema-driven popover forms.
//!
//! A [`Popover`](popover::Popover) anchors a generated form overlay to a
//! trigger element. The pipeline: a declarative content schema
//! ([`schema::ContentItem`]) is validated ([`validate`]), rendered to a
//! markup fragment ([`render`]), mounted once through the host platform,
//! positioned relative to the trigger ([`position`]), and read back into
//! structured values on submit ([`collect`]). Visibility is a three-phase
//! state machine driven by pointer events; multiple instances share one
//! outside-dismissal path through [`dismiss::PopoverGroup`].

pub mod collect;
pub mod config;
pub mod dismiss;
pub mod popover;
pub mod position;
pub mod render;
pub mod schema;
pub mod validate;

pub use collect::{CollectedValue, FieldValue, FormData};
pub use config::{
    ButtonAction, ButtonDescriptor, CancelButton, Chrome, Placement, PopoverConfig, RegionStyle,
    SubmitButton, TriggerMode,
};
pub use dismiss::{DismissDispatcher, DismissToken, PopoverGroup};
pub use popover::{Outcome, OverlayPhase, Popover, PopoverError};
pub use position::anchored_position;
pub use schema::{CheckboxItem, ContentItem};
pub use validate::{SchemaViolation, validate};
