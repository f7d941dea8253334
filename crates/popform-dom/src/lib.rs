#![forbid(unsafe_code)]

//! Host platform abstraction for popform.
//!
//! The widget crates never talk to a concrete UI platform. They build typed
//! markup fragments ([`Node`]) and drive the page through the [`Host`] trait:
//! mount a fragment, look elements up by identifier, move/show/hide them,
//! measure bounding boxes, and read live field values. A real backend wires
//! these to its document; tests use the in-memory host from
//! `popform-harness`.

pub mod host;
pub mod node;

pub use host::{ElementId, Host};
pub use node::Node;
