#![forbid(unsafe_code)]

//! Logging support.
//!
//! Re-exports the tracing macros popform uses when the `tracing` feature is
//! enabled. When the feature is disabled, no-op macros with the same names
//! are provided so call sites compile unchanged either way.

#[cfg(feature = "tracing")]
pub use tracing::{debug, error, trace, warn};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op warn macro when tracing is disabled.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }

    /// No-op error macro when tracing is disabled.
    #[macro_export]
    macro_rules! error {
        ($($arg:tt)*) => {};
    }
}

// `#[macro_export]` lands the no-op macros at the crate root; re-export them
// here so `popform_core::logging::warn` resolves with the feature on or off.
#[cfg(not(feature = "tracing"))]
pub use crate::{debug, error, trace, warn};
