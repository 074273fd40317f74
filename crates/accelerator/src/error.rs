//! Error types and result alias for the accelerator crate.
use std::result::Result as StdResult;

use thiserror::Error;

/// Convenient result type used throughout this crate.
pub type Result<T> = StdResult<T, Error>;

/// Error variants produced while validating or converting accelerators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The string does not follow accelerator syntax.
    #[error("'{spec}' is not a valid accelerator")]
    InvalidAccelerator {
        /// The offending accelerator string.
        spec: String,
    },
    /// A component is neither a modifier nor a key code.
    #[error("unknown accelerator component '{part}'")]
    UnknownComponent {
        /// The unrecognized component.
        part: String,
    },
    /// The accelerator has no key code, only modifiers.
    #[error("accelerator '{spec}' has no key code")]
    MissingKey {
        /// The offending accelerator string.
        spec: String,
    },
    /// More than one key code was given.
    #[error("duplicated key code '{key}'")]
    DuplicateKey {
        /// The second key code encountered.
        key: String,
    },
    /// The same modifier flag was set twice.
    #[error("double '{modifier}' modifier specified")]
    DuplicateModifier {
        /// Canonical name of the repeated modifier.
        modifier: &'static str,
    },
}
