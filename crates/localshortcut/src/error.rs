use std::result::Result as StdResult;

use thiserror::Error;

/// Convenient result type for this crate.
pub type Result<T> = StdResult<T, Error>;

/// Errors raised by registry operations.
///
/// Operations on destroyed or untracked windows are not errors; they return
/// without effect.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The accelerator string was rejected before any state was touched.
    #[error("{accelerator} is not a valid accelerator: {source}")]
    InvalidAccelerator {
        /// The accelerator as passed by the caller.
        accelerator: String,
        /// Why it was rejected.
        #[source]
        source: accelerator::Error,
    },
}
