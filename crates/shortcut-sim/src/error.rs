//! Error types for scenario loading and replay.
use std::{path::PathBuf, result::Result as StdResult};

use thiserror::Error;

/// Result alias for the simulator.
pub type Result<T> = StdResult<T, Error>;

/// Errors produced while loading or replaying a scenario.
#[derive(Debug, Error)]
pub enum Error {
    /// The scenario file could not be read.
    #[error("Read error at {}: {message}", .path.display())]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Human-readable error message.
        message: String,
    },
    /// The scenario text is not valid RON for a [`Scenario`](crate::Scenario).
    #[error("Scenario parse error: {0}")]
    Parse(String),
    /// A step names a window or popup that does not exist.
    #[error("Unknown window or surface '{0}'")]
    UnknownTarget(String),
    /// A window or popup name was declared twice.
    #[error("Name '{0}' is already in use")]
    DuplicateName(String),
    /// The registry rejected a step.
    #[error("Step {step}: {source}")]
    Shortcut {
        /// Zero-based step index.
        step: usize,
        /// Registry error.
        #[source]
        source: localshortcut::Error,
    },
}
