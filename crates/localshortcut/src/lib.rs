//! Window-scoped keyboard shortcuts.
//!
//! A [`Registry`] maps each window's content surface to an ordered list of
//! shortcuts. The first registration for a window wires an [`InputHandler`] onto
//! every surface that belongs to the window, and a process-wide surface-creation
//! watcher extends that wiring to surfaces the window opens later (popups, child
//! views). Key events are normalized into [`KeyFingerprint`]s and matched in
//! registration order; at most one callback fires per event.
//!
//! The host GUI framework is reached only through the [`Host`] and [`Window`]
//! traits. [`mock::MockHost`] is an in-memory implementation for tests and tools.

mod error;
mod handler;
mod host;
mod input;
pub mod mock;
mod registry;
mod watcher;

pub use accelerator::{KeyFingerprint, Platform};
pub use error::{Error, Result};
pub use handler::{Callback, InputHandler};
pub use host::{Host, SurfaceObserver, Window};
pub use input::{InputKind, RawInput, normalize};
pub use registry::Registry;
