//! accelerator: Human-readable shortcut strings and the key-event fingerprints they map to.
//!
//! - [`is_accelerator`] / [`validate`]: strict, case-sensitive syntax check.
//! - [`Accelerator`]: a parsed accelerator (modifiers plus a single key).
//! - [`to_key_event`]: convert an accelerator into a [`KeyFingerprint`] for a [`Platform`].
//! - [`fingerprints_equal`]: the comparison rule used to match fingerprints against
//!   key events.
//!
//! Fingerprints use DOM-style `key`/`code` values, so they compare directly with
//! the key events delivered by web-content surfaces.

mod accelerator;
pub use accelerator::{Accelerator, to_key_event};

mod error;
pub use error::{Error, Result};

mod fingerprint;
pub use fingerprint::{KeyFingerprint, fingerprints_equal};

mod keys;
pub use keys::{KeyCode, NamedKey};

mod modifiers;
pub use modifiers::Modifier;

mod platform;
pub use platform::Platform;

mod validate;
pub use validate::{is_accelerator, validate};
