//! Per-window dispatch: the handler attached to every surface of a tracked window.
use std::{fmt, sync::Arc};

use accelerator::{KeyFingerprint, fingerprints_equal};
use parking_lot::Mutex;
use tracing::trace;

use crate::{RawInput, normalize};

/// Shortcut callback.
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// One registration on a window.
struct Shortcut {
    /// Accelerator as registered, kept for logging.
    accelerator: String,
    /// Fingerprint the accelerator converted to.
    fingerprint: KeyFingerprint,
    /// Invoked on a matching press.
    callback: Callback,
    /// Disabled shortcuts neither fire nor shadow later duplicates.
    enabled: bool,
}

/// Dispatch handler for one tracked window.
///
/// Owns the window's ordered shortcut list. Clones share the list, and two
/// handlers are equal only if they are clones of the same handler, which is
/// how hosts identify a listener on removal.
#[derive(Clone, Default)]
pub struct InputHandler {
    /// Registration list in insertion order.
    shortcuts: Arc<Mutex<Vec<Shortcut>>>,
}

impl InputHandler {
    /// Fresh handler with an empty list.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Handle one raw event from an attached surface.
    ///
    /// Releases are ignored. Otherwise the first enabled shortcut whose
    /// fingerprint equals the normalized event fires, and scanning stops.
    pub fn handle(&self, input: &RawInput) {
        if input.kind.is_release() {
            return;
        }
        let event = normalize(input);
        let hit = {
            let shortcuts = self.shortcuts.lock();
            shortcuts
                .iter()
                .find(|s| s.enabled && fingerprints_equal(&s.fingerprint, &event))
                .map(|s| (s.accelerator.clone(), s.callback.clone()))
        };
        // The lock is released first so callbacks may call back into the registry.
        if let Some((accelerator, callback)) = hit {
            trace!(accelerator = %accelerator, code = %input.code, "shortcut_fired");
            callback();
        }
    }

    /// Append a new enabled shortcut.
    pub(crate) fn push(&self, accelerator: &str, fingerprint: KeyFingerprint, callback: Callback) {
        self.shortcuts.lock().push(Shortcut {
            accelerator: accelerator.to_string(),
            fingerprint,
            callback,
            enabled: true,
        });
    }

    /// Remove the first shortcut equal to `fingerprint`, enabled or not.
    ///
    /// Returns the number of shortcuts left.
    pub(crate) fn remove_first(&self, fingerprint: &KeyFingerprint) -> usize {
        let mut shortcuts = self.shortcuts.lock();
        if let Some(idx) = shortcuts
            .iter()
            .position(|s| fingerprints_equal(&s.fingerprint, fingerprint))
        {
            let removed = shortcuts.remove(idx);
            trace!(accelerator = %removed.accelerator, "shortcut_removed");
        }
        shortcuts.len()
    }

    /// True if any shortcut, enabled or not, equals `fingerprint`.
    pub(crate) fn contains(&self, fingerprint: &KeyFingerprint) -> bool {
        self.shortcuts
            .lock()
            .iter()
            .any(|s| fingerprints_equal(&s.fingerprint, fingerprint))
    }

    /// Enable or disable every shortcut.
    pub(crate) fn set_enabled(&self, enabled: bool) {
        for s in self.shortcuts.lock().iter_mut() {
            s.enabled = enabled;
        }
    }

    /// Number of registered shortcuts.
    pub(crate) fn len(&self) -> usize {
        self.shortcuts.lock().len()
    }
}

impl PartialEq for InputHandler {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shortcuts, &other.shortcuts)
    }
}

impl Eq for InputHandler {}

impl fmt::Debug for InputHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputHandler")
            .field("id", &Arc::as_ptr(&self.shortcuts))
            .field("shortcuts", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use accelerator::{Platform, to_key_event};

    use super::*;
    use crate::InputKind;

    fn counter() -> (Arc<AtomicUsize>, Callback) {
        let n = Arc::new(AtomicUsize::new(0));
        let c = n.clone();
        let cb: Callback = Arc::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        (n, cb)
    }

    fn fp(accel: &str) -> KeyFingerprint {
        to_key_event(accel, Platform::Other).expect("convert")
    }

    #[test]
    fn press_and_repeat_fire_release_does_not() {
        let h = InputHandler::new();
        let (n, cb) = counter();
        h.push("Ctrl+K", fp("Ctrl+K"), cb);
        let press = RawInput::key_down("KeyK", "k").control(true);
        h.handle(&press);
        h.handle(&press.clone().with_kind(InputKind::KeyRepeat));
        h.handle(&press.with_kind(InputKind::KeyUp));
        assert_eq!(n.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn disabled_entry_does_not_shadow_later_duplicate() {
        let h = InputHandler::new();
        let (first, cb1) = counter();
        h.push("Ctrl+K", fp("Ctrl+K"), cb1);
        h.set_enabled(false);
        let (second, cb2) = counter();
        h.push("Ctrl+K", fp("Ctrl+K"), cb2);
        h.handle(&RawInput::key_down("KeyK", "k").control(true));
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn identity_equality() {
        let a = InputHandler::new();
        let b = InputHandler::new();
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn remove_first_reports_remaining() {
        let h = InputHandler::new();
        let (_, cb) = counter();
        h.push("Ctrl+K", fp("Ctrl+K"), cb.clone());
        h.push("Ctrl+K", fp("Ctrl+K"), cb);
        assert_eq!(h.remove_first(&fp("Ctrl+K")), 1);
        assert_eq!(h.remove_first(&fp("Ctrl+J")), 1);
        assert!(h.contains(&fp("Ctrl+K")));
        assert_eq!(h.remove_first(&fp("Ctrl+K")), 0);
    }
}
