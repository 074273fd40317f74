use accelerator::KeyFingerprint;
use serde::{Deserialize, Serialize};

/// Phase of a raw key event.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum InputKind {
    /// Initial press.
    KeyDown,
    /// OS auto-repeat while held.
    KeyRepeat,
    /// Release.
    KeyUp,
}

impl InputKind {
    /// True for key releases, which never trigger shortcuts.
    pub fn is_release(self) -> bool {
        matches!(self, Self::KeyUp)
    }
}

/// A raw key event as delivered by a content surface.
///
/// Modifier fields are `None` when the host did not report that modifier.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    /// Event phase.
    pub kind: InputKind,
    /// Physical key position, e.g. `KeyS`.
    pub code: String,
    /// Produced key value, e.g. `s`.
    pub key: String,
    /// Alt/Option state.
    #[serde(default)]
    pub alt: Option<bool>,
    /// Shift state.
    #[serde(default)]
    pub shift: Option<bool>,
    /// Meta/Command state.
    #[serde(default)]
    pub meta: Option<bool>,
    /// Control state.
    #[serde(default)]
    pub control: Option<bool>,
}

impl RawInput {
    /// A key press with no modifier information.
    pub fn key_down(code: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            kind: InputKind::KeyDown,
            code: code.into(),
            key: key.into(),
            alt: None,
            shift: None,
            meta: None,
            control: None,
        }
    }

    /// The same event with a different phase.
    pub fn with_kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the control state.
    pub fn control(mut self, on: bool) -> Self {
        self.control = Some(on);
        self
    }

    /// Set the shift state.
    pub fn shift(mut self, on: bool) -> Self {
        self.shift = Some(on);
        self
    }

    /// Set the alt state.
    pub fn alt(mut self, on: bool) -> Self {
        self.alt = Some(on);
        self
    }

    /// Set the meta state.
    pub fn meta(mut self, on: bool) -> Self {
        self.meta = Some(on);
        self
    }
}

/// Convert a raw event into a fingerprint comparable with accelerator fingerprints.
///
/// `code` and `key` are copied verbatim. Modifiers are carried over only when the
/// event reports them, so an unreported modifier stays absent rather than `false`.
/// The event's `control` becomes the fingerprint's `ctrl_key`.
pub fn normalize(input: &RawInput) -> KeyFingerprint {
    KeyFingerprint {
        code: Some(input.code.clone()),
        key: Some(input.key.clone()),
        alt_key: input.alt,
        shift_key: input.shift,
        meta_key: input.meta,
        ctrl_key: input.control,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_modifiers_stay_absent() {
        let fp = normalize(&RawInput::key_down("KeyS", "s").control(true));
        assert_eq!(fp.code.as_deref(), Some("KeyS"));
        assert_eq!(fp.key.as_deref(), Some("s"));
        assert_eq!(fp.ctrl_key, Some(true));
        assert_eq!(fp.alt_key, None);
        assert_eq!(fp.shift_key, None);
        assert_eq!(fp.meta_key, None);
    }

    #[test]
    fn explicit_false_is_kept() {
        let fp = normalize(&RawInput::key_down("KeyA", "a").shift(false).meta(true).alt(false));
        assert_eq!(fp.shift_key, Some(false));
        assert_eq!(fp.meta_key, Some(true));
        assert_eq!(fp.alt_key, Some(false));
        assert_eq!(fp.ctrl_key, None);
    }

    #[test]
    fn deserializes_from_ron() {
        let input: RawInput =
            ron::from_str(r#"(kind: KeyUp, code: "KeyK", key: "k", shift: Some(true))"#)
                .expect("parse");
        assert!(input.kind.is_release());
        assert_eq!(input.shift, Some(true));
        assert_eq!(input.control, None);
    }
}
