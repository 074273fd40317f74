use serde::{Deserialize, Serialize};

/// Canonical description of a key combination.
///
/// Built either from an accelerator ([`to_key_event`](crate::to_key_event)) or from
/// a raw key event. Modifier fields are tri-state: `None` means the source said
/// nothing about that modifier.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct KeyFingerprint {
    /// Physical key position, e.g. `KeyS`.
    pub code: Option<String>,
    /// Produced key value, e.g. `s`.
    pub key: Option<String>,
    /// Alt/Option held.
    pub alt_key: Option<bool>,
    /// Shift held.
    pub shift_key: Option<bool>,
    /// Meta/Command/Super held.
    pub meta_key: Option<bool>,
    /// Control held.
    pub ctrl_key: Option<bool>,
}

impl KeyFingerprint {
    /// Fingerprint for an accelerator that cannot be used on the current platform.
    ///
    /// It carries neither `key` nor `code`, so it never compares equal to anything.
    pub fn unsupported() -> Self {
        Self::default()
    }

    /// True if this fingerprint can never match.
    pub fn is_unsupported(&self) -> bool {
        self.key.is_none() && self.code.is_none()
    }

    /// Shorthand for [`fingerprints_equal`].
    pub fn matches(&self, other: &Self) -> bool {
        fingerprints_equal(self, other)
    }
}

/// Compare two fingerprints.
///
/// Modifiers compare as booleans, with an absent field counting as `false`.
/// With modifiers equal, the fingerprints match when `key` agrees ignoring ASCII
/// case or when `code` agrees exactly. Absent values never match.
pub fn fingerprints_equal(a: &KeyFingerprint, b: &KeyFingerprint) -> bool {
    let flag = |v: Option<bool>| v.unwrap_or(false);
    let modifiers = [
        (a.alt_key, b.alt_key),
        (a.ctrl_key, b.ctrl_key),
        (a.shift_key, b.shift_key),
        (a.meta_key, b.meta_key),
    ];
    if modifiers.iter().any(|(x, y)| flag(*x) != flag(*y)) {
        return false;
    }
    let key_match = matches!(
        (&a.key, &b.key),
        (Some(x), Some(y)) if x.eq_ignore_ascii_case(y)
    );
    let code_match = matches!((&a.code, &b.code), (Some(x), Some(y)) if x == y);
    key_match || code_match
}
