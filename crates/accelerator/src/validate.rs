use crate::{Error, KeyCode, Modifier, Result};

/// Check that `s` is a syntactically valid accelerator.
///
/// - Components are separated by `+` and matched case-sensitively.
/// - Each component is a modifier (`Ctrl`, `CmdOrCtrl`, `Shift`, ...) or a key code.
/// - Exactly one key code is required; repeated modifiers are tolerated here and
///   rejected later by [`to_key_event`](crate::to_key_event).
pub fn validate(s: &str) -> Result<()> {
    let invalid = || Error::InvalidAccelerator {
        spec: s.to_string(),
    };
    let parts: Vec<&str> = s.split('+').collect();
    let last = parts.len() - 1;
    let mut key_found = false;
    for (idx, part) in parts.iter().enumerate() {
        let is_key = KeyCode::from_name(part).is_some();
        if is_key {
            if key_found {
                return Err(invalid());
            }
            key_found = true;
        }
        if idx == last && !key_found {
            return Err(invalid());
        }
        if !is_key && Modifier::from_name(part).is_none() {
            return Err(invalid());
        }
    }
    Ok(())
}

/// Boolean form of [`validate`].
pub fn is_accelerator(s: &str) -> bool {
    validate(s).is_ok()
}
