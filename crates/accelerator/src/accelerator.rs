use std::{fmt, str::FromStr};

use crate::{Error, KeyCode, KeyFingerprint, Modifier, Platform, Result};

/// A parsed accelerator: modifiers in the order written plus a single key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Accelerator {
    /// Modifiers as written, duplicates included.
    pub modifiers: Vec<Modifier>,
    /// The non-modifier key.
    pub key: KeyCode,
}

impl Accelerator {
    /// Parses an accelerator such as "CmdOrCtrl+Shift+K".
    ///
    /// - Case-insensitive for modifiers and named keys; components are trimmed.
    /// - Single-character keys keep the case they were written in.
    /// - Exactly one key is required, in any position.
    ///
    /// This is more lenient than [`validate`](crate::validate); callers that need
    /// strict syntax should validate first.
    pub fn parse(s: &str) -> Result<Self> {
        let mut modifiers = Vec::new();
        let mut key = None;
        for raw in s.split('+') {
            let part = raw.trim();
            if part.is_empty() {
                return Err(Error::InvalidAccelerator {
                    spec: s.to_string(),
                });
            }
            if let Some(m) = Modifier::from_spec(part) {
                modifiers.push(m);
                continue;
            }
            match KeyCode::from_spec(part) {
                Some(_) if key.is_some() => {
                    return Err(Error::DuplicateKey {
                        key: part.to_string(),
                    });
                }
                Some(k) => key = Some(k),
                None => {
                    return Err(Error::UnknownComponent {
                        part: part.to_string(),
                    });
                }
            }
        }
        let key = key.ok_or_else(|| Error::MissingKey {
            spec: s.to_string(),
        })?;
        Ok(Self { modifiers, key })
    }

    /// Build the key-event fingerprint this accelerator stands for on `platform`.
    ///
    /// Macintosh-only modifiers (`Command`, `Option`) on other platforms yield
    /// [`KeyFingerprint::unsupported`]. Setting the same modifier flag twice is an
    /// error, e.g. `Cmd+Super+K` on macOS.
    pub fn to_key_event(&self, platform: Platform) -> Result<KeyFingerprint> {
        let mut fp = KeyFingerprint {
            code: self.key.dom_code(),
            key: Some(self.key.dom_key()),
            ..KeyFingerprint::default()
        };
        for m in &self.modifiers {
            let (flag, name) = match m {
                Modifier::Command if !platform.is_mac() => return Ok(KeyFingerprint::unsupported()),
                Modifier::Option if !platform.is_mac() => return Ok(KeyFingerprint::unsupported()),
                Modifier::Command | Modifier::Super => (&mut fp.meta_key, "meta"),
                Modifier::CommandOrControl if platform.is_mac() => (&mut fp.meta_key, "meta"),
                Modifier::CommandOrControl | Modifier::Control => (&mut fp.ctrl_key, "control"),
                Modifier::Alt | Modifier::AltGr | Modifier::Option => (&mut fp.alt_key, "alt"),
                Modifier::Shift => (&mut fp.shift_key, "shift"),
            };
            if flag.is_some() {
                return Err(Error::DuplicateModifier { modifier: name });
            }
            *flag = Some(true);
        }
        Ok(fp)
    }

    /// Canonical string form: sorted, de-duplicated modifiers in canonical case,
    /// followed by the key's canonical spelling.
    pub fn to_string_canonical(&self) -> String {
        let mut mods = self.modifiers.clone();
        mods.sort_by_key(|m| m.order());
        mods.dedup();
        let mut out: Vec<String> = mods.iter().map(|m| m.to_spec().to_string()).collect();
        out.push(self.key.to_spec());
        out.join("+")
    }
}

impl FromStr for Accelerator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Accelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_canonical())
    }
}

/// Parse `accelerator` and convert it to a fingerprint for `platform`.
pub fn to_key_event(accelerator: &str, platform: Platform) -> Result<KeyFingerprint> {
    Accelerator::parse(accelerator)?.to_key_event(platform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NamedKey;

    #[test]
    fn parse_basic() {
        let a = Accelerator::parse("Ctrl+Shift+K").expect("parse");
        assert_eq!(a.modifiers, vec![Modifier::Control, Modifier::Shift]);
        assert_eq!(a.key, KeyCode::Char('K'));
        assert_eq!(a.to_string(), "Control+Shift+K");
    }

    #[test]
    fn parse_is_lenient() {
        let a: Accelerator = "cmdorctrl + esc".parse().expect("parse");
        assert_eq!(a.modifiers, vec![Modifier::CommandOrControl]);
        assert_eq!(a.key, KeyCode::Named(NamedKey::Escape));
        assert_eq!(a.to_string(), "CommandOrControl+Escape");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Accelerator::parse("Ctrl+A+B"),
            Err(Error::DuplicateKey { key: "B".into() })
        );
        assert_eq!(
            Accelerator::parse("Ctrl+Shift"),
            Err(Error::MissingKey {
                spec: "Ctrl+Shift".into()
            })
        );
        assert_eq!(
            Accelerator::parse("Hyper+A"),
            Err(Error::UnknownComponent {
                part: "Hyper".into()
            })
        );
        assert!(matches!(
            Accelerator::parse("Ctrl++"),
            Err(Error::InvalidAccelerator { .. })
        ));
    }

    #[test]
    fn command_or_control_by_platform() {
        let other = to_key_event("CommandOrControl+S", Platform::Other).expect("convert");
        assert_eq!(other.ctrl_key, Some(true));
        assert_eq!(other.meta_key, None);
        assert_eq!(other.key.as_deref(), Some("S"));
        assert_eq!(other.code.as_deref(), Some("KeyS"));

        let mac = to_key_event("CommandOrControl+S", Platform::MacOs).expect("convert");
        assert_eq!(mac.meta_key, Some(true));
        assert_eq!(mac.ctrl_key, None);
    }

    #[test]
    fn mac_only_modifiers_are_unsupported_elsewhere() {
        let fp = to_key_event("Cmd+Q", Platform::Other).expect("convert");
        assert!(fp.is_unsupported());
        let fp = to_key_event("Option+Q", Platform::Other).expect("convert");
        assert!(fp.is_unsupported());
        let fp = to_key_event("Option+Q", Platform::MacOs).expect("convert");
        assert_eq!(fp.alt_key, Some(true));
    }

    #[test]
    fn duplicate_flags_rejected() {
        assert_eq!(
            to_key_event("Ctrl+Control+A", Platform::Other),
            Err(Error::DuplicateModifier {
                modifier: "control"
            })
        );
        assert_eq!(
            to_key_event("Cmd+Super+A", Platform::MacOs),
            Err(Error::DuplicateModifier { modifier: "meta" })
        );
        // CmdOrCtrl resolves to control here, so it does not clash with Super.
        assert!(to_key_event("CmdOrCtrl+Super+A", Platform::Other).is_ok());
    }

    #[test]
    fn named_and_function_keys() {
        let fp = to_key_event("Alt+Up", Platform::Other).expect("convert");
        assert_eq!(fp.key.as_deref(), Some("ArrowUp"));
        assert_eq!(fp.code.as_deref(), Some("ArrowUp"));
        assert_eq!(fp.alt_key, Some(true));

        let fp = to_key_event("F5", Platform::Other).expect("convert");
        assert_eq!(fp.key.as_deref(), Some("F5"));
        assert_eq!(fp.alt_key, None);
    }
}
