use std::fmt;

// Central table of keys that accelerators spell out by name.
// Columns: accelerator name, DOM `key` value, DOM `code` value.
macro_rules! named_keys {
    ( $( $variant:ident => $name:literal, $key:literal, $code:literal; )* ) => {
        /// Non-character keys addressed by name in accelerators.
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
        pub enum NamedKey {
            $(
                #[doc = $name]
                $variant,
            )*
        }

        impl NamedKey {
            /// All named keys in table order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )* ];

            /// Canonical accelerator spelling.
            pub fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )*
                }
            }

            /// DOM `key` value produced when this key is pressed.
            pub fn dom_key(self) -> &'static str {
                match self {
                    $( Self::$variant => $key, )*
                }
            }

            /// DOM `code` value for this key's physical position.
            pub fn dom_code(self) -> &'static str {
                match self {
                    $( Self::$variant => $code, )*
                }
            }
        }
    };
}

named_keys! {
    Plus => "Plus", "+", "Equal";
    Space => "Space", " ", "Space";
    Tab => "Tab", "Tab", "Tab";
    Backspace => "Backspace", "Backspace", "Backspace";
    Delete => "Delete", "Delete", "Delete";
    Insert => "Insert", "Insert", "Insert";
    Return => "Return", "Enter", "Enter";
    Up => "Up", "ArrowUp", "ArrowUp";
    Down => "Down", "ArrowDown", "ArrowDown";
    Left => "Left", "ArrowLeft", "ArrowLeft";
    Right => "Right", "ArrowRight", "ArrowRight";
    Home => "Home", "Home", "Home";
    End => "End", "End", "End";
    PageUp => "PageUp", "PageUp", "PageUp";
    PageDown => "PageDown", "PageDown", "PageDown";
    Escape => "Escape", "Escape", "Escape";
    VolumeUp => "VolumeUp", "AudioVolumeUp", "AudioVolumeUp";
    VolumeDown => "VolumeDown", "AudioVolumeDown", "AudioVolumeDown";
    VolumeMute => "VolumeMute", "AudioVolumeMute", "AudioVolumeMute";
    MediaNextTrack => "MediaNextTrack", "MediaTrackNext", "MediaTrackNext";
    MediaPreviousTrack => "MediaPreviousTrack", "MediaTrackPrevious", "MediaTrackPrevious";
    MediaStop => "MediaStop", "MediaStop", "MediaStop";
    MediaPlayPause => "MediaPlayPause", "MediaPlayPause", "MediaPlayPause";
    PrintScreen => "PrintScreen", "PrintScreen", "PrintScreen";
}

// Alternate spellings accepted on input but never emitted.
const NAMED_ALIASES: &[(&str, NamedKey)] = &[("Enter", NamedKey::Return), ("Esc", NamedKey::Escape)];

/// Punctuation accepted as a single-character key.
const KEY_PUNCTUATION: &str = ")!@#$%^&*(:+<_>?~{|}\";=,-./`[\\]'";

/// Highest function key number.
const MAX_FUNCTION_KEY: u8 = 24;

/// Find a named key by name or alias using `eq` to compare spellings.
fn lookup_named(s: &str, eq: impl Fn(&str, &str) -> bool) -> Option<NamedKey> {
    NamedKey::ALL
        .iter()
        .copied()
        .find(|k| eq(k.name(), s))
        .or_else(|| {
            NAMED_ALIASES
                .iter()
                .find(|(alias, _)| eq(*alias, s))
                .map(|(_, k)| *k)
        })
}

/// The single non-modifier key of an accelerator.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum KeyCode {
    /// A printable character, stored as written.
    Char(char),
    /// `F1` through `F24`.
    Function(u8),
    /// A key spelled out by name.
    Named(NamedKey),
}

impl KeyCode {
    /// Exact, case-sensitive lookup used by strict validation.
    ///
    /// Letters must be uppercase, function keys are `F1`..`F24` and names use
    /// their canonical case.
    pub fn from_name(s: &str) -> Option<Self> {
        if let Some(c) = single_char(s) {
            return (c.is_ascii_digit() || c.is_ascii_uppercase() || KEY_PUNCTUATION.contains(c))
                .then_some(Self::Char(c));
        }
        if let Some(n) = s.strip_prefix('F').and_then(function_number) {
            return Some(Self::Function(n));
        }
        lookup_named(s, |a, b| a == b).map(Self::Named)
    }

    /// Case-insensitive lookup. Single characters keep the case they were written in.
    pub fn from_spec(s: &str) -> Option<Self> {
        if let Some(c) = single_char(s) {
            return (c.is_ascii_alphanumeric() || KEY_PUNCTUATION.contains(c)).then_some(Self::Char(c));
        }
        if let Some(n) = s
            .strip_prefix(['F', 'f'])
            .and_then(function_number)
        {
            return Some(Self::Function(n));
        }
        lookup_named(s, |a, b| a.eq_ignore_ascii_case(b)).map(Self::Named)
    }

    /// DOM `key` value for this key.
    pub fn dom_key(&self) -> String {
        match self {
            Self::Char(c) => c.to_string(),
            Self::Function(n) => format!("F{n}"),
            Self::Named(k) => k.dom_key().to_string(),
        }
    }

    /// DOM `code` value, if the key has a fixed physical position.
    ///
    /// Shifted symbols such as `!` or `{` have no code of their own.
    pub fn dom_code(&self) -> Option<String> {
        match self {
            Self::Char(c) => char_code(*c),
            Self::Function(n) => Some(format!("F{n}")),
            Self::Named(k) => Some(k.dom_code().to_string()),
        }
    }

    /// Canonical accelerator spelling.
    pub fn to_spec(&self) -> String {
        match self {
            Self::Char(c) => c.to_ascii_uppercase().to_string(),
            Self::Function(n) => format!("F{n}"),
            Self::Named(k) => k.name().to_string(),
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_spec())
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn function_number(digits: &str) -> Option<u8> {
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: u8 = digits.parse().ok()?;
    (1..=MAX_FUNCTION_KEY).contains(&n).then_some(n)
}

fn char_code(c: char) -> Option<String> {
    if c.is_ascii_alphabetic() {
        return Some(format!("Key{}", c.to_ascii_uppercase()));
    }
    if c.is_ascii_digit() {
        return Some(format!("Digit{c}"));
    }
    let code = match c {
        '-' => "Minus",
        '=' => "Equal",
        '[' => "BracketLeft",
        ']' => "BracketRight",
        '\\' => "Backslash",
        ';' => "Semicolon",
        '\'' => "Quote",
        ',' => "Comma",
        '.' => "Period",
        '/' => "Slash",
        '`' => "Backquote",
        _ => return None,
    };
    Some(code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_lookup() {
        assert_eq!(KeyCode::from_name("S"), Some(KeyCode::Char('S')));
        assert_eq!(KeyCode::from_name("s"), None);
        assert_eq!(KeyCode::from_name("F12"), Some(KeyCode::Function(12)));
        assert_eq!(KeyCode::from_name("F25"), None);
        assert_eq!(KeyCode::from_name("F0"), None);
        assert_eq!(KeyCode::from_name("Esc"), Some(KeyCode::Named(NamedKey::Escape)));
        assert_eq!(KeyCode::from_name("esc"), None);
        assert_eq!(KeyCode::from_name("F"), Some(KeyCode::Char('F')));
    }

    #[test]
    fn lenient_lookup() {
        assert_eq!(KeyCode::from_spec("s"), Some(KeyCode::Char('s')));
        assert_eq!(KeyCode::from_spec("f5"), Some(KeyCode::Function(5)));
        assert_eq!(KeyCode::from_spec("pageup"), Some(KeyCode::Named(NamedKey::PageUp)));
        assert_eq!(KeyCode::from_spec("enter"), Some(KeyCode::Named(NamedKey::Return)));
        assert_eq!(KeyCode::from_spec("Hyper"), None);
    }

    #[test]
    fn dom_values() {
        let s = KeyCode::Char('s');
        assert_eq!(s.dom_key(), "s");
        assert_eq!(s.dom_code().as_deref(), Some("KeyS"));
        assert_eq!(KeyCode::Char('7').dom_code().as_deref(), Some("Digit7"));
        assert_eq!(KeyCode::Char('`').dom_code().as_deref(), Some("Backquote"));
        assert_eq!(KeyCode::Char('!').dom_code(), None);

        let up = KeyCode::Named(NamedKey::Up);
        assert_eq!(up.dom_key(), "ArrowUp");
        assert_eq!(up.dom_code().as_deref(), Some("ArrowUp"));
        assert_eq!(KeyCode::Function(3).dom_key(), "F3");
    }

    #[test]
    fn canonical_spelling() {
        assert_eq!(KeyCode::Char('s').to_spec(), "S");
        assert_eq!(KeyCode::Named(NamedKey::Return).to_spec(), "Return");
        for k in NamedKey::ALL {
            assert_eq!(KeyCode::from_name(k.name()), Some(KeyCode::Named(*k)));
        }
    }
}
