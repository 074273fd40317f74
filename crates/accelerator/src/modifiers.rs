use std::fmt;

/// Modifier words accepted in accelerator strings.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Modifier {
    /// `Command` / `Cmd` (macOS only).
    Command,
    /// `Control` / `Ctrl`.
    Control,
    /// `CommandOrControl` / `CmdOrCtrl`: Command on macOS, Control elsewhere.
    CommandOrControl,
    /// `Alt`.
    Alt,
    /// `Option` (macOS only).
    Option,
    /// `AltGr`.
    AltGr,
    /// `Shift`.
    Shift,
    /// `Super`: the meta key on every platform.
    Super,
}

/// Every spelling of every modifier, in canonical case.
const MODIFIER_NAMES: &[(&str, Modifier)] = &[
    ("Command", Modifier::Command),
    ("Cmd", Modifier::Command),
    ("Control", Modifier::Control),
    ("Ctrl", Modifier::Control),
    ("CommandOrControl", Modifier::CommandOrControl),
    ("CmdOrCtrl", Modifier::CommandOrControl),
    ("Alt", Modifier::Alt),
    ("Option", Modifier::Option),
    ("AltGr", Modifier::AltGr),
    ("Shift", Modifier::Shift),
    ("Super", Modifier::Super),
];

impl Modifier {
    /// Exact, case-sensitive lookup used by strict validation.
    pub fn from_name(s: &str) -> Option<Self> {
        MODIFIER_NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, m)| *m)
    }

    /// Case-insensitive lookup accepting every alias.
    pub fn from_spec(s: &str) -> Option<Self> {
        MODIFIER_NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, m)| *m)
    }

    /// Canonical accelerator spelling.
    pub fn to_spec(self) -> &'static str {
        match self {
            Self::Command => "Command",
            Self::Control => "Control",
            Self::CommandOrControl => "CommandOrControl",
            Self::Alt => "Alt",
            Self::Option => "Option",
            Self::AltGr => "AltGr",
            Self::Shift => "Shift",
            Self::Super => "Super",
        }
    }

    /// Sort position in canonical output.
    pub(crate) fn order(self) -> usize {
        match self {
            Self::CommandOrControl => 0,
            Self::Command => 1,
            Self::Super => 2,
            Self::Control => 3,
            Self::Alt => 4,
            Self::Option => 5,
            Self::AltGr => 6,
            Self::Shift => 7,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_spec())
    }
}
