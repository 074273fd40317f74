use serde::{Deserialize, Serialize};

/// Platform used to resolve platform-dependent modifiers such as `CommandOrControl`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// macOS: `Command` maps to the meta key and `Option` is available.
    MacOs,
    /// Every other platform: `CommandOrControl` maps to control.
    Other,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }

    /// True for macOS.
    pub fn is_mac(self) -> bool {
        matches!(self, Self::MacOs)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}
