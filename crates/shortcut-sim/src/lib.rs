//! Scenario replay for the localshortcut registry.
//!
//! A [`Scenario`] lists windows and an ordered script of steps: registering and
//! removing shortcuts, toggling them, opening popups, destroying windows and
//! delivering key events. [`Simulator`] replays it against a [`MockHost`] and
//! reports which shortcuts fired at which step.

use std::{collections::HashMap, fs, path::Path, sync::Arc};

use localshortcut::{
    Platform, RawInput, Registry,
    mock::{MockHost, MockWindow, SurfaceId},
};
use parking_lot::Mutex;
use serde::Deserialize;
use tracing::{debug, info};

mod error;
pub use error::{Error, Result};

/// A scripted session.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Platform to resolve accelerators for; defaults to the host platform.
    #[serde(default)]
    pub platform: Option<Platform>,
    /// Window names, created in order before the first step.
    pub windows: Vec<String>,
    /// Steps, replayed in order.
    pub steps: Vec<Step>,
}

/// One scripted action.
#[derive(Debug, Clone, Deserialize)]
pub enum Step {
    /// Register a shortcut; `name` is reported when it fires.
    Register {
        /// Target window.
        window: String,
        /// Accelerator string.
        accelerator: String,
        /// Label reported on fire.
        name: String,
    },
    /// Remove the first shortcut matching `accelerator`.
    Unregister {
        /// Target window.
        window: String,
        /// Accelerator string.
        accelerator: String,
    },
    /// Remove every shortcut on the window.
    UnregisterAll {
        /// Target window.
        window: String,
    },
    /// Enable every shortcut on the window.
    EnableAll {
        /// Target window.
        window: String,
    },
    /// Disable every shortcut on the window.
    DisableAll {
        /// Target window.
        window: String,
    },
    /// Open a popup surface hosted by `window`.
    OpenPopup {
        /// Name for later `Input` steps.
        name: String,
        /// Hosting window.
        window: String,
    },
    /// Destroy a window and its popups.
    Destroy {
        /// Target window.
        window: String,
    },
    /// Deliver a key event to a window or popup.
    Input {
        /// Window or popup name.
        target: String,
        /// The raw event.
        input: RawInput,
    },
}

impl Scenario {
    /// Parse a scenario from RON text.
    pub fn from_ron(text: &str) -> Result<Self> {
        ron::from_str(text).map_err(|e| Error::Parse(e.to_string()))
    }

    /// Read and parse a scenario file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_ron(&text)
    }
}

/// A shortcut firing observed during replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired {
    /// Zero-based index of the `Input` step that triggered it.
    pub step: usize,
    /// The registration's name.
    pub name: String,
}

/// Replays scenarios against an in-memory host.
pub struct Simulator {
    /// The mock host framework.
    host: Arc<MockHost>,
    /// Registry under test.
    registry: Registry<MockHost>,
    /// Named windows.
    windows: HashMap<String, MockWindow>,
    /// Named popup surfaces.
    popups: HashMap<String, SurfaceId>,
    /// Names of shortcuts fired since the last drain.
    fired: Arc<Mutex<Vec<String>>>,
}

impl Simulator {
    /// Simulator resolving accelerators for `platform`.
    pub fn new(platform: Platform) -> Self {
        let host = Arc::new(MockHost::new());
        Self {
            registry: Registry::with_platform(host.clone(), platform),
            host,
            windows: HashMap::new(),
            popups: HashMap::new(),
            fired: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The registry being driven.
    pub fn registry(&self) -> &Registry<MockHost> {
        &self.registry
    }

    /// Create the scenario's windows and replay its steps.
    pub fn run(&mut self, scenario: &Scenario) -> Result<Vec<Fired>> {
        for name in &scenario.windows {
            self.check_unused(name)?;
            let window = self.host.create_window();
            debug!(window = %name, surface = %window.surface(), "window_created");
            self.windows.insert(name.clone(), window);
        }
        let mut fired = Vec::new();
        for (idx, step) in scenario.steps.iter().enumerate() {
            self.step(idx, step)?;
            for name in self.fired.lock().drain(..) {
                info!(step = idx, shortcut = %name, "fired");
                fired.push(Fired { step: idx, name });
            }
        }
        Ok(fired)
    }

    /// Apply one step.
    fn step(&mut self, idx: usize, step: &Step) -> Result<()> {
        let shortcut_err = |source| Error::Shortcut { step: idx, source };
        match step {
            Step::Register {
                window,
                accelerator,
                name,
            } => {
                let win = self.window(window)?;
                let sink = self.fired.clone();
                let label = name.clone();
                self.registry
                    .register(win, accelerator, move || sink.lock().push(label.clone()))
                    .map_err(shortcut_err)?;
            }
            Step::Unregister {
                window,
                accelerator,
            } => {
                let win = self.window(window)?;
                self.registry
                    .unregister(win, accelerator)
                    .map_err(shortcut_err)?;
            }
            Step::UnregisterAll { window } => self.registry.unregister_all(self.window(window)?),
            Step::EnableAll { window } => self.registry.enable_all(self.window(window)?),
            Step::DisableAll { window } => self.registry.disable_all(self.window(window)?),
            Step::OpenPopup { name, window } => {
                self.check_unused(name)?;
                let owner = self.window(window)?.surface();
                let popup = self.host.create_popup(owner);
                debug!(popup = %name, surface = %popup, owner = %owner, "popup_opened");
                self.popups.insert(name.clone(), popup);
            }
            Step::Destroy { window } => {
                let win = self.window(window)?;
                self.host.destroy_window(win);
            }
            Step::Input { target, input } => {
                let surface = self.surface(target)?;
                let reached = self.host.send_input(surface, input);
                debug!(target = %target, reached, "input_delivered");
            }
        }
        Ok(())
    }

    fn window(&self, name: &str) -> Result<&MockWindow> {
        self.windows
            .get(name)
            .ok_or_else(|| Error::UnknownTarget(name.to_string()))
    }

    fn surface(&self, name: &str) -> Result<SurfaceId> {
        self.windows
            .get(name)
            .map(MockWindow::surface)
            .or_else(|| self.popups.get(name).copied())
            .ok_or_else(|| Error::UnknownTarget(name.to_string()))
    }

    fn check_unused(&self, name: &str) -> Result<()> {
        if self.windows.contains_key(name) || self.popups.contains_key(name) {
            return Err(Error::DuplicateName(name.to_string()));
        }
        Ok(())
    }
}

/// Replay `scenario` on a fresh simulator, using `platform` when the scenario
/// does not pin one.
pub fn replay(scenario: &Scenario, platform: Platform) -> Result<Vec<Fired>> {
    let mut sim = Simulator::new(scenario.platform.unwrap_or(platform));
    sim.run(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_target_is_reported() {
        let scenario = Scenario::from_ron(
            r#"(windows: ["main"], steps: [DisableAll(window: "nope")])"#,
        )
        .expect("parse");
        let err = replay(&scenario, Platform::Other).expect_err("must fail");
        assert!(matches!(err, Error::UnknownTarget(ref n) if n == "nope"));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let scenario = Scenario::from_ron(
            r#"(windows: ["main"], steps: [OpenPopup(name: "main", window: "main")])"#,
        )
        .expect("parse");
        assert!(matches!(
            replay(&scenario, Platform::Other),
            Err(Error::DuplicateName(_))
        ));
    }

    #[test]
    fn invalid_accelerator_carries_step() {
        let scenario = Scenario::from_ron(
            r#"(windows: ["main"], steps: [
                Register(window: "main", accelerator: "Ctrl+S", name: "ok"),
                Register(window: "main", accelerator: "Ctrl+", name: "bad"),
            ])"#,
        )
        .expect("parse");
        let err = replay(&scenario, Platform::Other).expect_err("must fail");
        assert!(matches!(err, Error::Shortcut { step: 1, .. }));
    }

    #[test]
    fn parse_error_is_reported() {
        assert!(matches!(
            Scenario::from_ron("(windows: )"),
            Err(Error::Parse(_))
        ));
    }
}
