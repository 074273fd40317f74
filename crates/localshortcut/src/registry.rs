use std::{
    collections::HashMap,
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use accelerator::{KeyFingerprint, Platform, to_key_event, validate};
use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::{Callback, Error, Host, InputHandler, Result, Window, watcher};

/// Per-window shortcut registry.
///
/// Cloning is cheap and yields a handle to the same registry. A window is
/// tracked exactly while it has at least one shortcut: the first registration
/// attaches a dispatch handler to all of the window's surfaces, and removing the
/// last one detaches it again.
pub struct Registry<H: Host> {
    /// Shared state, also reachable (weakly) from the surface watcher.
    inner: Arc<Inner<H>>,
}

/// Registry state.
pub(crate) struct Inner<H: Host> {
    /// Host framework services.
    pub(crate) host: Arc<H>,
    /// Platform used to resolve accelerators.
    platform: Platform,
    /// Window content surface → dispatch handler owning that window's shortcuts.
    pub(crate) tracked: Mutex<HashMap<H::Surface, InputHandler>>,
    /// Set once the surface-creation observer is installed; never reset.
    pub(crate) watching: AtomicBool,
}

impl<H: Host> Clone for Registry<H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<H: Host> fmt::Debug for Registry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("platform", &self.inner.platform)
            .field("tracked", &self.inner.tracked.lock().len())
            .field("watching", &self.is_watching())
            .finish()
    }
}

impl<H: Host> Registry<H> {
    /// Create a registry resolving accelerators for the current platform.
    pub fn new(host: Arc<H>) -> Self {
        Self::with_platform(host, Platform::current())
    }

    /// Create a registry resolving accelerators for `platform`.
    pub fn with_platform(host: Arc<H>, platform: Platform) -> Self {
        Self {
            inner: Arc::new(Inner {
                host,
                platform,
                tracked: Mutex::new(HashMap::new()),
                watching: AtomicBool::new(false),
            }),
        }
    }

    /// Platform accelerators are resolved for.
    pub fn platform(&self) -> Platform {
        self.inner.platform
    }

    /// Register `callback` to run when `accelerator` is pressed in `window`.
    ///
    /// Destroyed windows are ignored. Duplicate accelerators are kept; the
    /// earliest registration wins at dispatch.
    pub fn register<W>(
        &self,
        window: &W,
        accelerator: &str,
        callback: impl Fn() + Send + Sync + 'static,
    ) -> Result<()>
    where
        W: Window<Surface = H::Surface>,
    {
        self.register_all(window, &[accelerator], callback)
    }

    /// Register one callback under several accelerators.
    ///
    /// Every accelerator is validated first; if any is invalid nothing is
    /// registered.
    pub fn register_all<W>(
        &self,
        window: &W,
        accelerators: &[&str],
        callback: impl Fn() + Send + Sync + 'static,
    ) -> Result<()>
    where
        W: Window<Surface = H::Surface>,
    {
        if window.is_destroyed() {
            trace!("register_ignored_destroyed_window");
            return Ok(());
        }
        let fingerprints = accelerators
            .iter()
            .map(|a| self.inner.fingerprint(a))
            .collect::<Result<Vec<_>>>()?;
        if fingerprints.is_empty() {
            return Ok(());
        }
        for (accelerator, fp) in accelerators.iter().zip(&fingerprints) {
            if fp.is_unsupported() {
                warn!(
                    accelerator = %accelerator,
                    platform = ?self.inner.platform,
                    "accelerator_unsupported_on_platform"
                );
            }
        }

        watcher::arm(&self.inner);

        let callback: Callback = Arc::new(callback);
        let surface = window.content_surface();
        let mut tracked = self.inner.tracked.lock();
        let existing = tracked.get(&surface).cloned();
        let handler = match existing {
            Some(h) => h,
            None => self.inner.start_tracking(&mut tracked, surface),
        };
        for (accelerator, fp) in accelerators.iter().zip(fingerprints) {
            handler.push(accelerator, fp, callback.clone());
            debug!(accelerator = %accelerator, "shortcut_registered");
        }
        Ok(())
    }

    /// Remove the first shortcut on `window` matching `accelerator`.
    ///
    /// Later duplicates stay registered. Removing the last shortcut stops
    /// tracking the window.
    pub fn unregister<W>(&self, window: &W, accelerator: &str) -> Result<()>
    where
        W: Window<Surface = H::Surface>,
    {
        if window.is_destroyed() {
            return Ok(());
        }
        let fingerprint = self.inner.fingerprint(accelerator)?;
        let surface = window.content_surface();
        let mut tracked = self.inner.tracked.lock();
        let Some(handler) = tracked.get(&surface).cloned() else {
            return Ok(());
        };
        if handler.remove_first(&fingerprint) == 0 {
            self.inner.stop_tracking(&mut tracked, &surface);
        }
        Ok(())
    }

    /// Remove every shortcut on `window` and stop tracking it.
    pub fn unregister_all<W>(&self, window: &W)
    where
        W: Window<Surface = H::Surface>,
    {
        if window.is_destroyed() {
            return;
        }
        let surface = window.content_surface();
        let mut tracked = self.inner.tracked.lock();
        if tracked.contains_key(&surface) {
            self.inner.stop_tracking(&mut tracked, &surface);
        }
    }

    /// Re-enable every shortcut on `window`.
    pub fn enable_all<W>(&self, window: &W)
    where
        W: Window<Surface = H::Surface>,
    {
        self.set_enabled(window, true);
    }

    /// Disable every shortcut on `window` without removing it.
    pub fn disable_all<W>(&self, window: &W)
    where
        W: Window<Surface = H::Surface>,
    {
        self.set_enabled(window, false);
    }

    /// Whether `window` has a shortcut, enabled or not, matching `accelerator`.
    pub fn is_registered<W>(&self, window: &W, accelerator: &str) -> Result<bool>
    where
        W: Window<Surface = H::Surface>,
    {
        if window.is_destroyed() {
            return Ok(false);
        }
        let fingerprint = self.inner.fingerprint(accelerator)?;
        let handler = self.handler_for(&window.content_surface());
        Ok(handler.is_some_and(|h| h.contains(&fingerprint)))
    }

    /// Number of windows currently tracked.
    pub fn tracked_windows(&self) -> usize {
        self.inner.tracked.lock().len()
    }

    /// Number of shortcuts registered on `window`.
    pub fn shortcut_count<W>(&self, window: &W) -> usize
    where
        W: Window<Surface = H::Surface>,
    {
        self.handler_for(&window.content_surface())
            .map_or(0, |h| h.len())
    }

    /// True once the surface-creation watcher has been installed.
    pub fn is_watching(&self) -> bool {
        self.inner.watching.load(Ordering::SeqCst)
    }

    fn handler_for(&self, surface: &H::Surface) -> Option<InputHandler> {
        self.inner.tracked.lock().get(surface).cloned()
    }

    fn set_enabled<W>(&self, window: &W, enabled: bool)
    where
        W: Window<Surface = H::Surface>,
    {
        if window.is_destroyed() {
            return;
        }
        if let Some(handler) = self.handler_for(&window.content_surface()) {
            handler.set_enabled(enabled);
            debug!(enabled, "shortcuts_toggled");
        }
    }
}

impl<H: Host> Inner<H> {
    /// Validate and convert an accelerator.
    fn fingerprint(&self, accelerator: &str) -> Result<KeyFingerprint> {
        let invalid = |source| Error::InvalidAccelerator {
            accelerator: accelerator.to_string(),
            source,
        };
        validate(accelerator).map_err(invalid)?;
        to_key_event(accelerator, self.platform).map_err(invalid)
    }

    /// True if `surface` is the window's own surface or is hosted by it.
    pub(crate) fn is_window_surface(
        &self,
        window_surface: &H::Surface,
        surface: &H::Surface,
    ) -> bool {
        window_surface == surface
            || self.host.host_surface(surface).as_ref() == Some(window_surface)
    }

    /// Create a handler for `window_surface` and attach it to every live surface of the window.
    fn start_tracking(
        &self,
        tracked: &mut HashMap<H::Surface, InputHandler>,
        window_surface: H::Surface,
    ) -> InputHandler {
        let handler = InputHandler::new();
        let mut attached = 0usize;
        for surface in self.host.surfaces() {
            if self.is_window_surface(&window_surface, &surface) {
                self.host.add_input_listener(&surface, handler.clone());
                attached += 1;
            }
        }
        debug!(surface = ?window_surface, attached, "start_tracking");
        tracked.insert(window_surface, handler.clone());
        handler
    }

    /// Detach the window's handler from all of its surfaces and forget the window.
    fn stop_tracking(
        &self,
        tracked: &mut HashMap<H::Surface, InputHandler>,
        window_surface: &H::Surface,
    ) {
        let Some(handler) = tracked.remove(window_surface) else {
            return;
        };
        for surface in self.host.surfaces() {
            if self.is_window_surface(window_surface, &surface) {
                self.host.remove_input_listener(&surface, &handler);
            }
        }
        debug!(surface = ?window_surface, "stop_tracking");
    }
}
