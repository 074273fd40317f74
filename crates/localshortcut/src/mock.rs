//! In-memory host framework for tests and offline tools.
//!
//! Surfaces are numbered, may be owned by another surface (popups), and keep
//! their attached input handlers so delivery can be driven by hand.
use std::{
    collections::BTreeMap,
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
};

use parking_lot::Mutex;

use crate::{Host, InputHandler, RawInput, SurfaceObserver, Window};

/// Identity token for a mock content surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u64);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

/// A window created by [`MockHost::create_window`].
#[derive(Clone, Debug)]
pub struct MockWindow {
    /// The window's primary surface.
    surface: SurfaceId,
    /// Shared with the host so destruction is visible through every clone.
    destroyed: Arc<AtomicBool>,
}

impl MockWindow {
    /// The window's primary content surface.
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }
}

impl Window for MockWindow {
    type Surface = SurfaceId;

    fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::SeqCst)
    }

    fn content_surface(&self) -> SurfaceId {
        self.surface
    }
}

/// One live surface.
struct MockSurface {
    /// Hosting surface for popups and child views.
    owner: Option<SurfaceId>,
    /// Attached input handlers, in attach order.
    listeners: Vec<InputHandler>,
}

/// In-memory [`Host`].
#[derive(Default)]
pub struct MockHost {
    /// Last issued surface number.
    next_id: AtomicU64,
    /// Live surfaces.
    surfaces: Mutex<BTreeMap<SurfaceId, MockSurface>>,
    /// Surface-creation observers.
    observers: Mutex<Vec<SurfaceObserver<SurfaceId>>>,
}

impl MockHost {
    /// Empty host with no surfaces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a top-level window with a fresh primary surface.
    pub fn create_window(&self) -> MockWindow {
        MockWindow {
            surface: self.create_surface(None),
            destroyed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a surface hosted by `owner`, such as a popup.
    pub fn create_popup(&self, owner: SurfaceId) -> SurfaceId {
        self.create_surface(Some(owner))
    }

    /// Create a surface and notify observers once it is live.
    fn create_surface(&self, owner: Option<SurfaceId>) -> SurfaceId {
        let id = SurfaceId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.surfaces.lock().insert(
            id,
            MockSurface {
                owner,
                listeners: Vec::new(),
            },
        );
        let observers: Vec<_> = self.observers.lock().clone();
        for observer in observers {
            observer(&id);
        }
        id
    }

    /// Destroy a window together with the surfaces it hosts.
    pub fn destroy_window(&self, window: &MockWindow) {
        window.destroyed.store(true, Ordering::SeqCst);
        let mut surfaces = self.surfaces.lock();
        surfaces.retain(|id, s| *id != window.surface && s.owner != Some(window.surface));
    }

    /// Destroy a single surface.
    pub fn destroy_surface(&self, surface: SurfaceId) {
        self.surfaces.lock().remove(&surface);
    }

    /// Deliver `input` to every handler attached to `surface`.
    ///
    /// Returns the number of handlers the event reached.
    pub fn send_input(&self, surface: SurfaceId, input: &RawInput) -> usize {
        let listeners = self
            .surfaces
            .lock()
            .get(&surface)
            .map(|s| s.listeners.clone())
            .unwrap_or_default();
        for handler in &listeners {
            handler.handle(input);
        }
        listeners.len()
    }

    /// Number of handlers attached to `surface`.
    pub fn listener_count(&self, surface: SurfaceId) -> usize {
        self.surfaces
            .lock()
            .get(&surface)
            .map_or(0, |s| s.listeners.len())
    }

    /// Number of installed surface-creation observers.
    pub fn observer_count(&self) -> usize {
        self.observers.lock().len()
    }
}

impl Host for MockHost {
    type Surface = SurfaceId;

    fn surfaces(&self) -> Vec<SurfaceId> {
        self.surfaces.lock().keys().copied().collect()
    }

    fn host_surface(&self, surface: &SurfaceId) -> Option<SurfaceId> {
        self.surfaces.lock().get(surface).and_then(|s| s.owner)
    }

    fn add_input_listener(&self, surface: &SurfaceId, handler: InputHandler) {
        if let Some(s) = self.surfaces.lock().get_mut(surface) {
            s.listeners.push(handler);
        }
    }

    fn remove_input_listener(&self, surface: &SurfaceId, handler: &InputHandler) {
        if let Some(s) = self.surfaces.lock().get_mut(surface)
            && let Some(idx) = s.listeners.iter().position(|h| h == handler)
        {
            s.listeners.remove(idx);
        }
    }

    fn on_surface_created(&self, observer: SurfaceObserver<SurfaceId>) {
        self.observers.lock().push(observer);
    }
}
