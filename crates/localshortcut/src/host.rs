//! Seams to the host GUI framework.
use std::{fmt::Debug, hash::Hash, sync::Arc};

use crate::InputHandler;

/// Observer invoked once for every newly created content surface.
pub type SurfaceObserver<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// A top-level window as seen by the registry.
pub trait Window {
    /// Identity token of the window's content surfaces.
    type Surface;

    /// True once the window has been torn down.
    fn is_destroyed(&self) -> bool;

    /// The window's primary content surface; used as the registry key.
    fn content_surface(&self) -> Self::Surface;
}

/// The services the registry needs from the host framework.
///
/// Surface tokens compare by identity: two tokens are equal exactly when they
/// denote the same live surface.
pub trait Host: Send + Sync + 'static {
    /// Content-surface identity token.
    type Surface: Clone + Eq + Hash + Debug + Send + Sync + 'static;

    /// Every live content surface, process-wide.
    fn surfaces(&self) -> Vec<Self::Surface>;

    /// The surface that hosts/owns `surface`, if any.
    fn host_surface(&self, surface: &Self::Surface) -> Option<Self::Surface>;

    /// Deliver `surface`'s raw key input to `handler`.
    fn add_input_listener(&self, surface: &Self::Surface, handler: InputHandler);

    /// Stop delivering input from `surface` to the handler identical to `handler`.
    fn remove_input_listener(&self, surface: &Self::Surface, handler: &InputHandler);

    /// Subscribe to surface creation. Each new surface is reported exactly once.
    fn on_surface_created(&self, observer: SurfaceObserver<Self::Surface>);
}
