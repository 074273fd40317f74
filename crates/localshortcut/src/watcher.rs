//! Surface-creation watcher: wires tracked windows' handlers onto surfaces
//! created after tracking began.
use std::sync::{Arc, atomic::Ordering};

use tracing::{debug, trace};

use crate::{Host, registry::Inner};

/// Install the surface-creation observer unless it is already installed.
///
/// The observer holds only a weak reference, so it goes inert once the
/// registry is dropped.
pub(crate) fn arm<H: Host>(inner: &Arc<Inner<H>>) {
    if inner.watching.swap(true, Ordering::SeqCst) {
        return;
    }
    let weak = Arc::downgrade(inner);
    inner
        .host
        .on_surface_created(Arc::new(move |surface: &H::Surface| {
            if let Some(inner) = weak.upgrade() {
                surface_created::<H>(&inner, surface);
            }
        }));
    debug!("surface_watcher_armed");
}

/// Attach every tracked window's handler to `surface` if the surface belongs to it.
fn surface_created<H: Host>(inner: &Inner<H>, surface: &H::Surface) {
    let tracked = inner.tracked.lock();
    for (window_surface, handler) in tracked.iter() {
        if inner.is_window_surface(window_surface, surface) {
            trace!(window = ?window_surface, surface = ?surface, "attach_new_surface");
            inner.host.add_input_listener(surface, handler.clone());
        }
    }
}
