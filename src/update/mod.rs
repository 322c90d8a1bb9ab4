//! Update functions for the Elm-style architecture
//!
//! All host events reach a dock group through `update()`.

mod dock;
mod pointer;

use crate::commands::Cmd;
use crate::messages::DockMsg;
use crate::model::DockGroup;
use crate::panel::Panel;

#[cfg(any(debug_assertions, feature = "profile-tracing"))]
use crate::tracing::LayoutSnapshot;
#[cfg(any(debug_assertions, feature = "profile-tracing"))]
use tracing::{debug, span, Level};

pub use dock::update_dock;
pub use pointer::update_pointer;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update<P: Panel>(group: &mut DockGroup<P>, msg: DockMsg<P>) -> Option<Cmd> {
    #[cfg(any(debug_assertions, feature = "profile-tracing"))]
    {
        update_traced(group, msg)
    }
    #[cfg(not(any(debug_assertions, feature = "profile-tracing")))]
    {
        update_inner(group, msg)
    }
}

/// Update with a span per message and a layout diff when anything moved
#[cfg(any(debug_assertions, feature = "profile-tracing"))]
fn update_traced<P: Panel>(group: &mut DockGroup<P>, msg: DockMsg<P>) -> Option<Cmd> {
    let span = span!(Level::DEBUG, "dock_update", msg = msg.name(), area = ?group.area());
    let _guard = span.enter();

    let before = LayoutSnapshot::from_group(group);
    let result = update_inner(group, msg);
    let after = LayoutSnapshot::from_group(group);

    if let Some(diff) = before.diff(&after) {
        debug!(target: "layout", "{}", diff);
    }

    result
}

fn update_inner<P: Panel>(group: &mut DockGroup<P>, msg: DockMsg<P>) -> Option<Cmd> {
    match msg {
        DockMsg::PointerPressed { .. }
        | DockMsg::PointerMoved { .. }
        | DockMsg::PointerReleased { .. }
        | DockMsg::PointerCaptureLost => pointer::update_pointer(group, msg),
        _ => dock::update_dock(group, msg),
    }
}
