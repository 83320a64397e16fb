use egui::{Pos2, Rect, Vec2};

use super::zone::Side;

/// Opaque identity of a dockable window, as known to the host container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DockableId(u64);

impl DockableId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Error reported by a platform backend when a re-parent/reposition call
/// fails. What can actually go wrong is toolkit-specific, so this stays
/// opaque; the engine wraps it with the name of the failed operation.
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The host window's container surface: child management, z-order and
/// coordinate conversion for the window docking happens against.
///
/// All calls arrive synchronously from the UI thread, in direct response to
/// window-manager notifications.
pub trait HostContainer {
    /// Client-area size of the host window, in the same units as cursor
    /// positions handed to [`super::DockEngine::evaluate`].
    fn client_size(&self) -> Vec2;

    /// Convert a screen-space point into host client coordinates.
    fn to_client(&self, screen: Pos2) -> Pos2;

    /// Re-parent `window` into the host, filling the given side.
    fn add_child(&mut self, window: DockableId, side: Side) -> Result<(), BackendError>;

    /// Remove `window` from the host's children. Returns false (not an
    /// error) if it was not a child.
    fn remove_child(&mut self, window: DockableId) -> Result<bool, BackendError>;

    /// Raise the host window itself in the global z-order.
    fn bring_to_front(&mut self) -> Result<(), BackendError>;

    /// Re-stack the host's auxiliary top-level bars (menu bars and the like)
    /// to front-most z-order, preserving their relative order, so a freshly
    /// docked child does not occlude them. Typically implemented by removing
    /// and re-adding those children in order.
    fn restack_auxiliary_bars(&mut self) -> Result<(), BackendError>;
}

/// The floating window being dragged and docked.
pub trait DockableWindow {
    fn id(&self) -> DockableId;

    /// Full outer bounds size, decorations included.
    fn outer_size(&self) -> Vec2;

    /// Client-area size, decorations excluded.
    fn client_size(&self) -> Vec2;

    /// Convert a screen-space point into this window's client coordinates.
    /// Points above the client area map to negative y (the caption region).
    fn to_client(&self, screen: Pos2) -> Pos2;

    /// Move the window so its outer top-left corner is at `pos` (screen
    /// coordinates).
    fn set_screen_position(&mut self, pos: Pos2) -> Result<(), BackendError>;

    fn bring_to_front(&mut self) -> Result<(), BackendError>;

    /// Hide without destroying; the window must stay re-showable.
    fn hide(&mut self) -> Result<(), BackendError>;
}

/// Consumer of highlight redraw requests.
pub trait HighlightPainter {
    /// The emphasized rectangle changed; repaint it (or erase the previous
    /// one when `rect` is `None`).
    fn redraw_requested(&mut self, rect: Option<Rect>);
}
