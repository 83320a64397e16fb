use egui::Pos2;

use super::host::DockableWindow;
use super::{DockEngine, DockError, EvaluateOptions};

/// The closed set of window-manager notifications the controller consumes.
///
/// These map one-to-one onto the underlying toolkit's move/size message
/// stream (`WM_MOVING`/`WM_SIZING`/`WM_EXITSIZEMOVE`/`WM_NCLBUTTONDOWN`-style
/// on Win32). Movement variants carry the screen cursor at the time of the
/// notification; the window's own geometry is read back through
/// [`DockableWindow`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindowEvent {
    /// The window is being dragged; fires repeatedly during the move.
    MoveTick { cursor_screen: Pos2 },
    /// A resize interaction started.
    ResizeStart,
    /// The OS-level move-or-resize interaction completed. Fires exactly once
    /// per gesture, for moves and resizes alike.
    GestureEnd { cursor_screen: Pos2 },
    /// Mouse pressed in the window's non-client area (caption, borders).
    NonClientMouseDown { cursor_screen: Pos2 },
    /// The user asked to close the window.
    CloseRequested,
}

/// Per-dockable state machine translating raw window-manager notifications
/// into [`DockEngine`] calls.
///
/// A gesture can be a move, a resize, or (on some toolkits) both; the
/// terminal notification does not say which. The controller remembers whether
/// a genuine move happened and whether a resize was involved, and only
/// attempts a dock on release of a pure move. Otherwise resizing a window
/// near a dock zone would spuriously dock it.
///
/// The controller holds no reference to the engine or the window, so several
/// dockables can share one engine; collaborators are passed into
/// [`Self::handle`] per notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct DockableController {
    docked: bool,
    moving: bool,
    sizing: bool,
    mouse_captured: bool,
}

impl DockableController {
    /// A controller for a freshly created, floating window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the window is currently docked into the host.
    pub fn is_docked(&self) -> bool {
        self.docked
    }

    /// Whether a move gesture is in progress.
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Whether a resize gesture is in progress.
    pub fn is_sizing(&self) -> bool {
        self.sizing
    }

    /// Feed one notification through the state machine.
    ///
    /// This is the window-message boundary: a fault while handling a
    /// notification is logged and suppressed rather than propagated, since an
    /// error escaping into the toolkit's message dispatch would destabilize
    /// the host's whole message loop. State transitions that precede the
    /// failing backend call stick; the rest of the notification is dropped.
    pub fn handle(
        &mut self,
        event: WindowEvent,
        window: &mut dyn DockableWindow,
        engine: &mut DockEngine,
    ) {
        if let Err(err) = self.dispatch(event, window, engine) {
            log::warn!(
                "dropped {event:?} for window {:?}: {err}",
                window.id()
            );
        }
    }

    fn dispatch(
        &mut self,
        event: WindowEvent,
        window: &mut dyn DockableWindow,
        engine: &mut DockEngine,
    ) -> Result<(), DockError> {
        match event {
            WindowEvent::MoveTick { cursor_screen } => {
                // A resize can report intermediate moves; those must not arm
                // a dock attempt or flash zone highlights.
                if !self.sizing {
                    self.moving = true;
                    engine.evaluate(cursor_screen, window, EvaluateOptions::PREVIEW)?;
                }
            }
            WindowEvent::ResizeStart => {
                self.sizing = true;
            }
            WindowEvent::GestureEnd { cursor_screen } => {
                let should_dock = self.moving && !self.sizing;

                self.moving = false;
                self.sizing = false;
                self.mouse_captured = false;

                if should_dock {
                    self.docked =
                        engine.evaluate(cursor_screen, window, EvaluateOptions::COMMIT)?;
                }
            }
            WindowEvent::NonClientMouseDown { cursor_screen } => {
                if self.docked && !self.sizing {
                    // Docked windows keep no real caption; the grab region is
                    // the strip just above the client area.
                    let pos = window.to_client(cursor_screen);
                    let client = window.client_size();
                    if pos.y < 0.0 && pos.x > 0.0 && pos.x < client.x {
                        self.docked = false;
                        engine.undock(window, cursor_screen)?;
                    }
                }

                // First press of this grab: surface the host, then self.
                if !self.mouse_captured {
                    engine.bring_host_to_front()?;
                    window
                        .bring_to_front()
                        .map_err(DockError::backend("bring_to_front"))?;
                    self.mouse_captured = true;
                }
            }
            WindowEvent::CloseRequested => {
                // Close hides instead of destroying; the window stays
                // re-showable from e.g. a view menu.
                window.hide().map_err(DockError::backend("hide"))?;
            }
        }

        Ok(())
    }
}
