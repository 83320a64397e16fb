use egui::{Pos2, Rect, pos2};

mod controller;
mod error;
mod highlight;
mod host;
mod zone;

#[cfg(test)]
mod support;

pub use controller::{DockableController, WindowEvent};
pub use error::DockError;
pub use highlight::HighlightState;
pub use host::{BackendError, DockableId, DockableWindow, HighlightPainter, HostContainer};
pub use zone::{DockZone, DockZoneSet, ResolvedZone, Side};

/// What [`DockEngine::evaluate`] should do when the cursor lands in a zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvaluateOptions {
    /// Commit the dock (re-parent the window into the matched zone's side).
    pub dock: bool,
    /// Update the highlight feedback to the matched zone (or clear it on a
    /// miss).
    pub highlight: bool,
}

impl EvaluateOptions {
    /// Live drag preview: highlight only, never commit.
    pub const PREVIEW: Self = Self {
        dock: false,
        highlight: true,
    };

    /// Drag release: commit if a zone matches; the dock itself clears any
    /// leftover highlight.
    pub const COMMIT: Self = Self {
        dock: true,
        highlight: false,
    };
}

/// The docking engine for one host window.
///
/// Owns the host's ordered [`DockZoneSet`] and the shared [`HighlightState`],
/// plus the (optional) boxed collaborators that actually touch the platform:
/// the [`HostContainer`] that re-parents children and the
/// [`HighlightPainter`] that repaints zone emphasis. Any number of
/// [`DockableController`]s may drive one engine; with a single mouse only one
/// of them is ever mid-gesture.
///
/// An engine without a configured host is inert: `evaluate` reports no match
/// and the re-parenting operations do nothing. That makes partially
/// configured setups (a tool window created before its host) safe rather than
/// faulty.
#[derive(Default)]
pub struct DockEngine {
    zones: DockZoneSet,
    highlight: HighlightState,
    host: Option<Box<dyn HostContainer>>,
    painter: Option<Box<dyn HighlightPainter>>,
}

impl std::fmt::Debug for DockEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DockEngine")
            .field("zones", &self.zones)
            .field("highlight", &self.highlight)
            .field("has_host", &self.host.is_some())
            .field("has_painter", &self.painter.is_some())
            .finish()
    }
}

impl DockEngine {
    /// An engine with no zones and no collaborators; configure with
    /// [`Self::set_zones`], [`Self::set_host`] and [`Self::set_painter`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zones(zones: DockZoneSet) -> Self {
        Self {
            zones,
            ..Self::default()
        }
    }

    pub fn set_zones(&mut self, zones: DockZoneSet) {
        self.zones = zones;
    }

    pub fn zones(&self) -> &DockZoneSet {
        &self.zones
    }

    pub fn set_host(&mut self, host: Box<dyn HostContainer>) {
        self.host = Some(host);
    }

    pub fn set_painter(&mut self, painter: Box<dyn HighlightPainter>) {
        self.painter = Some(painter);
    }

    /// The zone rectangle currently highlighted, if any.
    pub fn highlighted(&self) -> Option<Rect> {
        self.highlight.current()
    }

    /// Test the cursor (screen coordinates) against the zone set and act per
    /// `opts`. Returns whether a zone matched.
    ///
    /// The order of effects is part of the contract: highlight feedback
    /// updates even when not committing (live preview), and a committed dock
    /// clears the highlight as a side effect. On a miss with `highlight`
    /// requested, any existing highlight is cleared.
    ///
    /// # Errors
    ///
    /// [`DockError::Backend`] if committing the dock fails in the host
    /// backend. Hit-testing and highlighting never fail.
    pub fn evaluate(
        &mut self,
        cursor_screen: Pos2,
        window: &mut dyn DockableWindow,
        opts: EvaluateOptions,
    ) -> Result<bool, DockError> {
        let Some(host) = self.host.as_deref_mut() else {
            return Ok(false);
        };

        let cursor = host.to_client(cursor_screen);
        let host_size = host.client_size();

        let Some(zone) = self.zones.resolve(cursor, host_size) else {
            if opts.highlight && self.highlight.clear() {
                if let Some(painter) = self.painter.as_deref_mut() {
                    painter.redraw_requested(None);
                }
            }
            return Ok(false);
        };

        if opts.highlight && self.highlight.set(Some(zone.rect)) {
            if let Some(painter) = self.painter.as_deref_mut() {
                painter.redraw_requested(Some(zone.rect));
            }
        }

        if opts.dock {
            Self::apply_dock(host, &mut self.highlight, &mut self.painter, window, zone.side)?;
        }

        Ok(true)
    }

    /// Re-parent `window` into the host at `side`. No-op without a host.
    ///
    /// # Errors
    ///
    /// [`DockError::Backend`] if the host backend rejects the re-parent or
    /// the auxiliary-bar restack.
    pub fn dock(&mut self, window: &mut dyn DockableWindow, side: Side) -> Result<(), DockError> {
        let Some(host) = self.host.as_deref_mut() else {
            return Ok(());
        };
        Self::apply_dock(host, &mut self.highlight, &mut self.painter, window, side)
    }

    fn apply_dock(
        host: &mut dyn HostContainer,
        highlight: &mut HighlightState,
        painter: &mut Option<Box<dyn HighlightPainter>>,
        window: &mut dyn DockableWindow,
        side: Side,
    ) -> Result<(), DockError> {
        host.add_child(window.id(), side)
            .map_err(DockError::backend("add_child"))?;

        if highlight.clear() {
            if let Some(painter) = painter.as_deref_mut() {
                painter.redraw_requested(None);
            }
        }

        // The freshly added child fills the zone's side and would paint over
        // the host's menu bars; re-stacking them restores their z-order.
        host.restack_auxiliary_bars()
            .map_err(DockError::backend("restack_auxiliary_bars"))?;

        log::debug!("docked window {:?} at {:?}", window.id(), side);
        Ok(())
    }

    /// Remove `window` from the host and float it so the midpoint of its top
    /// edge lands under the cursor, with the cursor grabbing the caption.
    ///
    /// A window that is not currently a child of the host is left alone (no
    /// reposition), so a double undock is harmless. No-op without a host.
    ///
    /// # Errors
    ///
    /// [`DockError::Backend`] if the removal or the reposition fails in the
    /// backend.
    pub fn undock(
        &mut self,
        window: &mut dyn DockableWindow,
        cursor_screen: Pos2,
    ) -> Result<(), DockError> {
        let Some(host) = self.host.as_deref_mut() else {
            return Ok(());
        };

        let removed = host
            .remove_child(window.id())
            .map_err(DockError::backend("remove_child"))?;
        if !removed {
            return Ok(());
        }

        let outer = window.outer_size();
        let client = window.client_size();

        // Caption height from the decoration extents: side borders are the
        // horizontal overhead split in two, the caption is the vertical
        // overhead minus top and bottom borders.
        let border = ((outer.x - client.x) / 2.0).max(0.0);
        let caption = (outer.y - client.y - 2.0 * border).max(0.0);

        window
            .set_screen_position(pos2(
                cursor_screen.x - outer.x / 2.0,
                cursor_screen.y - caption / 2.0,
            ))
            .map_err(DockError::backend("set_screen_position"))?;

        log::debug!("undocked window {:?}", window.id());
        Ok(())
    }

    /// Raise the host window in the global z-order. No-op without a host.
    ///
    /// # Errors
    ///
    /// [`DockError::Backend`] if the backend call fails.
    pub fn bring_host_to_front(&mut self) -> Result<(), DockError> {
        let Some(host) = self.host.as_deref_mut() else {
            return Ok(());
        };
        host.bring_to_front()
            .map_err(DockError::backend("bring_to_front"))
    }
}
