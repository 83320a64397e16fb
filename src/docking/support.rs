//! Hand-rolled collaborator doubles shared by the test modules. State lives
//! behind `Rc<RefCell<_>>` so a test can keep a handle while the engine owns
//! the boxed trait object.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{Pos2, Rect, Vec2, vec2};

use super::host::{BackendError, DockableId, DockableWindow, HighlightPainter, HostContainer};
use super::zone::{DockZone, DockZoneSet, Side};
use super::DockEngine;

#[derive(Debug)]
pub(super) struct HostState {
    pub(super) client_size: Vec2,
    /// Screen position of the host's client-area origin.
    pub(super) origin: Pos2,
    pub(super) children: Vec<(DockableId, Side)>,
    pub(super) to_front_calls: usize,
    pub(super) restack_calls: usize,
    pub(super) fail_add_child: bool,
}

#[derive(Clone, Debug)]
pub(super) struct SharedHost(pub(super) Rc<RefCell<HostState>>);

impl SharedHost {
    pub(super) fn new(width: f32, height: f32) -> Self {
        Self::with_origin(width, height, Pos2::ZERO)
    }

    pub(super) fn with_origin(width: f32, height: f32, origin: Pos2) -> Self {
        Self(Rc::new(RefCell::new(HostState {
            client_size: vec2(width, height),
            origin,
            children: Vec::new(),
            to_front_calls: 0,
            restack_calls: 0,
            fail_add_child: false,
        })))
    }
}

impl HostContainer for SharedHost {
    fn client_size(&self) -> Vec2 {
        self.0.borrow().client_size
    }

    fn to_client(&self, screen: Pos2) -> Pos2 {
        (screen - self.0.borrow().origin).to_pos2()
    }

    fn add_child(&mut self, window: DockableId, side: Side) -> Result<(), BackendError> {
        let mut state = self.0.borrow_mut();
        if state.fail_add_child {
            return Err("host refused add_child".into());
        }
        state.children.push((window, side));
        Ok(())
    }

    fn remove_child(&mut self, window: DockableId) -> Result<bool, BackendError> {
        let mut state = self.0.borrow_mut();
        let before = state.children.len();
        state.children.retain(|&(child, _)| child != window);
        Ok(state.children.len() != before)
    }

    fn bring_to_front(&mut self) -> Result<(), BackendError> {
        self.0.borrow_mut().to_front_calls += 1;
        Ok(())
    }

    fn restack_auxiliary_bars(&mut self) -> Result<(), BackendError> {
        self.0.borrow_mut().restack_calls += 1;
        Ok(())
    }
}

#[derive(Debug)]
pub(super) struct WindowState {
    pub(super) id: DockableId,
    pub(super) outer_size: Vec2,
    pub(super) client_size: Vec2,
    /// Screen position of the window's client-area origin; the caption strip
    /// sits just above it.
    pub(super) client_origin: Pos2,
    pub(super) screen_pos: Option<Pos2>,
    pub(super) reposition_calls: usize,
    pub(super) to_front_calls: usize,
    pub(super) hidden: bool,
}

#[derive(Clone, Debug)]
pub(super) struct SharedWindow(pub(super) Rc<RefCell<WindowState>>);

impl SharedWindow {
    pub(super) fn new(id: u64, outer_size: Vec2, client_size: Vec2) -> Self {
        Self(Rc::new(RefCell::new(WindowState {
            id: DockableId::new(id),
            outer_size,
            client_size,
            client_origin: Pos2::ZERO,
            screen_pos: None,
            reposition_calls: 0,
            to_front_calls: 0,
            hidden: false,
        })))
    }

    /// A 208x434 tool window with a 200x400 client area: 4px borders, 26px
    /// caption.
    pub(super) fn tool_window(id: u64) -> Self {
        Self::new(id, vec2(208.0, 434.0), vec2(200.0, 400.0))
    }
}

impl DockableWindow for SharedWindow {
    fn id(&self) -> DockableId {
        self.0.borrow().id
    }

    fn outer_size(&self) -> Vec2 {
        self.0.borrow().outer_size
    }

    fn client_size(&self) -> Vec2 {
        self.0.borrow().client_size
    }

    fn to_client(&self, screen: Pos2) -> Pos2 {
        (screen - self.0.borrow().client_origin).to_pos2()
    }

    fn set_screen_position(&mut self, pos: Pos2) -> Result<(), BackendError> {
        let mut state = self.0.borrow_mut();
        state.screen_pos = Some(pos);
        state.reposition_calls += 1;
        Ok(())
    }

    fn bring_to_front(&mut self) -> Result<(), BackendError> {
        self.0.borrow_mut().to_front_calls += 1;
        Ok(())
    }

    fn hide(&mut self) -> Result<(), BackendError> {
        self.0.borrow_mut().hidden = true;
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub(super) struct RecordingPainter(pub(super) Rc<RefCell<Vec<Option<Rect>>>>);

impl RecordingPainter {
    pub(super) fn redraws(&self) -> Vec<Option<Rect>> {
        self.0.borrow().clone()
    }
}

impl HighlightPainter for RecordingPainter {
    fn redraw_requested(&mut self, rect: Option<Rect>) {
        self.0.borrow_mut().push(rect);
    }
}

pub(super) fn engine_with(
    host: &SharedHost,
    painter: &RecordingPainter,
    zones: impl IntoIterator<Item = DockZone>,
) -> DockEngine {
    let mut engine = DockEngine::with_zones(zones.into_iter().collect::<DockZoneSet>());
    engine.set_host(Box::new(host.clone()));
    engine.set_painter(Box::new(painter.clone()));
    engine
}

/// The host layout most tests use: 800x600 client area at the screen origin,
/// quarter zones on the left and right edges.
pub(super) fn default_engine(host: &SharedHost, painter: &RecordingPainter) -> DockEngine {
    engine_with(
        host,
        painter,
        [DockZone::new(Side::Left), DockZone::new(Side::Right)],
    )
}
