//! Edge-docking engine for draggable tool windows.
//!
//! A floating window dragged over a host window and released near a
//! configured edge zone is re-parented into that edge as a docked panel;
//! grabbing its caption while docked floats it again under the cursor. This
//! crate is the engine only: zone geometry and hit-testing
//! ([`DockZone`]/[`DockZoneSet`]), highlight feedback ([`HighlightState`]),
//! the dock/undock operations ([`DockEngine`]) and the per-window state
//! machine over raw move/size notifications ([`DockableController`]). The
//! actual windows, child re-parenting and pixel painting stay behind the
//! collaborator traits in [`docking`], so any toolkit that can report
//! move/size gestures can drive it.

#![forbid(unsafe_code)]

pub mod docking;

pub use docking::{
    BackendError, DockEngine, DockError, DockZone, DockZoneSet, DockableController, DockableId,
    DockableWindow, EvaluateOptions, HighlightPainter, HighlightState, HostContainer,
    ResolvedZone, Side, WindowEvent,
};
