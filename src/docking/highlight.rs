use egui::Rect;

/// Tracks which zone rectangle is currently emphasized during a drag.
///
/// Mutations report whether anything actually changed, so the caller can
/// request exactly one repaint per visual change and none for the (very
/// frequent) move ticks that land in the same zone. Comparison is by
/// rectangle, not by zone identity: two configured zones whose rectangles
/// coincide are the same highlight.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HighlightState {
    current: Option<Rect>,
}

impl HighlightState {
    /// Replace the highlighted rectangle. Returns true iff the stored value
    /// changed, i.e. iff a redraw should be requested.
    pub fn set(&mut self, rect: Option<Rect>) -> bool {
        if self.current == rect {
            return false;
        }
        self.current = rect;
        true
    }

    /// Drop any highlight. Returns true iff one was set.
    pub fn clear(&mut self) -> bool {
        self.set(None)
    }

    /// The rectangle the painter should emphasize, if any.
    pub fn current(&self) -> Option<Rect> {
        self.current
    }
}
