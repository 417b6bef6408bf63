use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    Dragging,
}

/// Anchor captured at drag start.
///
/// Moves are measured against this origin rather than the previous move, so
/// a long gesture never accumulates rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragState {
    pub origin_x: f64,
    pub origin_start: usize,
}

/// Pointer-driven chart state: drag gesture plus hovered sample.
///
/// Hover and drag exclude each other: starting a drag drops the hover, and
/// hover updates are ignored until the drag ends.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    mode: InteractionMode,
    drag: Option<DragState>,
    hovered: Option<usize>,
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.mode == InteractionMode::Dragging
    }

    #[must_use]
    pub fn drag(self) -> Option<DragState> {
        self.drag
    }

    /// Absolute sample index under the pointer, if any.
    #[must_use]
    pub fn hovered(self) -> Option<usize> {
        self.hovered
    }

    /// Enters drag mode. Returns the hover that was dropped, if any.
    pub fn on_drag_start(&mut self, origin_x: f64, origin_start: usize) -> Option<usize> {
        self.mode = InteractionMode::Dragging;
        self.drag = Some(DragState {
            origin_x,
            origin_start,
        });
        self.hovered.take()
    }

    /// Ends the drag. Returns `false` when no drag was active.
    pub fn on_drag_end(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.mode = InteractionMode::Idle;
        self.drag = None;
        was_dragging
    }

    /// Updates the hovered sample. Returns `true` when the hover changed;
    /// always `false` while dragging.
    pub fn set_hovered(&mut self, index: Option<usize>) -> bool {
        if self.is_dragging() || self.hovered == index {
            return false;
        }
        self.hovered = index;
        true
    }

    /// Drops drag and hover state, e.g. when the dataset is replaced.
    /// Returns the hover that was dropped, if any.
    pub fn reset(&mut self) -> Option<usize> {
        self.mode = InteractionMode::Idle;
        self.drag = None;
        self.hovered.take()
    }
}
