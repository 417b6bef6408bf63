use tracing::trace;

use crate::core::shift_by;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartEngine, HoverSelection};

impl<R: Renderer> ChartEngine<R> {
    /// Begins a pan gesture at pointer `x`. Any hover is cleared first.
    pub fn drag_start(&mut self, x: f64) -> ChartResult<()> {
        if self.interaction.on_drag_start(x, self.window.start()).is_some() {
            self.publish_hover(None);
        }
        trace!(x, start = self.window.start(), "drag start");
        self.render()
    }

    /// Pans the window by the pixel distance from the drag origin.
    ///
    /// No-op outside a drag. Re-renders only when the window moved.
    pub fn drag_move(&mut self, x: f64) -> ChartResult<()> {
        let Some(drag) = self.interaction.drag() else {
            return Ok(());
        };

        let new_start = shift_by(
            drag.origin_start,
            x - drag.origin_x,
            self.plot_area().width,
            self.window.count(),
            self.window.total(),
        );
        if new_start == self.window.start() {
            return Ok(());
        }

        trace!(from = self.window.start(), to = new_start, "shift window");
        self.window.set_start(new_start);
        self.render()
    }

    pub fn drag_end(&mut self) -> ChartResult<()> {
        if !self.interaction.on_drag_end() {
            return Ok(());
        }
        trace!(start = self.window.start(), "drag end");
        self.render()
    }

    /// Pointer left the chart mid-gesture; ends the drag like `drag_end`.
    pub fn drag_leave(&mut self) -> ChartResult<()> {
        self.drag_end()
    }

    /// Hit-tests markers under the pointer and publishes hover transitions.
    ///
    /// Ignored while dragging.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<()> {
        if self.interaction.is_dragging() {
            return Ok(());
        }
        let hit = self.marker_at(x, y)?;
        self.apply_hover(hit)
    }

    pub fn pointer_leave(&mut self) -> ChartResult<()> {
        if self.interaction.is_dragging() {
            return Ok(());
        }
        self.apply_hover(None)
    }

    /// Absolute index of the visible marker nearest to `(x, y)` within the
    /// hover radius.
    pub fn marker_at(&self, x: f64, y: f64) -> ChartResult<Option<usize>> {
        if !x.is_finite() || !y.is_finite() {
            return Ok(None);
        }
        let scales = self.scales()?;
        let radius = self.config.hover_radius_px;
        let hit = self
            .visible_samples()
            .iter()
            .enumerate()
            .map(|(position, sample)| {
                let dx = scales.x_of(position) - x;
                let dy = scales.y_of(sample.price) - y;
                (sample.index, dx.hypot(dy))
            })
            .filter(|(_, distance)| *distance <= radius)
            .min_by(|left, right| left.1.total_cmp(&right.1))
            .map(|(index, _)| index);
        Ok(hit)
    }

    fn apply_hover(&mut self, index: Option<usize>) -> ChartResult<()> {
        if !self.interaction.set_hovered(index) {
            return Ok(());
        }
        let selection = index
            .and_then(|index| self.dataset.samples.get(index))
            .map(HoverSelection::from);
        self.publish_hover(selection);
        self.render()
    }
}
