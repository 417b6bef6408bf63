use crate::core::{marker_rising, monotone_x_curve, price_ticks, segment_trends, time_ticks};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

use super::ChartEngine;

const TICK_LABEL_GAP_PX: f64 = 3.0;
const TITLE_OFFSET_PX: f64 = 16.0;

impl<R: Renderer> ChartEngine<R> {
    /// Materializes the complete scene for the current state.
    ///
    /// Never fails on data: empty or flat windows produce axes over a
    /// degenerate domain with no segments and no markers.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let style = self.style;
        let plot = self.plot_area();
        let visible = self.visible_samples();
        let scales = self.scales()?;
        let hovered = self.interaction.hovered();
        let mut frame = RenderFrame::new(self.viewport(), style.background);

        for segment in segment_trends(visible) {
            let points: Vec<(f64, f64)> = segment
                .samples
                .iter()
                .enumerate()
                .map(|(offset, sample)| {
                    (scales.x_of(segment.start + offset), scales.y_of(sample.price))
                })
                .collect();
            let curve = monotone_x_curve(&points);
            let Some(start) = curve.start else { continue };
            if curve.steps.is_empty() {
                continue;
            }
            frame.paths.push(PathPrimitive {
                start,
                steps: curve.steps,
                stroke_width: style.line_width,
                color: if segment.increasing {
                    style.increasing
                } else {
                    style.decreasing
                },
            });
        }

        for (position, sample) in visible.iter().enumerate() {
            let is_hovered = hovered == Some(sample.index);
            let (radius, color) = if is_hovered {
                (style.hovered_marker_radius, style.highlight)
            } else if marker_rising(visible, position) {
                (style.marker_radius, style.increasing)
            } else {
                (style.marker_radius, style.decreasing)
            };
            frame.circles.push(CirclePrimitive::new(
                scales.x_of(position),
                scales.y_of(sample.price),
                radius,
                color,
            ));
        }

        if let Some((from, to)) = scales.end_of_data_span() {
            frame.rects.push(RectPrimitive::new(
                from,
                plot.top,
                to - from,
                plot.height,
                style.end_of_data_mask,
            ));
        }

        // Time axis along the bottom edge.
        frame.lines.push(LinePrimitive::new(
            plot.left,
            plot.bottom(),
            plot.right(),
            plot.bottom(),
            style.axis_line_width,
            style.axis,
        ));
        let time_ticks = time_ticks(
            scales.x,
            self.time_range(),
            self.window.start(),
            &self.dataset.samples,
            self.config.label_offset(),
        );
        for tick in time_ticks {
            frame.lines.push(LinePrimitive::new(
                tick.pixel,
                plot.bottom(),
                tick.pixel,
                plot.bottom() + style.tick_size_px,
                style.axis_line_width,
                style.axis,
            ));
            if !tick.label.is_empty() {
                frame.texts.push(TextPrimitive::new(
                    tick.label,
                    tick.pixel,
                    plot.bottom() + style.tick_size_px + TICK_LABEL_GAP_PX + style.axis_font_size_px,
                    style.axis_font_size_px,
                    style.text,
                    TextHAlign::Center,
                ));
            }
        }

        // Price axis on the right edge.
        frame.lines.push(LinePrimitive::new(
            plot.right(),
            plot.top,
            plot.right(),
            plot.bottom(),
            style.axis_line_width,
            style.axis,
        ));
        for tick in price_ticks(scales.y) {
            frame.lines.push(LinePrimitive::new(
                plot.right(),
                tick.pixel,
                plot.right() + style.tick_size_px,
                tick.pixel,
                style.axis_line_width,
                style.axis,
            ));
            frame.texts.push(TextPrimitive::new(
                tick.label,
                plot.right() + style.tick_size_px + TICK_LABEL_GAP_PX,
                tick.pixel + style.axis_font_size_px / 3.0,
                style.axis_font_size_px,
                style.text,
                TextHAlign::Left,
            ));
        }

        let title = self.title();
        if !title.is_empty() {
            frame.texts.push(
                TextPrimitive::new(
                    title,
                    plot.left,
                    plot.top - TITLE_OFFSET_PX,
                    style.title_font_size_px,
                    style.text,
                    TextHAlign::Left,
                )
                .bold(),
            );
        }

        Ok(frame)
    }
}
