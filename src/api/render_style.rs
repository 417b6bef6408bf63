use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Colors and sizes used by the frame builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub background: Color,
    pub increasing: Color,
    pub decreasing: Color,
    pub highlight: Color,
    pub axis: Color,
    pub text: Color,
    /// Fill of the region past the last sample when the window is at the end.
    pub end_of_data_mask: Color,
    pub line_width: f64,
    pub axis_line_width: f64,
    pub marker_radius: f64,
    pub hovered_marker_radius: f64,
    pub tick_size_px: f64,
    pub axis_font_size_px: f64,
    pub title_font_size_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: Color::rgb8(0x0a, 0x0a, 0x0a),
            increasing: Color::rgb8(0x22, 0xc5, 0x5e),
            decreasing: Color::rgb8(0xef, 0x44, 0x44),
            highlight: Color::rgb8(0x3b, 0x82, 0xf6),
            axis: Color::rgb8(0xff, 0xff, 0xff),
            text: Color::rgb8(0xff, 0xff, 0xff),
            end_of_data_mask: Color::rgb8(0x17, 0x17, 0x17),
            line_width: 2.0,
            axis_line_width: 1.0,
            marker_radius: 2.0,
            hovered_marker_radius: 3.0,
            tick_size_px: 6.0,
            axis_font_size_px: 11.0,
            title_font_size_px: 20.0,
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> ChartResult<Self> {
        for color in [
            self.background,
            self.increasing,
            self.decreasing,
            self.highlight,
            self.axis,
            self.text,
            self.end_of_data_mask,
        ] {
            color.validate()?;
        }

        for (name, value) in [
            ("line width", self.line_width),
            ("axis line width", self.axis_line_width),
            ("marker radius", self.marker_radius),
            ("hovered marker radius", self.hovered_marker_radius),
            ("axis font size", self.axis_font_size_px),
            ("title font size", self.title_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if !self.tick_size_px.is_finite() || self.tick_size_px < 0.0 {
            return Err(ChartError::InvalidData(
                "tick size must be finite and >= 0".to_owned(),
            ));
        }

        Ok(self)
    }
}
