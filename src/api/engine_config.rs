use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};

/// Space around the plot area reserved for title and axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for ChartMargins {
    fn default() -> Self {
        Self {
            top: 70.0,
            right: 50.0,
            bottom: 60.0,
            left: 30.0,
        }
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can persist chart setup next to their own settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: ChartMargins,
    /// Overrides the dataset ticker as chart title.
    #[serde(default)]
    pub title: Option<String>,
    /// Time zone used for axis labels, in minutes east of UTC.
    #[serde(default)]
    pub label_offset_minutes: i16,
    /// Maximum pointer distance for a marker to count as hovered.
    #[serde(default = "default_hover_radius_px")]
    pub hover_radius_px: f64,
}

fn default_hover_radius_px() -> f64 {
    6.0
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self::new(Viewport::new(1200, 500))
    }
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: ChartMargins::default(),
            title: None,
            label_offset_minutes: 0,
            hover_radius_px: default_hover_radius_px(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: ChartMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_label_offset_minutes(mut self, minutes: i16) -> Self {
        self.label_offset_minutes = minutes;
        self
    }

    #[must_use]
    pub fn with_hover_radius_px(mut self, radius: f64) -> Self {
        self.hover_radius_px = radius;
        self
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        PlotArea {
            left: self.margins.left,
            top: self.margins.top,
            width: f64::from(self.viewport.width) - self.margins.left - self.margins.right,
            height: f64::from(self.viewport.height) - self.margins.top - self.margins.bottom,
        }
    }

    /// Label time zone; falls back to UTC for out-of-range offsets, which
    /// `validate` rejects anyway.
    #[must_use]
    pub fn label_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(i32::from(self.label_offset_minutes) * 60)
            .unwrap_or_else(|| Utc.fix())
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        let m = self.margins;
        if [m.top, m.right, m.bottom, m.left]
            .iter()
            .any(|value| !value.is_finite() || *value < 0.0)
        {
            return Err(ChartError::InvalidData(
                "chart margins must be finite and >= 0".to_owned(),
            ));
        }

        let plot = self.plot_area();
        if plot.width <= 0.0 || plot.height <= 0.0 {
            return Err(ChartError::InvalidData(
                "margins leave no room for the plot area".to_owned(),
            ));
        }

        if !(-14 * 60..=14 * 60).contains(&i32::from(self.label_offset_minutes)) {
            return Err(ChartError::InvalidData(
                "label time zone offset must be between -840 and 840 minutes".to_owned(),
            ));
        }

        if !self.hover_radius_px.is_finite() || self.hover_radius_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "hover radius must be finite and > 0".to_owned(),
            ));
        }

        Ok(())
    }
}
