use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, Sample, SampleWindow};
use crate::error::ChartResult;

/// Padding on each side of the visible samples, as a fraction of the
/// visible count.
pub const X_PADDING_RATIO: f64 = 0.05;
/// Right padding used when the window touches the end of the data.
pub const X_END_PADDING_RATIO: f64 = 0.15;
/// Padding above and below the observed price range.
pub const Y_PADDING_RATIO: f64 = 0.10;
pub const PRICE_TICK_COUNT: usize = 8;

/// Plot rectangle inside the chart surface, in absolute pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

/// Coordinate mappings for one render of the visible window.
///
/// `x` maps positions relative to the window start; `y` maps prices and is
/// inverted so higher prices sit closer to the top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartScales {
    pub x: LinearScale,
    pub y: LinearScale,
    pub flush_end: bool,
    pub visible_count: usize,
}

impl ChartScales {
    pub fn build(visible: &[Sample], window: SampleWindow, plot: PlotArea) -> ChartResult<Self> {
        let flush_end = window.is_flush_with_end();
        let x = LinearScale::new(x_domain(visible.len(), flush_end), (plot.left, plot.right()))?;
        let y = LinearScale::new(y_domain(visible), (plot.bottom(), plot.top))?.nice(PRICE_TICK_COUNT);
        Ok(Self {
            x,
            y,
            flush_end,
            visible_count: visible.len(),
        })
    }

    /// Pixel x of the sample at `position` inside the window.
    #[must_use]
    pub fn x_of(&self, position: usize) -> f64 {
        self.x.map(position as f64)
    }

    #[must_use]
    pub fn y_of(&self, price: f64) -> f64 {
        self.y.map(price)
    }

    /// Horizontal pixel span of the padding that lies past the last sample
    /// beyond the regular 5%, present only when the window is flush with the
    /// end of the data.
    #[must_use]
    pub fn end_of_data_span(&self) -> Option<(f64, f64)> {
        if !self.flush_end || self.visible_count == 0 {
            return None;
        }
        let n = self.visible_count as f64;
        let from = self.x.map((n - 1.0) + n * X_PADDING_RATIO);
        let to = self.x.range().1;
        (to > from).then_some((from, to))
    }
}

/// Relative-position domain for `count` visible samples.
#[must_use]
pub fn x_domain(count: usize, flush_end: bool) -> (f64, f64) {
    if count == 0 {
        return (0.0, 0.0);
    }
    let n = count as f64;
    let right_ratio = if flush_end {
        X_END_PADDING_RATIO
    } else {
        X_PADDING_RATIO
    };
    (-n * X_PADDING_RATIO, (n - 1.0) + n * right_ratio)
}

/// Padded (but not yet niced) price domain; `(0, 0)` for no samples.
///
/// Padding saturates at the `f64` limits, so the result is always finite.
#[must_use]
pub fn y_domain(visible: &[Sample]) -> (f64, f64) {
    let min = visible.iter().map(|s| OrderedFloat(s.price)).min();
    let max = visible.iter().map(|s| OrderedFloat(s.price)).max();
    let (Some(min), Some(max)) = (min, max) else {
        return (0.0, 0.0);
    };
    // Scaled before subtracting so extreme but finite prices cannot overflow.
    let padding = max.0 * Y_PADDING_RATIO - min.0 * Y_PADDING_RATIO;
    (
        (min.0 - padding).max(f64::MIN),
        (max.0 + padding).min(f64::MAX),
    )
}
