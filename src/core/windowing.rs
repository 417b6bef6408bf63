use serde::{Deserialize, Serialize};

use crate::core::Sample;

/// Fraction of the dataset shown at once.
pub const WINDOW_ZOOM_DIVISOR: usize = 4;

/// Half-open index range `[start, start + count)` into the full sample sequence.
///
/// `count` is fixed per dataset (a quarter of the samples, at least one);
/// only `start` moves, and every update is clamped so the window never runs
/// past either end of the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SampleWindow {
    start: usize,
    count: usize,
    total: usize,
}

impl SampleWindow {
    /// Window anchored at the first sample of a dataset of `total` samples.
    #[must_use]
    pub fn for_total(total: usize) -> Self {
        Self {
            start: 0,
            count: visible_count_for(total),
            total,
        }
    }

    #[must_use]
    pub fn start(self) -> usize {
        self.start
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    #[must_use]
    pub fn total(self) -> usize {
        self.total
    }

    /// Exclusive end index.
    #[must_use]
    pub fn end(self) -> usize {
        self.start + self.count
    }

    #[must_use]
    pub fn max_start(self) -> usize {
        self.total.saturating_sub(self.count)
    }

    /// `true` when the last visible sample is the last sample of the dataset.
    #[must_use]
    pub fn is_flush_with_end(self) -> bool {
        self.total > 0 && self.end() >= self.total
    }

    /// Moves the window to `start`, clamped into `[0, total - count]`.
    pub fn set_start(&mut self, start: usize) {
        self.start = start.min(self.max_start());
    }

    pub fn reset(&mut self) {
        self.start = 0;
    }

    /// Visible slice of `samples`; empty when the window does not fit.
    #[must_use]
    pub fn slice(self, samples: &[Sample]) -> &[Sample] {
        samples.get(self.start..self.end()).unwrap_or(&[])
    }
}

/// Number of visible samples for a dataset: `floor(total / 4)`, never zero
/// when there is data.
#[must_use]
pub fn visible_count_for(total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (total / WINDOW_ZOOM_DIVISOR).max(1)
}

/// Converts a horizontal drag into a new window start.
///
/// One sample occupies `total_width_px / visible_count` pixels; the index
/// delta is rounded toward zero and subtracted, so dragging right reveals
/// earlier samples and a drag shorter than one sample moves nothing in
/// either direction. Negative fractional shifts round toward zero as well:
/// -5.36 samples moves five, not six. Every input is clamped; non-finite or
/// zero-width inputs leave the start unchanged.
#[must_use]
pub fn shift_by(
    previous_start: usize,
    delta_px: f64,
    total_width_px: f64,
    visible_count: usize,
    total_samples: usize,
) -> usize {
    let max_start = total_samples.saturating_sub(visible_count);
    let previous_start = previous_start.min(max_start);
    if visible_count == 0
        || !delta_px.is_finite()
        || !total_width_px.is_finite()
        || total_width_px <= 0.0
    {
        return previous_start;
    }

    let px_per_sample = total_width_px / visible_count as f64;
    let index_delta = (delta_px / px_per_sample).trunc();
    let target = previous_start as f64 - index_delta;
    if target <= 0.0 {
        0
    } else if target >= max_start as f64 {
        max_start
    } else {
        target as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_count_is_quarter_with_floor_of_one() {
        assert_eq!(visible_count_for(0), 0);
        assert_eq!(visible_count_for(1), 1);
        assert_eq!(visible_count_for(3), 1);
        assert_eq!(visible_count_for(4), 1);
        assert_eq!(visible_count_for(7), 1);
        assert_eq!(visible_count_for(8), 2);
        assert_eq!(visible_count_for(100), 25);
    }

    #[test]
    fn shift_ignores_degenerate_geometry() {
        assert_eq!(shift_by(3, f64::NAN, 1_000.0, 10, 40), 3);
        assert_eq!(shift_by(3, 50.0, 0.0, 10, 40), 3);
        assert_eq!(shift_by(3, 50.0, 1_000.0, 0, 0), 0);
    }
}
