use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::projection::PRICE_TICK_COUNT;
use crate::core::{LinearScale, Sample, TimeRange};

/// One axis tick: where it sits and what it says.
///
/// `label` is empty for ticks that land outside the data; renderers draw the
/// tick mark but no text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub pixel: f64,
    pub label: String,
}

pub type TickPlan = SmallVec<[AxisTick; 12]>;

impl TimeRange {
    /// Number of x-axis ticks drawn for this range.
    #[must_use]
    pub fn tick_count(self) -> usize {
        match self {
            Self::OneDay => 6,
            Self::OneWeek => 7,
            Self::OneMonth => 10,
            Self::OneYear => 12,
        }
    }

    /// `chrono` format pattern for x-axis labels.
    #[must_use]
    pub fn label_pattern(self) -> &'static str {
        match self {
            Self::OneDay => "%H:%M",
            Self::OneWeek => "%d %b %H:%M",
            Self::OneMonth => "%d %b",
            Self::OneYear => "%b %Y",
        }
    }
}

#[must_use]
pub fn format_time_label(timestamp: DateTime<Utc>, range: TimeRange, offset: FixedOffset) -> String {
    timestamp
        .with_timezone(&offset)
        .format(range.label_pattern())
        .to_string()
}

#[must_use]
pub fn format_price_label(price: f64) -> String {
    format!("{price:.2}")
}

/// Time-axis ticks, evenly spaced over the x domain.
///
/// Each tick's relative position is rounded to a sample position and shifted
/// by `window_start` to find the absolute sample whose timestamp labels it.
/// Positions that resolve outside `samples` get an empty label. A degenerate
/// x domain (no visible samples) yields no ticks.
#[must_use]
pub fn time_ticks(
    x: LinearScale,
    range: TimeRange,
    window_start: usize,
    samples: &[Sample],
    offset: FixedOffset,
) -> TickPlan {
    let mut ticks = TickPlan::new();
    if x.is_degenerate() {
        return ticks;
    }

    for value in evenly_spaced(x.domain(), range.tick_count()) {
        let label = absolute_index(value, window_start)
            .and_then(|index| samples.get(index))
            .map(|sample| format_time_label(sample.timestamp, range, offset))
            .unwrap_or_default();
        ticks.push(AxisTick {
            value,
            pixel: x.map(value),
            label,
        });
    }
    ticks
}

/// Price-axis ticks: eight values evenly spaced over the (niced) y domain,
/// or one tick in the middle when the domain is flat.
#[must_use]
pub fn price_ticks(y: LinearScale) -> TickPlan {
    let mut ticks = TickPlan::new();
    if y.is_degenerate() {
        let value = y.domain().0;
        ticks.push(AxisTick {
            value,
            pixel: y.map(value),
            label: format_price_label(value),
        });
        return ticks;
    }

    for value in evenly_spaced(y.domain(), PRICE_TICK_COUNT) {
        ticks.push(AxisTick {
            value,
            pixel: y.map(value),
            label: format_price_label(value),
        });
    }
    ticks
}

fn evenly_spaced((start, end): (f64, f64), count: usize) -> impl Iterator<Item = f64> {
    let intervals = count.saturating_sub(1).max(1) as f64;
    let step = match (end - start) / intervals {
        step if step.is_finite() => step,
        _ => end / intervals - start / intervals,
    };
    (0..count).map(move |i| {
        if i + 1 == count && count > 1 {
            end
        } else {
            start + step * i as f64
        }
    })
}

fn absolute_index(relative: f64, window_start: usize) -> Option<usize> {
    let absolute = relative.round() + window_start as f64;
    (absolute.is_finite() && absolute >= 0.0).then_some(absolute as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evenly_spaced_hits_both_ends() {
        let values: Vec<f64> = evenly_spaced((0.0, 7.0), 8).collect();
        assert_eq!(values, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn negative_positions_have_no_sample() {
        assert_eq!(absolute_index(-0.6, 0), None);
        assert_eq!(absolute_index(-0.4, 0), Some(0));
        assert_eq!(absolute_index(-1.0, 3), Some(2));
    }
}
