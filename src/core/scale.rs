use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Linear mapping from a data domain onto a pixel range.
///
/// A zero-width domain is accepted and maps every value onto the middle of
/// the range, so empty or single-price data degrades to a flat line instead
/// of failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_end == self.domain_start
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        self.range_start + self.normalize(value) * (self.range_end - self.range_start)
    }

    /// Position of `value` inside the domain, `0.0` at the start and `1.0`
    /// at the end. Domains wider than `f64::MAX` are measured at half scale.
    fn normalize(self, value: f64) -> f64 {
        if self.domain_end == self.domain_start {
            return 0.5;
        }
        let span = self.domain_end - self.domain_start;
        if span.is_finite() {
            let direct = (value - self.domain_start) / span;
            if direct.is_finite() {
                return direct;
            }
        }
        (value * 0.5 - self.domain_start * 0.5) / (self.domain_end * 0.5 - self.domain_start * 0.5)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / range_span;
        let span = self.domain_end - self.domain_start;
        if span.is_finite() {
            self.domain_start + normalized * span
        } else {
            self.domain_start * (1.0 - normalized) + self.domain_end * normalized
        }
    }

    /// Extends the domain outward to multiples of a round step sized for
    /// roughly `count` ticks.
    ///
    /// Iterates until the step stabilizes, because widening the domain can
    /// change the preferred step.
    #[must_use]
    pub fn nice(self, count: usize) -> Self {
        let (mut start, mut stop) = self.domain();
        let reversed = stop < start;
        if reversed {
            std::mem::swap(&mut start, &mut stop);
        }

        let mut previous_step = None;
        for _ in 0..10 {
            let Some(step) = tick_increment(start, stop, count) else {
                break;
            };
            if previous_step == Some(step) {
                break;
            }
            let (niced_start, niced_stop) = ((start / step).floor() * step, (stop / step).ceil() * step);
            if !niced_start.is_finite() || !niced_stop.is_finite() {
                break;
            }
            start = niced_start;
            stop = niced_stop;
            previous_step = Some(step);
        }

        let (domain_start, domain_end) = if reversed { (stop, start) } else { (start, stop) };
        Self {
            domain_start,
            domain_end,
            ..self
        }
    }
}

/// Round step (1, 2, 5 or 10 times a power of ten) that splits `[start, stop]`
/// into about `count` intervals.
///
/// Returns `None` for empty spans or when no finite step exists.
#[must_use]
pub fn tick_increment(start: f64, stop: f64, count: usize) -> Option<f64> {
    if count == 0 || !(stop > start) {
        return None;
    }

    let raw = (stop - start) / count as f64;
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    let step = factor * 10f64.powf(power);
    (step.is_finite() && step > 0.0).then_some(step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_increment_prefers_round_steps() {
        assert_eq!(tick_increment(0.0, 10.0, 10), Some(1.0));
        assert_eq!(tick_increment(0.0, 100.0, 8), Some(10.0));
        assert_eq!(tick_increment(0.0, 3.0, 8), Some(0.5));
        assert_eq!(tick_increment(5.0, 5.0, 8), None);
    }

    #[test]
    fn nice_leaves_degenerate_domain_untouched() {
        let scale = LinearScale::new((42.0, 42.0), (0.0, 100.0))
            .expect("scale")
            .nice(8);
        assert_eq!(scale.domain(), (42.0, 42.0));
        assert_eq!(scale.map(1_000.0), 50.0);
    }

    #[test]
    fn domain_wider_than_f64_max_still_maps_finitely() {
        let scale = LinearScale::new((f64::MIN, f64::MAX), (440.0, 70.0))
            .expect("scale")
            .nice(8);
        assert_eq!(scale.domain(), (f64::MIN, f64::MAX));
        assert_eq!(scale.map(f64::MIN), 440.0);
        assert_eq!(scale.map(f64::MAX), 70.0);
        assert!((scale.map(0.0) - 255.0).abs() <= 1e-9);
    }
}
