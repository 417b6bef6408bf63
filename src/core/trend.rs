use crate::core::Sample;

/// Maximal run of samples moving in one price direction.
///
/// Consecutive segments share their boundary sample so the drawn line has no
/// gaps. `start` is the position of `samples[0]` inside the sequence that was
/// segmented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendSegment<'a> {
    pub start: usize,
    pub samples: &'a [Sample],
    pub increasing: bool,
}

impl TrendSegment<'_> {
    /// Inclusive position of the last sample inside the segmented sequence.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.samples.len().saturating_sub(1)
    }
}

/// Direction of one price step. Equal prices count as not increasing.
#[must_use]
pub fn is_rising(previous: &Sample, current: &Sample) -> bool {
    current.price > previous.price
}

/// Trend color key for the marker at `position`; the first sample has no
/// predecessor and counts as rising.
#[must_use]
pub fn marker_rising(samples: &[Sample], position: usize) -> bool {
    match position {
        0 => true,
        _ => match (samples.get(position - 1), samples.get(position)) {
            (Some(previous), Some(current)) => is_rising(previous, current),
            _ => true,
        },
    }
}

/// Splits `samples` into trend segments in one pass.
///
/// A segment closes at sample `i` when the step into `i` and the step out of
/// `i` disagree in direction, or when `i` is the final sample. A lone sample
/// yields one degenerate rising segment; an empty input yields none.
#[must_use]
pub fn segment_trends(samples: &[Sample]) -> Vec<TrendSegment<'_>> {
    match samples.len() {
        0 => return Vec::new(),
        1 => {
            return vec![TrendSegment {
                start: 0,
                samples,
                increasing: true,
            }];
        }
        _ => {}
    }

    let last = samples.len() - 1;
    let mut segments = Vec::new();
    let mut segment_start = 0;
    for i in 1..=last {
        let rising = is_rising(&samples[i - 1], &samples[i]);
        let closes = i == last || rising != is_rising(&samples[i], &samples[i + 1]);
        if closes {
            segments.push(TrendSegment {
                start: segment_start,
                samples: &samples[segment_start..=i],
                increasing: rising,
            });
            segment_start = i;
        }
    }

    segments
}
