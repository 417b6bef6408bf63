use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{SampleWindow, TimeRange, Viewport, segment_trends};
use crate::error::ChartResult;
use crate::interaction::InteractionMode;
use crate::render::Renderer;

use super::{ChartEngine, HoverSelection};

/// Index span and direction of one rendered trend segment, in absolute
/// sample indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentSummary {
    pub first_index: usize,
    pub last_index: usize,
    pub increasing: bool,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub ticker: String,
    pub time_range: TimeRange,
    pub window: SampleWindow,
    pub x_domain: (f64, f64),
    pub price_domain: (f64, f64),
    pub flush_end: bool,
    pub segments: Vec<SegmentSummary>,
    pub interaction_mode: InteractionMode,
    pub hovered: Option<HoverSelection>,
    pub metrics: IndexMap<String, f64>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn snapshot(&self) -> ChartResult<ChartSnapshot> {
        let scales = self.scales()?;
        let offset = self.window.start();
        let segments = segment_trends(self.visible_samples())
            .into_iter()
            .map(|segment| SegmentSummary {
                first_index: offset + segment.start,
                last_index: offset + segment.end(),
                increasing: segment.increasing,
            })
            .collect();
        let metrics = self
            .metrics
            .map(|metrics| {
                metrics
                    .rows()
                    .into_iter()
                    .map(|(label, value)| (label.to_owned(), value))
                    .collect()
            })
            .unwrap_or_default();

        Ok(ChartSnapshot {
            viewport: self.viewport(),
            ticker: self.dataset.ticker.clone(),
            time_range: self.time_range(),
            window: self.window,
            x_domain: scales.x.domain(),
            price_domain: scales.y.domain(),
            flush_end: scales.flush_end,
            segments,
            interaction_mode: self.interaction_mode(),
            hovered: self.hovered(),
            metrics,
        })
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot()?).map_err(|err| {
            crate::error::ChartError::InvalidData(format!("failed to serialize snapshot: {err}"))
        })
    }
}
