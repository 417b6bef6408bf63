use tracing::{debug, warn};

use crate::core::TimeRange;
use crate::error::ChartResult;
use crate::provider::DataProvider;
use crate::render::Renderer;

use super::ChartEngine;

/// Page-level glue: pulls data for the selected range from a provider and
/// feeds it to the chart.
pub struct Dashboard<R: Renderer, P: DataProvider> {
    engine: ChartEngine<R>,
    provider: P,
}

impl<R: Renderer, P: DataProvider> Dashboard<R, P> {
    #[must_use]
    pub fn new(engine: ChartEngine<R>, provider: P) -> Self {
        Self { engine, provider }
    }

    /// Switches to `range` and loads it.
    ///
    /// The chart shows an empty frame while the fetch runs. On failure it is
    /// cleared to an empty dataset for `range` and the provider error is
    /// returned for the caller to display.
    pub fn load(&mut self, range: TimeRange) -> ChartResult<()> {
        self.engine.set_time_range(range)?;
        match self.provider.fetch(range) {
            Ok(fetched) => {
                debug!(ticker = %fetched.dataset.ticker, range = %range, "dataset loaded");
                self.engine
                    .set_dataset(fetched.dataset, Some(fetched.metrics))
            }
            Err(err) => {
                warn!(range = %range, error = %err, "dataset load failed");
                self.engine.clear_dataset(range)?;
                Err(err)
            }
        }
    }

    /// Loads the range named by a `timerange` query value (one day when absent).
    pub fn load_query(&mut self, timerange: Option<&str>) -> ChartResult<()> {
        let range = TimeRange::from_query(timerange)?;
        self.load(range)
    }

    #[must_use]
    pub fn engine(&self) -> &ChartEngine<R> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ChartEngine<R> {
        &mut self.engine
    }

    #[must_use]
    pub fn into_parts(self) -> (ChartEngine<R>, P) {
        (self.engine, self.provider)
    }
}
