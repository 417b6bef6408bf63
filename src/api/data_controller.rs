use tracing::debug;

use crate::core::{Dataset, SampleWindow, TimeRange};
use crate::error::{ChartError, ChartResult};
use crate::provider::MetricsSummary;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Replaces the active dataset and re-renders.
    ///
    /// Samples are re-indexed by position. A dataset with a different ticker
    /// or time range starts at the first sample; reloading the same identity
    /// keeps the window position (clamped). Hover and drag state are dropped
    /// either way. Non-finite prices or out-of-order timestamps reject the
    /// whole dataset and leave the chart untouched.
    pub fn set_dataset(
        &mut self,
        mut dataset: Dataset,
        metrics: Option<MetricsSummary>,
    ) -> ChartResult<()> {
        validate_samples(&dataset)?;
        for (index, sample) in dataset.samples.iter_mut().enumerate() {
            sample.index = index;
        }

        let same_identity = dataset.identity() == self.dataset.identity();
        let previous_start = self.window.start();
        let mut window = SampleWindow::for_total(dataset.len());
        if same_identity {
            window.set_start(previous_start);
        }

        debug!(
            ticker = %dataset.ticker,
            range = %dataset.time_range,
            samples = dataset.len(),
            visible = window.count(),
            start = window.start(),
            "set dataset"
        );

        self.dataset = dataset;
        self.metrics = metrics;
        self.window = window;
        self.drop_pointer_state();
        self.render()
    }

    /// Switches the time range tag.
    ///
    /// The window always returns to the first sample. Samples fetched for a
    /// different range are dropped (ticker and metrics are kept) so the chart
    /// shows an empty frame until the new range is loaded.
    pub fn set_time_range(&mut self, range: TimeRange) -> ChartResult<()> {
        if range != self.dataset.time_range {
            debug!(from = %self.dataset.time_range, to = %range, "time range changed");
            self.dataset.time_range = range;
            self.dataset.samples.clear();
            self.window = SampleWindow::for_total(0);
        }
        self.window.reset();
        self.drop_pointer_state();
        self.render()
    }

    /// Empties the chart for `range`, e.g. after a failed load.
    pub fn clear_dataset(&mut self, range: TimeRange) -> ChartResult<()> {
        debug!(range = %range, "clear dataset");
        self.dataset = Dataset::empty(range);
        self.metrics = None;
        self.window = SampleWindow::for_total(0);
        self.drop_pointer_state();
        self.render()
    }

    fn drop_pointer_state(&mut self) {
        if self.interaction.reset().is_some() {
            self.publish_hover(None);
        }
    }
}

fn validate_samples(dataset: &Dataset) -> ChartResult<()> {
    for (index, sample) in dataset.samples.iter().enumerate() {
        if !sample.price.is_finite() || !sample.volume.is_finite() {
            return Err(ChartError::MalformedSample {
                index,
                reason: "price and volume must be finite".to_owned(),
            });
        }
    }
    for (offset, pair) in dataset.samples.windows(2).enumerate() {
        if pair[1].timestamp < pair[0].timestamp {
            return Err(ChartError::MalformedSample {
                index: offset + 1,
                reason: "timestamp is earlier than the previous sample".to_owned(),
            });
        }
    }
    Ok(())
}
