//! Data Provider boundary: where samples and metrics come from.
//!
//! Every data error (configuration, HTTP status, malformed samples) is raised
//! here, before anything reaches the chart.

mod config;
#[cfg(feature = "http-provider")]
mod http;
mod response;

use std::collections::HashMap;

pub use config::{API_KEY_ENV, API_URL_ENV, DEFAULT_TIMEOUT, ProviderConfig, TIMEOUT_ENV};
#[cfg(feature = "http-provider")]
pub use http::HttpDataProvider;
pub use response::{
    DEFAULT_FETCH_ERROR_MESSAGE, FetchedData, MetricsSummary, StockPoint, StockResponse,
    decode_response, extract_error_message,
};

use crate::core::TimeRange;
use crate::error::{ChartError, ChartResult};

/// Source of price series for one ticker.
pub trait DataProvider {
    fn fetch(&self, range: TimeRange) -> ChartResult<FetchedData>;
}

/// In-memory provider replaying canned HTTP exchanges per time range.
///
/// Bodies go through the same decoding as live responses, which makes it
/// suitable for tests and offline rendering.
#[derive(Debug, Clone, Default)]
pub struct StaticDataProvider {
    exchanges: HashMap<TimeRange, (u16, String)>,
}

impl StaticDataProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_exchange(mut self, range: TimeRange, status: u16, body: impl Into<String>) -> Self {
        self.exchanges.insert(range, (status, body.into()));
        self
    }

    /// Serves `response` with status 200 for `range`.
    pub fn with_response(self, range: TimeRange, response: &StockResponse) -> ChartResult<Self> {
        let body = serde_json::to_string(response)
            .map_err(|err| ChartError::Decode(format!("failed to encode response: {err}")))?;
        Ok(self.with_exchange(range, 200, body))
    }
}

impl DataProvider for StaticDataProvider {
    fn fetch(&self, range: TimeRange) -> ChartResult<FetchedData> {
        match self.exchanges.get(&range) {
            Some((status, body)) => decode_response(*status, body, range),
            None => Err(ChartError::Fetch {
                status: 404,
                message: format!("no data for time range {range}"),
            }),
        }
    }
}

impl<P: DataProvider + ?Sized> DataProvider for &P {
    fn fetch(&self, range: TimeRange) -> ChartResult<FetchedData> {
        (**self).fetch(range)
    }
}

impl<P: DataProvider + ?Sized> DataProvider for Box<P> {
    fn fetch(&self, range: TimeRange) -> ChartResult<FetchedData> {
        (**self).fetch(range)
    }
}
