use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::primitives::parse_timestamp;
use crate::core::{Dataset, Sample, TimeRange};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_FETCH_ERROR_MESSAGE: &str = "Failed to fetch stock data.";

/// Raw response body of the stock endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockResponse {
    pub ticker: String,
    pub data: Vec<StockPoint>,
    pub metrics: MetricsSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPoint {
    pub timestamp: String,
    pub price: f64,
    pub volume: f64,
}

/// Summary figures shown next to the chart. Displayed as delivered, never
/// derived from the samples.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    pub current_price: f64,
    pub previous_close: f64,
    pub change: f64,
    pub change_percent: f64,
    pub day_high: f64,
    pub day_low: f64,
    pub volume: f64,
    pub market_cap: f64,
}

impl MetricsSummary {
    /// Display rows in sidebar order.
    #[must_use]
    pub fn rows(&self) -> IndexMap<&'static str, f64> {
        IndexMap::from([
            ("Current Price", self.current_price),
            ("Previous Close", self.previous_close),
            ("Change", self.change),
            ("Change %", self.change_percent),
            ("Day High", self.day_high),
            ("Day Low", self.day_low),
            ("Volume", self.volume),
            ("Market Cap", self.market_cap),
        ])
    }
}

/// Validated provider payload: the chart dataset plus its metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedData {
    pub dataset: Dataset,
    pub metrics: MetricsSummary,
}

impl StockResponse {
    /// Converts raw points into indexed samples.
    ///
    /// Any bad point fails the whole load: a dataset with silently dropped
    /// samples would color trends across the gap.
    pub fn into_fetched(self, time_range: TimeRange) -> ChartResult<FetchedData> {
        let mut samples = Vec::with_capacity(self.data.len());
        let mut previous: Option<DateTime<Utc>> = None;
        for (index, point) in self.data.into_iter().enumerate() {
            let timestamp =
                parse_timestamp(&point.timestamp).ok_or_else(|| ChartError::MalformedSample {
                    index,
                    reason: format!("unparseable timestamp `{}`", point.timestamp),
                })?;
            if !point.price.is_finite() || !point.volume.is_finite() {
                return Err(ChartError::MalformedSample {
                    index,
                    reason: "price and volume must be finite".to_owned(),
                });
            }
            if previous.is_some_and(|prev| timestamp < prev) {
                return Err(ChartError::MalformedSample {
                    index,
                    reason: "timestamp is earlier than the previous sample".to_owned(),
                });
            }
            previous = Some(timestamp);
            samples.push(Sample::new(index, timestamp, point.price, point.volume));
        }

        Ok(FetchedData {
            dataset: Dataset::new(self.ticker, time_range, samples),
            metrics: self.metrics,
        })
    }
}

/// Interprets one HTTP exchange with the stock endpoint.
pub fn decode_response(status: u16, body: &str, time_range: TimeRange) -> ChartResult<FetchedData> {
    if !(200..300).contains(&status) {
        return Err(ChartError::Fetch {
            status,
            message: extract_error_message(body),
        });
    }

    let response: StockResponse = serde_json::from_str(body)
        .map_err(|err| ChartError::Decode(format!("invalid stock response: {err}")))?;
    response.into_fetched(time_range)
}

/// Pulls the provider's `message` out of an error body, falling back to a
/// generic message when the body is not JSON or has no usable message.
#[must_use]
pub fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(Value::as_str)
                .filter(|message| !message.is_empty())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| DEFAULT_FETCH_ERROR_MESSAGE.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_falls_back_for_unusable_bodies() {
        assert_eq!(extract_error_message(r#"{"message":"nope"}"#), "nope");
        assert_eq!(extract_error_message(r#"{"message":""}"#), DEFAULT_FETCH_ERROR_MESSAGE);
        assert_eq!(extract_error_message(r#"{"error":"x"}"#), DEFAULT_FETCH_ERROR_MESSAGE);
        assert_eq!(extract_error_message("<html>"), DEFAULT_FETCH_ERROR_MESSAGE);
    }

    #[test]
    fn metric_rows_keep_sidebar_order() {
        let rows = MetricsSummary::default().rows();
        let labels: Vec<&str> = rows.keys().copied().collect();
        assert_eq!(labels.first(), Some(&"Current Price"));
        assert_eq!(labels.last(), Some(&"Market Cap"));
        assert_eq!(labels.len(), 8);
    }
}
