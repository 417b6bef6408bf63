use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel size of the whole chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One time-stamped price/volume observation.
///
/// `index` is the position inside the full dataset and doubles as the
/// chronological order key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub index: usize,
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    pub volume: f64,
}

impl Sample {
    #[must_use]
    pub fn new(index: usize, timestamp: DateTime<Utc>, price: f64, volume: f64) -> Self {
        Self {
            index,
            timestamp,
            price,
            volume,
        }
    }
}

/// Time window requested from the provider; also selects axis tick granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "1y")]
    OneYear,
}

impl TimeRange {
    /// Wire tag used in provider requests (`timerange=<tag>`).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::OneWeek => "1w",
            Self::OneMonth => "1m",
            Self::OneYear => "1y",
        }
    }

    /// Resolves an optional query value, falling back to one day.
    pub fn from_query(value: Option<&str>) -> ChartResult<Self> {
        match value {
            None | Some("") => Ok(Self::default()),
            Some(tag) => tag.parse(),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for TimeRange {
    type Err = ChartError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1d" => Ok(Self::OneDay),
            "1w" => Ok(Self::OneWeek),
            "1m" => Ok(Self::OneMonth),
            "1y" => Ok(Self::OneYear),
            other => Err(ChartError::InvalidData(format!(
                "unknown time range `{other}` (expected 1d, 1w, 1m or 1y)"
            ))),
        }
    }
}

/// A fetched series for one ticker and time range.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub ticker: String,
    pub time_range: TimeRange,
    pub samples: Vec<Sample>,
}

impl Dataset {
    #[must_use]
    pub fn new(ticker: impl Into<String>, time_range: TimeRange, samples: Vec<Sample>) -> Self {
        Self {
            ticker: ticker.into(),
            time_range,
            samples,
        }
    }

    /// Placeholder used while a fetch is outstanding or after it failed.
    #[must_use]
    pub fn empty(time_range: TimeRange) -> Self {
        Self {
            ticker: String::new(),
            time_range,
            samples: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Ticker and range together identify a dataset for viewport resets.
    #[must_use]
    pub fn identity(&self) -> (&str, TimeRange) {
        (&self.ticker, self.time_range)
    }
}
