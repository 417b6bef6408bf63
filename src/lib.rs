//! ticker-chart: interactive price chart engine for a single ticker.
//!
//! The engine turns a fetched price series into backend-agnostic render
//! frames: a quarter-width window over the data that pans with drag
//! gestures, trend-colored line segments, point markers with hover readout,
//! and time/price axes whose labels follow the selected time range.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod provider;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, Dashboard, HoverBridge, HoverSelection, HoverSlot};
pub use error::{ChartError, ChartResult};
