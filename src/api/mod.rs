mod dashboard;
mod data_controller;
mod engine;
mod engine_config;
mod hover;
mod interaction_controller;
mod render_frame_builder;
mod render_style;
mod snapshot;

pub use dashboard::Dashboard;
pub use engine::ChartEngine;
pub use engine_config::{ChartEngineConfig, ChartMargins};
pub use hover::{HoverBridge, HoverSelection, HoverSlot};
pub use render_style::RenderStyle;
pub use snapshot::{ChartSnapshot, SegmentSummary};
