pub mod axis;
pub mod curve;
pub mod primitives;
pub mod projection;
pub mod scale;
pub mod trend;
pub mod types;
pub mod windowing;

pub use axis::{AxisTick, TickPlan, format_price_label, format_time_label, price_ticks, time_ticks};
pub use curve::{Curve, CurveStep, monotone_x_curve};
pub use projection::{ChartScales, PlotArea, x_domain, y_domain};
pub use scale::{LinearScale, tick_increment};
pub use trend::{TrendSegment, is_rising, marker_rising, segment_trends};
pub use types::{Dataset, Sample, TimeRange, Viewport};
pub use windowing::{SampleWindow, shift_by, visible_count_for};
