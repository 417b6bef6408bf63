use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::core::Sample;

/// Sample under the pointer, as published to the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverSelection {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    pub volume: f64,
}

impl From<&Sample> for HoverSelection {
    fn from(sample: &Sample) -> Self {
        Self {
            timestamp: sample.timestamp,
            price: sample.price,
            volume: sample.volume,
        }
    }
}

impl HoverSelection {
    /// Sidebar price readout, e.g. `$187.42`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }

    #[must_use]
    pub fn timestamp_label(&self, offset: FixedOffset) -> String {
        self.timestamp
            .with_timezone(&offset)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}

/// One-way channel from the chart to a hover consumer.
///
/// Called synchronously on every hover transition; `None` means nothing is
/// hovered. Consumers keep only the latest value.
pub trait HoverBridge {
    fn notify(&mut self, selection: Option<HoverSelection>);
}

impl<F> HoverBridge for F
where
    F: FnMut(Option<HoverSelection>),
{
    fn notify(&mut self, selection: Option<HoverSelection>) {
        self(selection);
    }
}

/// Last-write-wins hover cell shared between the chart and a sidebar.
///
/// Clones share state: hand one clone to the engine as its bridge and read
/// from another.
#[derive(Debug, Clone, Default)]
pub struct HoverSlot {
    latest: Rc<Cell<Option<HoverSelection>>>,
    notifications: Rc<Cell<usize>>,
}

impl HoverSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn latest(&self) -> Option<HoverSelection> {
        self.latest.get()
    }

    #[must_use]
    pub fn notification_count(&self) -> usize {
        self.notifications.get()
    }
}

impl HoverBridge for HoverSlot {
    fn notify(&mut self, selection: Option<HoverSelection>) {
        self.latest.set(selection);
        self.notifications.set(self.notifications.get() + 1);
    }
}
