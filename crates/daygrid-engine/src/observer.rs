use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Sender;

/// Callbacks the embedding application registers with a picker.
///
/// Fired after the picker has updated its own state.
pub trait CalendarObserver {
    fn on_day_selected(&mut self, date: NaiveDate);

    fn on_prev_requested(&mut self) {}

    fn on_next_requested(&mut self) {}
}

/// Observer notifications as values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PickerEvent {
    DaySelected { date: NaiveDate },
    PrevRequested,
    NextRequested,
}

/// Forwards notifications over a channel so the receiving side can drain
/// them at its own pace (e.g. once per frame).
pub struct ChannelObserver {
    tx: Sender<PickerEvent>,
}

impl ChannelObserver {
    pub fn new(tx: Sender<PickerEvent>) -> Self {
        Self { tx }
    }

    fn send(&self, event: PickerEvent) {
        if let Err(e) = self.tx.send(event) {
            tracing::warn!("dropping picker event {:?}: {}", event, e);
        }
    }
}

impl CalendarObserver for ChannelObserver {
    fn on_day_selected(&mut self, date: NaiveDate) {
        self.send(PickerEvent::DaySelected { date });
    }

    fn on_prev_requested(&mut self) {
        self.send(PickerEvent::PrevRequested);
    }

    fn on_next_requested(&mut self) {
        self.send(PickerEvent::NextRequested);
    }
}
