use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-day activity counters shown as an indicator on a grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMarker {
    #[serde(default)]
    pub sched_snapshot: u32,
    #[serde(default)]
    pub alarm_snapshot: u32,
    #[serde(default)]
    pub sched_video: u32,
    #[serde(default)]
    pub alarm_video: u32,
}

impl DayMarker {
    pub fn has_activity(&self) -> bool {
        self.total() > 0
    }

    pub fn total(&self) -> u32 {
        self.sched_snapshot
            .saturating_add(self.alarm_snapshot)
            .saturating_add(self.sched_video)
            .saturating_add(self.alarm_video)
    }

    /// True when any alarm counter is set; alarms render with a stronger indicator.
    pub fn has_alarm(&self) -> bool {
        self.alarm_snapshot > 0 || self.alarm_video > 0
    }

    pub fn merge(&mut self, other: &DayMarker) {
        self.sched_snapshot = self.sched_snapshot.saturating_add(other.sched_snapshot);
        self.alarm_snapshot = self.alarm_snapshot.saturating_add(other.alarm_snapshot);
        self.sched_video = self.sched_video.saturating_add(other.sched_video);
        self.alarm_video = self.alarm_video.saturating_add(other.alarm_video);
    }
}

/// A marker bound to a date, as stored in configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerEntry {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub marker: DayMarker,
}
