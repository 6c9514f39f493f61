use chrono::NaiveDate;
use daygrid_types::{DayMarker, GridState, MarkerEntry};
use std::collections::BTreeMap;

/// Per-day activity indicators keyed by date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerSet {
    by_date: BTreeMap<NaiveDate, DayMarker>,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from config entries; repeated dates are summed.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a MarkerEntry>) -> Self {
        let mut set = Self::new();
        for entry in entries {
            set.add(entry.date, entry.marker);
        }
        set
    }

    pub fn add(&mut self, date: NaiveDate, marker: DayMarker) {
        self.by_date.entry(date).or_default().merge(&marker);
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DayMarker> {
        self.by_date.get(&date)
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Attaches markers with activity to the matching grid cells.
    pub fn apply(&self, grid: &mut GridState) {
        for cell in &mut grid.cells {
            cell.marker = cell
                .date
                .and_then(|date| self.get(date))
                .filter(|marker| marker.has_activity())
                .copied();
        }
    }
}
