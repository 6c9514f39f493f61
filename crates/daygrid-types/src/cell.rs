use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::is_same_day;
use crate::marker::DayMarker;

pub const GRID_COLUMNS: usize = 7;
pub const GRID_ROWS: usize = 6;
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;

/// One slot of the 6×7 month grid.
///
/// A cell is either empty (no day, no date) or carries both. Cells from the
/// displayed month have `month_offset == 0`; days borrowed from the previous
/// or next month carry -1 / +1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub belongs_to_current_month: bool,
    pub month_offset: i8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<DayMarker>,
}

impl CalendarCell {
    pub fn empty() -> Self {
        Self {
            day_of_month: None,
            date: None,
            belongs_to_current_month: false,
            month_offset: 0,
            marker: None,
        }
    }

    /// A populated cell for `date`, `month_offset` relative to the displayed month.
    pub fn for_date(date: NaiveDate, month_offset: i8) -> Self {
        Self {
            day_of_month: Some(date.day()),
            date: Some(date),
            belongs_to_current_month: month_offset == 0,
            month_offset,
            marker: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none()
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date.is_some_and(|d| is_same_day(d, date))
    }
}

/// The full grid for one displayed month. Always exactly 42 cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridState {
    pub display_month: u32,
    pub display_year: i32,
    pub cells: Vec<CalendarCell>,
}

impl GridState {
    pub fn cell(&self, index: usize) -> Option<&CalendarCell> {
        self.cells.get(index)
    }

    /// Index of the cell showing `date`, if the grid contains it.
    pub fn position_of(&self, date: NaiveDate) -> Option<usize> {
        self.cells.iter().position(|cell| cell.is_on(date))
    }

    /// Cells that belong to the displayed month.
    pub fn month_days(&self) -> impl Iterator<Item = (usize, &CalendarCell)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.belongs_to_current_month)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(GRID_COLUMNS)
    }
}
