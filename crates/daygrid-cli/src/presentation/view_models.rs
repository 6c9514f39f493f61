use chrono::NaiveDate;
use daygrid_types::{DayMarker, MonthYear};
use serde::Serialize;
use std::fmt;

/// Whether text views may emit ANSI styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Plain,
    Colored,
}

/// Bridge from a view model to its text view
pub trait CreateView {
    fn create_view<'a>(&'a self, style: TextStyle) -> Box<dyn fmt::Display + 'a>;
}

#[derive(Debug, Clone, Serialize)]
pub struct DayCellViewModel {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub in_month: bool,
    pub month_offset: i8,
    pub is_today: bool,
    pub is_highlighted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<DayMarker>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthViewModel {
    pub title: String,
    pub month: u32,
    pub year: i32,
    pub weekdays: Vec<&'static str>,
    pub cells: Vec<DayCellViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepViewModel {
    pub direction: &'static str,
    pub from: MonthYear,
    pub to: MonthYear,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StatusBarViewModel {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_date: Option<NaiveDate>,
    pub marked_days: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PickedViewModel {
    pub selected_date: NaiveDate,
}
