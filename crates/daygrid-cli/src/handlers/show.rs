use anyhow::Result;
use chrono::NaiveDate;
use daygrid_engine::{CalendarPicker, picker::today};
use daygrid_types::MonthYear;

use super::resolve_month;
use crate::config::Config;
use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::present_month;

pub fn handle(
    renderer: &ConsoleRenderer,
    config: &Config,
    month: Option<u32>,
    year: Option<i32>,
    adjacent: bool,
    select: Option<NaiveDate>,
) -> Result<()> {
    // Without an explicit month, a selection decides which month is shown
    let target = match (month, year, select) {
        (None, None, Some(date)) => MonthYear::of(date),
        _ => resolve_month(month, year)?,
    };

    let mut picker = CalendarPicker::new(target, config.picker_options(adjacent));
    if let Some(date) = select {
        picker.select_date(date);
        picker.jump_to(target);
    }

    let view_model = present_month(&picker, today());
    renderer.render(&view_model)
}
