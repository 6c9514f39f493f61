use chrono::Days;
use daygrid_types::{CalendarCell, GRID_CELLS, GridState, MonthYear, Result};
use serde::{Deserialize, Serialize};

/// What to show in slots before the 1st and after the last day of the month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjacentDays {
    /// Leave them empty and non-interactive
    #[default]
    Blank,
    /// Fill them with the neighbouring months' days (month offset -1 / +1)
    Show,
}

/// Grid for `month`/`year` with blank adjacent slots.
///
/// Fails with `InvalidMonth` when `month` is outside 1..=12.
pub fn compute_grid(month: u32, year: i32) -> Result<GridState> {
    let month_year = MonthYear::new(month, year)?;
    Ok(build_grid(month_year, AdjacentDays::Blank))
}

/// Lays out the 42 slots of `month_year`, Monday-first.
///
/// Slot `i` shows day `i - lead + 1` where `lead` is the number of weekdays
/// before the 1st. Recomputed wholesale; callers never patch a grid.
pub fn build_grid(month_year: MonthYear, adjacent: AdjacentDays) -> GridState {
    let lead = (month_year.weekday_of_first() - 1) as usize;
    let days_in_month = month_year.days_in_month() as usize;
    let first = month_year.first_day();

    let cells = (0..GRID_CELLS)
        .map(|i| {
            if i >= lead && i - lead < days_in_month {
                return first
                    .checked_add_days(Days::new((i - lead) as u64))
                    .map(|date| CalendarCell::for_date(date, 0))
                    .unwrap_or_else(CalendarCell::empty);
            }

            match adjacent {
                AdjacentDays::Blank => CalendarCell::empty(),
                AdjacentDays::Show if i < lead => first
                    .checked_sub_days(Days::new((lead - i) as u64))
                    .map(|date| CalendarCell::for_date(date, -1))
                    .unwrap_or_else(CalendarCell::empty),
                AdjacentDays::Show => first
                    .checked_add_days(Days::new((i - lead) as u64))
                    .map(|date| CalendarCell::for_date(date, 1))
                    .unwrap_or_else(CalendarCell::empty),
            }
        })
        .collect();

    GridState {
        display_month: month_year.month(),
        display_year: month_year.year(),
        cells,
    }
}
