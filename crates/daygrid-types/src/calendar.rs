use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::labels::month_name;
use crate::{Error, Result};

/// A displayable month: always a valid (month, year) pair.
///
/// Internally anchored on the 1st of the month so every derived value
/// (weekday of the 1st, day count) is infallible once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMonthYear", into = "RawMonthYear")]
pub struct MonthYear {
    first: NaiveDate,
}

#[derive(Serialize, Deserialize)]
struct RawMonthYear {
    month: u32,
    year: i32,
}

impl TryFrom<RawMonthYear> for MonthYear {
    type Error = Error;

    fn try_from(raw: RawMonthYear) -> Result<Self> {
        MonthYear::new(raw.month, raw.year)
    }
}

impl From<MonthYear> for RawMonthYear {
    fn from(value: MonthYear) -> Self {
        RawMonthYear {
            month: value.month(),
            year: value.year(),
        }
    }
}

impl MonthYear {
    pub fn new(month: u32, year: i32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth(month));
        }

        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            Error::InvalidDate(format!("{}-{:02} is outside the supported range", year, month))
        })?;

        Ok(Self { first })
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Weekday of the 1st, 1 = Monday .. 7 = Sunday.
    pub fn weekday_of_first(&self) -> u32 {
        self.first.weekday().number_from_monday()
    }

    pub fn days_in_month(&self) -> u32 {
        (28..=31)
            .rev()
            .find(|&day| NaiveDate::from_ymd_opt(self.year(), self.month(), day).is_some())
            .unwrap_or(28)
    }

    /// The date for `day` in this month, if it exists.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year(), self.month(), day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Header text, e.g. "January 2024".
    pub fn title(&self) -> String {
        format!(
            "{} {}",
            month_name(self.month()).unwrap_or_default(),
            self.year()
        )
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year(), self.month())
    }
}

/// Header navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// Month delta applied by this direction.
    pub fn delta(self) -> i32 {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

/// True when both dates fall on the same calendar day.
///
/// `NaiveDate` carries no time of day, so this is plain component equality;
/// it exists so callers holding date-times compare through `.date_naive()`
/// instead of timestamp equality.
pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}
