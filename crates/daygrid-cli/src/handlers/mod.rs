pub mod pick;
pub mod show;
pub mod step;

use chrono::Datelike;
use daygrid_engine::picker::today;
use daygrid_types::MonthYear;

/// Month to display: missing parts default to the current month and year.
pub(crate) fn resolve_month(
    month: Option<u32>,
    year: Option<i32>,
) -> daygrid_types::Result<MonthYear> {
    let now = today();
    MonthYear::new(month.unwrap_or(now.month()), year.unwrap_or(now.year()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_explicit_month() {
        let my = resolve_month(Some(2), Some(2020)).unwrap();
        assert_eq!((my.month(), my.year()), (2, 2020));
    }

    #[test]
    fn test_resolve_defaults_to_today() {
        let now = today();
        let my = resolve_month(None, None).unwrap();
        assert!(my.contains(now));
    }
}
