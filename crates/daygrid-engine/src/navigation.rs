//! Month/year arithmetic for header navigation and adjacent-day taps.

use daygrid_types::{Direction, MonthYear};

/// Moves one month in `direction`, rolling the year at December/January.
///
/// Always returns a month in 1..=12. A month outside that range is read as
/// an offset from January of `year`. Past the `i32` year bounds nothing moves.
pub fn advance(direction: Direction, month: u32, year: i32) -> (u32, i32) {
    let index = year as i64 * 12 + month as i64 - 1 + direction.delta() as i64;
    match i32::try_from(index.div_euclid(12)) {
        Ok(year) => (index.rem_euclid(12) as u32 + 1, year),
        Err(_) => (month.clamp(1, 12), year),
    }
}

/// Applies the month offset of a tapped cell (-1, 0 or +1).
///
/// The year only changes when January is left backwards or December forwards.
pub fn apply_month_offset(month_add: i8, month: u32, year: i32) -> (u32, i32) {
    let shifted = (month as i32 + month_add as i32 - 1).rem_euclid(12) as u32 + 1;
    let year = match (month, month_add) {
        (1, -1) => year.saturating_sub(1),
        (12, 1) => year.saturating_add(1),
        _ => year,
    };
    (shifted, year)
}

/// [`advance`] on a validated month. `None` only past the supported date range.
pub fn step(current: MonthYear, direction: Direction) -> Option<MonthYear> {
    let (month, year) = advance(direction, current.month(), current.year());
    MonthYear::new(month, year).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prev_rolls_back_year_from_january() {
        assert_eq!(advance(Direction::Prev, 1, 2024), (12, 2023));
    }

    #[test]
    fn test_next_rolls_forward_year_from_december() {
        assert_eq!(advance(Direction::Next, 12, 2024), (1, 2025));
    }

    #[test]
    fn test_mid_year_moves_keep_year() {
        for month in 2..=12 {
            assert_eq!(advance(Direction::Prev, month, 2024), (month - 1, 2024));
        }
        for month in 1..=11 {
            assert_eq!(advance(Direction::Next, month, 2024), (month + 1, 2024));
        }
    }

    #[test]
    fn test_advance_stays_in_month_range() {
        assert_eq!(advance(Direction::Next, 13, 2024), (2, 2025));
        assert_eq!(advance(Direction::Prev, 0, 2024), (11, 2023));
        assert_eq!(advance(Direction::Prev, 1, i32::MIN), (1, i32::MIN));
        assert_eq!(advance(Direction::Next, 12, i32::MAX), (12, i32::MAX));
    }

    #[test]
    fn test_month_offset_wraps() {
        assert_eq!(apply_month_offset(-1, 1, 2024), (12, 2023));
        assert_eq!(apply_month_offset(1, 12, 2024), (1, 2025));
        assert_eq!(apply_month_offset(1, 6, 2024), (7, 2024));
        assert_eq!(apply_month_offset(-1, 6, 2024), (5, 2024));
        assert_eq!(apply_month_offset(0, 1, 2024), (1, 2024));
        assert_eq!(apply_month_offset(0, 12, 2024), (12, 2024));
    }

    #[test]
    fn test_month_offset_agrees_with_advance() {
        for month in 1..=12 {
            assert_eq!(
                apply_month_offset(-1, month, 1999),
                advance(Direction::Prev, month, 1999)
            );
            assert_eq!(
                apply_month_offset(1, month, 1999),
                advance(Direction::Next, month, 1999)
            );
        }
    }

    #[test]
    fn test_step_on_month_year() {
        let dec = MonthYear::new(12, 2030).unwrap();
        let jan = step(dec, Direction::Next).unwrap();
        assert_eq!((jan.month(), jan.year()), (1, 2031));
        assert_eq!(step(jan, Direction::Prev), Some(dec));
    }
}
