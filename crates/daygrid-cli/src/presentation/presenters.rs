use chrono::NaiveDate;
use daygrid_engine::CalendarPicker;
use daygrid_types::{Direction, MonthYear, WEEKDAY_LABELS};

use super::view_models::{DayCellViewModel, MonthViewModel, StatusBarViewModel, StepViewModel};

pub fn present_month(picker: &CalendarPicker, today: NaiveDate) -> MonthViewModel {
    let grid = picker.grid();
    let highlighted = picker.highlighted();

    let cells = grid
        .cells
        .iter()
        .enumerate()
        .map(|(index, cell)| DayCellViewModel {
            index,
            day: cell.day_of_month,
            date: cell.date,
            in_month: cell.belongs_to_current_month,
            month_offset: cell.month_offset,
            is_today: cell.is_on(today),
            is_highlighted: highlighted == Some(index),
            marker: cell.marker,
        })
        .collect();

    MonthViewModel {
        title: picker.title(),
        month: grid.display_month,
        year: grid.display_year,
        weekdays: WEEKDAY_LABELS.to_vec(),
        cells,
        selected_date: picker.selected_date(),
        highlighted,
    }
}

pub fn present_step(direction: Direction, from: MonthYear, to: MonthYear) -> StepViewModel {
    StepViewModel {
        direction: match direction {
            Direction::Prev => "prev",
            Direction::Next => "next",
        },
        from,
        to,
    }
}

pub fn present_status(picker: &CalendarPicker, message: &str) -> StatusBarViewModel {
    let marked_days = picker
        .grid()
        .cells
        .iter()
        .filter(|cell| cell.belongs_to_current_month && cell.marker.is_some())
        .count();

    StatusBarViewModel {
        message: message.to_string(),
        selected_date: picker.selected_date(),
        marked_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daygrid_engine::PickerOptions;

    #[test]
    fn test_present_month_flags() {
        let mut picker = CalendarPicker::for_month(1, 2024, PickerOptions::default()).unwrap();
        picker.tap(14);
        let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

        let vm = present_month(&picker, today);
        assert_eq!(vm.title, "January 2024");
        assert_eq!(vm.cells.len(), 42);
        assert!(vm.cells[1].is_today);
        assert!(vm.cells[14].is_highlighted);
        assert_eq!(vm.highlighted, Some(14));
        assert_eq!(vm.weekdays[0], "Mon");
        assert_eq!(vm.cells.iter().filter(|c| c.is_highlighted).count(), 1);
    }

    #[test]
    fn test_present_step() {
        let from = MonthYear::new(12, 2024).unwrap();
        let to = MonthYear::new(1, 2025).unwrap();
        let vm = present_step(Direction::Next, from, to);
        let json = serde_json::to_value(&vm).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "direction": "next",
                "from": {"month": 12, "year": 2024},
                "to": {"month": 1, "year": 2025}
            })
        );
    }
}
