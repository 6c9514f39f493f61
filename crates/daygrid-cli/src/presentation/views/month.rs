use owo_colors::{OwoColorize, Style};
use std::fmt;

use crate::presentation::view_models::{CreateView, DayCellViewModel, MonthViewModel, TextStyle};

/// Width of the weekday header row ("Mon Tue ... Sun")
const ROW_WIDTH: usize = 27;

impl CreateView for MonthViewModel {
    fn create_view<'a>(&'a self, style: TextStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(MonthView { data: self, style })
    }
}

/// Text rendering of a month grid.
///
/// Each day takes four columns: `" 15 "`, `"[15]"` when highlighted, and a
/// trailing `*` for days with markers. Rows with no days are skipped.
pub struct MonthView<'a> {
    data: &'a MonthViewModel,
    style: TextStyle,
}

impl<'a> MonthView<'a> {
    pub fn new(data: &'a MonthViewModel, style: TextStyle) -> Self {
        Self { data, style }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        match self.style {
            TextStyle::Plain => text.to_string(),
            TextStyle::Colored => text.style(style).to_string(),
        }
    }

    fn cell_text(&self, cell: &DayCellViewModel) -> String {
        let Some(day) = cell.day else {
            return "    ".to_string();
        };

        if cell.is_highlighted {
            return self.paint(&format!("[{:>2}]", day), Style::new().reversed().bold());
        }

        let mut digits = Style::new();
        if !cell.in_month {
            digits = digits.dimmed();
        }
        if cell.is_today {
            digits = digits.bold().underline();
        }

        let suffix = match cell.marker {
            Some(marker) if marker.has_alarm() => self.paint("*", Style::new().red()),
            Some(_) => self.paint("*", Style::new().yellow()),
            None => " ".to_string(),
        };

        format!(" {}{}", self.paint(&format!("{:>2}", day), digits), suffix)
    }
}

impl<'a> fmt::Display for MonthView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = format!("{:^width$}", self.data.title, width = ROW_WIDTH);
        writeln!(f, "{}", self.paint(title.trim_end(), Style::new().bold()))?;
        writeln!(f, "{}", self.data.weekdays.join(" "))?;

        for row in self.data.cells.chunks(7) {
            if row.iter().all(|cell| cell.day.is_none()) {
                continue;
            }
            let line: String = row.iter().map(|cell| self.cell_text(cell)).collect();
            writeln!(f, "{}", line.trim_end())?;
        }

        if let Some(date) = self.data.selected_date {
            writeln!(f)?;
            match self.data.highlighted {
                Some(_) => writeln!(f, "Selected: {}", date)?,
                None => writeln!(f, "Selected: {} (not shown)", date)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_month;
    use chrono::NaiveDate;
    use daygrid_engine::{CalendarPicker, MarkerSet, PickerOptions};
    use daygrid_types::DayMarker;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_plain_january_2024_with_selection() {
        let mut picker = CalendarPicker::for_month(1, 2024, PickerOptions::default()).unwrap();
        picker.select_date(date(2024, 1, 15));
        let vm = present_month(&picker, date(2000, 1, 1));

        let text = MonthView::new(&vm, TextStyle::Plain).to_string();
        insta::assert_snapshot!(text, @r"
               January 2024
        Mon Tue Wed Thu Fri Sat Sun
          1   2   3   4   5   6   7
          8   9  10  11  12  13  14
        [15] 16  17  18  19  20  21
         22  23  24  25  26  27  28
         29  30  31

        Selected: 2024-01-15
        ");
    }

    #[test]
    fn test_plain_leading_blanks_and_markers() {
        let mut markers = MarkerSet::new();
        markers.add(
            date(2023, 10, 2),
            DayMarker {
                sched_video: 1,
                ..Default::default()
            },
        );
        let picker = CalendarPicker::for_month(
            10,
            2023,
            PickerOptions {
                markers,
                ..Default::default()
            },
        )
        .unwrap();
        let vm = present_month(&picker, date(2000, 1, 1));
        let text = MonthView::new(&vm, TextStyle::Plain).to_string();
        let lines: Vec<&str> = text.lines().collect();

        // 2023-10-01 is a Sunday
        assert_eq!(lines[2], "                          1");
        assert_eq!(lines[3], "  2*  3   4   5   6   7   8");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_selection_outside_month_is_reported() {
        let mut picker = CalendarPicker::for_month(1, 2024, PickerOptions::default()).unwrap();
        picker.select_date(date(2024, 1, 15));
        picker.next();
        let vm = present_month(&picker, date(2000, 1, 1));
        let text = MonthView::new(&vm, TextStyle::Plain).to_string();
        assert!(text.ends_with("Selected: 2024-01-15 (not shown)\n"));
        assert!(!text.contains('['));
    }

    #[test]
    fn test_colored_output_contains_ansi() {
        let picker = CalendarPicker::for_month(1, 2024, PickerOptions::default()).unwrap();
        let vm = present_month(&picker, date(2024, 1, 3));
        let text = MonthView::new(&vm, TextStyle::Colored).to_string();
        assert!(text.contains("\u{1b}["));
    }
}
