use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{frame_for, snap};
use crate::presentation::view_models::{DayCellViewModel, MonthViewModel};

/// Month grid widget: header with prev/next arrows, weekday labels, 6×7 days.
pub struct CalendarView<'a> {
    model: &'a MonthViewModel,
    cursor: Option<usize>,
}

impl<'a> CalendarView<'a> {
    pub fn new(model: &'a MonthViewModel) -> Self {
        Self {
            model,
            cursor: None,
        }
    }

    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    fn day_line(&self, cell: &DayCellViewModel) -> Line<'a> {
        let Some(day) = cell.day else {
            return Line::default();
        };

        let mut style = Style::default();
        if !cell.in_month {
            style = style.fg(Color::DarkGray);
        }
        if cell.is_today {
            style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }
        if cell.is_highlighted {
            style = style.add_modifier(Modifier::REVERSED);
        }
        if self.cursor == Some(cell.index) {
            style = style.add_modifier(Modifier::UNDERLINED);
        }

        let mut spans = vec![Span::styled(day.to_string(), style)];
        if let Some(marker) = cell.marker {
            let color = if marker.has_alarm() {
                Color::Red
            } else {
                Color::Cyan
            };
            spans.push(Span::styled("•", Style::default().fg(color)));
        }
        Line::from(spans)
    }
}

impl<'a> Widget for CalendarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let frame = frame_for(area);
        let arrow = Style::default().fg(Color::Yellow);

        Paragraph::new(Line::styled("◀", arrow))
            .alignment(Alignment::Center)
            .render(snap(frame.prev_button(), area), buf);
        Paragraph::new(Line::styled("▶", arrow))
            .alignment(Alignment::Center)
            .render(snap(frame.next_button(), area), buf);
        Paragraph::new(Line::styled(
            self.model.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(snap(frame.title(), area), buf);

        for (column, label) in self.model.weekdays.iter().enumerate() {
            Paragraph::new(Line::styled(*label, Style::default().fg(Color::Gray)))
                .alignment(Alignment::Center)
                .render(snap(frame.weekday_label(column), area), buf);
        }

        for cell in &self.model.cells {
            Paragraph::new(self.day_line(cell))
                .alignment(Alignment::Center)
                .render(snap(frame.cell(cell.index), area), buf);
        }
    }
}
