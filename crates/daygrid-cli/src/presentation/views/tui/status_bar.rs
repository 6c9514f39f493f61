//! Status Bar View Component
//!
//! Renders the bottom status bar with the selection and key help.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(inner);

        let selected = match self.model.selected_date {
            Some(date) => date.to_string(),
            None => "none".to_string(),
        };
        let mut status = vec![
            Span::raw(format!("Selected: {} ", selected)),
            Span::raw("| "),
            Span::styled(&self.model.message, Style::default().fg(Color::Green)),
        ];
        if self.model.marked_days > 0 {
            status.push(Span::raw(format!(" | {} marked", self.model.marked_days)));
        }
        Paragraph::new(Line::from(status)).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help_line = Line::from(vec![
            Span::styled("[q]", key),
            Span::raw("uit "),
            Span::styled("[⏎]", key),
            Span::raw("select "),
            Span::styled("[[/]]", key),
            Span::raw("month "),
            Span::styled("[t]", key),
            Span::raw("oday"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
