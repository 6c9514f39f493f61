//! Calendar Component
//!
//! Owns the keyboard cursor and turns key/mouse input into picker actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use daygrid_engine::frame::FrameHit;
use daygrid_types::{GRID_CELLS, GRID_COLUMNS};
use ratatui::{Frame, layout::Rect};

use crate::presentation::view_models::MonthViewModel;
use crate::presentation::views::tui::{CalendarView, hit_at};

/// Actions the component emits to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarAction {
    Tap(usize),
    Prev,
    Next,
    Today,
    Quit,
}

/// Calendar component with encapsulated cursor state
pub struct CalendarComponent {
    /// Grid slot under the keyboard cursor - PRIVATE
    cursor: usize,
    /// Last rendered area, for mouse hit-testing
    area: Rect,
}

impl CalendarComponent {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            area: Rect::default(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Puts the cursor on the highlighted cell, else on the first day of the month.
    pub fn reset_cursor(&mut self, data: &MonthViewModel) {
        self.cursor = data
            .highlighted
            .or_else(|| data.cells.iter().position(|c| c.in_month))
            .unwrap_or(0);
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<CalendarAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(CalendarAction::Quit);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(CalendarAction::Quit),
            KeyCode::Left | KeyCode::Char('h') => {
                self.move_by(-1);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.move_by(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_by(-(GRID_COLUMNS as isize));
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_by(GRID_COLUMNS as isize);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = GRID_CELLS - 1;
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(CalendarAction::Tap(self.cursor)),
            KeyCode::Char('[') | KeyCode::PageUp => Some(CalendarAction::Prev),
            KeyCode::Char(']') | KeyCode::PageDown => Some(CalendarAction::Next),
            KeyCode::Char('t') => Some(CalendarAction::Today),
            _ => None,
        }
    }

    /// Left clicks inside the last rendered area map to header or cell taps.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<CalendarAction> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }

        match hit_at(self.area, mouse.column, mouse.row)? {
            FrameHit::Prev => Some(CalendarAction::Prev),
            FrameHit::Next => Some(CalendarAction::Next),
            FrameHit::Cell(index) => {
                self.cursor = index;
                Some(CalendarAction::Tap(index))
            }
        }
    }

    /// Render calendar with data
    ///
    /// Performs index safety check before rendering.
    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &MonthViewModel) {
        if self.cursor >= data.cells.len() {
            self.cursor = data.cells.len().saturating_sub(1);
        }
        self.area = area;

        let view = CalendarView::new(data).cursor(Some(self.cursor));
        f.render_widget(view, area);
    }

    fn move_by(&mut self, delta: isize) {
        let target = self.cursor as isize + delta;
        if (0..GRID_CELLS as isize).contains(&target) {
            self.cursor = target as usize;
        }
    }
}

impl Default for CalendarComponent {
    fn default() -> Self {
        Self::new()
    }
}
