//! Interactive picker. The renderer routes input to [`CalendarComponent`] and
//! applies the resulting actions to the [`CalendarPicker`]; observer
//! notifications arrive over a channel and feed the status bar.

use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind, MouseEvent,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use daygrid_engine::{CalendarPicker, ChannelObserver, PickerEvent, picker::today};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use crate::presentation::components::{CalendarAction, CalendarComponent};
use crate::presentation::presenters::{present_month, present_status};
use crate::presentation::view_models::MonthViewModel;
use crate::presentation::views::tui::StatusBarView;

pub struct PickerApp {
    picker: CalendarPicker,
    calendar: CalendarComponent,
    events: Receiver<PickerEvent>,
    today: NaiveDate,
    message: String,
    should_quit: bool,
}

impl PickerApp {
    pub fn new(picker: CalendarPicker) -> Self {
        let (tx, rx) = mpsc::channel();
        let picker = picker.with_observer(Box::new(ChannelObserver::new(tx)));

        let mut app = Self {
            picker,
            calendar: CalendarComponent::new(),
            events: rx,
            today: today(),
            message: String::new(),
            should_quit: false,
        };
        let month = app.month_view_model();
        app.calendar.reset_cursor(&month);
        app
    }

    /// Overrides the date treated as "today" (for reproducible rendering).
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn picker(&self) -> &CalendarPicker {
        &self.picker
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.picker.selected_date()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn month_view_model(&self) -> MonthViewModel {
        present_month(&self.picker, self.today)
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if let Some(action) = self.calendar.handle_input(key) {
            self.apply(action);
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if let Some(action) = self.calendar.handle_mouse(mouse) {
            self.apply(action);
        }
    }

    fn apply(&mut self, action: CalendarAction) {
        let month_before = self.picker.month_year();

        match action {
            CalendarAction::Tap(index) => {
                if self.picker.tap(index).is_none() {
                    tracing::debug!("tap on empty cell {}", index);
                }
            }
            CalendarAction::Prev => self.picker.prev(),
            CalendarAction::Next => self.picker.next(),
            CalendarAction::Today => {
                self.picker.jump_to_today();
                self.message = format!("Today is {}", self.today);
            }
            CalendarAction::Quit => self.should_quit = true,
        }

        if self.picker.month_year() != month_before {
            let month = self.month_view_model();
            self.calendar.reset_cursor(&month);
        }
        self.drain_events();
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.message = match event {
                PickerEvent::DaySelected { date } => format!("Picked {}", date),
                PickerEvent::PrevRequested | PickerEvent::NextRequested => {
                    format!("Showing {}", self.picker.title())
                }
            };
        }
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let chunks =
            Layout::vertical([Constraint::Min(8), Constraint::Length(3)]).split(f.area());

        let month = self.month_view_model();
        self.calendar.render(f, chunks[0], &month);

        let status = present_status(&self.picker, &self.message);
        f.render_widget(StatusBarView::new(&status), chunks[1]);
    }

    /// Runs the picker on the real terminal until the user quits.
    pub fn run(mut self) -> Result<Option<NaiveDate>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
            std::process::exit(130);
        })?;

        let tick_rate = Duration::from_millis(250);
        let result = (|| -> Result<()> {
            while !self.should_quit {
                terminal.draw(|f| self.draw(f))?;

                if event::poll(tick_rate)? {
                    match event::read()? {
                        Event::Key(key) => self.on_key(key),
                        Event::Mouse(mouse) => self.on_mouse(mouse),
                        _ => {}
                    }
                }
            }
            Ok(())
        })();

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        terminal.show_cursor()?;

        result?;
        Ok(self.picker.selected_date())
    }
}
