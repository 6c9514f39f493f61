use chrono::{Local, NaiveDate};
use daygrid_types::{Direction, GridState, MonthYear, Result};

use crate::grid::{AdjacentDays, build_grid};
use crate::markers::MarkerSet;
use crate::navigation::{apply_month_offset, step};
use crate::observer::CalendarObserver;
use crate::selection::SelectionState;

#[derive(Debug, Clone, Default)]
pub struct PickerOptions {
    pub adjacent_days: AdjacentDays,
    pub markers: MarkerSet,
}

/// The calendar picker's whole model: displayed month, grid, selection and
/// the embedder's observer.
///
/// Every month change rebuilds the grid from scratch and then re-matches the
/// stored selection against it.
pub struct CalendarPicker {
    current: MonthYear,
    adjacent_days: AdjacentDays,
    markers: MarkerSet,
    grid: GridState,
    selection: SelectionState,
    observer: Option<Box<dyn CalendarObserver>>,
}

impl CalendarPicker {
    pub fn new(current: MonthYear, options: PickerOptions) -> Self {
        let mut picker = Self {
            current,
            adjacent_days: options.adjacent_days,
            markers: options.markers,
            grid: build_grid(current, options.adjacent_days),
            selection: SelectionState::new(),
            observer: None,
        };
        picker.refresh();
        picker
    }

    /// Picker showing `month`/`year`; fails with `InvalidMonth` outside 1..=12.
    pub fn for_month(month: u32, year: i32, options: PickerOptions) -> Result<Self> {
        Ok(Self::new(MonthYear::new(month, year)?, options))
    }

    /// Picker showing the current local month.
    pub fn starting_today(options: PickerOptions) -> Self {
        Self::new(MonthYear::of(today()), options)
    }

    pub fn with_observer(mut self, observer: Box<dyn CalendarObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn set_observer(&mut self, observer: Option<Box<dyn CalendarObserver>>) {
        self.observer = observer;
    }

    pub fn month_year(&self) -> MonthYear {
        self.current
    }

    pub fn title(&self) -> String {
        self.current.title()
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selection.selected_date()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.selection.highlighted()
    }

    pub fn prev(&mut self) {
        self.navigate(Direction::Prev);
    }

    pub fn next(&mut self) {
        self.navigate(Direction::Next);
    }

    pub fn navigate(&mut self, direction: Direction) {
        self.selection.hide_highlight();

        let Some(target) = step(self.current, direction) else {
            tracing::warn!("cannot move {:?} from {}: out of range", direction, self.current);
            self.selection.rematch(&self.grid);
            return;
        };

        self.current = target;
        self.refresh();
        tracing::debug!("navigated {:?} to {}", direction, self.current);

        if let Some(observer) = self.observer.as_mut() {
            match direction {
                Direction::Prev => observer.on_prev_requested(),
                Direction::Next => observer.on_next_requested(),
            }
        }
    }

    /// Taps grid slot `index`.
    ///
    /// Empty slots and indices past the grid are ignored. Tapping a day of an
    /// adjacent month moves the display to that month; the observer sees one
    /// `on_day_selected` either way.
    pub fn tap(&mut self, index: usize) -> Option<NaiveDate> {
        let month_offset = self.grid.cell(index)?.month_offset;
        let date = self.selection.select(&self.grid, index)?;

        if month_offset != 0 {
            let (month, year) =
                apply_month_offset(month_offset, self.current.month(), self.current.year());
            match MonthYear::new(month, year) {
                Ok(target) => {
                    self.selection.hide_highlight();
                    self.current = target;
                    self.refresh();
                }
                Err(e) => tracing::warn!("ignoring month offset {}: {}", month_offset, e),
            }
        }

        tracing::debug!("selected {}", date);
        if let Some(observer) = self.observer.as_mut() {
            observer.on_day_selected(date);
        }
        Some(date)
    }

    /// Shows the month containing `date` and selects it.
    pub fn select_date(&mut self, date: NaiveDate) -> Option<NaiveDate> {
        self.jump_to(MonthYear::of(date));
        let index = self.grid.position_of(date)?;
        self.tap(index)
    }

    pub fn jump_to(&mut self, target: MonthYear) {
        if target == self.current {
            return;
        }
        self.selection.hide_highlight();
        self.current = target;
        self.refresh();
    }

    pub fn jump_to_today(&mut self) {
        self.jump_to(MonthYear::of(today()));
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn refresh(&mut self) {
        self.grid = build_grid(self.current, self.adjacent_days);
        self.markers.apply(&mut self.grid);
        self.selection.rematch(&self.grid);
    }
}

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
