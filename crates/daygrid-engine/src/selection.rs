use chrono::NaiveDate;
use daygrid_types::GridState;

/// Selected date plus the grid cell currently showing it.
///
/// The stored date and the highlight are separate: navigation hides the
/// highlight but keeps the date, and [`SelectionState::rematch`] restores the
/// highlight when the new grid contains that day again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_date: Option<NaiveDate>,
    highlighted: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Stores the date of cell `index` and highlights it.
    ///
    /// Returns the selected date, or `None` (and leaves state untouched) when
    /// the slot is empty or out of range.
    pub fn select(&mut self, grid: &GridState, index: usize) -> Option<NaiveDate> {
        let date = grid.cell(index)?.date?;
        self.selected_date = Some(date);
        self.highlighted = Some(index);
        Some(date)
    }

    pub fn hide_highlight(&mut self) {
        self.highlighted = None;
    }

    /// Re-derives the highlight against a freshly computed grid.
    pub fn rematch(&mut self, grid: &GridState) -> Option<usize> {
        self.highlighted = self.selected_date.and_then(|date| grid.position_of(date));
        self.highlighted
    }

    pub fn clear(&mut self) {
        self.selected_date = None;
        self.highlighted = None;
    }
}
