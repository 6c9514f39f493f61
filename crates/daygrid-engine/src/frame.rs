//! Frame geometry: where header, weekday labels and day cells sit inside a
//! picker of a given size.
//!
//! The picker is eight rows tall: one header row, one weekday-label row and
//! six grid rows, each `height / 8`. Columns are `width / 7`. Labels and grid
//! are pushed down by `gap`; the header sits `padding_top` from the top.

use daygrid_types::{GRID_CELLS, GRID_COLUMNS};
use serde::{Deserialize, Serialize};

pub const DEFAULT_GAP: f32 = 20.0;
pub const DEFAULT_PADDING_TOP: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl FrameRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: the right and bottom edges belong to the neighbour.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Interactive region under a point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameHit {
    Prev,
    Next,
    Cell(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarFrame {
    pub width: f32,
    pub height: f32,
    pub gap: f32,
    pub padding_top: f32,
}

impl CalendarFrame {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            gap: DEFAULT_GAP,
            padding_top: DEFAULT_PADDING_TOP,
        }
    }

    pub fn with_spacing(mut self, gap: f32, padding_top: f32) -> Self {
        self.gap = gap;
        self.padding_top = padding_top;
        self
    }

    pub fn cell_width(&self) -> f32 {
        self.width / 7.0
    }

    pub fn cell_height(&self) -> f32 {
        self.height / 8.0
    }

    pub fn prev_button(&self) -> FrameRect {
        FrameRect::new(
            0.0,
            self.padding_top,
            self.cell_width(),
            self.cell_height(),
        )
    }

    pub fn next_button(&self) -> FrameRect {
        FrameRect::new(
            self.width - self.cell_width(),
            self.padding_top,
            self.cell_width(),
            self.cell_height(),
        )
    }

    pub fn title(&self) -> FrameRect {
        FrameRect::new(
            self.cell_width(),
            self.padding_top,
            self.width - 2.0 * self.cell_width(),
            self.cell_height(),
        )
    }

    /// Weekday label for `column` (0 = Monday).
    pub fn weekday_label(&self, column: usize) -> FrameRect {
        FrameRect::new(
            column as f32 * self.cell_width(),
            self.cell_height() + self.gap,
            self.cell_width(),
            self.cell_height(),
        )
    }

    /// Grid slot `index` in row-major order.
    pub fn cell(&self, index: usize) -> FrameRect {
        let row = index / GRID_COLUMNS;
        let column = index % GRID_COLUMNS;
        FrameRect::new(
            column as f32 * self.cell_width(),
            (row as f32 + 2.0) * self.cell_height() + self.gap,
            self.cell_width(),
            self.cell_height(),
        )
    }

    pub fn hit_test(&self, x: f32, y: f32) -> Option<FrameHit> {
        if self.prev_button().contains(x, y) {
            return Some(FrameHit::Prev);
        }
        if self.next_button().contains(x, y) {
            return Some(FrameHit::Next);
        }
        self.cell_at(x, y).map(FrameHit::Cell)
    }

    /// Grid slot under the point, if any.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<usize> {
        let (cw, ch) = (self.cell_width(), self.cell_height());
        if cw <= 0.0 || ch <= 0.0 || x < 0.0 || x >= self.width {
            return None;
        }

        let top = 2.0 * ch + self.gap;
        if y < top {
            return None;
        }

        let row = ((y - top) / ch) as usize;
        let column = ((x / cw) as usize).min(GRID_COLUMNS - 1);
        let index = row * GRID_COLUMNS + column;
        (index < GRID_CELLS).then_some(index)
    }
}
