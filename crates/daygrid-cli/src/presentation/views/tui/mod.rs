//! Ratatui views. Geometry comes from [`CalendarFrame`], snapped to terminal
//! cells; mouse hits are resolved against the same snapped rects.

mod calendar;
mod status_bar;

pub use calendar::CalendarView;
pub use status_bar::StatusBarView;

use daygrid_engine::frame::FrameHit;
use daygrid_engine::{CalendarFrame, FrameRect};
use daygrid_types::GRID_CELLS;
use ratatui::layout::{Position, Rect};

/// Frame covering `area`, one terminal row per text line, no extra spacing.
pub fn frame_for(area: Rect) -> CalendarFrame {
    CalendarFrame::new(area.width as f32, area.height as f32).with_spacing(0.0, 0.0)
}

/// Rounds a frame rect (relative to `area`) to terminal cells.
pub fn snap(rect: FrameRect, area: Rect) -> Rect {
    let x0 = rect.x.round().max(0.0) as u16;
    let y0 = rect.y.round().max(0.0) as u16;
    let x1 = (rect.x + rect.width).round().max(0.0) as u16;
    let y1 = (rect.y + rect.height).round().max(0.0) as u16;

    Rect::new(
        area.x.saturating_add(x0),
        area.y.saturating_add(y0),
        x1.saturating_sub(x0),
        y1.saturating_sub(y0),
    )
    .intersection(area)
}

/// Interactive region drawn at terminal cell (`column`, `row`) of `area`.
///
/// Day cells are rendered last, so they win over anything snapped beneath them.
pub fn hit_at(area: Rect, column: u16, row: u16) -> Option<FrameHit> {
    let frame = frame_for(area);
    let point = Position::new(column, row);

    if let Some(index) = (0..GRID_CELLS)
        .rev()
        .find(|&index| snap(frame.cell(index), area).contains(point))
    {
        return Some(FrameHit::Cell(index));
    }
    if snap(frame.next_button(), area).contains(point) {
        return Some(FrameHit::Next);
    }
    if snap(frame.prev_button(), area).contains(point) {
        return Some(FrameHit::Prev);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapped_cells_tile_the_grid() {
        let area = Rect::new(3, 2, 44, 17);
        let frame = frame_for(area);

        let row: Vec<Rect> = (0..7).map(|i| snap(frame.cell(i), area)).collect();
        assert_eq!(row[0].x, 3);
        for pair in row.windows(2) {
            assert_eq!(pair[0].x + pair[0].width, pair[1].x);
        }
        assert_eq!(row[6].x + row[6].width, area.x + area.width);
    }

    #[test]
    fn test_label_row_is_not_a_day() {
        // height 18: cell height 2.25, labels snap to rows 2..5, first grid row to 5..7
        let area = Rect::new(0, 0, 70, 18);
        assert_eq!(hit_at(area, 1, 4), None);
        assert_eq!(hit_at(area, 1, 5), Some(FrameHit::Cell(0)));
    }

    #[test]
    fn test_hits_follow_drawn_rects_at_any_height() {
        for height in 8..=40 {
            let area = Rect::new(2, 1, 70, height);
            let frame = frame_for(area);

            for column in 0..7 {
                let label = snap(frame.weekday_label(column), area);
                for row in label.y..label.y + label.height {
                    assert_eq!(hit_at(area, label.x, row), None, "height {}", height);
                }
            }
            for index in 0..GRID_CELLS {
                let cell = snap(frame.cell(index), area);
                for row in cell.y..cell.y + cell.height {
                    assert_eq!(
                        hit_at(area, cell.x, row),
                        Some(FrameHit::Cell(index)),
                        "height {} index {}",
                        height,
                        index
                    );
                }
            }
            let prev = snap(frame.prev_button(), area);
            if !prev.is_empty() {
                assert_eq!(hit_at(area, prev.x, prev.y), Some(FrameHit::Prev));
            }
        }
    }
}
