//! # daygrid-engine
//!
//! Framework-independent model of a month-grid calendar picker.
//!
//! ```text
//! [ navigation ] --(month, year)--> [ grid ] --GridState--> renderer
//!        ^                                          |
//!        |                                      tap(index)
//!        +------ month offset <-- [ selection ] <---+
//!                                       |
//!                                       v
//!                                [ observer ]
//! ```
//!
//! [`CalendarPicker`] owns all state and drives the flow above. Every piece is
//! also usable on its own: [`compute_grid`] is a pure function of (month, year).

pub mod frame;
pub mod grid;
pub mod markers;
pub mod navigation;
pub mod observer;
pub mod picker;
pub mod selection;

pub use daygrid_types::{Error, Result};
pub use frame::{CalendarFrame, FrameRect};
pub use grid::{AdjacentDays, build_grid, compute_grid};
pub use markers::MarkerSet;
pub use navigation::{advance, apply_month_offset, step};
pub use observer::{CalendarObserver, ChannelObserver, PickerEvent};
pub use picker::{CalendarPicker, PickerOptions};
pub use selection::SelectionState;
