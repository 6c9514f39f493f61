pub mod month;
pub mod summary;
pub mod tui;

pub use month::MonthView;
