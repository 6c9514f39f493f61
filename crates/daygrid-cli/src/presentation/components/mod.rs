mod calendar;

pub use calendar::{CalendarAction, CalendarComponent};
