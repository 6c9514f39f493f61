pub mod calendar;
pub mod cell;
pub mod error;
pub mod labels;
pub mod marker;

pub use calendar::*;
pub use cell::*;
pub use error::{Error, Result};
pub use labels::*;
pub use marker::*;
