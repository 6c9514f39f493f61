use std::fmt;

/// Result type for daygrid-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Month value outside 1..=12
    InvalidMonth(u32),

    /// A year/month/day triple that names no calendar day
    InvalidDate(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidMonth(month) => {
                write!(f, "Invalid month: {} (expected 1..=12)", month)
            }
            Error::InvalidDate(msg) => write!(f, "Invalid date: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
