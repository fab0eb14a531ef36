//! Error types for month navigation and grid construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar month construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Month outside 1..=12.
    InvalidMonth(u32),
    /// Day outside the viewed month.
    InvalidDay { year: i32, month: u32, day: u32 },
    /// Year outside the supported calendar range.
    YearOutOfRange(i32),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(m) => write!(f, "invalid month {m} (1-12)"),
            Self::InvalidDay { year, month, day } => {
                write!(f, "invalid day {day} for {year:04}-{month:02}")
            }
            Self::YearOutOfRange(y) => write!(f, "year {y} outside supported range"),
        }
    }
}

impl Error for CalendarError {}
