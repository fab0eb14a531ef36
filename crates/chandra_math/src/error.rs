//! Error types for lunar value construction and parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from constructing or parsing lunar values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MathError {
    /// Lunar day outside 1..=15.
    LunarDayOutOfRange(u8),
    /// Phase name other than waxing/waning.
    UnknownPhase(String),
}

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LunarDayOutOfRange(day) => {
                write!(f, "lunar day {day} out of range (1-15)")
            }
            Self::UnknownPhase(name) => {
                write!(f, "unknown phase '{name}' (expected waxing or waning)")
            }
        }
    }
}

impl Error for MathError {}
