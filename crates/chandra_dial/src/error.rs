//! Error types for the dial controller and its configuration.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chandra_calendar::CalendarError;
use chandra_math::MathError;
use chrono::NaiveDate;

/// Errors from loading or validating a [`DialConfig`](crate::DialConfig).
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// TOML could not be parsed into a config.
    Parse(String),
    /// A field holds an unusable value.
    Invalid(&'static str),
    /// I/O error reading the config file.
    Io(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

/// Errors from handling a dial event.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DialError {
    /// Invalid lunar day or phase.
    Math(MathError),
    /// Moving the selected date left chrono's representable range.
    DateOverflow { from: NaiveDate, days: i64 },
    /// Month navigation or calendar selection failed.
    Calendar(CalendarError),
    /// Configuration rejected.
    Config(ConfigError),
}

impl Display for DialError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Math(e) => write!(f, "{e}"),
            Self::DateOverflow { from, days } => {
                write!(f, "date overflow moving {from} by {days} days")
            }
            Self::Calendar(e) => write!(f, "calendar error: {e}"),
            Self::Config(e) => write!(f, "{e}"),
        }
    }
}

impl Error for DialError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Math(e) => Some(e),
            Self::Calendar(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::DateOverflow { .. } => None,
        }
    }
}

impl From<MathError> for DialError {
    fn from(e: MathError) -> Self {
        Self::Math(e)
    }
}

impl From<CalendarError> for DialError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}

impl From<ConfigError> for DialError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
