//! Errors surfaced by the command-line front end.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chandra_calendar::CalendarError;
use chandra_dial::{ConfigError, DialError};
use chandra_math::MathError;

#[derive(Debug)]
#[non_exhaustive]
pub enum CliError {
    /// A date argument was not `YYYY-MM-DD`.
    InvalidDate(String),
    Math(MathError),
    Calendar(CalendarError),
    Config(ConfigError),
    Dial(DialError),
    /// A replay line could not be parsed.
    Replay { line: usize, message: String },
    Io(std::io::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "invalid date {s:?}, expected YYYY-MM-DD"),
            Self::Math(e) => write!(f, "{e}"),
            Self::Calendar(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
            Self::Dial(e) => write!(f, "{e}"),
            Self::Replay { line, message } => write!(f, "line {line}: {message}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Math(e) => Some(e),
            Self::Calendar(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Dial(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::InvalidDate(_) | Self::Replay { .. } => None,
        }
    }
}

impl From<MathError> for CliError {
    fn from(e: MathError) -> Self {
        Self::Math(e)
    }
}

impl From<CalendarError> for CliError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<DialError> for CliError {
    fn from(e: DialError) -> Self {
        Self::Dial(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
