//! Error types for birth-moment validation and parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from birth-moment validation or parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field is outside its accepted bounds.
    InvalidTimestamp(&'static str),
    /// A textual birth moment could not be parsed.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimestamp(msg) => write!(f, "invalid timestamp: {msg}"),
            Self::Parse(msg) => write!(f, "birth moment parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}

impl From<std::num::ParseIntError> for TimeError {
    fn from(e: std::num::ParseIntError) -> Self {
        Self::Parse(e.to_string())
    }
}
