//! Error types for calendar and time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date/time construction or ISO-8601 parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside 1..=12 or day outside the month's length.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour outside 0..=23 or minute outside 0..=59.
    InvalidTime { hour: u32, minute: u32 },
    /// Text could not be parsed as a date, time, or instant.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidTime { hour, minute } => {
                write!(f, "invalid clock time: {hour:02}:{minute:02}")
            }
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}

impl From<std::num::ParseIntError> for TimeError {
    fn from(e: std::num::ParseIntError) -> Self {
        Self::Parse(e.to_string())
    }
}
