//! Error types for solar-term and lunisolar computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_time::TimeError;

/// Errors from the solar-term table and the lunisolar calendar.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SolarError {
    /// Requested year is not covered by the table.
    YearOutOfRange { year: i32, start: i32, end: i32 },
    /// Table generation range is empty or reversed.
    InvalidRange { start: i32, end: i32 },
    /// Table file could not be read.
    Io(String),
    /// Table JSON could not be parsed or serialized.
    Json(String),
    /// Table content violates an invariant (term count, order, monotonicity).
    MalformedTable(String),
    /// Lunation count between consecutive winter solstices was not 12 or 13.
    LunationCount { annus: i32, count: usize },
    /// Thirteen lunations but every month held a principal term.
    MissingLeapMonth { annus: i32 },
    /// Error from time conversion.
    Time(TimeError),
}

impl Display for SolarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YearOutOfRange { year, start, end } => {
                write!(f, "year {year} outside solar-term table range {start}..={end}")
            }
            Self::InvalidRange { start, end } => {
                write!(f, "invalid table range {start}..={end}")
            }
            Self::Io(msg) => write!(f, "solar-term table io: {msg}"),
            Self::Json(msg) => write!(f, "solar-term table json: {msg}"),
            Self::MalformedTable(msg) => write!(f, "malformed solar-term table: {msg}"),
            Self::LunationCount { annus, count } => {
                write!(f, "{count} lunations between winter solstices of annus {annus}")
            }
            Self::MissingLeapMonth { annus } => {
                write!(f, "no month without a principal term in annus {annus}")
            }
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for SolarError {}

impl From<TimeError> for SolarError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<std::io::Error> for SolarError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for SolarError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
