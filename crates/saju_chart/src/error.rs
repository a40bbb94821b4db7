//! Error types for chart computation.
//!
//! Display texts are the user-facing Korean messages.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_solar::{SolarError, SolarTerm};
use saju_time::TimeError;

/// Errors from parsing birth input and resolving pillars.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Date text lacks a year, month or day component.
    MissingDateComponents,
    /// A date component is not a number.
    MalformedDate(String),
    /// Time text is not `H[:MM]` with hour 0–23 and minute 0–59.
    InvalidTime(String),
    /// Components parse but name no calendar day (e.g. Feb 30).
    InvalidCalendarDate { year: i32, month: u32, day: u32 },
    /// Year outside the supported chart range.
    YearOutOfRange { year: i32, min: i32, max: i32 },
    /// Unrecognized gender text.
    InvalidGender(String),
    /// The table has no entry for a term the resolver needs.
    MissingSolarTerm { year: i32, term: SolarTerm },
    /// No solar-term data around the requested year.
    NoSolarTermData { year: i32 },
    /// Every available boundary is later than the target instant.
    NoPrecedingBoundary { instant_ms: i64 },
    /// Error from time conversion.
    Time(TimeError),
    /// Error from the solar-term table or lunisolar calendar.
    Solar(SolarError),
}

impl ChartError {
    /// Whether the caller must correct the input. Other errors point at
    /// incomplete solar-term data.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingDateComponents
                | Self::MalformedDate(_)
                | Self::InvalidTime(_)
                | Self::InvalidCalendarDate { .. }
                | Self::YearOutOfRange { .. }
                | Self::InvalidGender(_)
                | Self::Time(_)
        )
    }
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDateComponents => write!(f, "생년월일을 정확히 입력해 주세요."),
            Self::MalformedDate(s) => write!(f, "생년월일 형식을 확인해 주세요. ({s})"),
            Self::InvalidTime(s) => write!(f, "시간 형식을 확인해 주세요. ({s})"),
            Self::InvalidCalendarDate { year, month, day } => {
                write!(f, "유효하지 않은 날짜입니다. ({year}-{month:02}-{day:02})")
            }
            Self::YearOutOfRange { min, max, .. } => {
                write!(f, "지원하는 생년월일은 {min}년부터 {max}년까지입니다.")
            }
            Self::InvalidGender(s) => write!(f, "성별을 확인해 주세요. ({s})"),
            Self::MissingSolarTerm { year, term } => {
                write!(f, "{year}년 {} 정보를 찾을 수 없습니다.", term.korean())
            }
            Self::NoSolarTermData { year } => {
                write!(f, "절기 데이터를 찾을 수 없는 날짜입니다. ({year}년)")
            }
            Self::NoPrecedingBoundary { .. } => {
                write!(f, "해당 날짜보다 이전의 절기 경계를 찾을 수 없습니다.")
            }
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Solar(e) => write!(f, "solar error: {e}"),
        }
    }
}

impl Error for ChartError {}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<SolarError> for ChartError {
    fn from(e: SolarError) -> Self {
        Self::Solar(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_classified() {
        assert!(ChartError::MissingDateComponents.is_input_error());
        assert!(
            ChartError::YearOutOfRange {
                year: 1850,
                min: 1900,
                max: 2100
            }
            .is_input_error()
        );
        assert!(!ChartError::NoSolarTermData { year: 1990 }.is_input_error());
        assert!(
            !ChartError::MissingSolarTerm {
                year: 1990,
                term: SolarTerm::StartOfSpring
            }
            .is_input_error()
        );
    }

    #[test]
    fn range_message() {
        let e = ChartError::YearOutOfRange {
            year: 1850,
            min: 1900,
            max: 2100,
        };
        assert_eq!(e.to_string(), "지원하는 생년월일은 1900년부터 2100년까지입니다.");
        let e = ChartError::MissingSolarTerm {
            year: 1990,
            term: SolarTerm::StartOfSpring,
        };
        assert_eq!(e.to_string(), "1990년 입춘 정보를 찾을 수 없습니다.");
    }
}
