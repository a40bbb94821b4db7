//! Birth input parsing.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use saju_time::{CivilDate, CivilTime};

use crate::error::ChartError;

/// Gender of the chart subject; only selects interpretation tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Lowercase English key, `"male"` / `"female"`.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Male => "남성",
            Self::Female => "여성",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Gender {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "남" | "남성" => Ok(Self::Male),
            "female" | "f" | "여" | "여성" => Ok(Self::Female),
            _ => Err(ChartError::InvalidGender(s.to_string())),
        }
    }
}

/// Parse `YYYY-MM-DD` (components need not be zero-padded).
pub fn parse_birth_date(s: &str) -> Result<CivilDate, ChartError> {
    let mut parts = s.trim().split('-').map(str::trim);
    let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ChartError::MissingDateComponents);
    };
    if y.is_empty() || m.is_empty() || d.is_empty() {
        return Err(ChartError::MissingDateComponents);
    }

    let malformed = |_| ChartError::MalformedDate(s.to_string());
    let year: i32 = y.parse().map_err(malformed)?;
    let month: u32 = m.parse().map_err(malformed)?;
    let day: u32 = d.parse().map_err(malformed)?;

    CivilDate::new(year, month, day).map_err(|_| ChartError::InvalidCalendarDate { year, month, day })
}

/// Parse `H`, `HH`, `H:MM` or `HH:MM`. Empty text, or text with no hour
/// before the colon, means the time is unknown.
pub fn parse_birth_time(s: &str) -> Result<Option<CivilTime>, ChartError> {
    let s = s.trim();
    let (h, m) = s.split_once(':').unwrap_or((s, ""));
    let h = h.trim();
    if h.is_empty() {
        return Ok(None);
    }

    let invalid = || ChartError::InvalidTime(s.to_string());
    let hour: u32 = h.parse().map_err(|_| invalid())?;
    let minute: u32 = match m.trim() {
        "" => 0,
        m => m.parse().map_err(|_| invalid())?,
    };
    CivilTime::new(hour, minute).map(Some).map_err(|_| invalid())
}

/// Validated birth input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthInput {
    pub date: CivilDate,
    pub time: Option<CivilTime>,
    pub gender: Gender,
}

impl BirthInput {
    pub fn new(date: CivilDate, time: Option<CivilTime>, gender: Gender) -> Self {
        Self { date, time, gender }
    }

    /// Parse date and time text.
    pub fn parse(date: &str, time: &str, gender: Gender) -> Result<Self, ChartError> {
        Ok(Self {
            date: parse_birth_date(date)?,
            time: parse_birth_time(time)?,
            gender,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_forms() {
        let d = parse_birth_date("1990-05-15").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (1990, 5, 15));
        let d = parse_birth_date(" 1990-5-1 ").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (1990, 5, 1));
    }

    #[test]
    fn date_errors() {
        assert_eq!(parse_birth_date("1990-05"), Err(ChartError::MissingDateComponents));
        assert_eq!(parse_birth_date("1990--15"), Err(ChartError::MissingDateComponents));
        assert_eq!(parse_birth_date(""), Err(ChartError::MissingDateComponents));
        assert!(matches!(parse_birth_date("19x0-05-15"), Err(ChartError::MalformedDate(_))));
        assert_eq!(
            parse_birth_date("2023-02-29"),
            Err(ChartError::InvalidCalendarDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert!(parse_birth_date("2024-02-29").is_ok());
    }

    #[test]
    fn time_forms() {
        assert_eq!(parse_birth_time("").unwrap(), None);
        assert_eq!(parse_birth_time("  ").unwrap(), None);
        assert_eq!(parse_birth_time(":30").unwrap(), None);
        let t = parse_birth_time("14:30").unwrap().unwrap();
        assert_eq!((t.hour(), t.minute()), (14, 30));
        let t = parse_birth_time("7").unwrap().unwrap();
        assert_eq!((t.hour(), t.minute()), (7, 0));
        let t = parse_birth_time("0:05").unwrap().unwrap();
        assert_eq!((t.hour(), t.minute()), (0, 5));
    }

    #[test]
    fn time_errors() {
        for bad in ["24:00", "12:60", "ab:10", "12:xx", "-1:00"] {
            assert!(
                matches!(parse_birth_time(bad), Err(ChartError::InvalidTime(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn gender_text() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("F".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("여성".parse::<Gender>().unwrap(), Gender::Female);
        assert!("x".parse::<Gender>().is_err());
        assert_eq!(Gender::Male.korean(), "남성");
    }
}
