//! UTC calendar date/time with millisecond precision.
//!
//! `UtcTime` is the canonical instant representation used by the solar-term
//! table: every boundary is stored, compared, and serialized with whole
//! milliseconds so that lookups are exact integer comparisons.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{MILLIS_PER_DAY, civil_from_days, days_from_civil, jd_to_calendar, unix_millis_to_jd};

/// UTC calendar instant with millisecond precision.
///
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

impl UtcTime {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// Convert a Julian Date (UT) to a UTC instant.
    ///
    /// The fractional day is expanded to hours, minutes and seconds by
    /// successive flooring; the leftover fraction of a second is rounded to
    /// the nearest millisecond. A rounded value of 1000 ms carries into the
    /// next second.
    pub fn from_jd_ut(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor();
        let hours = (day_frac - day) * 24.0;
        let hour = hours.floor();
        let minutes = (hours - hour) * 60.0;
        let minute = minutes.floor();
        let seconds = (minutes - minute) * 60.0;
        let second = seconds.floor();
        let millisecond = ((seconds - second) * 1000.0).round();

        let millis = days_from_civil(year, month, day as u32) * MILLIS_PER_DAY
            + hour as i64 * 3_600_000
            + minute as i64 * 60_000
            + second as i64 * 1000
            + millisecond as i64;
        Self::from_unix_millis(millis)
    }

    /// Build from milliseconds since 1970-01-01T00:00:00Z.
    pub fn from_unix_millis(millis: i64) -> Self {
        let days = millis.div_euclid(MILLIS_PER_DAY);
        let rem = millis.rem_euclid(MILLIS_PER_DAY);
        let (year, month, day) = civil_from_days(days);
        Self {
            year,
            month,
            day,
            hour: (rem / 3_600_000) as u32,
            minute: (rem / 60_000 % 60) as u32,
            second: (rem / 1000 % 60) as u32,
            millisecond: (rem % 1000) as u32,
        }
    }

    /// Milliseconds since 1970-01-01T00:00:00Z.
    pub fn to_unix_millis(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day) * MILLIS_PER_DAY
            + self.hour as i64 * 3_600_000
            + self.minute as i64 * 60_000
            + self.second as i64 * 1000
            + self.millisecond as i64
    }

    /// Julian Date (UT) of this instant.
    pub fn to_jd_ut(&self) -> f64 {
        unix_millis_to_jd(self.to_unix_millis())
    }
}

impl Display for UtcTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.millisecond
        )
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDTHH:MM:SS[.fff]Z`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || TimeError::Parse(format!("expected YYYY-MM-DDTHH:MM:SS[.fff]Z, got {s:?}"));
        let body = s.trim().strip_suffix('Z').ok_or_else(bad)?;
        let (date, time) = body.split_once('T').ok_or_else(bad)?;

        let mut date_parts = date.splitn(3, '-');
        let year: i32 = date_parts.next().ok_or_else(bad)?.parse()?;
        let month: u32 = date_parts.next().ok_or_else(bad)?.parse()?;
        let day: u32 = date_parts.next().ok_or_else(bad)?.parse()?;

        let (hms, frac) = match time.split_once('.') {
            Some((hms, frac)) => (hms, Some(frac)),
            None => (time, None),
        };
        let mut time_parts = hms.splitn(3, ':');
        let hour: u32 = time_parts.next().ok_or_else(bad)?.parse()?;
        let minute: u32 = time_parts.next().ok_or_else(bad)?.parse()?;
        let second: u32 = time_parts.next().ok_or_else(bad)?.parse()?;
        let millisecond = match frac {
            Some(digits) if !digits.is_empty() && digits.len() <= 3 => {
                let value: u32 = digits.parse()?;
                value * 10u32.pow(3 - digits.len() as u32)
            }
            Some(_) => return Err(bad()),
            None => 0,
        };

        let max_day = crate::civil::days_in_month(year, month).ok_or_else(bad)?;
        if day == 0 || day > max_day || hour > 23 || minute > 59 || second > 59 {
            return Err(bad());
        }
        Ok(Self::new(year, month, day, hour, minute, second, millisecond))
    }
}

impl From<UtcTime> for String {
    fn from(t: UtcTime) -> Self {
        t.to_string()
    }
}

impl TryFrom<String> for UtcTime {
    type Error = TimeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
