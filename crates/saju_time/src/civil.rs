//! Civil (wall-clock) dates and times.
//!
//! Birth data and "today" are given as local calendar values. A
//! [`LocalDateTime`] pins them to a fixed UTC offset so they can be
//! compared against UTC solar-term instants.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{MILLIS_PER_DAY, civil_from_days, days_from_civil};

/// Proleptic Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or `None` if `month` is not 1..=12.
pub const fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

impl Weekday {
    /// 0-based index (Sunday=0 .. Saturday=6).
    pub const fn index(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    /// Korean long name ("월요일" …).
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Sunday => "일요일",
            Self::Monday => "월요일",
            Self::Tuesday => "화요일",
            Self::Wednesday => "수요일",
            Self::Thursday => "목요일",
            Self::Friday => "금요일",
            Self::Saturday => "토요일",
        }
    }
}

/// A validated proleptic Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    /// Construct a date, rejecting impossible dates such as Feb 30.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        match days_in_month(year, month) {
            Some(max) if (1..=max).contains(&day) => Ok(Self { year, month, day }),
            _ => Err(TimeError::InvalidDate { year, month, day }),
        }
    }

    /// Date for a day count since 1970-01-01.
    pub fn from_days_since_epoch(days: i64) -> Self {
        let (year, month, day) = civil_from_days(days);
        Self { year, month, day }
    }

    /// Civil date of a unix-millisecond instant on a clock `utc_offset_minutes`
    /// east of UTC.
    pub fn from_unix_millis(millis: i64, utc_offset_minutes: i32) -> Self {
        let local = millis + i64::from(utc_offset_minutes) * 60_000;
        Self::from_days_since_epoch(local.div_euclid(MILLIS_PER_DAY))
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Days since 1970-01-01.
    pub fn days_since_epoch(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// The date `n` days later (earlier for negative `n`).
    pub fn add_days(&self, n: i64) -> Self {
        Self::from_days_since_epoch(self.days_since_epoch() + n)
    }

    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday.
        ALL_WEEKDAYS[(self.days_since_epoch() + 4).rem_euclid(7) as usize]
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD` (components need not be zero-padded).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s:?}")));
        };
        Self::new(y.trim().parse()?, m.trim().parse()?, d.trim().parse()?)
    }
}

/// A validated wall-clock time with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CivilTime {
    hour: u32,
    minute: u32,
}

impl CivilTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 || minute > 59 {
            return Err(TimeError::InvalidTime { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    /// Local noon.
    pub const NOON: Self = Self {
        hour: 12,
        minute: 0,
    };

    pub const fn hour(&self) -> u32 {
        self.hour
    }

    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Decimal hour of day, `hour + minute / 60`.
    pub fn decimal_hour(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0
    }
}

impl Display for CivilTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A civil date and time at a fixed offset from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalDateTime {
    pub date: CivilDate,
    pub time: CivilTime,
    /// Offset east of Greenwich, in minutes (Korea = +540).
    pub utc_offset_minutes: i32,
}

impl LocalDateTime {
    pub fn new(date: CivilDate, time: CivilTime, utc_offset_minutes: i32) -> Self {
        Self {
            date,
            time,
            utc_offset_minutes,
        }
    }

    /// Milliseconds since 1970-01-01T00:00:00Z of this local instant.
    pub fn to_unix_millis(&self) -> i64 {
        self.date.days_since_epoch() * MILLIS_PER_DAY
            + (self.time.hour as i64 * 60 + self.time.minute as i64
                - self.utc_offset_minutes as i64)
                * 60_000
    }
}
