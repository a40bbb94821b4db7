//! Korean/Chinese lunisolar calendar dates.
//!
//! A span ("annus") runs from the month containing one December solstice
//! (month 11) to the month containing the next. Months begin on the civil
//! day of a new moon, reckoned at UTC+8. When thirteen lunations fall in a
//! span, the first month that holds no principal term (solar longitude a
//! multiple of 30°) is a leap month and repeats the previous number.
//! Lunar years begin at month 1, so months 11 and 12 at the head of a span
//! belong to the previous lunar year.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use saju_time::{CivilDate, MILLIS_PER_DAY, UNIX_EPOCH_JD, days_from_civil, jd_to_unix_millis};

use crate::error::SolarError;
use crate::generator::find_longitude_crossing_jd;
use crate::new_moon::new_moon_jd_ut;

/// UTC offset at which lunisolar month boundaries are reckoned (China
/// Standard Time).
pub const LUNISOLAR_UTC_OFFSET_MINUTES: i32 = 480;

/// Mean spacing of principal terms, days (tropical year / 12).
const PRINCIPAL_TERM_SPACING_DAYS: f64 = 30.436875;

/// Lunations per tropical year.
const LUNATIONS_PER_YEAR: f64 = 12.3685;

/// New moons fetched per span; covers the 14 month starts plus margin.
const NEW_MOONS_PER_SPAN: i64 = 17;

/// A lunar month number with its leap flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunarMonth {
    pub number: u32,
    pub leap: bool,
}

impl LunarMonth {
    pub const fn common(number: u32) -> Self {
        Self {
            number,
            leap: false,
        }
    }

    pub const fn leap(number: u32) -> Self {
        Self { number, leap: true }
    }

    /// Korean label, `"4월"` or `"윤4월"`.
    pub fn label(&self) -> String {
        if self.leap {
            format!("윤{}월", self.number)
        } else {
            format!("{}월", self.number)
        }
    }
}

/// First civil day of a lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMonthStart {
    pub month: LunarMonth,
    pub date: CivilDate,
}

/// Months of one solstice-to-solstice span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarYearSpan {
    annus: i32,
    /// Month starts, ending with the next span's month 11, which marks
    /// the day after this span's last day.
    months: Vec<LunarMonthStart>,
}

/// Civil day (days since 1970-01-01) at UTC+8 of a UT Julian Date.
fn lunisolar_day(jd_ut: f64) -> i64 {
    let offset_ms = i64::from(LUNISOLAR_UTC_OFFSET_MINUTES) * 60_000;
    (jd_to_unix_millis(jd_ut) + offset_ms).div_euclid(MILLIS_PER_DAY)
}

impl LunarYearSpan {
    /// Span whose closing December solstice falls in `annus`.
    pub fn new(annus: i32) -> Result<Self, SolarError> {
        // Principal terms from the opening solstice (270°) to the closing one.
        let seed = days_from_civil(annus - 1, 12, 22) as f64 + UNIX_EPOCH_JD;
        let principal_terms: Vec<i64> = (0..13i32)
            .map(|k| {
                let target = f64::from((270 + 30 * k) % 360);
                let guess = seed + f64::from(k) * PRINCIPAL_TERM_SPACING_DAYS;
                lunisolar_day(find_longitude_crossing_jd(target, guess).jd_ut)
            })
            .collect();
        let solstice = principal_terms[0];
        let next_solstice = principal_terms[12];

        let k0 =
            ((f64::from(annus - 1 - 2000) + 11.0 / 12.0) * LUNATIONS_PER_YEAR).floor() as i64 - 2;
        let new_moons: Vec<i64> = (k0..k0 + NEW_MOONS_PER_SPAN)
            .map(|k| lunisolar_day(new_moon_jd_ut(k)))
            .collect();

        let m11 = new_moons.partition_point(|&d| d <= solstice).checked_sub(1);
        let m11_next = new_moons.partition_point(|&d| d <= next_solstice).checked_sub(1);
        let (Some(m11), Some(m11_next)) = (m11, m11_next) else {
            return Err(SolarError::LunationCount { annus, count: 0 });
        };
        let count = m11_next.saturating_sub(m11);
        let mut needs_leap = match count {
            12 => false,
            13 => true,
            _ => return Err(SolarError::LunationCount { annus, count }),
        };

        let mut months = Vec::with_capacity(count + 1);
        let mut number = 10;
        let mut term = 0;
        for i in m11..=m11_next {
            let date = CivilDate::from_days_since_epoch(new_moons[i]);
            let no_principal_term = match (new_moons.get(i + 1), principal_terms.get(term)) {
                (Some(&next_start), Some(&term_day)) => next_start <= term_day,
                _ => false,
            };
            if needs_leap && no_principal_term {
                months.push(LunarMonthStart {
                    month: LunarMonth::leap(number),
                    date,
                });
                needs_leap = false;
                continue;
            }
            number = number % 12 + 1;
            months.push(LunarMonthStart {
                month: LunarMonth::common(number),
                date,
            });
            term += 1;
        }
        if needs_leap {
            return Err(SolarError::MissingLeapMonth { annus });
        }

        Ok(Self { annus, months })
    }

    /// Span containing `date`.
    pub fn containing(date: CivilDate) -> Result<Self, SolarError> {
        let mut annus = date.year();
        loop {
            let span = Self::new(annus)?;
            if date < span.start() {
                annus -= 1;
            } else if date >= span.end() {
                annus += 1;
            } else {
                return Ok(span);
            }
        }
    }

    pub fn annus(&self) -> i32 {
        self.annus
    }

    /// Month starts of this span, the last being the next span's month 11.
    pub fn months(&self) -> &[LunarMonthStart] {
        &self.months
    }

    /// First day of the span.
    pub fn start(&self) -> CivilDate {
        self.months[0].date
    }

    /// First day after the span.
    pub fn end(&self) -> CivilDate {
        self.months[self.months.len() - 1].date
    }

    /// Lunar date of `date`, if it lies in this span.
    pub fn lunar_date(&self, date: CivilDate) -> Option<LunarDate> {
        if date < self.start() || date >= self.end() {
            return None;
        }
        let current = self.months.iter().take_while(|m| m.date <= date).last()?;
        let year = if current.month.number >= 11 {
            self.annus - 1
        } else {
            self.annus
        };
        let day = (date.days_since_epoch() - current.date.days_since_epoch() + 1) as u32;
        Some(LunarDate {
            year,
            month: current.month,
            day,
        })
    }
}

/// A lunisolar calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunarDate {
    /// Related Gregorian year of lunar month 1.
    pub year: i32,
    pub month: LunarMonth,
    pub day: u32,
}

impl LunarDate {
    /// Lunisolar date of a civil (Gregorian) date.
    pub fn from_civil(date: CivilDate) -> Result<Self, SolarError> {
        let span = LunarYearSpan::containing(date)?;
        span.lunar_date(date).ok_or(SolarError::LunationCount {
            annus: span.annus,
            count: span.months.len(),
        })
    }

    /// `"21일"`.
    pub fn day_label(&self) -> String {
        format!("{}일", self.day)
    }

    /// `"4월 21일"`, `"윤4월 1일"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.month.label(), self.day_label())
    }
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}년 {}", self.year, self.label())
    }
}
