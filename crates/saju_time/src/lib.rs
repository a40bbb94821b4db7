//! Calendar and time-scale helpers for the saju engine.
//!
//! This crate provides:
//! - Julian Day ↔ Gregorian calendar conversions
//! - `UtcTime`, a millisecond-precision UTC instant
//! - Civil (wall-clock) dates and times at a fixed UTC offset
//! - The piecewise ΔT (TT − UT) model used by the solar-term generator

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod utc_time;

pub use civil::{CivilDate, CivilTime, LocalDateTime, Weekday};
pub use delta_t::{delta_t_seconds, delta_t_seconds_from_jd};
pub use error::TimeError;
pub use julian::{
    J2000_JD, MILLIS_PER_DAY, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, civil_from_days,
    days_from_civil, jd_to_calendar, jd_to_unix_millis, unix_millis_to_jd,
};
pub use utc_time::UtcTime;
