//! Julian Day ↔ Gregorian calendar conversions.
//!
//! Calendar → JD follows Meeus, *Astronomical Algorithms* ch. 7. JD →
//! calendar is the inverse algorithm with the Gregorian switch at
//! JD 2299161 (1582-Oct-15). Integer day counts relative to the Unix
//! epoch use the proleptic Gregorian calendar.

/// Julian Date of J2000.0 (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-Jan-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Milliseconds per day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Convert a Gregorian calendar date with fractional day to a Julian Date.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (mut y, mut m) = (year as f64, month as f64);
    if month <= 2 {
        y -= 1.0;
        m += 12.0;
    }
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Convert a Julian Date to `(year, month, day_with_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let a = if z >= 2_299_161.0 {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    } else {
        z
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// Julian Date of a Unix-epoch millisecond count.
pub fn unix_millis_to_jd(millis: i64) -> f64 {
    millis as f64 / MILLIS_PER_DAY as f64 + UNIX_EPOCH_JD
}

/// Unix-epoch milliseconds of a Julian Date, rounded to the nearest millisecond.
pub fn jd_to_unix_millis(jd: f64) -> i64 {
    ((jd - UNIX_EPOCH_JD) * MILLIS_PER_DAY as f64).round() as i64
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
///
/// `month` must be in 1..=12. A day past the month's end carries into the
/// following month.
pub fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year as i64 - 1 } else { year as i64 };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let m = month as i64;
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Proleptic Gregorian `(year, month, day)` for a day count since 1970-01-01.
pub fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year as i32, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_calendar() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn unix_epoch_calendar() {
        let jd = calendar_to_jd(1970, 1, 1.0);
        assert!((jd - UNIX_EPOCH_JD).abs() < 1e-9);
    }

    #[test]
    fn jd_roundtrip_fractional() {
        let jd = calendar_to_jd(1990, 5, 15.25);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (1990, 5));
        assert!((d - 15.25).abs() < 1e-6);
    }

    #[test]
    fn february_dates_shift_year() {
        let (y, m, d) = jd_to_calendar(calendar_to_jd(1900, 2, 28.0));
        assert_eq!((y, m, d.floor() as u32), (1900, 2, 28));
    }

    #[test]
    fn days_from_civil_epoch() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(days_from_civil(2000, 3, 1), 11_017);
        assert_eq!(days_from_civil(1969, 12, 31), -1);
    }

    #[test]
    fn civil_days_roundtrip() {
        for days in [-25_567_i64, -1, 0, 1, 11_016, 11_017, 47_482] {
            let (y, m, d) = civil_from_days(days);
            assert_eq!(days_from_civil(y, m, d), days);
        }
    }

    #[test]
    fn unix_millis_jd_roundtrip() {
        let ms = 642_749_400_000_i64;
        assert_eq!(jd_to_unix_millis(unix_millis_to_jd(ms)), ms);
    }
}
