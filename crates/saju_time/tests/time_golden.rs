//! Integration tests for calendar and instant conversions.
//!
//! Pure-math tests against published Julian Day values (Meeus ch. 7).

use saju_time::{
    CivilDate, J2000_JD, UNIX_EPOCH_JD, UtcTime, calendar_to_jd, civil_from_days,
    days_from_civil, jd_to_calendar, jd_to_unix_millis, unix_millis_to_jd,
};

// ---------------------------------------------------------------------------
// Julian Day
// ---------------------------------------------------------------------------

#[test]
fn meeus_examples() {
    assert!((calendar_to_jd(2000, 1, 1.5) - J2000_JD).abs() < 1e-9);
    assert!((calendar_to_jd(1957, 10, 4.81) - 2_436_116.31).abs() < 1e-6);
    assert!((calendar_to_jd(1987, 1, 27.0) - 2_446_822.5).abs() < 1e-9);
    assert!((calendar_to_jd(1988, 6, 19.5) - 2_447_332.0).abs() < 1e-9);
}

#[test]
fn jd_back_to_calendar() {
    let (y, m, d) = jd_to_calendar(2_436_116.31);
    assert_eq!((y, m), (1957, 10));
    assert!((d - 4.81).abs() < 1e-6);
}

#[test]
fn unix_epoch() {
    assert_eq!(unix_millis_to_jd(0), UNIX_EPOCH_JD);
    assert_eq!(jd_to_unix_millis(UNIX_EPOCH_JD), 0);
    assert_eq!(jd_to_unix_millis(UNIX_EPOCH_JD + 1.0), 86_400_000);
}

// ---------------------------------------------------------------------------
// Day counts
// ---------------------------------------------------------------------------

#[test]
fn day_counts() {
    assert_eq!(days_from_civil(1970, 1, 1), 0);
    assert_eq!(days_from_civil(2000, 1, 1), 10_957);
    assert_eq!(days_from_civil(1969, 12, 31), -1);
    assert_eq!(civil_from_days(10_957), (2000, 1, 1));
    assert_eq!(civil_from_days(-25_567), (1900, 1, 1));
}

#[test]
fn civil_date_follows_day_count() {
    let mut d = CivilDate::new(1899, 12, 25).unwrap();
    for _ in 0..(365 * 202) {
        let next = d.add_days(1);
        assert_eq!(next.days_since_epoch(), d.days_since_epoch() + 1);
        d = next;
    }
    assert_eq!(d.year(), 2101);
}

// ---------------------------------------------------------------------------
// UtcTime
// ---------------------------------------------------------------------------

#[test]
fn utc_from_jd_rounds_to_millis() {
    let t = UtcTime::from_jd_ut(J2000_JD + 0.5 / 86_400_000.0 * 0.999);
    assert_eq!(t.to_string(), "2000-01-01T12:00:00.000Z");
    let t = UtcTime::from_jd_ut(J2000_JD - 1.0 / 86_400.0);
    assert_eq!(t.to_string(), "2000-01-01T11:59:59.000Z");
}

#[test]
fn utc_text_and_millis_agree() {
    let t: UtcTime = "2024-02-04T08:20:11.839Z".parse().unwrap();
    assert_eq!(UtcTime::from_unix_millis(t.to_unix_millis()), t);
    assert_eq!(
        serde_json::to_string(&t).unwrap(),
        "\"2024-02-04T08:20:11.839Z\""
    );
}
