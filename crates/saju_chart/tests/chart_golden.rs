//! Golden tests for four-pillars chart computation.
//!
//! Uses the global solar-term table and the default (KST) config unless a
//! test says otherwise.

use saju_base::{Branch, Element, Pillar, Stem};
use saju_chart::{
    ChartConfig, ChartError, Gender, compute_four_pillars, compute_four_pillars_with,
    daily_reference_pillar, parse_birth_date,
};
use saju_solar::global_table;

fn names(date: &str, time: &str) -> Vec<String> {
    let r = compute_four_pillars(date, time, Gender::Male).unwrap();
    r.pillars.solid().map(Pillar::name).collect()
}

// ---------------------------------------------------------------------------
// Reference chart: 1990-05-15 14:30
// ---------------------------------------------------------------------------

#[test]
fn reference_chart_pillars() {
    assert_eq!(names("1990-05-15", "14:30"), ["경오", "신사", "경진", "계미"]);
}

#[test]
fn reference_chart_summary_with_time() {
    let r = compute_four_pillars("1990-05-15", "14:30", Gender::Male).unwrap();
    let counts = &r.summary.element_counts;
    assert_eq!(counts.get(Element::Wood), 0);
    assert_eq!(counts.get(Element::Fire), 2);
    assert_eq!(counts.get(Element::Earth), 2);
    assert_eq!(counts.get(Element::Metal), 3);
    assert_eq!(counts.get(Element::Water), 1);
    assert_eq!(counts.total(), 8);
    assert_eq!((r.summary.polarity_counts.yang, r.summary.polarity_counts.yin), (4, 4));
    assert_eq!(r.summary.strongest.element, Element::Metal);
    assert_eq!(r.summary.weakest.element, Element::Wood);
}

#[test]
fn reference_chart_summary_without_time() {
    let r = compute_four_pillars("1990-05-15", "", Gender::Male).unwrap();
    assert!(r.pillars.hour.is_none());
    let counts = &r.summary.element_counts;
    assert_eq!(counts.total(), 6);
    assert_eq!(counts.get(Element::Earth), 1);
    assert_eq!(counts.get(Element::Water), 0);
    assert_eq!((r.summary.polarity_counts.yang, r.summary.polarity_counts.yin), (4, 2));
    assert_eq!(r.summary.weakest.element, Element::Wood);
}

#[test]
fn reference_chart_meta() {
    let r = compute_four_pillars("1990-05-15", "14:30", Gender::Female).unwrap();
    assert_eq!(r.meta.solar_date_label, "1990년 5월 15일 (화요일)");
    assert_eq!(r.meta.lunar_date_label, "4월 21일");
    assert_eq!(r.meta.lunar_year, 1990);
    assert_eq!(r.meta.western_zodiac, "황소자리");
    assert!(r.meta.has_time);
    assert_eq!(r.meta.time_label, "14:30");
    assert_eq!(r.meta.gender_label, "여성");

    let month = &r.pillars.month;
    assert_eq!(month.lunar_month, Some(4));
    assert_eq!(month.leap_month, Some(false));
    assert_eq!(month.month_label.as_deref(), Some("4월"));
    let hour = r.pillars.hour.as_ref().unwrap();
    assert_eq!(hour.hour_range, Some("13:00 ~ 14:59"));
}

#[test]
fn deterministic() {
    let a = compute_four_pillars("1990-05-15", "14:30", Gender::Male).unwrap();
    let b = compute_four_pillars("1990-05-15", "14:30", Gender::Male).unwrap();
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// Solar-term boundaries
// ---------------------------------------------------------------------------

#[test]
fn start_of_spring_2024_boundary() {
    // 立春 2024 is 08:20:11.839Z = 17:20:11 KST.
    assert_eq!(names("2024-02-04", "17:20")[..2], ["계묘", "을축"]);
    assert_eq!(names("2024-02-04", "17:21")[..2], ["갑진", "병인"]);
}

#[test]
fn utc_offset_moves_the_boundary() {
    let utc = ChartConfig::default().with_utc_offset_minutes(0);
    let at = |time: &str| {
        compute_four_pillars_with(global_table(), &utc, "2024-02-04", time, Gender::Male)
            .unwrap()
            .pillars
            .year
            .name()
    };
    assert_eq!(at("08:20"), "계묘");
    assert_eq!(at("08:21"), "갑진");
    assert_eq!(at("17:20"), "갑진");
}

#[test]
fn first_day_of_supported_range() {
    // Before 立春 1900, in the 자 month opened by 大雪 1899.
    assert_eq!(names("1900-01-01", ""), ["기해", "병자", "갑술"]);
    let r = compute_four_pillars("1900-01-01", "", Gender::Male).unwrap();
    assert_eq!(r.meta.lunar_date_label, "12월 1일");
    assert_eq!(r.meta.lunar_year, 1899);
}

#[test]
fn last_day_of_supported_range() {
    let r = compute_four_pillars("2100-12-31", "", Gender::Male).unwrap();
    assert_eq!(r.pillars.day.name(), "정미");
    assert_eq!(r.pillars.month.branch, Branch::Ja);
    assert_eq!(r.meta.lunar_date_label, "12월 1일");
}

#[test]
fn leap_month_label_on_month_pillar() {
    let r = compute_four_pillars("2023-03-22", "", Gender::Male).unwrap();
    assert_eq!(r.pillars.month.leap_month, Some(true));
    assert_eq!(r.meta.lunar_date_label, "윤2월 1일");
}

// ---------------------------------------------------------------------------
// Hour pillar
// ---------------------------------------------------------------------------

#[test]
fn late_night_hour_keeps_calendar_day() {
    // 23:30 and 00:00 both fall in 자시 and use the same calendar day's stem.
    let late = names("1990-05-15", "23:30");
    let early = names("1990-05-15", "00:00");
    assert_eq!(late[2], "경진");
    assert_eq!(late[3], "병자");
    assert_eq!(early[3], "병자");
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn input_errors() {
    let err = compute_four_pillars("1850-01-01", "", Gender::Male).unwrap_err();
    assert_eq!(
        err,
        ChartError::YearOutOfRange {
            year: 1850,
            min: 1900,
            max: 2100
        }
    );
    assert!(err.is_input_error());

    assert!(matches!(
        compute_four_pillars("2023-02-30", "", Gender::Male),
        Err(ChartError::InvalidCalendarDate { .. })
    ));
    assert!(matches!(
        compute_four_pillars("1990-05-15", "25:00", Gender::Male),
        Err(ChartError::InvalidTime(_))
    ));
    assert_eq!(
        compute_four_pillars("1990-05", "", Gender::Male),
        Err(ChartError::MissingDateComponents)
    );
}

#[test]
fn daily_reference_pillars() {
    let cases = [
        ("2024-03-20", Stem::Gye, Branch::Mi),
        ("2024-02-10", Stem::Gap, Branch::Jin),
        ("1984-02-02", Stem::Byeong, Branch::In),
        ("1970-01-01", Stem::Sin, Branch::Sa),
    ];
    for (date, stem, branch) in cases {
        let d = parse_birth_date(date).unwrap();
        assert_eq!(daily_reference_pillar(d), (stem, branch), "{date}");
    }
}
