//! Golden tests for the solar-term generator and the global table.
//!
//! Instants are the published table values (millisecond UTC).

use saju_solar::{
    ALL_SOLAR_TERMS, DEFAULT_TABLE_RANGE, SolarError, SolarTerm, find_solar_term_jd,
    global_table, resolve_solar_term_table, solar_term_instant,
};

fn iso(year: i32, term: SolarTerm) -> String {
    solar_term_instant(year, term).to_string()
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

#[test]
fn term_instants_1990() {
    assert_eq!(iso(1990, SolarTerm::MinorCold), "1990-01-05T14:30:40.916Z");
    assert_eq!(iso(1990, SolarTerm::StartOfSpring), "1990-02-04T02:10:43.567Z");
    assert_eq!(iso(1990, SolarTerm::StartOfSummer), "1990-05-05T18:31:36.044Z");
}

#[test]
fn term_instants_2024() {
    assert_eq!(iso(2024, SolarTerm::MinorCold), "2024-01-05T20:43:06.426Z");
    assert_eq!(iso(2024, SolarTerm::StartOfSpring), "2024-02-04T08:20:11.839Z");
    assert_eq!(iso(2024, SolarTerm::AwakeningOfInsects), "2024-03-05T02:14:58.367Z");
    assert_eq!(iso(2024, SolarTerm::MajorSnow), "2024-12-06T15:13:54.314Z");
}

#[test]
fn range_edges() {
    assert_eq!(iso(1899, SolarTerm::MinorCold), "1899-01-05T12:16:47.328Z");
    assert_eq!(iso(1900, SolarTerm::StartOfSpring), "1900-02-04T05:55:08.467Z");
    assert_eq!(iso(2000, SolarTerm::StartOfSpring), "2000-02-04T12:35:54.593Z");
    assert_eq!(iso(2100, SolarTerm::StartOfSpring), "2100-02-03T18:56:18.774Z");
    assert_eq!(iso(2100, SolarTerm::MajorSnow), "2100-12-07T01:45:52.141Z");
}

#[test]
fn all_terms_converge_across_range() {
    for year in (1899..=2100).step_by(7) {
        for term in ALL_SOLAR_TERMS {
            let sol = find_solar_term_jd(year, term);
            assert!(sol.converged(), "{year} {}: {}", term.hanja(), sol.residual_deg);
        }
    }
}

// ---------------------------------------------------------------------------
// Global table
// ---------------------------------------------------------------------------

#[test]
fn global_table_covers_default_range() {
    let table = global_table();
    assert_eq!(table.range(), DEFAULT_TABLE_RANGE);
    assert!(table.try_year(1899).is_some());
    assert!(table.try_year(2100).is_some());
    assert!(table.try_year(2101).is_none());
}

#[test]
fn every_year_is_ordered_and_evenly_spaced() {
    let table = global_table();
    for year in DEFAULT_TABLE_RANGE.years() {
        let entries = table.year(year).unwrap();
        for (entry, term) in entries.iter().zip(ALL_SOLAR_TERMS) {
            assert_eq!(entry.term, term);
            assert_eq!(entry.instant.year, year, "{year} {}", term.hanja());
        }
        for pair in entries.windows(2) {
            let gap_days =
                (pair[1].instant.to_unix_millis() - pair[0].instant.to_unix_millis()) as f64
                    / 86_400_000.0;
            assert!((29.0..32.0).contains(&gap_days), "{year}: gap {gap_days}");
        }
    }
}

#[test]
fn consecutive_years_join_up() {
    // 大雪 of one year to 小寒 of the next is two half-months.
    let table = global_table();
    for year in 1899..2100 {
        let snow = table.year(year).unwrap()[11].instant.to_unix_millis();
        let cold = table.year(year + 1).unwrap()[0].instant.to_unix_millis();
        let gap_days = (cold - snow) as f64 / 86_400_000.0;
        assert!((29.0..31.0).contains(&gap_days), "{year}: gap {gap_days}");
    }
}

#[test]
fn resolve_accessor() {
    let entries = resolve_solar_term_table(2024).unwrap();
    assert_eq!(entries[1].instant.to_string(), "2024-02-04T08:20:11.839Z");
    assert_eq!(
        resolve_solar_term_table(1800).unwrap_err(),
        SolarError::YearOutOfRange {
            year: 1800,
            start: 1899,
            end: 2100
        }
    );
}
