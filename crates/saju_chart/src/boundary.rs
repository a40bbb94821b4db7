//! Year and month boundaries from the solar-term table.
//!
//! Both resolvers compare whole unix milliseconds; a birth instant equal
//! to a term instant belongs to the period the term opens.

use serde::Serialize;
use tracing::trace;

use saju_base::{Branch, Stem, year_stem_branch};
use saju_solar::{SolarTerm, SolarTermEntry, SolarTermTable};

use crate::config::ChartConfig;
use crate::error::ChartError;

/// Pillar year and its stem/branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearPillarInfo {
    /// Calendar year, minus one before Start of Spring.
    pub year: i32,
    pub stem: Stem,
    pub branch: Branch,
}

/// Solar-term month containing an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthBoundaryInfo {
    /// Latest term at or before the instant.
    pub term: SolarTerm,
    pub branch: Branch,
    /// 0 = 인월 (from Start of Spring) .. 11 = 축월.
    pub month_index: u8,
}

/// Resolve the pillar year of `instant_ms`, whose civil calendar year is
/// `civil_year`.
pub fn resolve_year_pillar(
    table: &SolarTermTable,
    instant_ms: i64,
    civil_year: i32,
    config: &ChartConfig,
) -> Result<YearPillarInfo, ChartError> {
    if !config.supports_year(civil_year) {
        return Err(ChartError::YearOutOfRange {
            year: civil_year,
            min: config.min_year,
            max: config.max_year,
        });
    }

    let start_of_spring = table
        .start_of_spring(civil_year)
        .ok_or(ChartError::MissingSolarTerm {
            year: civil_year,
            term: SolarTerm::StartOfSpring,
        })?;

    let year = if instant_ms < start_of_spring.to_unix_millis() {
        civil_year - 1
    } else {
        civil_year
    };
    let (stem, branch) = year_stem_branch(year);
    trace!(civil_year, pillar_year = year, "year pillar resolved");
    Ok(YearPillarInfo { year, stem, branch })
}

/// Resolve the solar-term month of `instant_ms`, searching the terms of
/// `civil_year` and its neighbours.
pub fn resolve_month_boundary(
    table: &SolarTermTable,
    instant_ms: i64,
    civil_year: i32,
) -> Result<MonthBoundaryInfo, ChartError> {
    let range = table.range();
    if civil_year < range.start - 1 || civil_year > range.end + 1 {
        return Err(ChartError::NoSolarTermData { year: civil_year });
    }

    let mut entries: Vec<SolarTermEntry> = (civil_year - 1..=civil_year + 1)
        .filter_map(|y| table.try_year(y))
        .flatten()
        .copied()
        .collect();
    if entries.is_empty() {
        return Err(ChartError::NoSolarTermData { year: civil_year });
    }
    entries.sort_by_key(|e| e.instant);

    let selected = entries
        .iter()
        .take_while(|e| e.instant.to_unix_millis() <= instant_ms)
        .last()
        .ok_or(ChartError::NoPrecedingBoundary { instant_ms })?;

    let term = selected.term;
    trace!(term = term.hanja(), instant = %selected.instant, "month boundary resolved");
    Ok(MonthBoundaryInfo {
        term,
        branch: term.branch(),
        month_index: term.month_index(),
    })
}
