//! Four-pillars chart assembly.

use serde::Serialize;
use tracing::debug;

use saju_base::{
    Branch, FourPillars, Pillar, PillarSlot, Stem, Summary, day_stem_branch, hour_range_label,
    hour_stem_branch, make_summary, month_stem,
};
use saju_solar::{LunarDate, SolarTermTable, global_table};
use saju_time::{CivilDate, CivilTime, LocalDateTime};

use crate::boundary::{resolve_month_boundary, resolve_year_pillar};
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::input::{BirthInput, Gender};
use crate::zodiac::western_zodiac;

/// Display metadata of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartMeta {
    /// `"1990년 5월 15일 (화요일)"`.
    pub solar_date_label: String,
    /// `"4월 21일"`, `"윤4월 1일"`.
    pub lunar_date_label: String,
    /// Gregorian year in which the lunar year began.
    pub lunar_year: i32,
    pub western_zodiac: &'static str,
    pub has_time: bool,
    /// `"14:30"`, or `"미입력"` without a birth time.
    pub time_label: String,
    pub gender: Gender,
    pub gender_label: &'static str,
}

/// A computed chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FourPillarsResult {
    pub pillars: FourPillars,
    pub summary: Summary,
    pub meta: ChartMeta,
}

/// Chart from date/time text with the default config and global table.
pub fn compute_four_pillars(
    date: &str,
    time: &str,
    gender: Gender,
) -> Result<FourPillarsResult, ChartError> {
    compute_four_pillars_with(global_table(), &ChartConfig::default(), date, time, gender)
}

/// Chart from date/time text against an explicit table and config.
pub fn compute_four_pillars_with(
    table: &SolarTermTable,
    config: &ChartConfig,
    date: &str,
    time: &str,
    gender: Gender,
) -> Result<FourPillarsResult, ChartError> {
    let input = BirthInput::parse(date, time, gender)?;
    compute_chart(table, config, &input)
}

/// Chart from validated input.
///
/// Without a birth time, the year and month boundaries are taken at local
/// noon and no hour pillar is produced.
pub fn compute_chart(
    table: &SolarTermTable,
    config: &ChartConfig,
    input: &BirthInput,
) -> Result<FourPillarsResult, ChartError> {
    let date = input.date;
    let clock = input.time.unwrap_or(CivilTime::NOON);
    let instant_ms = LocalDateTime::new(date, clock, config.utc_offset_minutes).to_unix_millis();

    let year_info = resolve_year_pillar(table, instant_ms, date.year(), config)?;
    let month_info = resolve_month_boundary(table, instant_ms, date.year())?;
    let lunar = LunarDate::from_civil(date)?;

    let (day_stem, day_branch) = day_stem_branch(date.year(), date.month(), date.day());
    let stem_of_month = month_stem(year_info.stem, month_info.month_index);

    let hour = input.time.map(|t| {
        let (stem, branch) = hour_stem_branch(day_stem, t.decimal_hour());
        Pillar::new(stem, branch)
            .with_slot(PillarSlot::Hour)
            .with_hour_range(hour_range_label(branch))
    });
    let pillars = FourPillars {
        year: Pillar::new(year_info.stem, year_info.branch).with_slot(PillarSlot::Year),
        month: Pillar::new(stem_of_month, month_info.branch)
            .with_slot(PillarSlot::Month)
            .with_lunar_month(lunar.month.number, lunar.month.leap, lunar.month.label()),
        day: Pillar::new(day_stem, day_branch).with_slot(PillarSlot::Day),
        hour,
    };
    let summary = make_summary(&pillars, pillars.has_hour());

    debug!(
        date = %date,
        pillar_year = year_info.year,
        term = month_info.term.hanja(),
        day = %pillars.day.name(),
        "chart computed"
    );

    let meta = ChartMeta {
        solar_date_label: solar_date_label(date),
        lunar_date_label: lunar.label(),
        lunar_year: lunar.year,
        western_zodiac: western_zodiac(date.month(), date.day()),
        has_time: pillars.has_hour(),
        time_label: input
            .time
            .map_or_else(|| "미입력".to_string(), |t| t.to_string()),
        gender: input.gender,
        gender_label: input.gender.korean(),
    };

    Ok(FourPillarsResult {
        pillars,
        summary,
        meta,
    })
}

/// Day pillar of a civil date, for daily readings.
pub fn daily_reference_pillar(date: CivilDate) -> (Stem, Branch) {
    day_stem_branch(date.year(), date.month(), date.day())
}

/// `"2024년 3월 20일 수요일"`.
pub fn full_date_label(date: CivilDate) -> String {
    format!(
        "{}년 {}월 {}일 {}",
        date.year(),
        date.month(),
        date.day(),
        date.weekday().korean()
    )
}

fn solar_date_label(date: CivilDate) -> String {
    format!(
        "{}년 {}월 {}일 ({})",
        date.year(),
        date.month(),
        date.day(),
        date.weekday().korean()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CivilDate {
        CivilDate::new(y, m, d).unwrap()
    }

    #[test]
    fn labels() {
        assert_eq!(solar_date_label(date(1990, 5, 15)), "1990년 5월 15일 (화요일)");
        assert_eq!(full_date_label(date(2024, 3, 20)), "2024년 3월 20일 수요일");
    }

    #[test]
    fn daily_pillar() {
        assert_eq!(daily_reference_pillar(date(2024, 3, 20)), (Stem::Gye, Branch::Mi));
        assert_eq!(daily_reference_pillar(date(2000, 1, 1)), (Stem::Mu, Branch::O));
    }

    #[test]
    fn chart_without_time_uses_noon() {
        let r = compute_four_pillars("1990-05-15", "", Gender::Female).unwrap();
        assert!(r.pillars.hour.is_none());
        assert!(!r.meta.has_time);
        assert_eq!(r.meta.time_label, "미입력");
        assert_eq!(r.summary.total, 6);
    }
}
