//! Solar terms and lunisolar dates for the saju engine.
//!
//! This crate provides:
//! - Low-precision apparent solar longitude with ΔT applied
//! - The fixed-round solar-term search and the year → 12 terms table
//! - A process-wide table built once over 1899–2100
//! - True new moons and the lunisolar (음력) date of a civil day

pub mod error;
pub mod generator;
pub mod longitude;
pub mod lunisolar;
pub mod new_moon;
pub mod solar_term;
pub mod table;

pub use error::SolarError;
pub use generator::{
    CORRECTION_ROUNDS, TOLERANCE_DEG, TermSolution, find_longitude_crossing_jd, find_solar_term_jd,
    longitude_at_ut, solar_term_instant,
};
pub use longitude::{SUN_DEG_PER_DAY, angle_difference_deg, apparent_longitude_deg, normalize_deg};
pub use lunisolar::{
    LUNISOLAR_UTC_OFFSET_MINUTES, LunarDate, LunarMonth, LunarMonthStart, LunarYearSpan,
};
pub use new_moon::{SYNODIC_MONTH_DAYS, new_moon_jd_ut, new_moon_jde};
pub use solar_term::{ALL_SOLAR_TERMS, SolarTerm};
pub use table::{
    DEFAULT_TABLE_RANGE, SolarTermEntry, SolarTermTable, TableRange, generate_year, global_table,
    resolve_solar_term_table,
};
