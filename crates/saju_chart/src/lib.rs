//! Four-pillars (사주) charts from birth date, time and gender.
//!
//! This crate provides:
//! - Birth date/time/gender parsing with user-facing validation errors
//! - Year and month boundary resolution against a solar-term table
//! - Chart assembly: four pillars, element summary, lunar date and labels
//! - The day pillar of an arbitrary date for daily readings

pub mod boundary;
pub mod chart;
pub mod config;
pub mod error;
pub mod input;
pub mod zodiac;

pub use boundary::{MonthBoundaryInfo, YearPillarInfo, resolve_month_boundary, resolve_year_pillar};
pub use chart::{
    ChartMeta, FourPillarsResult, compute_chart, compute_four_pillars, compute_four_pillars_with,
    daily_reference_pillar, full_date_label,
};
pub use config::{ChartConfig, DEFAULT_UTC_OFFSET_MINUTES, SUPPORTED_YEAR_MAX, SUPPORTED_YEAR_MIN};
pub use error::ChartError;
pub use input::{BirthInput, Gender, parse_birth_date, parse_birth_time};
pub use zodiac::western_zodiac;
