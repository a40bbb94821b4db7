//! Chart configuration.

use serde::{Deserialize, Serialize};

/// Korea Standard Time, minutes east of UTC.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 540;

/// Earliest calendar year accepted for a birth date.
pub const SUPPORTED_YEAR_MIN: i32 = 1900;

/// Latest calendar year accepted for a birth date.
pub const SUPPORTED_YEAR_MAX: i32 = 2100;

/// Settings for chart computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Offset of the civil clock that birth and reference dates are read
    /// in, minutes east of UTC. Default: 540 (KST).
    pub utc_offset_minutes: i32,
    /// Earliest accepted birth year (inclusive). Default: 1900.
    pub min_year: i32,
    /// Latest accepted birth year (inclusive). Default: 2100.
    pub max_year: i32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
            min_year: SUPPORTED_YEAR_MIN,
            max_year: SUPPORTED_YEAR_MAX,
        }
    }
}

impl ChartConfig {
    pub fn new(utc_offset_minutes: i32, min_year: i32, max_year: i32) -> Self {
        Self {
            utc_offset_minutes,
            min_year,
            max_year,
        }
    }

    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    pub fn supports_year(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_kst_1900_2100() {
        let c = ChartConfig::default();
        assert_eq!(c.utc_offset_minutes, 540);
        assert!(c.supports_year(1900));
        assert!(c.supports_year(2100));
        assert!(!c.supports_year(1899));
        assert!(!c.supports_year(2101));
    }

    #[test]
    fn offset_override_keeps_range() {
        let c = ChartConfig::default().with_utc_offset_minutes(480);
        assert_eq!(c, ChartConfig::new(480, 1900, 2100));
    }
}
