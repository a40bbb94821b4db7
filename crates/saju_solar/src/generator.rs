//! Solar-term instant search.
//!
//! Starting from a seed Julian Date, the estimate is moved by the angular
//! shortfall divided by the Sun's mean daily motion. The number of rounds
//! is fixed (no early exit) so that regenerated tables are bit-identical
//! to published ones. The residual is checked only afterwards; a residual
//! above [`TOLERANCE_DEG`] is logged, not rejected.

use saju_time::{SECONDS_PER_DAY, UNIX_EPOCH_JD, UtcTime, days_from_civil, delta_t_seconds_from_jd};
use tracing::{debug_span, warn};

use crate::longitude::{SUN_DEG_PER_DAY, angle_difference_deg, apparent_longitude_deg};
use crate::solar_term::SolarTerm;

/// Fixed number of linear correction rounds.
pub const CORRECTION_ROUNDS: usize = 8;

/// Largest acceptable final angular error, degrees.
pub const TOLERANCE_DEG: f64 = 0.01;

/// Result of a longitude-crossing search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermSolution {
    /// Crossing instant as a Julian Date (UT).
    pub jd_ut: f64,
    /// Absolute angular error at `jd_ut`, degrees.
    pub residual_deg: f64,
}

impl TermSolution {
    pub fn converged(&self) -> bool {
        self.residual_deg <= TOLERANCE_DEG
    }
}

/// Apparent solar longitude at a UT Julian Date, applying ΔT first.
pub fn longitude_at_ut(jd_ut: f64) -> f64 {
    let jd_tt = jd_ut + delta_t_seconds_from_jd(jd_ut) / SECONDS_PER_DAY;
    apparent_longitude_deg(jd_tt)
}

/// Find when the apparent solar longitude reaches `target_deg`, starting
/// from `seed_jd_ut`.
pub fn find_longitude_crossing_jd(target_deg: f64, seed_jd_ut: f64) -> TermSolution {
    let mut jd_ut = seed_jd_ut;
    for _ in 0..CORRECTION_ROUNDS {
        let diff = angle_difference_deg(target_deg, longitude_at_ut(jd_ut));
        jd_ut += diff / SUN_DEG_PER_DAY;
    }

    let residual_deg = angle_difference_deg(target_deg, longitude_at_ut(jd_ut)).abs();
    if residual_deg > TOLERANCE_DEG {
        warn!(target_deg, jd_ut, diff_deg = residual_deg, "solar longitude search did not converge");
    }
    TermSolution {
        jd_ut,
        residual_deg,
    }
}

/// Find the instant of `term` in calendar year `year`.
///
/// Seeds at 00:00 UTC of the term's approximate date.
pub fn find_solar_term_jd(year: i32, term: SolarTerm) -> TermSolution {
    let _span = debug_span!("solar_term", year, term = term.hanja()).entered();
    let (month, day) = term.approx_month_day();
    let seed = days_from_civil(year, month, day) as f64 + UNIX_EPOCH_JD;
    find_longitude_crossing_jd(term.longitude_deg(), seed)
}

/// UTC instant (millisecond precision) of `term` in calendar year `year`.
pub fn solar_term_instant(year: i32, term: SolarTerm) -> UtcTime {
    UtcTime::from_jd_ut(find_solar_term_jd(year, term).jd_ut)
}
