//! ΔT = TT − UT, in seconds.
//!
//! Piecewise polynomials of Espenak & Meeus (NASA, 2006) for 1860 onward,
//! with the Morrison–Stephenson long-term parabola past 2150. The solar-term
//! generator only needs 1899–2101, so older segments are not carried.

use crate::utc_time::UtcTime;

/// ΔT in seconds for a decimal year (e.g. `2024.5`).
pub fn delta_t_seconds(year: f64) -> f64 {
    if year < 1900.0 {
        let u = year - 1860.0;
        7.62 + 0.5737 * u - 0.251754 * u.powi(2) + 0.01680668 * u.powi(3)
            - 0.0004473624 * u.powi(4)
            + u.powi(5) / 233_174.0
    } else if year < 1920.0 {
        let t = year - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4)
    } else if year < 1941.0 {
        let t = year - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
    } else if year < 1961.0 {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if year < 1986.0 {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if year < 2005.0 {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if year < 2050.0 {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t.powi(2)
    } else if year < 2150.0 {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u.powi(2) - 0.5628 * (2150.0 - year)
    } else {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u.powi(2)
    }
}

/// ΔT in seconds at a Julian Date (UT).
///
/// The model is evaluated at the middle of the calendar month containing
/// `jd_ut`, i.e. at `year + (month − 0.5) / 12`.
pub fn delta_t_seconds_from_jd(jd_ut: f64) -> f64 {
    let utc = UtcTime::from_jd_ut(jd_ut);
    delta_t_seconds(utc.year as f64 + (utc.month as f64 - 0.5) / 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::calendar_to_jd;

    #[test]
    fn epoch_2000() {
        assert!((delta_t_seconds(2000.0) - 63.86).abs() < 1e-9);
    }

    #[test]
    fn plausible_twentieth_century_values() {
        // Observed ΔT: ~ -2.7 s (1900), ~24 s (1930), ~57 s (1990).
        assert!((delta_t_seconds(1900.0) + 2.79).abs() < 1e-9);
        assert!((delta_t_seconds(1930.0) - 24.0).abs() < 1.0);
        assert!((delta_t_seconds(1990.0) - 56.9).abs() < 1.0);
    }

    #[test]
    fn segments_nearly_continuous() {
        for boundary in [1900.0, 1920.0, 1941.0, 1961.0, 1986.0, 2005.0, 2050.0, 2150.0] {
            let before = delta_t_seconds(boundary - 1e-6);
            let after = delta_t_seconds(boundary);
            assert!(
                (before - after).abs() < 2.0,
                "jump at {boundary}: {before} -> {after}"
            );
        }
    }

    #[test]
    fn from_jd_uses_mid_month() {
        let jd = calendar_to_jd(2024, 2, 4.3);
        let expected = delta_t_seconds(2024.0 + 1.5 / 12.0);
        assert!((delta_t_seconds_from_jd(jd) - expected).abs() < 1e-12);
    }
}
