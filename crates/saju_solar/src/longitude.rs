//! Low-precision apparent solar longitude.
//!
//! Mean longitude and mean anomaly with a three-term equation of centre,
//! then the combined nutation and aberration correction
//! `−0.00569° − 0.00478°·sin Ω` (Meeus, *Astronomical Algorithms* ch. 25).
//! Accurate to about 0.01°, which is enough to place solar terms to the
//! minute.

use saju_time::J2000_JD;

/// Mean daily motion of the Sun, degrees per day.
pub const SUN_DEG_PER_DAY: f64 = 0.98564736629;

/// Normalize an angle to [0, 360).
pub fn normalize_deg(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Signed shortest angular distance from `current` to `target`, in [−180, 180).
pub fn angle_difference_deg(target: f64, current: f64) -> f64 {
    (target - current + 180.0).rem_euclid(360.0) - 180.0
}

/// Apparent geocentric ecliptic longitude of the Sun, degrees in [0, 360).
///
/// `jd_tt` is a Julian Date in Terrestrial Time.
pub fn apparent_longitude_deg(jd_tt: f64) -> f64 {
    let t = (jd_tt - J2000_JD) / 36525.0;
    let t2 = t * t;

    let l0 = normalize_deg(280.46646 + 36000.76983 * t + 0.0003032 * t2);
    let m = normalize_deg(357.52911 + 35999.05029 * t - 0.0001537 * t2 - 0.00000048 * t2 * t);
    let m_rad = m.to_radians();

    let c = (1.914602 - 0.004817 * t - 0.000014 * t2) * m_rad.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin()
        + 0.000289 * (3.0 * m_rad).sin();

    let omega = 125.04 - 1934.136 * t;
    normalize_deg(l0 + c - 0.00569 - 0.00478 * omega.to_radians().sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difference_wraps() {
        assert!((angle_difference_deg(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((angle_difference_deg(350.0, 10.0) + 20.0).abs() < 1e-12);
        assert!((angle_difference_deg(15.0, 285.0) - 90.0).abs() < 1e-12);
        assert_eq!(angle_difference_deg(180.0, 0.0), -180.0);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_deg(-30.0) - 330.0).abs() < 1e-12);
        assert!((normalize_deg(725.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn meeus_example_25a() {
        // 1992-Oct-13 0h TD: apparent longitude 199.90895° (low-precision method ≈199.9089).
        let lon = apparent_longitude_deg(2_448_908.5);
        assert!((lon - 199.909).abs() < 0.01, "lon = {lon}");
    }

    #[test]
    fn near_j2000() {
        // Sun is near 280° at the start of January.
        let lon = apparent_longitude_deg(J2000_JD);
        assert!((lon - 280.37).abs() < 0.05, "lon = {lon}");
    }
}
