//! True new moon instants (Meeus, *Astronomical Algorithms* ch. 49).
//!
//! Lunation `k = 0` is the new moon of 2000-01-06. Mean phase plus the
//! 25 periodic terms and 14 planetary-argument corrections; accurate to a
//! few seconds over 1900–2100.

use saju_time::{SECONDS_PER_DAY, delta_t_seconds_from_jd};

/// Mean synodic month, days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530588861;

/// Argument multipliers `(M, M′, F, Ω)`, eccentricity power and amplitude.
const PERIODIC_TERMS: [(i8, i8, i8, i8, u8, f64); 25] = [
    (0, 1, 0, 0, 0, -0.40720),
    (1, 0, 0, 0, 1, 0.17241),
    (0, 2, 0, 0, 0, 0.01608),
    (0, 0, 2, 0, 0, 0.01039),
    (-1, 1, 0, 0, 1, 0.00739),
    (1, 1, 0, 0, 1, -0.00514),
    (2, 0, 0, 0, 2, 0.00208),
    (0, 1, -2, 0, 0, -0.00111),
    (0, 1, 2, 0, 0, -0.00057),
    (1, 2, 0, 0, 1, 0.00056),
    (0, 3, 0, 0, 0, -0.00042),
    (1, 0, 2, 0, 1, 0.00042),
    (1, 0, -2, 0, 1, 0.00038),
    (-1, 2, 0, 0, 1, -0.00024),
    (0, 0, 0, 1, 0, -0.00017),
    (2, 1, 0, 0, 0, -0.00007),
    (0, 2, -2, 0, 0, 0.00004),
    (3, 0, 0, 0, 0, 0.00004),
    (1, 1, -2, 0, 0, 0.00003),
    (0, 2, 2, 0, 0, 0.00003),
    (1, 1, 2, 0, 0, -0.00003),
    (-1, 1, 2, 0, 0, 0.00003),
    (-1, 1, -2, 0, 0, -0.00002),
    (1, 3, 0, 0, 0, -0.00002),
    (0, 4, 0, 0, 0, 0.00002),
];

/// Planetary arguments `(constant, k coefficient, amplitude)`; A1 also has
/// a `−0.009173·T²` term.
const PLANETARY_TERMS: [(f64, f64, f64); 14] = [
    (299.77, 0.107408, 0.000325),
    (251.88, 0.016321, 0.000165),
    (251.83, 26.651886, 0.000164),
    (349.42, 36.412478, 0.000126),
    (84.66, 18.206239, 0.000110),
    (141.74, 53.303771, 0.000062),
    (207.14, 2.453732, 0.000060),
    (154.84, 7.306860, 0.000056),
    (34.52, 27.261239, 0.000047),
    (207.19, 0.121824, 0.000042),
    (291.34, 1.844379, 0.000040),
    (161.72, 24.198154, 0.000037),
    (239.56, 25.513099, 0.000035),
    (331.55, 3.592518, 0.000023),
];

/// Julian Ephemeris Day (TT) of new moon number `k`.
pub fn new_moon_jde(k: i64) -> f64 {
    let k = k as f64;
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean = 2_451_550.09766 + SYNODIC_MONTH_DAYS * k + 0.00015437 * t2 - 0.000000150 * t3
        + 0.00000000073 * t4;

    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;
    let m = (2.5534 + 29.10535670 * k - 0.0000014 * t2 - 0.00000011 * t3).to_radians();
    let mp = (201.5643 + 385.81693528 * k + 0.0107582 * t2 + 0.00001238 * t3
        - 0.000000058 * t4)
        .to_radians();
    let f = (160.7108 + 390.67050284 * k - 0.0016118 * t2 - 0.00000227 * t3
        + 0.000000011 * t4)
        .to_radians();
    let omega = (124.7746 - 1.56375588 * k + 0.0020672 * t2 + 0.00000215 * t3).to_radians();

    let periodic: f64 = PERIODIC_TERMS
        .iter()
        .map(|&(cm, cmp, cf, co, e_pow, amp)| {
            let arg = f64::from(cm) * m + f64::from(cmp) * mp + f64::from(cf) * f + f64::from(co) * omega;
            amp * e.powi(i32::from(e_pow)) * arg.sin()
        })
        .sum();

    let planetary: f64 = PLANETARY_TERMS
        .iter()
        .enumerate()
        .map(|(i, &(c0, ck, amp))| {
            let mut arg = c0 + ck * k;
            if i == 0 {
                arg -= 0.009173 * t2;
            }
            amp * arg.to_radians().sin()
        })
        .sum();

    mean + periodic + planetary
}

/// Julian Date (UT) of new moon number `k`.
pub fn new_moon_jd_ut(k: i64) -> f64 {
    let jde = new_moon_jde(k);
    jde - delta_t_seconds_from_jd(jde) / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_49a() {
        // New moon of 1977 February: k = −283, JDE 2443192.65118.
        let jde = new_moon_jde(-283);
        assert!((jde - 2_443_192.65118).abs() < 1e-4, "jde = {jde}");
    }

    #[test]
    fn lunation_zero_is_january_2000() {
        // 2000-01-06 18:14 UT.
        let jd = new_moon_jd_ut(0);
        assert!((jd - 2_451_550.26).abs() < 0.01, "jd = {jd}");
    }

    #[test]
    fn consecutive_new_moons_near_synodic_month() {
        for k in -1200..1200 {
            let gap = new_moon_jde(k + 1) - new_moon_jde(k);
            assert!((29.2..29.9).contains(&gap), "k = {k}, gap = {gap}");
        }
    }
}
