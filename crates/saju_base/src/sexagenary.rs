//! Sexagenary (60-cycle) stem/branch arithmetic for the four pillars.
//!
//! Pure integer functions. Every reduction goes through `rem_euclid` or
//! `div_euclid`, so negative intermediates never produce a negative index.

use crate::branch::Branch;
use crate::stem::Stem;

/// First-month (인월) stem index for each year stem (갑/기 → 병, 을/경 → 무, …).
pub const FIRST_MONTH_STEM_INDEX: [u8; 10] = [2, 4, 6, 8, 0, 2, 4, 6, 8, 0];

const HOUR_RANGES: [&str; 12] = [
    "23:00 ~ 00:59",
    "01:00 ~ 02:59",
    "03:00 ~ 04:59",
    "05:00 ~ 06:59",
    "07:00 ~ 08:59",
    "09:00 ~ 10:59",
    "11:00 ~ 12:59",
    "13:00 ~ 14:59",
    "15:00 ~ 16:59",
    "17:00 ~ 18:59",
    "19:00 ~ 20:59",
    "21:00 ~ 22:59",
];

/// Day stem and branch of a proleptic Gregorian date.
///
/// Closed form over century `C`, year-in-century `y`, shifted month `M`
/// (January and February count as months 13 and 14 of the previous year)
/// and day `d`:
///
/// - stem   = `4C + ⌊C/4⌋ + 5y + ⌊y/4⌋ + ⌊3(M+1)/5⌋ + d − 4` mod 10
/// - branch = `8C + ⌊C/4⌋ + 5y + ⌊y/4⌋ + ⌊3(M+1)/5⌋ + d + 6 + i` mod 12,
///   with `i = 0` for odd `M` and `6` for even `M`
pub fn day_stem_branch(year: i32, month: u32, day: u32) -> (Stem, Branch) {
    let (mut y, mut m) = (year as i64, month as i64);
    if m <= 2 {
        y -= 1;
        m += 12;
    }
    let c = y.div_euclid(100);
    let yy = y.rem_euclid(100);
    let d = day as i64;
    let common = c.div_euclid(4) + 5 * yy + yy.div_euclid(4) + (3 * (m + 1)).div_euclid(5) + d;
    let i = if m % 2 == 0 { 6 } else { 0 };

    let stem = Stem::from_index(4 * c + common - 4);
    let branch = Branch::from_index(8 * c + common + 6 + i);
    (stem, branch)
}

/// Hour stem and branch from the day stem and a decimal hour of day.
///
/// Branches are two-hour blocks starting at 23:00, so 23:00–00:59 is 자.
/// The day stem is not advanced for the 23:00 block.
pub fn hour_stem_branch(day_stem: Stem, hour_decimal: f64) -> (Stem, Branch) {
    let hour_index = ((hour_decimal + 1.0) / 2.0).floor() as i64;
    let branch = Branch::from_index(hour_index);
    let stem = Stem::from_index(day_stem.index() as i64 * 2 + branch.index() as i64);
    (stem, branch)
}

/// Clock range covered by an hour branch, e.g. `"13:00 ~ 14:59"` for 미.
pub fn hour_range_label(branch: Branch) -> &'static str {
    HOUR_RANGES[branch.index() as usize]
}

/// Year stem and branch of a pillar year (`(Y − 4) mod 10`, `(Y − 4) mod 12`).
pub fn year_stem_branch(pillar_year: i32) -> (Stem, Branch) {
    let n = pillar_year as i64 - 4;
    (Stem::from_index(n), Branch::from_index(n))
}

/// Month stem from the year stem and the solar month index (0 = 인월).
pub fn month_stem(year_stem: Stem, month_index: u8) -> Stem {
    Stem::from_index(FIRST_MONTH_STEM_INDEX[year_stem.index() as usize] as i64 + month_index as i64)
}

/// Position 0..59 of a stem/branch pair in the sexagenary cycle (갑자 = 0).
///
/// Returns `None` for pairs of mixed parity, which never occur in the cycle.
pub fn cycle_index(stem: Stem, branch: Branch) -> Option<u8> {
    let (s, b) = (stem.index(), branch.index());
    if s % 2 != b % 2 {
        return None;
    }
    (0..60u8).find(|n| n % 10 == s && n % 12 == b)
}
