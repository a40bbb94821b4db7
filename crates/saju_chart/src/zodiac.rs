//! Western (tropical) zodiac sign by calendar date.

/// `(month, day)` on which each sign begins, in calendar order.
const SIGN_STARTS: [(u32, u32, &str); 13] = [
    (1, 1, "염소자리"),
    (1, 20, "물병자리"),
    (2, 19, "물고기자리"),
    (3, 21, "양자리"),
    (4, 20, "황소자리"),
    (5, 21, "쌍둥이자리"),
    (6, 22, "게자리"),
    (7, 23, "사자자리"),
    (8, 23, "처녀자리"),
    (9, 24, "천칭자리"),
    (10, 24, "전갈자리"),
    (11, 23, "사수자리"),
    (12, 22, "염소자리"),
];

/// Korean name of the sign for `month`/`day`.
pub fn western_zodiac(month: u32, day: u32) -> &'static str {
    SIGN_STARTS
        .iter()
        .rev()
        .find(|&&(m, d, _)| (month, day) >= (m, d))
        .map_or(SIGN_STARTS[0].2, |&(_, _, name)| name)
}
