//! Deterministic lucky numbers for a chart and a daily fortune.
//!
//! The seed is a 31-multiplier string hash over the joined reading texts,
//! so the same chart and day always yield the same draw.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use saju_chart::FourPillarsResult;

use crate::daily_fortune::DailyFortune;

const LCG_MULTIPLIER: u64 = 1_664_525;
const LCG_INCREMENT: u64 = 1_013_904_223;
const MODULUS_BITS: u32 = 32;
const MODULUS: u64 = 1 << MODULUS_BITS;

/// Numbers are drawn from `1..=MAX_NUMBER`.
pub const MAX_NUMBER: u8 = 45;
pub const PICK_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LuckyNumbers {
    /// Six distinct numbers, ascending.
    pub numbers: [u8; PICK_COUNT],
    /// A seventh number distinct from `numbers`.
    pub bonus: u8,
}

/// Linear congruential generator modulo 2³².
#[derive(Debug, Clone)]
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u32) -> Self {
        Self {
            state: u64::from(seed),
        }
    }

    fn next_state(&mut self) -> u64 {
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % MODULUS;
        self.state
    }

    /// `floor(u · MAX_NUMBER) + 1` for `u = state / 2³²`, computed exactly.
    fn draw(&mut self) -> u8 {
        let scaled = (self.next_state() * u64::from(MAX_NUMBER)) >> MODULUS_BITS;
        scaled as u8 + 1
    }
}

/// Hash over UTF-16 code units; a zero hash becomes 1.
///
/// Characters outside the BMP contribute only their leading surrogate.
fn string_seed(value: &str) -> u32 {
    let mut buf = [0u16; 2];
    let hash = value.chars().fold(0u64, |hash, c| {
        let unit = u64::from(c.encode_utf16(&mut buf)[0]);
        (hash * 31 + unit) % MODULUS
    });
    if hash == 0 { 1 } else { hash as u32 }
}

fn seed_text(result: &FourPillarsResult, fortune: &DailyFortune) -> String {
    let day_pillar = result.pillars.day.name();
    [
        result.meta.solar_date_label.as_str(),
        result.meta.gender.key(),
        day_pillar.as_str(),
        result.summary.strongest.element.korean(),
        fortune.date_label.as_str(),
        fortune.pillar_name.as_str(),
        fortune.energy_text.as_str(),
        fortune.action_text.as_str(),
        fortune.caution_text.as_str(),
    ]
    .join("|")
}

/// Draw six sorted numbers and a bonus for `result` on the day of `fortune`.
pub fn recommend_lucky_numbers(result: &FourPillarsResult, fortune: &DailyFortune) -> LuckyNumbers {
    let seed = string_seed(&seed_text(result, fortune));
    let mut rng = Lcg::new(seed);

    let mut picked = BTreeSet::new();
    while picked.len() < PICK_COUNT {
        picked.insert(rng.draw());
    }
    let mut bonus = rng.draw();
    while picked.contains(&bonus) {
        bonus = rng.draw();
    }

    let mut numbers = [0u8; PICK_COUNT];
    for (slot, n) in numbers.iter_mut().zip(&picked) {
        *slot = *n;
    }
    debug!(seed, ?numbers, bonus, "lucky numbers drawn");
    LuckyNumbers { numbers, bonus }
}
