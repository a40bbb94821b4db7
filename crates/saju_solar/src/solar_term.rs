//! The twelve major solar terms (절기) that bound the saju months.
//!
//! Table order starts at Minor Cold (小寒, 285°, early January) so that a
//! calendar year's terms are listed chronologically. Month order starts at
//! Start of Spring (立春, 인월).

use serde::{Deserialize, Serialize};

use saju_base::Branch;

/// One of the 12 major solar terms, in calendar-year order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SolarTerm {
    MinorCold,
    StartOfSpring,
    AwakeningOfInsects,
    PureBrightness,
    StartOfSummer,
    GrainInEar,
    MinorHeat,
    StartOfAutumn,
    WhiteDew,
    ColdDew,
    StartOfWinter,
    MajorSnow,
}

/// All 12 terms in table order (0 = 小寒, 11 = 大雪).
pub const ALL_SOLAR_TERMS: [SolarTerm; 12] = [
    SolarTerm::MinorCold,
    SolarTerm::StartOfSpring,
    SolarTerm::AwakeningOfInsects,
    SolarTerm::PureBrightness,
    SolarTerm::StartOfSummer,
    SolarTerm::GrainInEar,
    SolarTerm::MinorHeat,
    SolarTerm::StartOfAutumn,
    SolarTerm::WhiteDew,
    SolarTerm::ColdDew,
    SolarTerm::StartOfWinter,
    SolarTerm::MajorSnow,
];

impl SolarTerm {
    /// 0-based table index (小寒=0 .. 大雪=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::MinorCold => 0,
            Self::StartOfSpring => 1,
            Self::AwakeningOfInsects => 2,
            Self::PureBrightness => 3,
            Self::StartOfSummer => 4,
            Self::GrainInEar => 5,
            Self::MinorHeat => 6,
            Self::StartOfAutumn => 7,
            Self::WhiteDew => 8,
            Self::ColdDew => 9,
            Self::StartOfWinter => 10,
            Self::MajorSnow => 11,
        }
    }

    /// Target apparent solar longitude, `(285 + 30·i) mod 360` degrees.
    pub fn longitude_deg(self) -> f64 {
        ((285 + 30 * self.index() as u32) % 360) as f64
    }

    /// `(month, day)` near which the term falls; the generator's seed.
    pub const fn approx_month_day(self) -> (u32, u32) {
        match self {
            Self::MinorCold => (1, 5),
            Self::StartOfSpring => (2, 4),
            Self::AwakeningOfInsects => (3, 5),
            Self::PureBrightness => (4, 5),
            Self::StartOfSummer => (5, 5),
            Self::GrainInEar => (6, 6),
            Self::MinorHeat => (7, 7),
            Self::StartOfAutumn => (8, 7),
            Self::WhiteDew => (9, 7),
            Self::ColdDew => (10, 8),
            Self::StartOfWinter => (11, 7),
            Self::MajorSnow => (12, 7),
        }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MinorCold => "Minor Cold",
            Self::StartOfSpring => "Start of Spring",
            Self::AwakeningOfInsects => "Awakening of Insects",
            Self::PureBrightness => "Pure Brightness",
            Self::StartOfSummer => "Start of Summer",
            Self::GrainInEar => "Grain in Ear",
            Self::MinorHeat => "Minor Heat",
            Self::StartOfAutumn => "Start of Autumn",
            Self::WhiteDew => "White Dew",
            Self::ColdDew => "Cold Dew",
            Self::StartOfWinter => "Start of Winter",
            Self::MajorSnow => "Major Snow",
        }
    }

    /// Traditional characters, as used in the table interchange format.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::MinorCold => "小寒",
            Self::StartOfSpring => "立春",
            Self::AwakeningOfInsects => "驚蟄",
            Self::PureBrightness => "清明",
            Self::StartOfSummer => "立夏",
            Self::GrainInEar => "芒種",
            Self::MinorHeat => "小暑",
            Self::StartOfAutumn => "立秋",
            Self::WhiteDew => "白露",
            Self::ColdDew => "寒露",
            Self::StartOfWinter => "立冬",
            Self::MajorSnow => "大雪",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::MinorCold => "소한",
            Self::StartOfSpring => "입춘",
            Self::AwakeningOfInsects => "경칩",
            Self::PureBrightness => "청명",
            Self::StartOfSummer => "입하",
            Self::GrainInEar => "망종",
            Self::MinorHeat => "소서",
            Self::StartOfAutumn => "입추",
            Self::WhiteDew => "백로",
            Self::ColdDew => "한로",
            Self::StartOfWinter => "입동",
            Self::MajorSnow => "대설",
        }
    }

    /// Parse the traditional-character name.
    pub fn from_hanja(s: &str) -> Option<Self> {
        ALL_SOLAR_TERMS.iter().copied().find(|t| t.hanja() == s)
    }

    /// Branch of the saju month this term opens.
    pub const fn branch(self) -> Branch {
        match self {
            Self::StartOfSpring => Branch::In,
            Self::AwakeningOfInsects => Branch::Myo,
            Self::PureBrightness => Branch::Jin,
            Self::StartOfSummer => Branch::Sa,
            Self::GrainInEar => Branch::O,
            Self::MinorHeat => Branch::Mi,
            Self::StartOfAutumn => Branch::Sin,
            Self::WhiteDew => Branch::Yu,
            Self::ColdDew => Branch::Sul,
            Self::StartOfWinter => Branch::Hae,
            Self::MajorSnow => Branch::Ja,
            Self::MinorCold => Branch::Chuk,
        }
    }

    /// Saju month index of the month this term opens (立春 = 0 .. 小寒 = 11).
    pub const fn month_index(self) -> u8 {
        (self.index() + 11) % 12
    }
}
