//! Earthly branches (지지) and their zodiac animals.
//!
//! Twelve cyclic symbols. Each branch has exactly one six-harmony (육합)
//! partner and exactly one clash (충) partner, six pairs each.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};

/// The twelve earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in cycle order (0 = 자, 11 = 해).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

/// Zodiac animal of a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Animal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl Animal {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Rat => "쥐",
            Self::Ox => "소",
            Self::Tiger => "호랑이",
            Self::Rabbit => "토끼",
            Self::Dragon => "용",
            Self::Snake => "뱀",
            Self::Horse => "말",
            Self::Goat => "양",
            Self::Monkey => "원숭이",
            Self::Rooster => "닭",
            Self::Dog => "개",
            Self::Pig => "돼지",
        }
    }
}

impl Branch {
    /// Branch for any integer index, reduced with a non-negative modulo.
    pub fn from_index(i: i64) -> Self {
        ALL_BRANCHES[i.rem_euclid(12) as usize]
    }

    /// 0-based index (자=0 .. 해=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Romanized name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ja => "Ja",
            Self::Chuk => "Chuk",
            Self::In => "In",
            Self::Myo => "Myo",
            Self::Jin => "Jin",
            Self::Sa => "Sa",
            Self::O => "O",
            Self::Mi => "Mi",
            Self::Sin => "Sin",
            Self::Yu => "Yu",
            Self::Sul => "Sul",
            Self::Hae => "Hae",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Ja => "자",
            Self::Chuk => "축",
            Self::In => "인",
            Self::Myo => "묘",
            Self::Jin => "진",
            Self::Sa => "사",
            Self::O => "오",
            Self::Mi => "미",
            Self::Sin => "신",
            Self::Yu => "유",
            Self::Sul => "술",
            Self::Hae => "해",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ja => "子",
            Self::Chuk => "丑",
            Self::In => "寅",
            Self::Myo => "卯",
            Self::Jin => "辰",
            Self::Sa => "巳",
            Self::O => "午",
            Self::Mi => "未",
            Self::Sin => "申",
            Self::Yu => "酉",
            Self::Sul => "戌",
            Self::Hae => "亥",
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Ja | Self::Hae => Element::Water,
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Chuk | Self::Jin | Self::Mi | Self::Sul => Element::Earth,
        }
    }

    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Ja | Self::In | Self::Jin | Self::O | Self::Sin | Self::Sul => Polarity::Yang,
            Self::Chuk | Self::Myo | Self::Sa | Self::Mi | Self::Yu | Self::Hae => Polarity::Yin,
        }
    }

    pub const fn animal(self) -> Animal {
        match self {
            Self::Ja => Animal::Rat,
            Self::Chuk => Animal::Ox,
            Self::In => Animal::Tiger,
            Self::Myo => Animal::Rabbit,
            Self::Jin => Animal::Dragon,
            Self::Sa => Animal::Snake,
            Self::O => Animal::Horse,
            Self::Mi => Animal::Goat,
            Self::Sin => Animal::Monkey,
            Self::Yu => Animal::Rooster,
            Self::Sul => Animal::Dog,
            Self::Hae => Animal::Pig,
        }
    }

    /// Six-harmony (육합) partner.
    pub const fn harmony(self) -> Branch {
        match self {
            Self::Ja => Self::Chuk,
            Self::Chuk => Self::Ja,
            Self::In => Self::Hae,
            Self::Myo => Self::Sul,
            Self::Jin => Self::Yu,
            Self::Sa => Self::Sin,
            Self::O => Self::Mi,
            Self::Mi => Self::O,
            Self::Sin => Self::Sa,
            Self::Yu => Self::Jin,
            Self::Sul => Self::Myo,
            Self::Hae => Self::In,
        }
    }

    /// Clash (충) partner, the branch opposite in the cycle.
    pub const fn clash(self) -> Branch {
        match self {
            Self::Ja => Self::O,
            Self::Chuk => Self::Mi,
            Self::In => Self::Sin,
            Self::Myo => Self::Yu,
            Self::Jin => Self::Sul,
            Self::Sa => Self::Hae,
            Self::O => Self::Ja,
            Self::Mi => Self::Chuk,
            Self::Sin => Self::In,
            Self::Yu => Self::Myo,
            Self::Sul => Self::Jin,
            Self::Hae => Self::Sa,
        }
    }
}
