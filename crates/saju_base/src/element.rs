//! The five elements (오행) and the two polarities (음양).
//!
//! Production cycle: Wood → Fire → Earth → Metal → Water → Wood.
//! Control cycle: Wood ⊣ Earth ⊣ Water ⊣ Fire ⊣ Metal ⊣ Wood.

use serde::{Deserialize, Serialize};

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in canonical order (Wood, Fire, Earth, Metal, Water).
///
/// Strongest/weakest tie-breaks and every per-element listing follow this order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based canonical index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Korean syllable: 목, 화, 토, 금, 수.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    /// Chinese character: 木, 火, 土, 金, 水.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// Display label such as `목(木)`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wood => "목(木)",
            Self::Fire => "화(火)",
            Self::Earth => "토(土)",
            Self::Metal => "금(金)",
            Self::Water => "수(水)",
        }
    }

    /// The element this one produces.
    pub const fn produces(self) -> Element {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element that produces this one.
    pub const fn produced_by(self) -> Element {
        match self {
            Self::Wood => Self::Water,
            Self::Fire => Self::Wood,
            Self::Earth => Self::Fire,
            Self::Metal => Self::Earth,
            Self::Water => Self::Metal,
        }
    }

    /// The element this one controls.
    pub const fn controls(self) -> Element {
        match self {
            Self::Wood => Self::Earth,
            Self::Fire => Self::Metal,
            Self::Earth => Self::Water,
            Self::Metal => Self::Wood,
            Self::Water => Self::Fire,
        }
    }

    /// The element that controls this one.
    pub const fn controlled_by(self) -> Element {
        match self {
            Self::Wood => Self::Metal,
            Self::Fire => Self::Water,
            Self::Earth => Self::Wood,
            Self::Metal => Self::Fire,
            Self::Water => Self::Earth,
        }
    }
}

/// Yin/Yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Korean syllable: 양 or 음.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Yang => "양",
            Self::Yin => "음",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_canonical_order() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }

    #[test]
    fn production_is_five_cycle() {
        let mut e = Element::Wood;
        for _ in 0..5 {
            assert_eq!(e.produces().produced_by(), e);
            e = e.produces();
        }
        assert_eq!(e, Element::Wood);
    }

    #[test]
    fn control_inverse() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.controls().controlled_by(), e);
            assert_ne!(e.controls(), e.produces());
        }
    }

    #[test]
    fn labels() {
        assert_eq!(Element::Metal.label(), "금(金)");
        assert_eq!(Polarity::Yin.korean(), "음");
    }
}
