//! Heavenly stems (천간).
//!
//! Ten cyclic symbols. Even indices are yang, odd are yin; consecutive
//! pairs share an element (갑을 Wood, 병정 Fire, 무기 Earth, 경신 Metal,
//! 임계 Water).

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};

/// The ten heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in cycle order (0 = 갑, 9 = 계).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

impl Stem {
    /// Stem for any integer index, reduced with a non-negative modulo.
    pub fn from_index(i: i64) -> Self {
        ALL_STEMS[i.rem_euclid(10) as usize]
    }

    /// 0-based index (갑=0 .. 계=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Romanized name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gap => "Gap",
            Self::Eul => "Eul",
            Self::Byeong => "Byeong",
            Self::Jeong => "Jeong",
            Self::Mu => "Mu",
            Self::Gi => "Gi",
            Self::Gyeong => "Gyeong",
            Self::Sin => "Sin",
            Self::Im => "Im",
            Self::Gye => "Gye",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Gap => "갑",
            Self::Eul => "을",
            Self::Byeong => "병",
            Self::Jeong => "정",
            Self::Mu => "무",
            Self::Gi => "기",
            Self::Gyeong => "경",
            Self::Sin => "신",
            Self::Im => "임",
            Self::Gye => "계",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Gap => "甲",
            Self::Eul => "乙",
            Self::Byeong => "丙",
            Self::Jeong => "丁",
            Self::Mu => "戊",
            Self::Gi => "己",
            Self::Gyeong => "庚",
            Self::Sin => "辛",
            Self::Im => "壬",
            Self::Gye => "癸",
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Gap | Self::Eul => Element::Wood,
            Self::Byeong | Self::Jeong => Element::Fire,
            Self::Mu | Self::Gi => Element::Earth,
            Self::Gyeong | Self::Sin => Element::Metal,
            Self::Im | Self::Gye => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Gap | Self::Byeong | Self::Mu | Self::Gyeong | Self::Im => Polarity::Yang,
            Self::Eul | Self::Jeong | Self::Gi | Self::Sin | Self::Gye => Polarity::Yin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_wraps_negative() {
        assert_eq!(Stem::from_index(-1), Stem::Gye);
        assert_eq!(Stem::from_index(-10), Stem::Gap);
        assert_eq!(Stem::from_index(23), Stem::Jeong);
    }

    #[test]
    fn index_roundtrip() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(Stem::from_index(i as i64), *s);
        }
    }

    #[test]
    fn polarity_alternates() {
        for s in ALL_STEMS {
            let expected = if s.index() % 2 == 0 {
                Polarity::Yang
            } else {
                Polarity::Yin
            };
            assert_eq!(s.polarity(), expected);
        }
    }

    #[test]
    fn pairs_share_element() {
        for pair in ALL_STEMS.chunks(2) {
            assert_eq!(pair[0].element(), pair[1].element());
        }
        assert_eq!(Stem::Gyeong.element(), Element::Metal);
    }
}
