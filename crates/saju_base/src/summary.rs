//! Elemental and yin-yang summary of a four-pillars record.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::element::{ALL_ELEMENTS, Element, Polarity};
use crate::pillar::FourPillars;

/// Per-element occurrence counts, stored in canonical element order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementCounts([u8; 5]);

impl ElementCounts {
    pub fn get(&self, element: Element) -> u8 {
        self.0[element.index() as usize]
    }

    pub fn add(&mut self, element: Element) {
        self.0[element.index() as usize] += 1;
    }

    /// `(element, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        ALL_ELEMENTS.iter().map(|&e| (e, self.get(e)))
    }

    pub fn total(&self) -> u8 {
        self.0.iter().sum()
    }
}

impl Serialize for ElementCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        for (element, count) in self.iter() {
            map.serialize_entry(element.name(), &count)?;
        }
        map.end()
    }
}

/// Yang and yin occurrence counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct PolarityCounts {
    pub yang: u8,
    pub yin: u8,
}

impl PolarityCounts {
    pub fn add(&mut self, polarity: Polarity) {
        match polarity {
            Polarity::Yang => self.yang += 1,
            Polarity::Yin => self.yin += 1,
        }
    }

    pub fn get(&self, polarity: Polarity) -> u8 {
        match polarity {
            Polarity::Yang => self.yang,
            Polarity::Yin => self.yin,
        }
    }
}

/// An element paired with its count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ElementCount {
    pub element: Element,
    pub count: u8,
}

/// Three-way yin-yang balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum BalanceState {
    Balanced,
    YangDominant,
    YinDominant,
}

/// Aggregate element and polarity picture of a chart.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Summary {
    pub element_counts: ElementCounts,
    pub polarity_counts: PolarityCounts,
    /// First element in canonical order holding the maximum count.
    pub strongest: ElementCount,
    /// First element in canonical order holding the minimum count.
    pub weakest: ElementCount,
    pub balance: BalanceState,
    pub balance_message: String,
    /// All five elements by descending count; equal counts keep canonical order.
    pub ranked: Vec<ElementCount>,
    /// Number of stem/branch symbols counted (2 per pillar).
    pub total: u8,
}

/// Summarize the stems and branches of a chart.
///
/// Counts the year, month and day pillars, plus the hour pillar when
/// `include_hour` is set and one is present. Each pillar contributes its
/// stem and its branch to both the element and the polarity counts.
pub fn make_summary(pillars: &FourPillars, include_hour: bool) -> Summary {
    let mut element_counts = ElementCounts::default();
    let mut polarity_counts = PolarityCounts::default();
    let mut counted = 0u8;

    for pillar in pillars.solid().take(if include_hour { 4 } else { 3 }) {
        element_counts.add(pillar.stem_element());
        element_counts.add(pillar.branch_element());
        polarity_counts.add(pillar.stem_polarity());
        polarity_counts.add(pillar.branch_polarity());
        counted += 1;
    }

    let mut ranked: Vec<ElementCount> = element_counts
        .iter()
        .map(|(element, count)| ElementCount { element, count })
        .collect();
    // Stable sort: ties stay in canonical order.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));

    let max = ranked[0].count;
    let min = ranked[ranked.len() - 1].count;
    let strongest = ranked.iter().copied().find(|e| e.count == max).unwrap_or(ranked[0]);
    let weakest = ranked
        .iter()
        .copied()
        .find(|e| e.count == min)
        .unwrap_or(ranked[ranked.len() - 1]);

    let (balance, balance_message) = if polarity_counts.yang == polarity_counts.yin {
        (BalanceState::Balanced, "음양의 균형이 비교적 잘 맞습니다.".to_string())
    } else if polarity_counts.yang > polarity_counts.yin {
        (
            BalanceState::YangDominant,
            format!("양({})의 기운이 더 강합니다.", polarity_counts.yang),
        )
    } else {
        (
            BalanceState::YinDominant,
            format!("음({})의 기운이 더 강합니다.", polarity_counts.yin),
        )
    };

    Summary {
        element_counts,
        polarity_counts,
        strongest,
        weakest,
        balance,
        balance_message,
        ranked,
        total: counted * 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::Branch;
    use crate::pillar::Pillar;
    use crate::stem::Stem;

    // 1990-05-15 14:30 KST: 경오 신사 경진 계미.
    fn chart(hour: bool) -> FourPillars {
        FourPillars {
            year: Pillar::new(Stem::Gyeong, Branch::O),
            month: Pillar::new(Stem::Sin, Branch::Sa),
            day: Pillar::new(Stem::Gyeong, Branch::Jin),
            hour: hour.then(|| Pillar::new(Stem::Gye, Branch::Mi)),
        }
    }

    #[test]
    fn four_pillar_counts() {
        let s = make_summary(&chart(true), true);
        assert_eq!(s.total, 8);
        assert_eq!(s.element_counts.total(), 8);
        assert_eq!(s.element_counts.get(Element::Wood), 0);
        assert_eq!(s.element_counts.get(Element::Fire), 2);
        assert_eq!(s.element_counts.get(Element::Earth), 2);
        assert_eq!(s.element_counts.get(Element::Metal), 3);
        assert_eq!(s.element_counts.get(Element::Water), 1);
        assert_eq!(s.strongest, ElementCount { element: Element::Metal, count: 3 });
        assert_eq!(s.weakest, ElementCount { element: Element::Wood, count: 0 });
        assert_eq!(s.polarity_counts, PolarityCounts { yang: 4, yin: 4 });
        assert_eq!(s.balance, BalanceState::Balanced);
        assert_eq!(s.balance_message, "음양의 균형이 비교적 잘 맞습니다.");
    }

    #[test]
    fn three_pillar_counts() {
        let s = make_summary(&chart(false), false);
        assert_eq!(s.total, 6);
        assert_eq!(s.element_counts.total(), 6);
        assert_eq!(s.weakest.element, Element::Wood);
        assert_eq!(s.polarity_counts, PolarityCounts { yang: 4, yin: 2 });
        assert_eq!(s.balance, BalanceState::YangDominant);
        assert_eq!(s.balance_message, "양(4)의 기운이 더 강합니다.");
    }

    #[test]
    fn hour_ignored_when_excluded() {
        let s = make_summary(&chart(true), false);
        assert_eq!(s.total, 6);
    }

    #[test]
    fn ties_follow_canonical_order() {
        // 갑자 병인 무진: Wood 2, Fire 1, Earth 2, Water 1, Metal 0.
        let fp = FourPillars {
            year: Pillar::new(Stem::Gap, Branch::Ja),
            month: Pillar::new(Stem::Byeong, Branch::In),
            day: Pillar::new(Stem::Mu, Branch::Jin),
            hour: None,
        };
        let s = make_summary(&fp, false);
        assert_eq!(s.strongest.element, Element::Wood);
        assert_eq!(s.weakest.element, Element::Metal);
        let order: Vec<Element> = s.ranked.iter().map(|e| e.element).collect();
        assert_eq!(
            order,
            [Element::Wood, Element::Earth, Element::Fire, Element::Water, Element::Metal]
        );
    }

    #[test]
    fn yin_dominant_message() {
        let fp = FourPillars {
            year: Pillar::new(Stem::Eul, Branch::Chuk),
            month: Pillar::new(Stem::Jeong, Branch::Myo),
            day: Pillar::new(Stem::Gi, Branch::Sa),
            hour: None,
        };
        let s = make_summary(&fp, false);
        assert_eq!(s.balance, BalanceState::YinDominant);
        assert_eq!(s.balance_message, "음(6)의 기운이 더 강합니다.");
    }

    #[test]
    fn counts_serialize_as_ordered_map() {
        let s = make_summary(&chart(true), true);
        let json = serde_json::to_string(&s.element_counts).unwrap();
        assert_eq!(json, r#"{"Wood":0,"Fire":2,"Earth":2,"Metal":3,"Water":1}"#);
    }
}
