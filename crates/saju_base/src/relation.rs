//! Relations between a reference pillar and another day's stem/branch.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::Element;

/// How a candidate element stands relative to a reference element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementRelation {
    /// Same element.
    Aligned,
    /// Reference produces candidate.
    Output,
    /// Candidate produces reference.
    Resource,
    /// Reference controls candidate.
    Authority,
    /// Candidate controls reference.
    Pressure,
    Neutral,
}

impl ElementRelation {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Aligned => "aligned",
            Self::Output => "output",
            Self::Resource => "resource",
            Self::Authority => "authority",
            Self::Pressure => "pressure",
            Self::Neutral => "neutral",
        }
    }
}

/// Classify `candidate` against `reference`, testing in priority order
/// aligned → output → resource → authority → pressure.
pub fn element_relation(reference: Element, candidate: Element) -> ElementRelation {
    if candidate == reference {
        ElementRelation::Aligned
    } else if reference.produces() == candidate {
        ElementRelation::Output
    } else if reference.produced_by() == candidate {
        ElementRelation::Resource
    } else if reference.controls() == candidate {
        ElementRelation::Authority
    } else if reference.controlled_by() == candidate {
        ElementRelation::Pressure
    } else {
        ElementRelation::Neutral
    }
}

/// How a candidate branch stands relative to a reference branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BranchRelation {
    Same,
    Harmony,
    Clash,
    Neutral,
}

impl BranchRelation {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Same => "same",
            Self::Harmony => "harmony",
            Self::Clash => "clash",
            Self::Neutral => "neutral",
        }
    }
}

pub fn branch_relation(reference: Branch, candidate: Branch) -> BranchRelation {
    if candidate == reference {
        BranchRelation::Same
    } else if reference.harmony() == candidate {
        BranchRelation::Harmony
    } else if reference.clash() == candidate {
        BranchRelation::Clash
    } else {
        BranchRelation::Neutral
    }
}

/// Yin-yang imbalance of a chart, by a margin of at least two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolarityImbalance {
    Balanced,
    YangHeavy,
    YinHeavy,
}

/// Minimum count difference treated as an imbalance.
pub const IMBALANCE_THRESHOLD: u8 = 2;

pub fn polarity_imbalance(yang: u8, yin: u8) -> PolarityImbalance {
    if yang >= yin + IMBALANCE_THRESHOLD {
        PolarityImbalance::YangHeavy
    } else if yin >= yang + IMBALANCE_THRESHOLD {
        PolarityImbalance::YinHeavy
    } else {
        PolarityImbalance::Balanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;
    use crate::element::ALL_ELEMENTS;

    #[test]
    fn every_element_pair_has_a_cycle_relation() {
        for a in ALL_ELEMENTS {
            for b in ALL_ELEMENTS {
                assert_ne!(element_relation(a, b), ElementRelation::Neutral, "{a:?} {b:?}");
            }
        }
    }

    #[test]
    fn each_reference_sees_each_relation_once() {
        for a in ALL_ELEMENTS {
            let mut seen: Vec<ElementRelation> =
                ALL_ELEMENTS.iter().map(|&b| element_relation(a, b)).collect();
            seen.sort_by_key(|r| r.key());
            seen.dedup();
            assert_eq!(seen.len(), 5);
        }
    }

    #[test]
    fn known_relations() {
        assert_eq!(element_relation(Element::Metal, Element::Water), ElementRelation::Output);
        assert_eq!(element_relation(Element::Metal, Element::Earth), ElementRelation::Resource);
        assert_eq!(element_relation(Element::Metal, Element::Wood), ElementRelation::Authority);
        assert_eq!(element_relation(Element::Metal, Element::Fire), ElementRelation::Pressure);
    }

    #[test]
    fn branch_relations() {
        assert_eq!(branch_relation(Branch::Jin, Branch::Jin), BranchRelation::Same);
        assert_eq!(branch_relation(Branch::Jin, Branch::Yu), BranchRelation::Harmony);
        assert_eq!(branch_relation(Branch::Jin, Branch::Sul), BranchRelation::Clash);
        assert_eq!(branch_relation(Branch::Jin, Branch::Mi), BranchRelation::Neutral);
    }

    #[test]
    fn each_branch_has_one_harmony_and_one_clash() {
        for a in ALL_BRANCHES {
            let rels: Vec<BranchRelation> =
                ALL_BRANCHES.iter().map(|&b| branch_relation(a, b)).collect();
            let count = |r| rels.iter().filter(|&&x| x == r).count();
            assert_eq!(count(BranchRelation::Same), 1);
            assert_eq!(count(BranchRelation::Harmony), 1);
            assert_eq!(count(BranchRelation::Clash), 1);
            assert_eq!(count(BranchRelation::Neutral), 9);
        }
    }

    #[test]
    fn imbalance_threshold() {
        assert_eq!(polarity_imbalance(4, 4), PolarityImbalance::Balanced);
        assert_eq!(polarity_imbalance(5, 4), PolarityImbalance::Balanced);
        assert_eq!(polarity_imbalance(4, 2), PolarityImbalance::YangHeavy);
        assert_eq!(polarity_imbalance(1, 5), PolarityImbalance::YinHeavy);
    }
}
