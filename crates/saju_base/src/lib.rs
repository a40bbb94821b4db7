//! Sexagenary building blocks for four-pillars (사주) charts.
//!
//! This crate provides:
//! - Heavenly stems, earthly branches, elements, polarities and animals
//!   as closed enums with exhaustive lookups
//! - Day, hour, year and month stem/branch arithmetic
//! - Pillars and the four-pillars record
//! - Element/polarity summary and the element/branch relation rules
//!
//! Everything here is pure and independent of solar-term data.

pub mod branch;
pub mod element;
pub mod pillar;
pub mod relation;
pub mod sexagenary;
pub mod stem;
pub mod summary;

pub use branch::{ALL_BRANCHES, Animal, Branch};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use pillar::{ALL_PILLAR_SLOTS, FourPillars, Pillar, PillarSlot};
pub use relation::{
    BranchRelation, ElementRelation, IMBALANCE_THRESHOLD, PolarityImbalance, branch_relation,
    element_relation, polarity_imbalance,
};
pub use sexagenary::{
    FIRST_MONTH_STEM_INDEX, cycle_index, day_stem_branch, hour_range_label, hour_stem_branch,
    month_stem, year_stem_branch,
};
pub use stem::{ALL_STEMS, Stem};
pub use summary::{
    BalanceState, ElementCount, ElementCounts, PolarityCounts, Summary, make_summary,
};
