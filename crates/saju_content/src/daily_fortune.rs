//! Daily reading: a chart against the day pillar of a reference date.

use serde::Serialize;

use saju_base::{
    ALL_ELEMENTS, BranchRelation, ElementRelation, Polarity, PolarityImbalance, branch_relation,
    element_relation, polarity_imbalance,
};
use saju_chart::{FourPillarsResult, daily_reference_pillar, full_date_label};
use saju_time::CivilDate;

use crate::messages;

/// How today's stem element sits in the chart's element counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Today's element is the chart's strongest.
    Strong,
    /// Today's element is the chart's weakest.
    Weak,
    /// Count at or above the per-element average.
    Supportive,
    Neutral,
}

impl Alignment {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Weak => "weak",
            Self::Supportive => "supportive",
            Self::Neutral => "neutral",
        }
    }
}

/// A daily fortune for one chart and one reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyFortune {
    /// `"2024년 3월 20일 수요일"`.
    pub date_label: String,
    /// Today's day pillar, e.g. `계미`.
    pub pillar_name: String,
    /// Today's stem element, e.g. `수(水)`.
    pub element_label: &'static str,
    pub polarity: Polarity,
    pub element_relation: ElementRelation,
    pub branch_relation: BranchRelation,
    pub alignment: Alignment,
    pub energy_text: String,
    pub action_text: String,
    pub caution_text: String,
}

/// Build the daily fortune of `result` for `reference_date`.
pub fn build_daily_fortune(result: &FourPillarsResult, reference_date: CivilDate) -> DailyFortune {
    let (stem, branch) = daily_reference_pillar(reference_date);
    let element = stem.element();
    let polarity = stem.polarity();
    let summary = &result.summary;

    let count = f64::from(summary.element_counts.get(element));
    let average = f64::from(summary.element_counts.total()) / ALL_ELEMENTS.len() as f64;
    let alignment = if element == summary.strongest.element {
        Alignment::Strong
    } else if element == summary.weakest.element {
        Alignment::Weak
    } else if count >= average {
        Alignment::Supportive
    } else {
        Alignment::Neutral
    };

    let day = &result.pillars.day;
    let element_rel = element_relation(day.stem_element(), element);
    let branch_rel = branch_relation(day.branch, branch);

    let balance = balance_text(
        polarity_imbalance(summary.polarity_counts.yang, summary.polarity_counts.yin),
        polarity,
    );
    let (branch_positive, branch_caution) = match branch_rel {
        BranchRelation::Same | BranchRelation::Harmony => (messages::daily_branch(branch_rel), ""),
        BranchRelation::Clash => ("", messages::daily_branch(branch_rel)),
        BranchRelation::Neutral => ("", ""),
    };

    let energy_text = format!(
        "{} {}",
        messages::daily_relation(element_rel),
        messages::daily_alignment(alignment)
    )
    .trim()
    .to_string();
    let action_text = join_present(&[messages::daily_activity(element), branch_positive]);
    let caution_text = join_present(&[balance, messages::daily_care(element), branch_caution]);

    DailyFortune {
        date_label: full_date_label(reference_date),
        pillar_name: format!("{}{}", stem.korean(), branch.korean()),
        element_label: element.label(),
        polarity,
        element_relation: element_rel,
        branch_relation: branch_rel,
        alignment,
        energy_text,
        action_text,
        caution_text,
    }
}

fn balance_text(imbalance: PolarityImbalance, today: Polarity) -> &'static str {
    match (imbalance, today) {
        (PolarityImbalance::YangHeavy, Polarity::Yang) => messages::BALANCE_YANG_HEAVY_YANG_DAY,
        (PolarityImbalance::YangHeavy, Polarity::Yin) => messages::BALANCE_YANG_HEAVY_YIN_DAY,
        (PolarityImbalance::YinHeavy, Polarity::Yin) => messages::BALANCE_YIN_HEAVY_YIN_DAY,
        (PolarityImbalance::YinHeavy, Polarity::Yang) => messages::BALANCE_YIN_HEAVY_YANG_DAY,
        (PolarityImbalance::Balanced, _) => messages::BALANCE_STEADY,
    }
}

fn join_present(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
