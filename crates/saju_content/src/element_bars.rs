//! Per-element share of a chart, for bar displays.

use serde::Serialize;

use saju_base::Element;
use saju_chart::FourPillarsResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementBar {
    pub element: Element,
    /// `목(木)` style label.
    pub label: &'static str,
    pub count: u8,
    /// Whole-number percentage of all counted symbols, 0 for an empty chart.
    pub ratio: u8,
}

/// One bar per element in canonical order.
pub fn build_element_bars(result: &FourPillarsResult) -> Vec<ElementBar> {
    let counts = &result.summary.element_counts;
    let total = counts.total();
    counts
        .iter()
        .map(|(element, count)| ElementBar {
            element,
            label: element.label(),
            count,
            ratio: percent(count, total),
        })
        .collect()
}

fn percent(count: u8, total: u8) -> u8 {
    if total == 0 {
        return 0;
    }
    (f64::from(count) / f64::from(total) * 100.0).round() as u8
}
