//! Readings derived from a computed four-pillars chart.
//!
//! This crate provides:
//! - A daily fortune for a chart against any reference date
//! - A seven-category written interpretation
//! - Per-element bars with whole-number percentages
//! - Deterministic lucky numbers seeded from the chart and the day's reading
//!
//! All functions are pure: the same chart and date give the same output.

pub mod daily_fortune;
pub mod element_bars;
pub mod interpretation;
pub mod lucky_numbers;
pub mod messages;

pub use daily_fortune::{Alignment, DailyFortune, build_daily_fortune};
pub use element_bars::{ElementBar, build_element_bars};
pub use interpretation::{
    ALL_CATEGORY_KEYS, CategoryKey, InterpretationCategory, build_interpretation,
};
pub use lucky_numbers::{LuckyNumbers, MAX_NUMBER, PICK_COUNT, recommend_lucky_numbers};
