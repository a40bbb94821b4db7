//! Precomputed solar-term table.
//!
//! Maps each calendar year to its 12 major-term instants in table order.
//! The interchange format is JSON keyed by year, each year holding twelve
//! `{ "term": "立春", "iso": "2024-02-04T08:20:11.839Z" }` records.
//! Loaded tables are validated: contiguous years, exactly 12 entries per
//! year in canonical order, strictly increasing instants.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use saju_time::UtcTime;

use crate::error::SolarError;
use crate::generator::solar_term_instant;
use crate::solar_term::{ALL_SOLAR_TERMS, SolarTerm};

/// Inclusive span of calendar years covered by a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRange {
    pub start: i32,
    pub end: i32,
}

/// Span of the built-in table. One year of margin before the supported
/// chart range lets January dates of 1900 see December 1899 terms.
pub const DEFAULT_TABLE_RANGE: TableRange = TableRange {
    start: 1899,
    end: 2100,
};

impl TableRange {
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn validate(self) -> Result<Self, SolarError> {
        if self.start > self.end {
            return Err(SolarError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(self)
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }
}

impl Default for TableRange {
    fn default() -> Self {
        DEFAULT_TABLE_RANGE
    }
}

/// One solar term and the UTC instant it begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "EntryRecord", try_from = "EntryRecord")]
pub struct SolarTermEntry {
    pub term: SolarTerm,
    pub instant: UtcTime,
}

#[derive(Serialize, Deserialize)]
struct EntryRecord {
    term: String,
    iso: String,
}

impl From<SolarTermEntry> for EntryRecord {
    fn from(e: SolarTermEntry) -> Self {
        Self {
            term: e.term.hanja().to_string(),
            iso: e.instant.to_string(),
        }
    }
}

impl TryFrom<EntryRecord> for SolarTermEntry {
    type Error = SolarError;

    fn try_from(r: EntryRecord) -> Result<Self, Self::Error> {
        let term = SolarTerm::from_hanja(&r.term)
            .ok_or_else(|| SolarError::MalformedTable(format!("unknown term {:?}", r.term)))?;
        let instant = r.iso.parse::<UtcTime>()?;
        Ok(Self { term, instant })
    }
}

/// Year → 12 solar-term entries, read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarTermTable {
    range: TableRange,
    years: BTreeMap<i32, [SolarTermEntry; 12]>,
}

impl SolarTermTable {
    /// Compute every year of `range` with the solar-term generator.
    pub fn generate(range: TableRange) -> Result<Self, SolarError> {
        Ok(Self::build(range.validate()?))
    }

    fn build(range: TableRange) -> Self {
        let years = range.years().map(|y| (y, generate_year(y))).collect();
        debug!(start = range.start, end = range.end, "solar-term table generated");
        Self { range, years }
    }

    /// Parse and validate the JSON interchange format.
    pub fn from_json(json: &str) -> Result<Self, SolarError> {
        let raw: BTreeMap<i32, Vec<SolarTermEntry>> = serde_json::from_str(json)?;

        let (Some(&start), Some(&end)) = (raw.keys().next(), raw.keys().next_back()) else {
            return Err(SolarError::MalformedTable("no years".to_string()));
        };
        let range = TableRange { start, end };
        if raw.len() != range.years().count() {
            return Err(SolarError::MalformedTable(format!(
                "years {start}..={end} are not contiguous"
            )));
        }

        let mut years = BTreeMap::new();
        for (year, entries) in raw {
            years.insert(year, validate_year(year, entries)?);
        }
        Ok(Self { range, years })
    }

    /// Read a JSON table from disk.
    pub fn load(path: &Path) -> Result<Self, SolarError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serialize to the JSON interchange format.
    pub fn to_json(&self) -> Result<String, SolarError> {
        Ok(serde_json::to_string_pretty(&self.years)?)
    }

    pub fn range(&self) -> TableRange {
        self.range
    }

    /// The 12 entries of `year`, or [`SolarError::YearOutOfRange`].
    pub fn year(&self, year: i32) -> Result<&[SolarTermEntry; 12], SolarError> {
        self.try_year(year).ok_or(SolarError::YearOutOfRange {
            year,
            start: self.range.start,
            end: self.range.end,
        })
    }

    pub fn try_year(&self, year: i32) -> Option<&[SolarTermEntry; 12]> {
        self.years.get(&year)
    }

    /// Instant of Start of Spring (立春) in `year`.
    pub fn start_of_spring(&self, year: i32) -> Option<UtcTime> {
        self.try_year(year)
            .map(|entries| entries[SolarTerm::StartOfSpring.index() as usize].instant)
    }
}

/// All 12 terms of one calendar year, freshly computed.
pub fn generate_year(year: i32) -> [SolarTermEntry; 12] {
    ALL_SOLAR_TERMS.map(|term| SolarTermEntry {
        term,
        instant: solar_term_instant(year, term),
    })
}

fn validate_year(year: i32, entries: Vec<SolarTermEntry>) -> Result<[SolarTermEntry; 12], SolarError> {
    if entries.len() != ALL_SOLAR_TERMS.len() {
        return Err(SolarError::MalformedTable(format!(
            "{year}: {} entries, expected 12",
            entries.len()
        )));
    }
    for (entry, expected) in entries.iter().zip(ALL_SOLAR_TERMS) {
        if entry.term != expected {
            return Err(SolarError::MalformedTable(format!(
                "{year}: found {} where {} belongs",
                entry.term.hanja(),
                expected.hanja()
            )));
        }
    }
    if let Some(pair) = entries.windows(2).find(|w| w[0].instant >= w[1].instant) {
        return Err(SolarError::MalformedTable(format!(
            "{year}: {} is not before {}",
            pair[0].term.hanja(),
            pair[1].term.hanja()
        )));
    }
    entries
        .try_into()
        .map_err(|_| SolarError::MalformedTable(format!("{year}: entry count")))
}

static GLOBAL_TABLE: OnceLock<SolarTermTable> = OnceLock::new();

/// Process-wide table over [`DEFAULT_TABLE_RANGE`], built on first use.
pub fn global_table() -> &'static SolarTermTable {
    GLOBAL_TABLE.get_or_init(|| SolarTermTable::build(DEFAULT_TABLE_RANGE))
}

/// Solar-term entries of `year` from the global table.
pub fn resolve_solar_term_table(year: i32) -> Result<&'static [SolarTermEntry; 12], SolarError> {
    global_table().year(year)
}
