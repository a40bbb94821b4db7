//! Pillars and the four-pillars record.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Deserialize;

use crate::branch::{Animal, Branch};
use crate::element::{Element, Polarity};
use crate::stem::Stem;

/// One of the four pillar positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
pub enum PillarSlot {
    Year,
    Month,
    Day,
    Hour,
}

/// All four slots in chart order.
pub const ALL_PILLAR_SLOTS: [PillarSlot; 4] = [
    PillarSlot::Year,
    PillarSlot::Month,
    PillarSlot::Day,
    PillarSlot::Hour,
];

impl PillarSlot {
    /// Lowercase key: `year`, `month`, `day`, `hour`.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }

    /// Korean label: 연주, 월주, 일주, 시주.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Year => "연주",
            Self::Month => "월주",
            Self::Day => "일주",
            Self::Hour => "시주",
        }
    }

    /// Life area traditionally read from this pillar.
    pub const fn focus(self) -> &'static str {
        match self {
            Self::Year => "초년·부모",
            Self::Month => "청년기·형제",
            Self::Day => "성향·배우자",
            Self::Hour => "말년·자녀",
        }
    }
}

/// A stem/branch pair with optional chart context.
///
/// Element, polarity, animal and display name are derived from the pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
    /// Life-area focus of the slot this pillar occupies.
    pub focus: Option<&'static str>,
    /// Lunar month number of the birth date (month pillar only).
    pub lunar_month: Option<u32>,
    /// Whether that lunar month is intercalary (month pillar only).
    pub leap_month: Option<bool>,
    /// Korean lunar month label such as `윤4월` (month pillar only).
    pub month_label: Option<String>,
    /// Clock range of the hour branch (hour pillar only).
    pub hour_range: Option<&'static str>,
}

impl Pillar {
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self {
            stem,
            branch,
            focus: None,
            lunar_month: None,
            leap_month: None,
            month_label: None,
            hour_range: None,
        }
    }

    pub fn with_slot(mut self, slot: PillarSlot) -> Self {
        self.focus = Some(slot.focus());
        self
    }

    pub fn with_lunar_month(mut self, month: u32, leap: bool, label: String) -> Self {
        self.lunar_month = Some(month);
        self.leap_month = Some(leap);
        self.month_label = Some(label);
        self
    }

    pub fn with_hour_range(mut self, range: &'static str) -> Self {
        self.hour_range = Some(range);
        self
    }

    /// Korean display name, e.g. `경오`.
    pub fn name(&self) -> String {
        format!("{}{}", self.stem.korean(), self.branch.korean())
    }

    pub fn stem_element(&self) -> Element {
        self.stem.element()
    }

    pub fn branch_element(&self) -> Element {
        self.branch.element()
    }

    pub fn stem_polarity(&self) -> Polarity {
        self.stem.polarity()
    }

    pub fn branch_polarity(&self) -> Polarity {
        self.branch.polarity()
    }

    pub fn animal(&self) -> Animal {
        self.branch.animal()
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Pillar", 13)?;
        s.serialize_field("stem", &self.stem)?;
        s.serialize_field("branch", &self.branch)?;
        s.serialize_field("name", &self.name())?;
        s.serialize_field("stem_element", &self.stem_element())?;
        s.serialize_field("branch_element", &self.branch_element())?;
        s.serialize_field("stem_polarity", &self.stem_polarity())?;
        s.serialize_field("branch_polarity", &self.branch_polarity())?;
        s.serialize_field("animal", &self.animal())?;
        s.serialize_field("focus", &self.focus)?;
        s.serialize_field("lunar_month", &self.lunar_month)?;
        s.serialize_field("leap_month", &self.leap_month)?;
        s.serialize_field("month_label", &self.month_label)?;
        s.serialize_field("hour_range", &self.hour_range)?;
        s.end()
    }
}

/// Year, month and day pillars plus the optional hour pillar.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    /// Present only when a birth time was supplied.
    pub hour: Option<Pillar>,
}

impl FourPillars {
    /// The pillars that are present, in chart order.
    pub fn solid(&self) -> impl Iterator<Item = &Pillar> {
        [Some(&self.year), Some(&self.month), Some(&self.day), self.hour.as_ref()]
            .into_iter()
            .flatten()
    }

    pub fn get(&self, slot: PillarSlot) -> Option<&Pillar> {
        match slot {
            PillarSlot::Year => Some(&self.year),
            PillarSlot::Month => Some(&self.month),
            PillarSlot::Day => Some(&self.day),
            PillarSlot::Hour => self.hour.as_ref(),
        }
    }

    pub fn has_hour(&self) -> bool {
        self.hour.is_some()
    }
}
