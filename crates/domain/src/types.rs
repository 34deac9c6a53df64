// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;

/// The jurisdiction a holiday record applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JurisdictionScope {
    /// Observed across the whole country.
    National,
    /// Observed only in the listed subdivisions (ISO 3166-2 codes).
    Subdivision(Vec<String>),
    /// Already scoped by the provider to the requested jurisdiction.
    Unrestricted,
}

impl JurisdictionScope {
    /// Returns whether a record with this scope applies to a jurisdiction.
    ///
    /// Without a subdivision only country-wide records apply. With a
    /// subdivision, records listing that subdivision apply as well.
    ///
    /// # Arguments
    ///
    /// * `subdivision` - The selected subdivision code, if any
    #[must_use]
    pub fn applies_to(&self, subdivision: Option<&str>) -> bool {
        match (self, subdivision) {
            (Self::National | Self::Unrestricted, _) => true,
            (Self::Subdivision(_), None) => false,
            (Self::Subdivision(codes), Some(code)) => codes.iter().any(|c| c == code),
        }
    }
}

/// A single public holiday as reported by a holiday source.
///
/// Records are immutable once fetched; the only rewrite is the name
/// enrichment performed during reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    /// The day the holiday falls on.
    pub date: Date,
    /// The holiday name in the local language.
    pub local_name: String,
    /// The holiday name in English.
    pub generic_name: String,
    /// Where the holiday is observed.
    pub scope: JurisdictionScope,
}

impl HolidayRecord {
    /// Creates a new `HolidayRecord`.
    #[must_use]
    pub fn new(date: Date, local_name: &str, generic_name: &str, scope: JurisdictionScope) -> Self {
        Self {
            date,
            local_name: local_name.to_string(),
            generic_name: generic_name.to_string(),
            scope,
        }
    }

    /// Creates a country-wide `HolidayRecord`.
    #[must_use]
    pub fn national(date: Date, local_name: &str, generic_name: &str) -> Self {
        Self::new(date, local_name, generic_name, JurisdictionScope::National)
    }
}

/// How much the two holiday sources agree on a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confidence {
    /// Reported by the primary source, or the primary source does not
    /// cover the jurisdiction.
    Confirmed,
    /// Reported only by the secondary source while the primary source
    /// was authoritative.
    Unconfirmed,
}

impl Confidence {
    /// Converts this confidence tag to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Unconfirmed => "unconfirmed",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// All holidays falling on one date, tagged with a confidence level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Holidays on this date, in merge order. Never empty.
    pub holidays: Vec<HolidayRecord>,
    /// Agreement between the sources for this date.
    pub confidence: Confidence,
}

impl CalendarDay {
    /// Returns the display names of all holidays on this day.
    ///
    /// The local name is preferred; the English name is used when the
    /// local one is empty.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.holidays
            .iter()
            .map(|h| {
                if h.local_name.is_empty() {
                    h.generic_name.as_str()
                } else {
                    h.local_name.as_str()
                }
            })
            .collect()
    }
}

/// The reconciled holiday calendar, ordered by date.
pub type CalendarMap = BTreeMap<Date, CalendarDay>;

/// A holiday reported only by the secondary source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// The day of the unconfirmed holiday.
    pub date: Date,
    /// The holiday name in the local language.
    pub local_name: String,
    /// The holiday name in English.
    pub generic_name: String,
}

impl Warning {
    /// Returns a display label for this warning.
    ///
    /// Renders `local (generic)` when both names are present and differ,
    /// otherwise whichever name is available.
    #[must_use]
    pub fn label(&self) -> String {
        if self.local_name.is_empty() {
            return self.generic_name.clone();
        }
        if !self.generic_name.is_empty() && self.local_name != self.generic_name {
            return format!("{} ({})", self.local_name, self.generic_name);
        }
        self.local_name.clone()
    }
}

impl From<&HolidayRecord> for Warning {
    fn from(record: &HolidayRecord) -> Self {
        Self {
            date: record.date,
            local_name: record.local_name.clone(),
            generic_name: record.generic_name.clone(),
        }
    }
}

/// The joined output of both holiday sources for one planning run.
///
/// A failed fetch is represented by an empty record list; a failed
/// primary fetch additionally clears `primary_available`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceResults {
    /// Records from the primary source.
    pub primary: Vec<HolidayRecord>,
    /// Whether the primary source answered for this jurisdiction.
    pub primary_available: bool,
    /// Records from the secondary source.
    pub secondary: Vec<HolidayRecord>,
}

impl SourceResults {
    /// Creates a result set where neither source produced data.
    ///
    /// Planning from this value degrades to weekends-only.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            primary: Vec::new(),
            primary_available: false,
            secondary: Vec::new(),
        }
    }
}
