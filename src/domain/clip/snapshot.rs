//! Clipboard snapshot: one record per advertised format

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::format::{FormatFilter, COMMON_FORMATS};
use super::value::ClipValue;

/// One clipboard format and its normalized value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipRecord {
    format: String,
    raw_available: bool,
    value: ClipValue,
}

impl ClipRecord {
    /// Record for a format whose payload was fetched
    pub fn new(format: impl Into<String>, value: ClipValue) -> Self {
        Self {
            format: format.into(),
            raw_available: true,
            value,
        }
    }

    /// Record for a format whose fetch failed or returned nothing
    pub fn absent(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            raw_available: false,
            value: ClipValue::Absent,
        }
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    /// Whether the fetch returned a payload. A payload may still normalize
    /// to [`ClipValue::Absent`].
    pub fn raw_available(&self) -> bool {
        self.raw_available
    }

    pub fn value(&self) -> &ClipValue {
        &self.value
    }
}

impl Serialize for ClipRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("ClipRecord", 2)?;
        record.serialize_field("format", &self.format)?;
        record.serialize_field("data", &self.value)?;
        record.end()
    }
}

/// Immutable, ordered set of records captured at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClipSnapshot {
    records: Vec<ClipRecord>,
}

impl ClipSnapshot {
    /// Build a snapshot from records already in catalog order
    pub fn new(records: Vec<ClipRecord>) -> Self {
        Self { records }
    }

    /// An empty snapshot
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ClipRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Format names in catalog order
    pub fn formats(&self) -> Vec<&str> {
        self.records.iter().map(ClipRecord::format).collect()
    }

    /// Keep only records whose format is in `allow_list`, preserving order.
    pub fn filter(&self, allow_list: &[&str]) -> ClipSnapshot {
        self.retain(|format| allow_list.contains(&format))
    }

    /// Restrict to the common-formats allow-list
    pub fn common_only(&self) -> ClipSnapshot {
        self.filter(COMMON_FORMATS)
    }

    /// Apply a [`FormatFilter`]
    pub fn apply(&self, filter: FormatFilter) -> ClipSnapshot {
        self.retain(|format| filter.allows(format))
    }

    fn retain(&self, keep: impl Fn(&str) -> bool) -> ClipSnapshot {
        Self::new(
            self.records
                .iter()
                .filter(|record| keep(record.format()))
                .cloned()
                .collect(),
        )
    }

    /// Value of the one record named `format`.
    ///
    /// Returns `None` when no record or more than one record matches, or
    /// when the matching record carries no value.
    pub fn single(&self, format: &str) -> Option<&ClipValue> {
        let mut matches = self.records.iter().filter(|r| r.format() == format);
        let record = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        match record.value() {
            ClipValue::Absent => None,
            value => Some(value),
        }
    }

    /// Compact JSON array of `{"format", "data"}` objects.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
