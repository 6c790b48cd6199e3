//! Core data types: ASN records and the dataset that holds them

use indexmap::IndexMap;
use serde::de::IgnoredAny;
use serde::Deserialize;

/// Identifier shown for a record without an `id`
pub const UNKNOWN_ID: &str = "Unknown";

/// Organization name shown for a record without a `name`
pub const UNKNOWN_NAME: &str = "Unknown Organization";

/// A single autonomous system and the netblocks it announces.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AsnRecord {
    /// ASN identifier, e.g. "AS1234"
    pub id: Option<String>,
    /// Organization name
    pub name: Option<String>,
    /// Announced CIDR blocks in document order. Per-CIDR metadata is skipped.
    #[serde(default)]
    pub netblocks: IndexMap<String, IgnoredAny>,
}

impl AsnRecord {
    /// Identifier, or [`UNKNOWN_ID`] when the record has none
    pub fn display_id(&self) -> &str {
        self.id.as_deref().unwrap_or(UNKNOWN_ID)
    }

    /// Organization name, or [`UNKNOWN_NAME`] when the record has none
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_NAME)
    }

    /// CIDR strings of this record, in document order
    pub fn cidrs(&self) -> impl Iterator<Item = &str> {
        self.netblocks.keys().map(String::as_str)
    }
}

/// Read-only mapping from dataset key to [`AsnRecord`].
///
/// Records iterate in the order they appear in the JSON document.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: IndexMap<String, AsnRecord>,
    source_name: String,
}

impl Dataset {
    /// Build a dataset from already-parsed records
    pub fn new(records: IndexMap<String, AsnRecord>, source_name: impl Into<String>) -> Self {
        Self {
            records,
            source_name: source_name.into(),
        }
    }

    /// Name of the document this dataset was loaded from
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the dataset has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over `(key, record)` pairs in document order
    pub fn records(&self) -> impl Iterator<Item = (&str, &AsnRecord)> {
        self.records.iter().map(|(key, record)| (key.as_str(), record))
    }

    /// Look up a record by its dataset key
    pub fn get(&self, key: &str) -> Option<&AsnRecord> {
        self.records.get(key)
    }

    /// First record, in document order, whose `id` equals `id`.
    ///
    /// Duplicate ids are not rejected at load time; later ones are shadowed.
    pub fn find_by_id(&self, id: &str) -> Option<&AsnRecord> {
        self.records
            .values()
            .find(|record| record.id.as_deref() == Some(id))
    }
}
