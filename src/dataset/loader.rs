//! Reading a dataset from disk

use crate::dataset::{AsnRecord, Dataset, DatasetError};
use indexmap::IndexMap;
use std::path::Path;
use tracing::debug;

impl Dataset {
    /// Read and parse the dataset at `path`.
    ///
    /// The file name becomes the dataset's [`source_name`](Dataset::source_name).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading ASN dataset");

        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let source_name = path.file_name().map_or_else(
            || path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );

        Self::from_json_str(&json, source_name)
    }

    /// Parse a dataset from an in-memory JSON document
    pub fn from_json_str(json: &str, source_name: impl Into<String>) -> Result<Self, DatasetError> {
        let source_name = source_name.into();
        let records: IndexMap<String, AsnRecord> =
            serde_json::from_str(json).map_err(|source| DatasetError::Parse {
                source_name: source_name.clone(),
                source,
            })?;

        debug!(records = records.len(), source = %source_name, "Parsed ASN dataset");
        Ok(Self::new(records, source_name))
    }
}
