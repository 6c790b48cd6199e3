//! Error types for dataset loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an ASN dataset
///
/// Both variants are fatal for the command-line tool: there is nothing to
/// query without a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read (missing, unreadable, not UTF-8)
    #[error("Failed to read dataset {}", .path.display())]
    Read {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The dataset is not valid JSON or does not have the expected shape
    #[error("Failed to parse dataset {source_name}")]
    Parse {
        /// Name of the document being parsed (usually the file name)
        source_name: String,
        /// Underlying JSON error, with line and column
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_mentions_path() {
        let err = DatasetError::Read {
            path: PathBuf::from("/nonexistent/ASNs.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        };
        assert_eq!(err.to_string(), "Failed to read dataset /nonexistent/ASNs.json");
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("No such file"));
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = DatasetError::Parse {
            source_name: "ASNs.json".to_string(),
            source: json_err,
        };
        assert_eq!(err.to_string(), "Failed to parse dataset ASNs.json");
        assert!(std::error::Error::source(&err).is_some());
    }
}
