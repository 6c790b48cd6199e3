//! Listing the ASNs of a dataset

use crate::dataset::{AsnRecord, Dataset};
use tracing::debug;

/// Format a record as `"<id> <name>"`, with placeholders for missing fields
pub fn format_asn(record: &AsnRecord) -> String {
    format!("{} {}", record.display_id(), record.display_name())
}

/// One `"<id> <name>"` line per record, sorted lexicographically
pub fn list_asns(dataset: &Dataset) -> Vec<String> {
    let mut names: Vec<String> = dataset.records().map(|(_, record)| format_asn(record)).collect();
    names.sort_unstable();
    debug!(count = names.len(), "Listed ASNs");
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_asn() {
        let record = AsnRecord {
            id: Some("AS15169".to_string()),
            name: Some("GOOGLE".to_string()),
            ..AsnRecord::default()
        };
        assert_eq!(format_asn(&record), "AS15169 GOOGLE");
    }

    #[test]
    fn test_format_asn_placeholders() {
        let record = AsnRecord::default();
        assert_eq!(format_asn(&record), "Unknown Unknown Organization");

        let record = AsnRecord {
            id: Some("AS64500".to_string()),
            ..AsnRecord::default()
        };
        assert_eq!(format_asn(&record), "AS64500 Unknown Organization");
    }

    #[test]
    fn test_list_is_sorted_one_line_per_record() {
        let json = r#"{
            "x": {"id": "AS300", "name": "Charlie", "netblocks": {}},
            "y": {"id": "AS1", "name": "Alpha", "netblocks": {}},
            "z": {"id": "AS20", "name": "Bravo", "netblocks": {}},
            "w": {"name": "Anonymous", "netblocks": {}}
        }"#;
        let dataset = Dataset::from_json_str(json, "ASNs.json").unwrap();
        let names = list_asns(&dataset);

        assert_eq!(names.len(), dataset.len());
        // Byte order, so "AS1" < "AS20" < "AS300" and uppercase "U" sorts last
        assert_eq!(
            names,
            vec![
                "AS1 Alpha",
                "AS20 Bravo",
                "AS300 Charlie",
                "Unknown Anonymous"
            ]
        );
        assert!(names.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_duplicate_ids_are_all_listed() {
        let json = r#"{
            "a": {"id": "AS2", "name": "Bar", "netblocks": {}},
            "b": {"id": "AS2", "name": "Bar", "netblocks": {}}
        }"#;
        let dataset = Dataset::from_json_str(json, "ASNs.json").unwrap();
        assert_eq!(list_asns(&dataset), vec!["AS2 Bar", "AS2 Bar"]);
    }

    #[test]
    fn test_empty_dataset() {
        assert!(list_asns(&Dataset::default()).is_empty());
    }
}
