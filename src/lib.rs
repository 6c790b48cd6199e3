//! asn-cidrs - ASN and CIDR queries over a local JSON dataset
//!
//! This library loads a dataset mapping autonomous systems to the
//! netblocks they announce, and answers two questions about it: which
//! ASNs are known, and which CIDR blocks they (or one of them) announce.
//!
//! ```
//! use asn_cidrs::{extract_cidrs, list_asns, Dataset};
//!
//! let json = r#"{"a": {"id": "AS1", "name": "Foo", "netblocks": {"1.2.3.0/24": {}}}}"#;
//! let dataset = Dataset::from_json_str(json, "ASNs.json").unwrap();
//!
//! assert_eq!(list_asns(&dataset), vec!["AS1 Foo"]);
//! assert_eq!(extract_cidrs(&dataset, Some("AS1")).cidrs(), &["1.2.3.0/24"]);
//! ```

pub mod config;
pub mod dataset;
pub mod output;
pub mod query;

// Re-export core types for library users
pub use config::{OutputFormat, QueryConfig, QueryConfigBuilder, QueryMode};
pub use dataset::{AsnRecord, Dataset, DatasetError};
pub use query::{extract_cidrs, list_asns, run_query, AsnNotFound, CidrExtraction, QueryOutcome};
