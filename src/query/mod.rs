//! Queries over a loaded [`Dataset`](crate::Dataset)

pub mod asns;
pub mod cidrs;

pub use asns::{format_asn, list_asns};
pub use cidrs::{extract_cidrs, AsnNotFound, CidrExtraction};

use crate::config::QueryMode;
use crate::dataset::Dataset;

/// Result lines of a query plus the warning it produced, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOutcome {
    /// Output lines, in print order
    pub lines: Vec<String>,
    /// Non-fatal lookup miss
    pub warning: Option<AsnNotFound>,
}

/// Run the query selected by `mode` against `dataset`
pub fn run_query(dataset: &Dataset, mode: &QueryMode) -> QueryOutcome {
    match mode {
        QueryMode::ListAsns => QueryOutcome {
            lines: list_asns(dataset),
            warning: None,
        },
        QueryMode::AllCidrs => extract_cidrs(dataset, None).into(),
        QueryMode::AsnCidrs(asn) => extract_cidrs(dataset, Some(asn.as_str())).into(),
    }
}

impl From<CidrExtraction<'_>> for QueryOutcome {
    fn from(extraction: CidrExtraction<'_>) -> Self {
        let (cidrs, warning) = extraction.into_parts();
        Self {
            lines: cidrs.into_iter().map(str::to_owned).collect(),
            warning,
        }
    }
}
