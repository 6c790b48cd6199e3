//! CIDR extraction, for the whole dataset or a single ASN

use crate::dataset::Dataset;
use thiserror::Error;
use tracing::{debug, trace};

/// A filter ASN that matched no record.
///
/// This is a warning, not a failure: the query still completes with an
/// empty result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ASN {asn} not found in {source_name}")]
pub struct AsnNotFound {
    /// The ASN that was requested
    pub asn: String,
    /// Name of the dataset that was searched
    pub source_name: String,
}

/// CIDRs selected by [`extract_cidrs`], borrowed from the dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CidrExtraction<'a> {
    cidrs: Vec<&'a str>,
    not_found: Option<AsnNotFound>,
}

impl<'a> CidrExtraction<'a> {
    /// Extracted CIDRs in dataset order
    pub fn cidrs(&self) -> &[&'a str] {
        &self.cidrs
    }

    /// The lookup miss, when a filter ASN matched nothing
    pub fn not_found(&self) -> Option<&AsnNotFound> {
        self.not_found.as_ref()
    }

    /// Split into the CIDRs and the lookup miss
    pub fn into_parts(self) -> (Vec<&'a str>, Option<AsnNotFound>) {
        (self.cidrs, self.not_found)
    }
}

/// Collect CIDR blocks from `dataset`.
///
/// Without a filter every record contributes its netblocks, in record order
/// and then netblock order, with no sorting or de-duplication. With a filter
/// only the first record whose `id` equals `target_asn` contributes; when no
/// record matches the result is empty and carries an [`AsnNotFound`].
pub fn extract_cidrs<'a>(dataset: &'a Dataset, target_asn: Option<&str>) -> CidrExtraction<'a> {
    let Some(target) = target_asn else {
        let cidrs: Vec<&str> = dataset
            .records()
            .flat_map(|(key, record)| {
                trace!(key, netblocks = record.netblocks.len(), "Collecting CIDRs");
                record.cidrs()
            })
            .collect();
        debug!(count = cidrs.len(), "Extracted all CIDRs");
        return CidrExtraction {
            cidrs,
            not_found: None,
        };
    };

    match dataset.find_by_id(target) {
        Some(record) => {
            let cidrs: Vec<&str> = record.cidrs().collect();
            debug!(asn = target, count = cidrs.len(), "Extracted CIDRs for ASN");
            CidrExtraction {
                cidrs,
                not_found: None,
            }
        }
        None => {
            debug!(asn = target, "ASN not present in dataset");
            CidrExtraction {
                cidrs: Vec::new(),
                not_found: Some(AsnNotFound {
                    asn: target.to_string(),
                    source_name: dataset.source_name().to_string(),
                }),
            }
        }
    }
}
