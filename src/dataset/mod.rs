//! ASN dataset loading and data model

pub mod error;
pub mod loader;
pub mod record;

pub use error::DatasetError;
pub use record::{AsnRecord, Dataset, UNKNOWN_ID, UNKNOWN_NAME};
