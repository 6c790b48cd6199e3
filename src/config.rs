//! Configuration for a dataset query

use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the dataset looked up next to the executable
pub const DEFAULT_DATA_FILE: &str = "ASNs.json";

/// Environment variable that overrides the dataset location
pub const DATA_ENV_VAR: &str = "ASN_CIDRS_DATA";

/// Which query to run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryMode {
    /// List every ASN as `"<id> <name>"`
    #[default]
    ListAsns,
    /// Print every CIDR in the dataset
    AllCidrs,
    /// Print the CIDRs of a single ASN
    AsnCidrs(String),
}

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One result per line
    #[default]
    Text,
    /// A single JSON array of strings
    Json,
}

/// Errors raised while building a [`QueryConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An ASN filter was requested with an empty identifier
    #[error("ASN filter must not be empty")]
    EmptyAsn,

    /// The executable's own location could not be determined
    #[error("Cannot locate the executable to find ASNs.json")]
    ExecutablePath(#[source] std::io::Error),
}

/// Configuration for a single invocation
#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Dataset to load
    pub data_path: PathBuf,
    /// Query to run
    pub mode: QueryMode,
    /// Output format
    pub format: OutputFormat,
}

impl QueryConfig {
    /// Create a new QueryConfig builder
    pub fn builder() -> QueryConfigBuilder {
        QueryConfigBuilder::new()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let QueryMode::AsnCidrs(asn) = &self.mode {
            if asn.is_empty() {
                return Err(ConfigError::EmptyAsn);
            }
        }
        Ok(())
    }
}

/// Builder for QueryConfig
#[derive(Debug, Default)]
pub struct QueryConfigBuilder {
    data_path: Option<PathBuf>,
    mode: QueryMode,
    format: OutputFormat,
}

impl QueryConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit dataset path
    pub fn data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = Some(path.into());
        self
    }

    /// Set the query mode
    pub fn mode(mut self, mode: QueryMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the output format
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Build the configuration, resolving the dataset path if none was set
    pub fn build(self) -> Result<QueryConfig, ConfigError> {
        let data_path = resolve_data_path(self.data_path)?;
        let config = QueryConfig {
            data_path,
            mode: self.mode,
            format: self.format,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Pick the dataset location.
///
/// An explicit path wins, then [`DATA_ENV_VAR`], then [`DEFAULT_DATA_FILE`]
/// in the directory of the running executable.
pub fn resolve_data_path(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    if let Some(path) = std::env::var_os(DATA_ENV_VAR).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let exe = std::env::current_exe().map_err(ConfigError::ExecutablePath)?;
    Ok(default_data_path(&exe))
}

/// [`DEFAULT_DATA_FILE`] next to `exe`
pub fn default_data_path(exe: &Path) -> PathBuf {
    exe.parent()
        .unwrap_or_else(|| Path::new("."))
        .join(DEFAULT_DATA_FILE)
}
