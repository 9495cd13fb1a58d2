//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration loading errors.
///
/// All of these are recoverable from the filter's point of view:
/// [`load_or_default`](super::load_or_default) maps them to an empty
/// instructor list plus a logged warning.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file exists at any search location.
    #[error("configuration file not found (searched: {searched:?})")]
    ConfigFileNotFound {
        /// Every path that was checked, in priority order.
        searched: Vec<PathBuf>,
    },

    /// The configuration file exists but contains nothing.
    #[error("configuration file is empty")]
    EmptyConfigFile,

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_saphyr::Error),

    /// I/O error reading the configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
