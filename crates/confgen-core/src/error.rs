//! Error types for fixture generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring or writing a fixture.
///
/// Tree construction itself never fails; every variant here comes from
/// input validation or the filesystem.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Node count or depth was zero or negative.
    #[error("Arguments must be positive integers")]
    InvalidArguments,

    /// A configuration value breaks one of the generator's rules.
    #[error("invalid config value for `{field}`: {reason}")]
    InvalidConfig {
        /// The offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// A config file could not be decoded.
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        /// The config file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Reading a directory or reading/writing a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The path involved.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GenerateError>;
