//! Error types for reference table loading.
//!
//! Library crates use `thiserror` for explicit error enums.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a reference table.
#[derive(Error, Debug)]
pub enum DataError {
    /// Table file could not be read from disk
    #[error("failed to read table file {path}: {source}")]
    Io {
        /// Path of the table file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// Table is not valid YAML or does not match the expected schema
    #[error("malformed {table} table: {source}")]
    Parse {
        /// Table name (`glossary`, `equity`, ...)
        table: &'static str,
        /// Underlying YAML error
        #[source]
        source: serde_yaml::Error,
    },
    /// Table parsed but violates a content rule
    #[error("invalid {table} table: {reason}")]
    Invalid {
        /// Table name (`glossary`, `equity`, ...)
        table: &'static str,
        /// Human-readable violation
        reason: String,
    },
}

impl DataError {
    pub(crate) fn invalid(table: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            table,
            reason: reason.into(),
        }
    }

    /// Name of the table the error refers to, when known.
    #[must_use]
    pub fn table(&self) -> Option<&'static str> {
        match self {
            Self::Io { .. } => None,
            Self::Parse { table, .. } | Self::Invalid { table, .. } => Some(table),
        }
    }
}
