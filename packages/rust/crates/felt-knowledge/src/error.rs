//! Error types for knowledge base construction.
//!
//! Queries never fail; only building the corpus can.

use felt_data::DataError;
use thiserror::Error;

/// Errors raised while building the knowledge base.
#[derive(Error, Debug)]
pub enum KnowledgeError {
    /// A reference table failed to load
    #[error(transparent)]
    Data(#[from] DataError),
    /// An authored entry has a priority outside 1..=3
    #[error("entry \"{question}\" has priority {priority}; expected 1..=3")]
    InvalidPriority {
        /// Question text of the offending entry
        question: String,
        /// Rejected priority value
        priority: u8,
    },
    /// A section needs a table row that is not present
    #[error("{section} section needs {what}, which the reference tables do not provide")]
    MissingRow {
        /// Knowledge section being built
        section: &'static str,
        /// Description of the missing row or column
        what: String,
    },
}
