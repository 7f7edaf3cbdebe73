//! Glossary table - poker terms, abbreviations and their definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DataError;
use crate::table::{ReferenceTable, require_non_empty, require_rows};

/// Glossary grouping shown in the reference pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlossaryCategory {
    /// Table seats (BTN, SB, UTG, ...).
    Positions,
    /// Preflop actions and ranges.
    Preflop,
    /// Flop, turn and river play.
    Postflop,
    /// Game theory and math concepts.
    Theory,
}

impl GlossaryCategory {
    /// Display label, as authored in the table.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positions => "Positions",
            Self::Preflop => "Preflop",
            Self::Postflop => "Postflop",
            Self::Theory => "Theory",
        }
    }
}

impl fmt::Display for GlossaryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One glossary term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    /// Short form, e.g. `SPR`.
    pub term: String,
    /// Full name, e.g. `Stack-to-Pot Ratio`.
    pub full: String,
    /// Grouping.
    pub category: GlossaryCategory,
    /// Definition text.
    pub definition: String,
}

/// The whole glossary, in authored order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Glossary {
    /// Terms in authored order.
    pub terms: Vec<GlossaryTerm>,
}

impl ReferenceTable for Glossary {
    const NAME: &'static str = "glossary";

    fn validate(&self) -> Result<(), DataError> {
        require_rows(Self::NAME, "terms", &self.terms)?;
        for (index, term) in self.terms.iter().enumerate() {
            require_non_empty(Self::NAME, &format!("terms[{index}].term"), &term.term)?;
            require_non_empty(Self::NAME, &format!("terms[{index}].full"), &term.full)?;
        }
        Ok(())
    }
}
