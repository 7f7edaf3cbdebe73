//! felt-data - Poker strategy reference tables for FeltTheory
//!
//! Every table is a YAML document with a fixed schema. The shipped tables are
//! embedded at compile time; [`ReferenceData::load_dir`] reads edited copies
//! from disk. Loading fails fast: a missing field, a type mismatch or an empty
//! table is reported as a [`DataError`] and no partial data is returned.
//!
//! ```text
//! felt-data/
//! ├── data/           # glossary, equity, postflop, bet_sizing, multiway (.yaml)
//! └── src/
//!     ├── lib.rs      # ReferenceData (this file)
//!     ├── error.rs    # DataError
//!     ├── table.rs    # parse + validate helpers
//!     └── <table>.rs  # one module per table
//! ```
//!
//! # Example
//!
//! ```rust
//! use felt_data::ReferenceData;
//!
//! let data = ReferenceData::builtin()?;
//! assert!(data.glossary.terms.iter().any(|t| t.term == "SPR"));
//! # Ok::<(), felt_data::DataError>(())
//! ```

mod bet_sizing;
mod equity;
mod error;
mod glossary;
mod multiway;
mod postflop;
mod table;

use std::path::Path;

pub use bet_sizing::{
    BetSizingTables, PostflopSizingRow, PotOddsRow, PreflopSizingRow, SIX_MAX, SprBand,
    StackDepthNote,
};
pub use equity::{
    EquityTables, Matchup, OutsRow, RuleExample, RuleOfTwoAndFour, SET_VS_DRAW,
    STRAIGHT_VS_FLUSH_DRAW, VsRangeRow,
};
pub use error::DataError;
pub use glossary::{Glossary, GlossaryCategory, GlossaryTerm};
pub use multiway::{MultiwayAdjustment, MultiwayCbet, MultiwayTables};
pub use postflop::{CbetTexture, PostflopTables, Principle, StreetGuideRow};

use table::{ReferenceTable, parse_table};

const GLOSSARY_YAML: &str = include_str!("../data/glossary.yaml");
const EQUITY_YAML: &str = include_str!("../data/equity.yaml");
const POSTFLOP_YAML: &str = include_str!("../data/postflop.yaml");
const BET_SIZING_YAML: &str = include_str!("../data/bet_sizing.yaml");
const MULTIWAY_YAML: &str = include_str!("../data/multiway.yaml");

/// Raw YAML text of every table, in load order.
#[derive(Debug, Clone, Copy)]
pub struct TableSources<'a> {
    /// `glossary.yaml`
    pub glossary: &'a str,
    /// `equity.yaml`
    pub equity: &'a str,
    /// `postflop.yaml`
    pub postflop: &'a str,
    /// `bet_sizing.yaml`
    pub bet_sizing: &'a str,
    /// `multiway.yaml`
    pub multiway: &'a str,
}

impl TableSources<'static> {
    /// The tables compiled into this crate.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            glossary: GLOSSARY_YAML,
            equity: EQUITY_YAML,
            postflop: POSTFLOP_YAML,
            bet_sizing: BET_SIZING_YAML,
            multiway: MULTIWAY_YAML,
        }
    }
}

/// All reference tables the knowledge base is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    /// Glossary.
    pub glossary: Glossary,
    /// Hand equity.
    pub equity: EquityTables,
    /// Postflop play.
    pub postflop: PostflopTables,
    /// Bet sizing theory.
    pub bet_sizing: BetSizingTables,
    /// Multiway pots.
    pub multiway: MultiwayTables,
}

impl ReferenceData {
    /// Parse the embedded tables.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if an embedded table is malformed.
    pub fn builtin() -> Result<Self, DataError> {
        Self::from_sources(TableSources::builtin())
    }

    /// Parse tables from raw YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Parse`] or [`DataError::Invalid`] for the first
    /// table that fails, in load order.
    pub fn from_sources(sources: TableSources<'_>) -> Result<Self, DataError> {
        let data = Self {
            glossary: parse_table(sources.glossary)?,
            equity: parse_table(sources.equity)?,
            postflop: parse_table(sources.postflop)?,
            bet_sizing: parse_table(sources.bet_sizing)?,
            multiway: parse_table(sources.multiway)?,
        };
        tracing::debug!(
            glossary_terms = data.glossary.terms.len(),
            matchups = data.equity.matchups.len(),
            cbet_textures = data.postflop.cbet_textures.len(),
            "reference tables loaded"
        );
        Ok(data)
    }

    /// Load `<dir>/<table>.yaml` for every table.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Io`] if a file is missing or unreadable, otherwise
    /// the first parse or validation failure.
    pub fn load_dir(dir: &Path) -> Result<Self, DataError> {
        let glossary = read_table::<Glossary>(dir)?;
        let equity = read_table::<EquityTables>(dir)?;
        let postflop = read_table::<PostflopTables>(dir)?;
        let bet_sizing = read_table::<BetSizingTables>(dir)?;
        let multiway = read_table::<MultiwayTables>(dir)?;
        Self::from_sources(TableSources {
            glossary: &glossary,
            equity: &equity,
            postflop: &postflop,
            bet_sizing: &bet_sizing,
            multiway: &multiway,
        })
    }
}

/// File names expected by [`ReferenceData::load_dir`].
pub const TABLE_FILES: [&str; 5] = [
    "glossary.yaml",
    "equity.yaml",
    "postflop.yaml",
    "bet_sizing.yaml",
    "multiway.yaml",
];

fn read_table<T: ReferenceTable>(dir: &Path) -> Result<String, DataError> {
    let path = dir.join(format!("{}.yaml", T::NAME));
    std::fs::read_to_string(&path).map_err(|source| DataError::Io { path, source })
}
