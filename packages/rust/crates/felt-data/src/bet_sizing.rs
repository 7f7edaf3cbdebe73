//! Bet sizing tables: principles, preflop and postflop sizes, stack depth
//! adjustments, pot odds / MDF and the SPR guide.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::DataError;
use crate::postflop::Principle;
use crate::table::{ReferenceTable, require_rows};

/// Table size whose preflop sizes the knowledge base quotes.
pub const SIX_MAX: u8 = 6;

/// Preflop raise size keyed by player count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreflopSizingRow {
    /// Spot label, e.g. `UTG open (RFI)`.
    pub label: String,
    /// Player count -> size (e.g. `2.5x`).
    pub sizes: BTreeMap<u8, String>,
    /// Commentary.
    pub notes: String,
}

impl PreflopSizingRow {
    /// Size at a 6-max table.
    #[must_use]
    pub fn six_max(&self) -> Option<&str> {
        self.sizes.get(&SIX_MAX).map(String::as_str)
    }
}

/// Adjustments for one stack depth band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackDepthNote {
    /// Depth band, e.g. `100 BB (Standard)`.
    pub depth: String,
    /// Adjustments.
    pub adjustments: String,
}

/// Postflop size and frequency by street and situation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostflopSizingRow {
    /// Street.
    pub street: String,
    /// Situation.
    pub situation: String,
    /// Betting frequency.
    pub freq: String,
    /// Bet size.
    pub size: String,
    /// Commentary.
    pub notes: String,
}

/// Break-even equity and minimum defense frequency for a bet size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotOddsRow {
    /// Bet as percent of pot.
    pub bet_pct: u32,
    /// Equity needed to call, percent.
    pub equity_needed: u32,
    /// Minimum defense frequency, percent.
    pub mdf: u32,
}

/// Strategy for one stack-to-pot ratio band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprBand {
    /// SPR range, e.g. `3–6`.
    pub range: String,
    /// Band label.
    pub label: String,
    /// Strategy.
    pub strategy: String,
    /// Hands that stack off.
    pub hands: String,
}

/// All bet sizing tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BetSizingTables {
    /// Sizing principles.
    pub principles: Vec<Principle>,
    /// Preflop sizes.
    pub preflop_rows: Vec<PreflopSizingRow>,
    /// Stack depth notes.
    pub stack_depth_notes: Vec<StackDepthNote>,
    /// Postflop sizes.
    pub postflop_rows: Vec<PostflopSizingRow>,
    /// Pot odds / MDF.
    pub pot_odds: Vec<PotOddsRow>,
    /// SPR guide.
    pub spr_guide: Vec<SprBand>,
}

impl ReferenceTable for BetSizingTables {
    const NAME: &'static str = "bet_sizing";

    fn validate(&self) -> Result<(), DataError> {
        require_rows(Self::NAME, "principles", &self.principles)?;
        require_rows(Self::NAME, "preflop_rows", &self.preflop_rows)?;
        require_rows(Self::NAME, "stack_depth_notes", &self.stack_depth_notes)?;
        require_rows(Self::NAME, "postflop_rows", &self.postflop_rows)?;
        require_rows(Self::NAME, "pot_odds", &self.pot_odds)?;
        require_rows(Self::NAME, "spr_guide", &self.spr_guide)?;
        if let Some(row) = self.preflop_rows.iter().find(|row| row.six_max().is_none()) {
            return Err(DataError::invalid(
                Self::NAME,
                format!("preflop row `{}` has no {SIX_MAX}-max size", row.label),
            ));
        }
        Ok(())
    }
}
