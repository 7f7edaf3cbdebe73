//! Multiway pot tables.

use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::postflop::{Principle, StreetGuideRow};
use crate::table::{ReferenceTable, require_rows};

/// Preflop adjustment from heads-up to 3-way and 4-way pots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiwayAdjustment {
    /// Aspect of preflop play.
    pub aspect: String,
    /// Heads-up baseline.
    pub hu: String,
    /// 3-way adjustment.
    pub three_way: String,
    /// 4-way adjustment.
    pub four_way: String,
    /// Commentary.
    pub note: String,
}

/// Multiway flop c-bet frequency for a texture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiwayCbet {
    /// Texture with example.
    pub texture: String,
    /// 3-way frequency, percent.
    pub freq_3way: u32,
    /// 4-way frequency, percent.
    pub freq_4way: u32,
    /// Bet size.
    pub size: String,
    /// Hands that bet.
    pub hands: String,
    /// Commentary.
    pub notes: String,
}

/// All multiway tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiwayTables {
    /// Preflop adjustments.
    pub preflop_adjustments: Vec<MultiwayAdjustment>,
    /// Flop c-bet frequencies.
    pub flop_cbet: Vec<MultiwayCbet>,
    /// Turn and river guide.
    pub turn_river_guide: Vec<StreetGuideRow>,
    /// Principles.
    pub principles: Vec<Principle>,
}

impl ReferenceTable for MultiwayTables {
    const NAME: &'static str = "multiway";

    fn validate(&self) -> Result<(), DataError> {
        require_rows(Self::NAME, "preflop_adjustments", &self.preflop_adjustments)?;
        require_rows(Self::NAME, "flop_cbet", &self.flop_cbet)?;
        require_rows(Self::NAME, "turn_river_guide", &self.turn_river_guide)?;
        require_rows(Self::NAME, "principles", &self.principles)
    }
}
