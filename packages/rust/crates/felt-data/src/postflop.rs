//! Postflop tables: c-bet frequencies by flop texture, turn and river guides,
//! and core principles.

use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::table::{ReferenceTable, require_rows};

/// C-bet frequency and size for one flop texture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CbetTexture {
    /// Texture label, e.g. `Ace-high dry`.
    pub texture: String,
    /// Example board.
    pub example: String,
    /// In-position frequency, percent.
    pub ip_freq: u32,
    /// In-position size.
    pub ip_size: String,
    /// Out-of-position frequency, percent.
    pub oop_freq: u32,
    /// Out-of-position size.
    pub oop_size: String,
    /// Who holds the range advantage.
    pub range_adv: String,
    /// Commentary.
    pub notes: String,
}

/// Street guide row (turn or river): situation, recommended action, hands and sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreetGuideRow {
    /// Spot description.
    pub situation: String,
    /// Recommended action.
    pub action: String,
    /// Hands that take the action.
    pub hands: String,
    /// How often.
    pub frequency: String,
    /// Bet size, `—` when the action is passive.
    pub sizing: String,
    /// Commentary.
    pub notes: String,
}

/// Titled strategy principle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principle {
    /// Title.
    pub title: String,
    /// Explanation.
    pub body: String,
}

/// All postflop tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostflopTables {
    /// C-bet by texture.
    pub cbet_textures: Vec<CbetTexture>,
    /// Turn guide.
    pub turn_guide: Vec<StreetGuideRow>,
    /// River guide.
    pub river_guide: Vec<StreetGuideRow>,
    /// Principles.
    pub principles: Vec<Principle>,
}

impl ReferenceTable for PostflopTables {
    const NAME: &'static str = "postflop";

    fn validate(&self) -> Result<(), DataError> {
        require_rows(Self::NAME, "cbet_textures", &self.cbet_textures)?;
        require_rows(Self::NAME, "turn_guide", &self.turn_guide)?;
        require_rows(Self::NAME, "river_guide", &self.river_guide)?;
        require_rows(Self::NAME, "principles", &self.principles)
    }
}
