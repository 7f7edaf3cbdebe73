//! Hand equity tables: preflop matchups, outs chart, the rule of 2 and 4,
//! and equity against ranges of different widths.

use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::table::{ReferenceTable, require_rows};

/// Matchup category for sets against draws.
pub const SET_VS_DRAW: &str = "Set vs Draw";
/// Matchup category for made straights (and similar) against flush draws.
pub const STRAIGHT_VS_FLUSH_DRAW: &str = "Straight vs Flush Draw";

/// Preflop or flop all-in matchup. `equity` is the hero's share in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    /// Hero holding.
    pub hero: String,
    /// Villain holding.
    pub villain: String,
    /// Hero equity, percent.
    pub equity: u32,
    /// Matchup category.
    pub category: String,
    /// Commentary.
    pub notes: String,
}

/// Draw with its out count and completion odds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutsRow {
    /// Draw name.
    pub draw: String,
    /// Number of outs.
    pub outs: u32,
    /// Percent to hit on the turn (one card from the flop).
    pub turn: u32,
    /// Percent to hit on the river (one card from the turn).
    pub river: u32,
    /// Percent with two cards to come.
    pub two_cards: u32,
    /// Commentary.
    pub notes: String,
}

/// Worked example for the rule of 2 and 4.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleExample {
    /// Number of outs.
    pub outs: u32,
    /// Draw label.
    pub label: String,
    /// Flop estimate (outs x 4).
    pub flop: u32,
    /// Turn estimate (outs x 2).
    pub turn: u32,
    /// Actual flop equity.
    pub actual_flop: u32,
    /// Actual turn equity.
    pub actual_turn: u32,
}

/// The rule of 2 and 4 shortcut with examples and caveats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleOfTwoAndFour {
    /// Explanation.
    pub description: String,
    /// Worked examples.
    pub examples: Vec<RuleExample>,
    /// Known inaccuracies.
    pub caveats: Vec<String>,
}

/// Equity of a hand against top-N% ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VsRangeRow {
    /// Hand.
    pub hand: String,
    /// Equity vs top 5%.
    pub top_5: u32,
    /// Equity vs top 10%.
    pub top_10: u32,
    /// Equity vs top 20%.
    pub top_20: u32,
    /// Equity vs top 50%.
    pub top_50: u32,
    /// Commentary.
    pub notes: String,
}

/// All equity tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquityTables {
    /// Key matchups, grouped by category in authored order.
    pub matchups: Vec<Matchup>,
    /// Outs chart.
    pub outs_chart: Vec<OutsRow>,
    /// Rule of 2 and 4.
    pub rule_of_two_and_four: RuleOfTwoAndFour,
    /// Equity vs range widths.
    pub vs_range_table: Vec<VsRangeRow>,
}

impl EquityTables {
    /// Matchups whose category is one of `categories`, in authored order.
    pub fn matchups_in<'a>(
        &'a self,
        categories: &'a [&'a str],
    ) -> impl Iterator<Item = &'a Matchup> + 'a {
        self.matchups
            .iter()
            .filter(move |m| categories.iter().any(|category| m.category == *category))
    }
}

impl ReferenceTable for EquityTables {
    const NAME: &'static str = "equity";

    fn validate(&self) -> Result<(), DataError> {
        require_rows(Self::NAME, "matchups", &self.matchups)?;
        require_rows(Self::NAME, "outs_chart", &self.outs_chart)?;
        require_rows(
            Self::NAME,
            "rule_of_two_and_four.examples",
            &self.rule_of_two_and_four.examples,
        )?;
        require_rows(Self::NAME, "vs_range_table", &self.vs_range_table)?;
        if let Some(m) = self.matchups.iter().find(|m| m.equity > 100) {
            return Err(DataError::invalid(
                Self::NAME,
                format!("{} vs {} has equity {}%", m.hero, m.villain, m.equity),
            ));
        }
        Ok(())
    }
}
