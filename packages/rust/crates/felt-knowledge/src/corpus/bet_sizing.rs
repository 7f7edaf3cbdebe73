use felt_data::{BetSizingTables, SIX_MAX};

use super::{CorpusBuilder, DEFAULT_PRIORITY, keywords, render_rows};
use crate::entry::KnowledgeCategory;
use crate::error::KnowledgeError;

const SECTION: &str = "bet sizing";

pub(super) fn build(builder: &mut CorpusBuilder, sizing: &BetSizingTables) -> Result<(), KnowledgeError> {
    let category = KnowledgeCategory::BetSizing;

    let spr = render_rows(&sizing.spr_guide, "\n", |s| {
        format!(
            "- **SPR {} ({})**: {} Hands: {}.",
            s.range, s.label, s.strategy, s.hands
        )
    });
    builder.push(
        keywords(&[
            "spr",
            "stack to pot ratio",
            "stack-to-pot",
            "commitment",
            "stack off",
            "spr guide",
        ]),
        category,
        "How does SPR affect my strategy?",
        format!("**Stack-to-Pot Ratio (SPR) Guide:**\n\n{spr}"),
        1,
    )?;

    let pot_odds = render_rows(&sizing.pot_odds, "\n", |p| {
        format!(
            "- **{}% pot bet**: Need {}% equity to call. MDF = {}%.",
            p.bet_pct, p.equity_needed, p.mdf
        )
    });
    builder.push(
        keywords(&[
            "pot odds",
            "mdf",
            "minimum defense",
            "calling",
            "break even",
            "equity needed",
            "defense frequency",
        ]),
        category,
        "What are the pot odds and MDF for common bet sizes?",
        format!(
            "**Pot Odds & MDF Table:**\n\n{pot_odds}\n\n**MDF formula**: Pot / (Pot + Bet). **Pot odds**: You need equity ≥ Bet / (Pot + Bet) to call profitably."
        ),
        1,
    )?;

    let mut preflop = Vec::with_capacity(sizing.preflop_rows.len());
    for row in &sizing.preflop_rows {
        let Some(size) = row.six_max() else {
            return Err(KnowledgeError::MissingRow {
                section: SECTION,
                what: format!("a {SIX_MAX}-max size for `{}`", row.label),
            });
        };
        preflop.push(format!("- **{}**: {size} (6-max). {}", row.label, row.notes));
    }
    builder.push(
        keywords(&[
            "preflop sizing",
            "open size",
            "raise size",
            "3-bet size",
            "4-bet size",
            "how much to raise",
            "opening size",
        ]),
        category,
        "What are the standard preflop bet sizes?",
        format!("**Preflop Sizing Guide:**\n\n{}", preflop.join("\n")),
        2,
    )?;

    let postflop = render_rows(&sizing.postflop_rows, "\n", |r| {
        format!(
            "- **{} — {}**: Size {} at {} frequency. {}",
            r.street, r.situation, r.size, r.freq, r.notes
        )
    });
    builder.push(
        keywords(&[
            "postflop sizing",
            "bet size",
            "how much to bet",
            "flop bet size",
            "turn bet size",
            "river bet size",
        ]),
        category,
        "What are the standard postflop bet sizes?",
        format!("**Postflop Sizing Guide:**\n\n{postflop}"),
        2,
    )?;

    let depths = render_rows(&sizing.stack_depth_notes, "\n", |s| {
        format!("- **{}**: {}", s.depth, s.adjustments)
    });
    builder.push(
        keywords(&[
            "stack depth",
            "short stack",
            "deep stack",
            "stack size",
            "20bb",
            "100bb",
            "150bb",
        ]),
        category,
        "How do I adjust sizing for different stack depths?",
        format!("**Stack Depth Adjustments:**\n\n{depths}"),
        DEFAULT_PRIORITY,
    )?;

    for principle in &sizing.principles {
        builder.push_principle(category, principle, &["sizing", "bet sizing", "principle"])?;
    }
    Ok(())
}
