use felt_data::MultiwayTables;

use super::{CorpusBuilder, keywords, render_rows};
use crate::entry::KnowledgeCategory;
use crate::error::KnowledgeError;

/// Textures summarized in the c-bet answer.
const CBET_TEXTURES: usize = 5;

pub(super) fn build(builder: &mut CorpusBuilder, multiway: &MultiwayTables) -> Result<(), KnowledgeError> {
    let category = KnowledgeCategory::Multiway;

    let adjustments = render_rows(&multiway.preflop_adjustments, "\n", |a| {
        format!(
            "- **{}**: HU: {} → 3-way: {} → 4-way: {}. {}",
            a.aspect, a.hu, a.three_way, a.four_way, a.note
        )
    });
    builder.push(
        keywords(&[
            "multiway",
            "multi-way",
            "3-way",
            "4-way",
            "three way",
            "four way",
            "multiway preflop",
            "multiway adjustments",
        ]),
        category,
        "How should I adjust preflop for multiway pots?",
        format!("**Multiway Preflop Adjustments:**\n\n{adjustments}"),
        2,
    )?;

    let cbets = render_rows(multiway.flop_cbet.iter().take(CBET_TEXTURES), "\n", |c| {
        format!(
            "- **{}**: {}% 3-way, {}% 4-way (size: {}). {}",
            c.texture, c.freq_3way, c.freq_4way, c.size, c.notes
        )
    });
    builder.push(
        keywords(&[
            "multiway c-bet",
            "multiway flop",
            "c-bet multiway",
            "cbet multi",
            "multiway flop bet",
        ]),
        category,
        "How does c-bet frequency change in multiway pots?",
        format!(
            "**Multiway C-Bet Frequencies (dramatically lower than HU):**\n\n{cbets}\n\n**Key takeaway**: C-bet frequency drops dramatically multiway. Only bet strong value and nut draws."
        ),
        2,
    )?;

    builder.push(
        keywords(&["multiway bluff", "bluffing multiway", "bluff frequency multiway"]),
        category,
        "Should I bluff in multiway pots?",
        "**Bluffing Multiway** — Each additional player reduces bluff success multiplicatively. A bluff that works 50% heads-up needs to work ~25% vs two players and ~12% vs three.\n\n**Bottom line**: Bluffing multiway is almost always unprofitable. Focus on value betting strong hands. Semi-bluffs with nut draws are the exception — they have equity when called.",
        2,
    )?;

    for principle in &multiway.principles {
        builder.push_principle(category, principle, &["multiway", "multi-way", "principle"])?;
    }
    Ok(())
}
