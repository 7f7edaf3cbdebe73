use felt_data::{EquityTables, SET_VS_DRAW, STRAIGHT_VS_FLUSH_DRAW};

use super::{CorpusBuilder, keywords, render_rows};
use crate::entry::KnowledgeCategory;
use crate::error::KnowledgeError;

const SECTION: &str = "equity";
const KEY_MATCHUPS: usize = 8;

pub(super) fn build(builder: &mut CorpusBuilder, equity: &EquityTables) -> Result<(), KnowledgeError> {
    let category = KnowledgeCategory::Equity;

    let key_matchups = render_rows(equity.matchups.iter().take(KEY_MATCHUPS), "\n", |m| {
        format!(
            "- **{} vs {}**: {}% equity for {}. {}",
            m.hero, m.villain, m.equity, m.hero, m.notes
        )
    });
    builder.push(
        keywords(&[
            "matchup",
            "matchups",
            "hand vs hand",
            "aa vs kk",
            "kk vs qq",
            "pair vs overcards",
            "coin flip",
            "race",
            "all-in equity",
            "preflop equity",
        ]),
        category,
        "What are the key preflop hand matchup equities?",
        format!(
            "**Key Preflop Matchups:**\n\n{key_matchups}\n\n**Categories:** Overpair vs overpair (~82%), pair vs overcards (~55% \"coin flip\"), pair vs dominated (~83-93%)."
        ),
        1,
    )?;

    builder.push(
        keywords(&["aa vs kk", "aces vs kings", "aa", "kk"]),
        category,
        "What is AA vs KK equity?",
        "**AA vs KK** — AA has approximately **82% equity** preflop. KK needs to hit a king on the board without the board pairing for aces. This is the most common \"cooler\" in poker — when you have KK, getting it all-in preflop against AA is inevitable and not a mistake.",
        1,
    )?;

    let outs = render_rows(&equity.outs_chart, "\n", |o| {
        format!(
            "- **{}**: {} outs — {}% with 2 cards to come, {}% with 1 card. {}",
            o.draw, o.outs, o.two_cards, o.turn, o.notes
        )
    });
    builder.push(
        keywords(&[
            "outs",
            "draw",
            "draws",
            "flush draw",
            "straight draw",
            "oesd",
            "gutshot",
            "combo draw",
            "how many outs",
        ]),
        category,
        "How many outs do common draws have?",
        format!("**Outs & Draw Equity:**\n\n{outs}"),
        1,
    )?;

    let rule = &equity.rule_of_two_and_four;
    let examples = render_rows(&rule.examples, "\n", |e| {
        format!(
            "- **{}** ({} outs): Flop estimate {}% (actual {}%), Turn estimate {}% (actual {}%)",
            e.label, e.outs, e.flop, e.actual_flop, e.turn, e.actual_turn
        )
    });
    let caveats = render_rows(&rule.caveats, "\n", |c| format!("- {c}"));
    builder.push(
        keywords(&[
            "rule of 2 and 4",
            "rule of 4",
            "rule of 2",
            "quick equity",
            "mental math",
            "estimate equity",
            "calculate equity",
        ]),
        category,
        "What is the Rule of 2 and 4?",
        format!(
            "**Rule of 2 & 4** — {}\n\n**Examples:**\n{examples}\n\n**Caveats:**\n{caveats}",
            rule.description
        ),
        1,
    )?;

    let vs_range = render_rows(&equity.vs_range_table, "\n", |r| {
        format!(
            "- **{}**: {}% vs top 5%, {}% vs top 10%, {}% vs top 20%, {}% vs top 50%. {}",
            r.hand, r.top_5, r.top_10, r.top_20, r.top_50, r.notes
        )
    });
    builder.push(
        keywords(&[
            "vs range",
            "range equity",
            "aa vs range",
            "kk vs range",
            "hand vs range",
            "top 5",
            "top 10",
            "top 20",
        ]),
        category,
        "How does hand equity change vs different range widths?",
        format!("**Hand Equity vs Range Width:**\n\n{vs_range}"),
        2,
    )?;

    let draw_categories = [SET_VS_DRAW, STRAIGHT_VS_FLUSH_DRAW];
    let set_vs_draw: Vec<_> = equity.matchups_in(&draw_categories).collect();
    if set_vs_draw.is_empty() {
        return Err(KnowledgeError::MissingRow {
            section: SECTION,
            what: format!("a matchup in category `{SET_VS_DRAW}` or `{STRAIGHT_VS_FLUSH_DRAW}`"),
        });
    }
    let set_vs_draw = render_rows(set_vs_draw, "\n", |m| {
        format!("- **{} vs {}**: {}% — {}", m.hero, m.villain, m.equity, m.notes)
    });
    builder.push(
        keywords(&[
            "set vs draw",
            "set vs flush",
            "combo draw",
            "set equity",
            "made hand vs draw",
        ]),
        category,
        "What is a set's equity vs draws?",
        format!("**Set vs Draw Equity:**\n\n{set_vs_draw}"),
        2,
    )
}
