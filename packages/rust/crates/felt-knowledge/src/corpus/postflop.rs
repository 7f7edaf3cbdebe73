use felt_data::{PostflopTables, StreetGuideRow};

use super::{CorpusBuilder, DEFAULT_PRIORITY, keywords, render_rows};
use crate::entry::KnowledgeCategory;
use crate::error::KnowledgeError;

pub(super) fn build(builder: &mut CorpusBuilder, postflop: &PostflopTables) -> Result<(), KnowledgeError> {
    let category = KnowledgeCategory::Postflop;

    for c in &postflop.cbet_textures {
        let mut kw = keywords(&["c-bet", "cbet", "continuation bet", "flop bet"]);
        kw.push(c.texture.to_lowercase());
        kw.push(c.range_adv.to_lowercase());
        kw.push("flop strategy".to_string());
        builder.push(
            kw,
            category,
            format!("How should I c-bet on {} boards?", c.texture),
            format!(
                "**C-Bet on {} (e.g. {}):**\n\n- **IP frequency**: {}% at {} pot\n- **OOP frequency**: {}% at {} pot\n- **Range advantage**: {}\n- {}",
                c.texture, c.example, c.ip_freq, c.ip_size, c.oop_freq, c.oop_size, c.range_adv, c.notes
            ),
            DEFAULT_PRIORITY,
        )?;
    }

    builder.push(
        keywords(&[
            "turn",
            "double barrel",
            "turn strategy",
            "turn bet",
            "second barrel",
            "turn check",
        ]),
        category,
        "When should I bet the turn (double barrel)?",
        format!("**Turn Strategy:**\n\n{}", street_guide(&postflop.turn_guide)),
        2,
    )?;

    builder.push(
        keywords(&[
            "river",
            "triple barrel",
            "river bet",
            "river bluff",
            "river strategy",
            "river value",
        ]),
        category,
        "How should I play the river?",
        format!("**River Strategy:**\n\n{}", street_guide(&postflop.river_guide)),
        2,
    )?;

    for principle in &postflop.principles {
        builder.push_principle(category, principle, &["postflop", "principle", "concept"])?;
    }
    Ok(())
}

fn street_guide(rows: &[StreetGuideRow]) -> String {
    render_rows(rows, "\n\n", |r| {
        format!(
            "**{} → {}:**\n- Hands: {}\n- Frequency: {}, Size: {}\n- {}",
            r.situation, r.action, r.hands, r.frequency, r.sizing, r.notes
        )
    })
}
