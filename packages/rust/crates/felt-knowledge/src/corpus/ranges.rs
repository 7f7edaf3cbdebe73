//! Hand-authored range entries. These do not interpolate any table.

use super::{CorpusBuilder, keywords};
use crate::entry::KnowledgeCategory;
use crate::error::KnowledgeError;

pub(super) fn build(builder: &mut CorpusBuilder) -> Result<(), KnowledgeError> {
    let category = KnowledgeCategory::Ranges;

    builder.push(
        keywords(&[
            "opening range",
            "rfi range",
            "open range",
            "preflop range",
            "what hands to open",
            "raise first in",
        ]),
        category,
        "What are the opening ranges by position?",
        "**Opening Ranges (6-max RFI):**\n\n- **UTG**: ~15% — Tight range. Pairs 77+, suited broadways, AKo-ATo, KQo-KJo. Open 3x.\n- **HJ**: ~20% — Add 55-66, more suited connectors, K8s-K7s. Open 2.5x.\n- **CO**: ~28% — Add 22-44, most suited aces, wider offsuit broadways. Open 2.5x.\n- **BTN**: ~42% — Very wide. Add most suited hands, many offsuit broadways. Open 2.2x.\n- **SB**: ~38% — Wide but OOP. All pairs, all suited aces, many suited connectors. Open 3x.\n\nUse the **Preflop Ranges** section to see the exact hand matrix for each position.",
        1,
    )?;

    builder.push(
        keywords(&[
            "3-bet range",
            "3bet range",
            "three bet range",
            "when to 3-bet",
            "re-raise range",
            "facing a raise",
        ]),
        category,
        "What is a 3-bet range?",
        "**3-Bet Ranges** are polarized: strong value hands plus bluffs.\n\n- **Value**: AA, KK, QQ, AKs, AKo (always 3-bet)\n- **Bluffs**: Suited aces (A5s, A4s, A3s), suited connectors near the bottom of your calling range\n- **IP size**: 3x the open (e.g., vs 2.5x → 7.5 BB)\n- **OOP size**: 4x the open (e.g., vs 2.5x → 10 BB)\n\n3-betting builds pots with strong hands and applies pressure with blocker-rich bluffs.",
        2,
    )?;

    builder.push(
        keywords(&["4-bet", "4bet", "four bet", "5-bet", "shove", "all-in preflop"]),
        category,
        "When should I 4-bet or 5-bet?",
        "**4-Bet Range** — Typically polar: value (KK+, AKs) and bluffs with blockers (AQs, KQs, A5s). Size to ~2.2x the 3-bet.\n\n**5-Bet** — Almost always all-in at 100BB. Range narrows to near-nutted hands (AA, KK, AKs) unless short-stacked.\n\nAt stack depths below ~40BB, a 4-bet is often a shove rather than a non-all-in raise.",
        2,
    )?;

    builder.push(
        keywords(&[
            "blind defense",
            "defend bb",
            "defend big blind",
            "bb defense",
            "calling from bb",
        ]),
        category,
        "How wide should I defend my big blind?",
        "**Big Blind Defense:**\n\n- BB gets a discount (already posted 1BB), so defends the widest range of any position facing a raise.\n- **vs BTN open**: Defend ~50-55% of hands (call + 3-bet)\n- **vs CO open**: Defend ~40-45%\n- **vs EP open**: Defend ~25-30%\n\nKey principle: You're always OOP postflop from BB, so equity realization is lower. Suited hands and pairs realize equity better than offsuit junk.",
        2,
    )?;

    builder.push(
        keywords(&[
            "position",
            "positions",
            "which position",
            "seat",
            "best position",
            "worst position",
        ]),
        category,
        "How does position affect range selection?",
        "**Position & Ranges:**\n\n- **BTN** is the most profitable seat — acts last postflop, opens widest (~42%)\n- **CO** is second-best — wide opening (~28%) with only BTN and blinds behind\n- **HJ** is middle position — medium range (~20%)\n- **UTG** is tightest — most players behind (~15%)\n- **SB** is the worst position — OOP postflop, but opens wide vs BB alone (~38%)\n- **BB** defends widest facing raises (gets a discount)\n\n**In position (IP)** players realize more equity and can play more hands profitably.",
        1,
    )
}
