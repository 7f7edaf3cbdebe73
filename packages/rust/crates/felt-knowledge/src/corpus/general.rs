use super::{CorpusBuilder, keywords};
use crate::entry::KnowledgeCategory;
use crate::error::KnowledgeError;

pub(super) fn build(builder: &mut CorpusBuilder) -> Result<(), KnowledgeError> {
    let category = KnowledgeCategory::General;

    builder.push(
        keywords(&[
            "gto",
            "game theory optimal",
            "what is gto",
            "nash equilibrium",
            "unexploitable",
            "solver",
        ]),
        category,
        "What is GTO poker?",
        "**Game Theory Optimal (GTO)** is a strategy that cannot be exploited — it achieves maximum EV regardless of how opponents play. Technically, it's the Nash Equilibrium of poker.\n\n**In practice**, GTO provides a strong default baseline against unknown opponents. Key GTO concepts:\n- Balance value bets and bluffs at correct ratios\n- Defend at minimum defense frequency (MDF) to prevent profitable bluffs\n- Use position and range advantages to drive betting strategy\n\nDeviating from GTO to exploit leaks can be more +EV vs weak players, but GTO is the foundation.",
        1,
    )?;

    builder.push(
        keywords(&[
            "equity",
            "what is equity",
            "equity realization",
            "realize equity",
            "pot share",
        ]),
        category,
        "What is equity and equity realization?",
        "**Equity** is your share of the pot if the hand were run to showdown multiple times. E.g., a flush draw on the flop has ~35% equity.\n\n**Equity Realization** is how much of your raw equity you actually convert to won chips. Factors:\n- **Position**: IP hands realize more equity than OOP\n- **Playability**: Suited connectors and pairs realize more than offsuit junk\n- **Stack depth**: Deeper stacks allow more implied odds\n\nRaw equity ≠ EV because of position and future betting decisions.",
        1,
    )?;

    builder.push(
        keywords(&[
            "range advantage",
            "nut advantage",
            "board texture",
            "who has advantage",
            "range vs nut",
        ]),
        category,
        "What is range advantage vs nut advantage?",
        "**Range Advantage** — When your overall range has higher equity on a given board. E.g., the PFR has range advantage on A-high boards (more Ax combos). The player with range advantage should c-bet more frequently, often at small sizes.\n\n**Nut Advantage** — Having more of the strongest (nutted) hands on a board, even if overall equity is close. Nut advantage justifies larger bet sizes and overbets.\n\nRange advantage drives **frequency**; nut advantage drives **sizing**.",
        1,
    )?;

    builder.push(
        keywords(&[
            "value bet",
            "bluff",
            "semi bluff",
            "semi-bluff",
            "when to bluff",
            "value vs bluff",
            "bluff ratio",
        ]),
        category,
        "When should I value bet vs bluff?",
        "**Value Bet** — Bet with a strong hand hoping worse hands call. Size larger when you want folds from draws, smaller for thin value.\n\n**Bluff** — Bet with a weak hand hoping better hands fold. Best bluffs have blockers to villain's calling range.\n\n**Semi-Bluff** — Bet with a draw (currently behind but has outs). Two ways to win: fold equity + hitting the draw.\n\n**Balance**: At a pot-size bet, aim for ~1:1 value-to-bluff ratio. At smaller sizes, use fewer bluffs. At larger sizes, you can bluff more frequently.",
        1,
    )?;

    builder.push(
        keywords(&[
            "fold equity",
            "when to fold",
            "calling",
            "should i call",
            "should i fold",
        ]),
        category,
        "What is fold equity and when should I fold?",
        "**Fold Equity** — The portion of a bet's EV from making opponents fold. High fold equity = villain folds often enough that even weak hands profit from betting.\n\n**When to fold:** Compare your equity to the pot odds being offered. If you need 25% equity to call and you estimate you have 20%, fold.\n\n**Key insight**: Fold equity diminishes on later streets with short stacks. On the river, you can only win by showing down the best hand or bluffing — choose wisely.",
        2,
    )
}
