//! Tests for corpus construction from the reference tables.

use felt_data::{ReferenceData, TableSources};
use felt_knowledge::{AliasMap, KnowledgeBase, KnowledgeCategory, KnowledgeError, SearchSettings, build_corpus};

#[test]
fn test_builtin_corpus_size_and_sections() {
    let kb = KnowledgeBase::builtin().unwrap();
    assert_eq!(kb.len(), 144);

    let counts = kb.category_counts();
    let expected = [
        (KnowledgeCategory::Glossary, 91),
        (KnowledgeCategory::Equity, 6),
        (KnowledgeCategory::Postflop, 17),
        (KnowledgeCategory::BetSizing, 11),
        (KnowledgeCategory::Multiway, 9),
        (KnowledgeCategory::Ranges, 5),
        (KnowledgeCategory::General, 5),
    ];
    for (category, count) in expected {
        assert_eq!(counts.get(&category), Some(&count), "{category}");
    }
}

#[test]
fn test_ids_are_sequential_in_section_order() {
    let kb = KnowledgeBase::builtin().unwrap();
    for (index, entry) in kb.entries().iter().enumerate() {
        assert_eq!(entry.id() as usize, index + 1);
    }
    let order: Vec<KnowledgeCategory> = kb.entries().iter().map(|e| e.category()).collect();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted, "sections must not interleave");
}

#[test]
fn test_glossary_entry_shape() {
    let kb = KnowledgeBase::builtin().unwrap();
    let btn = kb.entry(1).unwrap();
    assert_eq!(btn.keywords(), vec!["btn", "button", "button", "positions", "btn"]);
    assert_eq!(btn.question(), "What is Button (BTN)?");
    assert!(btn.answer().starts_with("**Button (BTN)** — "));
    assert_eq!(btn.priority().get(), 3);

    let cbet = kb.entry(30).unwrap();
    assert_eq!(
        cbet.keywords(),
        vec![
            "c-bet",
            "continuation bet",
            "continuation",
            "bet",
            "postflop",
            "cbet",
            "c bet",
            "continuation bet"
        ]
    );
}

#[test]
fn test_authored_entries() {
    let kb = KnowledgeBase::builtin().unwrap();

    let matchups = kb.entry(92).unwrap();
    assert_eq!(matchups.question(), "What are the key preflop hand matchup equities?");
    assert_eq!(matchups.priority().get(), 1);
    // eight matchup bullets
    assert_eq!(matchups.answer().matches("\n- **").count(), 8);

    let spr = kb.entry(115).unwrap();
    assert_eq!(spr.category(), KnowledgeCategory::BetSizing);
    assert_eq!(
        spr.keywords(),
        vec!["spr", "stack to pot ratio", "stack-to-pot", "commitment", "stack off", "spr guide"]
    );

    let principle = kb.entry(123).unwrap();
    assert_eq!(principle.question(), "Stack-to-pot ratio (SPR) drives commitment");
    assert!(principle.has_keyword("(spr)"));
    assert!(principle.has_keyword("bet sizing"));

    let last = kb.entry(144).unwrap();
    assert_eq!(last.question(), "What is fold equity and when should I fold?");
    assert_eq!(last.priority().get(), 2);
}

#[test]
fn test_preflop_sizing_answer_uses_six_max_column() {
    let kb = KnowledgeBase::builtin().unwrap();
    let preflop = kb
        .entries()
        .iter()
        .find(|e| e.question() == "What are the standard preflop bet sizes?")
        .unwrap();
    assert!(preflop.answer().contains("2.5x (6-max)"));
}

#[test]
fn test_multiway_cbet_answer_lists_five_textures() {
    let kb = KnowledgeBase::builtin().unwrap();
    let cbet = kb
        .entries()
        .iter()
        .find(|e| e.question() == "How does c-bet frequency change in multiway pots?")
        .unwrap();
    assert_eq!(cbet.answer().matches("% 3-way").count(), 5);
}

#[test]
fn test_entries_serialize_without_caches() {
    let kb = KnowledgeBase::builtin().unwrap();
    let value = serde_json::to_value(kb.entry(115).unwrap()).unwrap();
    assert_eq!(value["category"], "Bet Sizing");
    assert_eq!(value["priority"], 1);
    assert!(value.get("question_lower").is_none());
    assert!(value.get("keywords_joined").is_none());
}

#[test]
fn test_missing_set_vs_draw_rows_fail_fast() {
    let sources = TableSources::builtin();
    let equity = sources
        .equity
        .replace("category: Set vs Draw", "category: Other")
        .replace("category: Straight vs Flush Draw", "category: Other");
    let data = ReferenceData::from_sources(TableSources {
        equity: &equity,
        ..sources
    })
    .unwrap();
    let err = build_corpus(&data, &AliasMap::builtin()).unwrap_err();
    assert!(matches!(err, KnowledgeError::MissingRow { section: "equity", .. }));
    assert!(KnowledgeBase::build(&data, SearchSettings::default()).is_err());
}

#[test]
fn test_rebuilt_corpus_tracks_edited_tables() {
    let sources = TableSources::builtin();
    let glossary = sources.glossary.replace(
        "  - term: BTN\n",
        "  - term: XYZ\n    full: Example Term\n    category: Theory\n    definition: Placeholder.\n  - term: BTN\n",
    );
    let data = ReferenceData::from_sources(TableSources {
        glossary: &glossary,
        ..sources
    })
    .unwrap();
    let kb = KnowledgeBase::build(&data, SearchSettings::default()).unwrap();
    assert_eq!(kb.len(), 145);
    assert_eq!(kb.entry(1).unwrap().question(), "What is Example Term (XYZ)?");
    assert_eq!(kb.entry(1).unwrap().priority().get(), 2);
    assert_eq!(kb.search("xyz").first().map(|e| e.id()), Some(1));
}
