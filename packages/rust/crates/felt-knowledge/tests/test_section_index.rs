//! Tests for the section quick-find index.

use felt_data::ReferenceData;
use felt_knowledge::{LABEL_MAX_CHARS, SectionId, SectionIndex};

fn index() -> SectionIndex {
    SectionIndex::build(&ReferenceData::builtin().unwrap())
}

fn labels(index: &SectionIndex, query: &str, limit: usize) -> Vec<String> {
    index
        .filter(query, limit)
        .iter()
        .map(|row| format!("{}:{}", row.section, row.label))
        .collect()
}

#[test]
fn test_index_covers_every_row() {
    let index = index();
    assert_eq!(index.len(), 215);
    let glossary = index
        .entries()
        .iter()
        .filter(|row| row.section == SectionId::Glossary)
        .count();
    assert_eq!(glossary, 91);
    assert_eq!(index.entries()[0].label, "BTN — Button");
    assert!(index.entries().iter().all(|row| row.text == row.text.to_lowercase()));
}

#[test]
fn test_filter_keeps_index_order() {
    let index = index();
    assert_eq!(
        labels(&index, "spr", 5),
        vec![
            "glossary:SPR — Stack-to-Pot Ratio",
            "glossary:Pot-Committed",
            "sizing:Stack-to-pot ratio (SPR) drives commitment",
            "sizing:SPR < 3: Very Low SPR",
            "sizing:SPR 3–6: Low SPR",
        ]
    );
    assert_eq!(index.filter("spr", 100).len(), 9);
}

#[test]
fn test_filter_requires_every_word() {
    let index = index();
    assert_eq!(index.filter("c-bet dry", 100).len(), 5);
    assert_eq!(index.filter("aa kk", 100).len(), 8);
    assert_eq!(
        labels(&index, "button", 10),
        vec!["glossary:BTN — Button", "glossary:HJ — Hijack", "glossary:CO — Cutoff"]
    );
}

#[test]
fn test_filter_pot_odds_rows() {
    let index = index();
    let rows = labels(&index, "mdf", 3);
    assert_eq!(
        rows,
        vec![
            "glossary:MDF — Minimum Defense Frequency",
            "sizing:Pot odds: 25% bet → 17% equity",
            "sizing:Pot odds: 33% bet → 20% equity",
        ]
    );
}

#[test]
fn test_filter_empty_and_unknown() {
    let index = index();
    assert!(index.filter("", 10).is_empty());
    assert!(index.filter("!!!", 10).is_empty());
    assert!(index.filter("xyzzy", 10).is_empty());
}

#[test]
fn test_long_labels_are_truncated() {
    let index = index();
    let truncated: Vec<&str> = index
        .entries()
        .iter()
        .map(|row| row.label.as_str())
        .filter(|label| label.ends_with('…'))
        .collect();
    assert_eq!(truncated.len(), 4);
    assert_eq!(
        truncated[0],
        "Turn: Donk-bet turn — You checked flop, villain bet, you …"
    );
    assert!(
        index
            .entries()
            .iter()
            .all(|row| row.label.chars().count() <= LABEL_MAX_CHARS)
    );
}
