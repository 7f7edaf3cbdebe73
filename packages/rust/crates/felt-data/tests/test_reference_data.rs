//! Tests for reference table loading and fail-fast validation.

use std::fs;

use felt_data::{DataError, GlossaryCategory, ReferenceData, TABLE_FILES, TableSources};
use tempfile::TempDir;

#[test]
fn test_builtin_tables_load() {
    let data = ReferenceData::builtin().unwrap();
    assert_eq!(data.glossary.terms.len(), 91);
    assert_eq!(data.equity.matchups.len(), 20);
    assert_eq!(data.equity.outs_chart.len(), 10);
    assert_eq!(data.equity.vs_range_table.len(), 8);
    assert_eq!(data.postflop.cbet_textures.len(), 9);
    assert_eq!(data.bet_sizing.pot_odds.len(), 9);
    assert_eq!(data.multiway.flop_cbet.len(), 8);
}

#[test]
fn test_glossary_first_term() {
    let data = ReferenceData::builtin().unwrap();
    let first = &data.glossary.terms[0];
    assert_eq!(first.term, "BTN");
    assert_eq!(first.full, "Button");
    assert_eq!(first.category, GlossaryCategory::Positions);
}

#[test]
fn test_preflop_rows_have_six_max_size() {
    let data = ReferenceData::builtin().unwrap();
    let utg = &data.bet_sizing.preflop_rows[0];
    assert_eq!(utg.label, "UTG open (RFI)");
    assert_eq!(utg.six_max(), Some("2.5x"));
    assert_eq!(utg.sizes.get(&4).map(String::as_str), Some("3x"));
}

#[test]
fn test_matchups_in_filters_categories() {
    let data = ReferenceData::builtin().unwrap();
    let sets: Vec<_> = data
        .equity
        .matchups_in(&[felt_data::SET_VS_DRAW, felt_data::STRAIGHT_VS_FLUSH_DRAW])
        .collect();
    assert_eq!(sets.len(), 6);
    assert_eq!(sets[0].hero, "Set");
    assert_eq!(sets[5].hero, "Two pair");
}

#[test]
fn test_missing_field_fails_fast() {
    let broken = "terms:\n  - term: SPR\n    category: Theory\n    definition: ratio\n";
    let sources = TableSources {
        glossary: broken,
        ..TableSources::builtin()
    };
    let err = ReferenceData::from_sources(sources).unwrap_err();
    assert!(matches!(err, DataError::Parse { table: "glossary", .. }));
    assert!(err.to_string().contains("full"), "got: {err}");
}

#[test]
fn test_unknown_glossary_category_rejected() {
    let broken = "terms:\n  - term: X\n    full: Thing\n    category: Misc\n    definition: d\n";
    let sources = TableSources {
        glossary: broken,
        ..TableSources::builtin()
    };
    let err = ReferenceData::from_sources(sources).unwrap_err();
    assert_eq!(err.table(), Some("glossary"));
}

#[test]
fn test_blank_term_rejected() {
    let broken = "terms:\n  - term: '  '\n    full: Thing\n    category: Theory\n    definition: d\n";
    let sources = TableSources {
        glossary: broken,
        ..TableSources::builtin()
    };
    let err = ReferenceData::from_sources(sources).unwrap_err();
    assert!(matches!(err, DataError::Invalid { table: "glossary", .. }));
}

#[test]
fn test_empty_table_rejected() {
    let sources = TableSources {
        glossary: "terms: []\n",
        ..TableSources::builtin()
    };
    let err = ReferenceData::from_sources(sources).unwrap_err();
    assert!(err.to_string().contains("no rows"), "got: {err}");
}

#[test]
fn test_preflop_row_without_six_max_rejected() {
    let builtin = TableSources::builtin();
    let edited = builtin.bet_sizing.replacen("      6: 2.5x\n", "", 1);
    let sources = TableSources {
        bet_sizing: &edited,
        ..builtin
    };
    let err = ReferenceData::from_sources(sources).unwrap_err();
    assert!(matches!(err, DataError::Invalid { table: "bet_sizing", .. }));
}

#[test]
fn test_load_dir_round_trips_builtin_files() {
    let dir = TempDir::new().unwrap();
    let builtin = TableSources::builtin();
    let contents = [
        builtin.glossary,
        builtin.equity,
        builtin.postflop,
        builtin.bet_sizing,
        builtin.multiway,
    ];
    for (name, body) in TABLE_FILES.iter().zip(contents) {
        fs::write(dir.path().join(name), body).unwrap();
    }
    let loaded = ReferenceData::load_dir(dir.path()).unwrap();
    assert_eq!(loaded, ReferenceData::builtin().unwrap());
}

#[test]
fn test_load_dir_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = ReferenceData::load_dir(dir.path()).unwrap_err();
    match err {
        DataError::Io { path, .. } => assert!(path.ends_with("glossary.yaml")),
        other => panic!("expected Io error, got {other}"),
    }
}
