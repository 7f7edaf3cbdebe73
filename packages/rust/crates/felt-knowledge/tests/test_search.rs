//! Tests for ranking over the shipped knowledge base.

use felt_knowledge::{KnowledgeBase, KnowledgeCategory, SearchSettings, knowledge_base};

fn ids(query: &str) -> Vec<u32> {
    knowledge_base()
        .unwrap()
        .search(query)
        .iter()
        .map(|entry| entry.id())
        .collect()
}

#[test]
fn test_spr_ranking() {
    assert_eq!(ids("spr"), vec![38, 123, 115]);
    let kb = knowledge_base().unwrap();
    assert_eq!(
        kb.entry(38).unwrap().question(),
        "What is Stack-to-Pot Ratio (SPR)?"
    );
}

#[test]
fn test_cbet_alias_matches_canonical_spelling() {
    assert_eq!(ids("cbet"), vec![30, 98, 99]);
    assert_eq!(ids("cbet"), ids("c-bet"));
    let kb = knowledge_base().unwrap();
    for entry in kb.search("cbet") {
        assert!(entry.has_keyword("c-bet"), "entry {} lacks c-bet", entry.id());
    }
}

#[test]
fn test_two_word_alias() {
    assert_eq!(ids("c bet"), vec![30, 100, 101]);
    assert_eq!(ids("three bet"), vec![14, 136, 30]);
}

#[test]
fn test_pfr_reaches_rfi_entry() {
    let hits = ids("pfr");
    assert_eq!(hits, vec![13, 12, 99]);
    let kb = knowledge_base().unwrap();
    let rfi = kb.entry(12).unwrap();
    assert!(rfi.has_keyword("rfi"));
}

#[test]
fn test_aa_vs_kk_phrase() {
    assert_eq!(ids("aa vs kk"), vec![93, 92, 110]);
    assert_eq!(ids("AA vs. KK!!"), vec![93, 92, 110]);
    let kb = knowledge_base().unwrap();
    let top = kb.search_scored("aa vs kk");
    assert!(top[0].score >= 100);
}

#[test]
fn test_assorted_queries() {
    assert_eq!(ids("flush draw"), vec![94, 79, 78]);
    assert_eq!(ids("gto"), vec![52, 140, 75]);
    assert_eq!(ids("3bet"), vec![14, 136, 72]);
    assert_eq!(ids("oop"), vec![11, 139, 7]);
    assert_eq!(ids("mdf"), vec![58, 116, 86]);
    assert_eq!(ids("what is equity"), vec![141, 54, 55]);
    assert_eq!(ids("multiway bluff"), vec![128, 143, 126]);
    assert_eq!(ids("rule of 2 and 4"), vec![95, 11, 96]);
}

#[test]
fn test_byte_order_mark_splits_query_words() {
    assert_eq!(ids("spr\u{feff}gto"), vec![52, 38, 123]);
}

#[test]
fn test_fewer_than_three_matches() {
    assert_eq!(ids("button"), vec![1]);
}

#[test]
fn test_no_matches() {
    for query in ["", "   ", "!!!", "?!", "xyzzy"] {
        assert!(ids(query).is_empty(), "query {query:?} matched");
    }
}

#[test]
fn test_scores_descending_and_above_threshold() {
    let kb = knowledge_base().unwrap();
    for query in ["spr", "draw", "bluff", "position", "equity"] {
        let hits = kb.search_scored(query);
        assert!(hits.len() <= 3);
        assert!(hits.iter().all(|hit| hit.score > 10));
        assert!(hits.windows(2).all(|pair| pair[0].score >= pair[1].score));
    }
}

#[test]
fn test_search_is_idempotent() {
    let kb = knowledge_base().unwrap();
    let first: Vec<_> = kb.search_scored("turn barrel").iter().map(|h| (h.entry.id(), h.score)).collect();
    let second: Vec<_> = kb.search_scored("turn barrel").iter().map(|h| (h.entry.id(), h.score)).collect();
    assert_eq!(first, second);
}

#[test]
fn test_suggested_questions_find_their_entry() {
    let expected = [
        ("What is GTO poker?", vec![52, 140, 111]),
        ("How many outs does a flush draw have?", vec![94, 78, 79]),
        ("What are the opening ranges by position?", vec![135, 10, 139]),
        ("How should I c-bet on dry boards?", vec![98, 100, 99]),
        ("What is the Rule of 2 and 4?", vec![95, 4, 11]),
        ("How does SPR affect my strategy?", vec![115, 38, 123]),
        ("Should I bluff in multiway pots?", vec![128, 130, 126]),
        ("What is AA vs KK equity?", vec![93, 133, 141]),
    ];
    assert_eq!(felt_knowledge::SUGGESTED_QUESTIONS.len(), expected.len());
    for (question, want) in expected {
        assert!(felt_knowledge::SUGGESTED_QUESTIONS.contains(&question));
        assert_eq!(ids(question), want, "{question}");
    }
}

#[test]
fn test_custom_settings_change_ranking_cap() {
    let data = felt_data::ReferenceData::builtin().unwrap();
    let settings = SearchSettings {
        max_results: 5,
        ..SearchSettings::default()
    };
    let kb = KnowledgeBase::build(&data, settings).unwrap();
    let hits = kb.search("draw");
    assert_eq!(hits.len(), 5);

    let narrowed = kb.search_scored_with("draw", &kb.settings().with_limit(Some(2)));
    assert_eq!(narrowed.len(), 2);
    assert_eq!(narrowed[0].entry.id(), hits[0].id());
}

#[test]
fn test_theory_glossary_term_has_medium_priority() {
    let kb = knowledge_base().unwrap();
    let gto = kb.entry(52).unwrap();
    assert_eq!(gto.category(), KnowledgeCategory::Glossary);
    assert_eq!(gto.priority().get(), 2);
}

#[test]
fn test_module_level_search() {
    let hits = felt_knowledge::search("spr").unwrap();
    assert_eq!(hits.first().map(|e| e.id()), Some(38));
}
