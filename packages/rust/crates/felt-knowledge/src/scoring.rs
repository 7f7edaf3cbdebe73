//! Additive lexical scoring of one entry against a parsed query.

use serde::{Deserialize, Serialize};

use crate::entry::KnowledgeEntry;
use crate::query::ParsedQuery;

/// Points awarded by each scoring rule.
///
/// Every rule fires independently and the results are summed. The partial
/// keyword rule fires once per matching keyword with no cap, so an entry with
/// many near-duplicate keywords accumulates score quickly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Whole normalized query found inside the space-joined keywords.
    pub keyword_phrase: i64,
    /// Whole normalized query found inside the lowercased question.
    pub question_phrase: i64,
    /// Query word equal to a keyword.
    pub exact_keyword: i64,
    /// Query word and keyword where either contains the other, per keyword.
    pub partial_keyword: i64,
    /// Query word found inside the lowercased question.
    pub question_word: i64,
    /// Query word found inside the lowercased answer.
    pub answer_word: i64,
    /// Deduction per priority tier below the top.
    pub priority_step: i64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            keyword_phrase: 100,
            question_phrase: 80,
            exact_keyword: 50,
            partial_keyword: 8,
            question_word: 20,
            answer_word: 2,
            priority_step: 3,
        }
    }
}

/// Score `entry` for `query`.
#[must_use]
pub fn score_entry(entry: &KnowledgeEntry, query: &ParsedQuery, weights: &ScoringWeights) -> i64 {
    let mut score = 0_i64;

    if entry.keywords_joined.contains(query.normalized.as_str()) {
        score += weights.keyword_phrase;
    }
    if entry.question_lower.contains(query.normalized.as_str()) {
        score += weights.question_phrase;
    }

    for word in &query.words {
        let word = word.as_str();
        if entry.has_keyword(word) {
            score += weights.exact_keyword;
        }
        for keyword in entry.keywords() {
            if keyword.contains(word) || word.contains(keyword.as_str()) {
                score += weights.partial_keyword;
            }
        }
        if entry.question_lower.contains(word) {
            score += weights.question_word;
        }
        if entry.answer_lower.contains(word) {
            score += weights.answer_word;
        }
    }

    score - entry.priority().steps_below_top() * weights.priority_step
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::AliasMap;
    use crate::entry::KnowledgeCategory;

    fn entry(keywords: &[&str], question: &str, answer: &str, priority: u8) -> KnowledgeEntry {
        KnowledgeEntry::new(
            1,
            keywords.iter().map(|k| (*k).to_string()).collect(),
            KnowledgeCategory::General,
            question.to_string(),
            answer.to_string(),
            priority,
        )
        .unwrap()
    }

    fn parse(query: &str) -> ParsedQuery {
        ParsedQuery::parse(query, &AliasMap::default()).unwrap()
    }

    #[test]
    fn test_spr_scenario() {
        let spr = entry(
            &["spr", "stack to pot ratio"],
            "How does SPR affect my strategy?",
            "",
            1,
        );
        // keyword phrase 100, question phrase 80, exact 50, partial 8, question word 20
        assert_eq!(score_entry(&spr, &parse("spr"), &ScoringWeights::default()), 258);
    }

    #[test]
    fn test_priority_penalty() {
        let weights = ScoringWeights::default();
        let high = entry(&["mdf"], "Q", "", 1);
        let low = entry(&["mdf"], "Q", "", 3);
        let query = parse("mdf");
        assert_eq!(
            score_entry(&high, &query, &weights) - score_entry(&low, &query, &weights),
            6
        );
    }

    #[test]
    fn test_partial_keyword_fires_per_keyword() {
        let weights = ScoringWeights::default();
        let one = entry(&["draws"], "Q", "", 1);
        let three = entry(&["draws", "redraw", "drawing"], "Q", "", 1);
        let query = parse("draw");
        // keyword phrase 100 in both; 8 per containing keyword
        assert_eq!(score_entry(&one, &query, &weights), 108);
        assert_eq!(score_entry(&three, &query, &weights), 124);
    }

    #[test]
    fn test_word_containing_keyword_counts() {
        let weights = ScoringWeights::default();
        let short = entry(&["bet"], "Q", "", 1);
        assert_eq!(score_entry(&short, &parse("overbets"), &weights), 8);
    }

    #[test]
    fn test_answer_word_and_question_phrase() {
        let weights = ScoringWeights::default();
        let faq = entry(&["x"], "What is fold equity?", "Fold equity is ...", 1);
        // question phrase 80 + two words each in question (20) and answer (2)
        assert_eq!(score_entry(&faq, &parse("fold equity"), &weights), 124);
    }
}
