//! Corpus builder.
//!
//! Turns the reference tables into the ordered entry list. Sections are built
//! in [`KnowledgeCategory::ALL`] order and ids are handed out from 1 as
//! entries are pushed, so the same tables always produce the same ids.

mod bet_sizing;
mod equity;
mod general;
mod glossary;
mod multiway;
mod postflop;
mod ranges;

use felt_data::ReferenceData;

use crate::alias::AliasMap;
use crate::entry::{KnowledgeCategory, KnowledgeEntry};
use crate::error::KnowledgeError;

/// Priority used when a section does not author one.
const DEFAULT_PRIORITY: u8 = 3;

/// Accumulates entries and assigns ids.
pub(crate) struct CorpusBuilder {
    entries: Vec<KnowledgeEntry>,
    next_id: u32,
}

impl CorpusBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Append one entry with the next id.
    pub(crate) fn push(
        &mut self,
        keywords: Vec<String>,
        category: KnowledgeCategory,
        question: impl Into<String>,
        answer: impl Into<String>,
        priority: u8,
    ) -> Result<(), KnowledgeError> {
        let entry = KnowledgeEntry::new(
            self.next_id,
            keywords,
            category,
            question.into(),
            answer.into(),
            priority,
        )?;
        self.next_id += 1;
        self.entries.push(entry);
        Ok(())
    }

    /// Append a principle entry: the title, each title word, then `extra`.
    pub(crate) fn push_principle(
        &mut self,
        category: KnowledgeCategory,
        principle: &felt_data::Principle,
        extra: &[&str],
    ) -> Result<(), KnowledgeError> {
        let title = principle.title.to_lowercase();
        let mut keywords = vec![title.clone()];
        keywords.extend(title.split_whitespace().map(str::to_string));
        keywords.extend(extra.iter().map(|k| (*k).to_string()));
        self.push(
            keywords,
            category,
            principle.title.as_str(),
            format!("**{}** — {}", principle.title, principle.body),
            DEFAULT_PRIORITY,
        )
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Build every section from `data`.
///
/// # Errors
///
/// Returns [`KnowledgeError`] if an entry has an invalid priority or a
/// section cannot find the rows it interpolates.
pub fn build_corpus(
    data: &ReferenceData,
    aliases: &AliasMap,
) -> Result<Vec<KnowledgeEntry>, KnowledgeError> {
    let mut builder = CorpusBuilder::new();

    for category in KnowledgeCategory::ALL {
        let before = builder.len();
        match category {
            KnowledgeCategory::Glossary => glossary::build(&mut builder, &data.glossary, aliases)?,
            KnowledgeCategory::Equity => equity::build(&mut builder, &data.equity)?,
            KnowledgeCategory::Postflop => postflop::build(&mut builder, &data.postflop)?,
            KnowledgeCategory::BetSizing => bet_sizing::build(&mut builder, &data.bet_sizing)?,
            KnowledgeCategory::Multiway => multiway::build(&mut builder, &data.multiway)?,
            KnowledgeCategory::Ranges => ranges::build(&mut builder)?,
            KnowledgeCategory::General => general::build(&mut builder)?,
        }
        tracing::debug!(
            section = category.label(),
            entries = builder.len() - before,
            "corpus section built"
        );
    }

    tracing::debug!(total = builder.len(), "corpus built");
    Ok(builder.entries)
}

/// Owned keyword list.
pub(crate) fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| (*word).to_string()).collect()
}

/// Render each row and join with `separator`.
pub(crate) fn render_rows<I, F>(rows: I, separator: &str, render: F) -> String
where
    I: IntoIterator,
    F: FnMut(I::Item) -> String,
{
    rows.into_iter()
        .map(render)
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_push_order() {
        let mut builder = CorpusBuilder::new();
        builder
            .push(keywords(&["a"]), KnowledgeCategory::General, "A?", "a", 1)
            .unwrap();
        builder
            .push(keywords(&["b"]), KnowledgeCategory::General, "B?", "b", 3)
            .unwrap();
        let ids: Vec<u32> = builder.entries.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_invalid_priority_fails_and_keeps_id() {
        let mut builder = CorpusBuilder::new();
        let err = builder
            .push(keywords(&["a"]), KnowledgeCategory::General, "A?", "a", 4)
            .unwrap_err();
        assert!(matches!(err, KnowledgeError::InvalidPriority { priority: 4, .. }));
        assert_eq!(builder.next_id, 1);
    }

    #[test]
    fn test_principle_keywords() {
        let mut builder = CorpusBuilder::new();
        let principle = felt_data::Principle {
            title: "Size Up With Nut Advantage".to_string(),
            body: "Bet big.".to_string(),
        };
        builder
            .push_principle(KnowledgeCategory::Postflop, &principle, &["postflop"])
            .unwrap();
        let entry = &builder.entries[0];
        assert_eq!(
            entry.keywords(),
            vec![
                "size up with nut advantage",
                "size",
                "up",
                "with",
                "nut",
                "advantage",
                "postflop"
            ]
        );
        assert_eq!(entry.question(), "Size Up With Nut Advantage");
        assert_eq!(entry.answer(), "**Size Up With Nut Advantage** — Bet big.");
        assert_eq!(entry.priority().get(), 3);
    }

    #[test]
    fn test_render_rows() {
        assert_eq!(render_rows([1, 2, 3], "\n", |n| format!("- {n}")), "- 1\n- 2\n- 3");
        assert_eq!(render_rows(Vec::<u8>::new(), "\n", |n| n.to_string()), "");
    }
}
