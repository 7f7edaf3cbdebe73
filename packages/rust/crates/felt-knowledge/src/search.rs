//! Knowledge base: immutable corpus plus ranking.

use std::collections::BTreeMap;

use felt_data::ReferenceData;
use serde::Serialize;

use crate::alias::AliasMap;
use crate::corpus::build_corpus;
use crate::entry::{KnowledgeCategory, KnowledgeEntry};
use crate::error::KnowledgeError;
use crate::query::ParsedQuery;
use crate::scoring::score_entry;
use crate::settings::SearchSettings;

/// A ranked hit with its score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredEntry<'a> {
    /// Matched entry.
    pub entry: &'a KnowledgeEntry,
    /// Total score after the priority penalty.
    pub score: i64,
}

/// Immutable searchable corpus.
///
/// Built once, then only read. `search` takes `&self` and touches no shared
/// mutable state, so one instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
    aliases: AliasMap,
    settings: SearchSettings,
}

impl KnowledgeBase {
    /// Build from reference tables.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError`] when a section cannot be built.
    pub fn build(data: &ReferenceData, settings: SearchSettings) -> Result<Self, KnowledgeError> {
        let aliases = AliasMap::builtin();
        let entries = build_corpus(data, &aliases)?;
        Ok(Self::from_entries(entries, aliases, settings))
    }

    /// Build from the embedded tables with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError`] when the embedded tables are malformed.
    pub fn builtin() -> Result<Self, KnowledgeError> {
        let data = ReferenceData::builtin()?;
        Self::build(&data, SearchSettings::default())
    }

    /// Wrap an already built entry list.
    #[must_use]
    pub fn from_entries(
        entries: Vec<KnowledgeEntry>,
        aliases: AliasMap,
        settings: SearchSettings,
    ) -> Self {
        Self {
            entries,
            aliases,
            settings,
        }
    }

    /// Top matches for `query`, best first.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&KnowledgeEntry> {
        self.search_scored(query)
            .into_iter()
            .map(|hit| hit.entry)
            .collect()
    }

    /// Like [`Self::search`], keeping each hit's score.
    #[must_use]
    pub fn search_scored(&self, query: &str) -> Vec<ScoredEntry<'_>> {
        self.search_scored_with(query, &self.settings)
    }

    /// Rank with caller-supplied settings instead of the configured ones.
    #[must_use]
    pub fn search_scored_with(&self, query: &str, settings: &SearchSettings) -> Vec<ScoredEntry<'_>> {
        match self.parse_query(query) {
            Some(parsed) => self.rank(&parsed, settings),
            None => Vec::new(),
        }
    }

    /// Normalize and expand `query` with this knowledge base's aliases.
    #[must_use]
    pub fn parse_query(&self, query: &str) -> Option<ParsedQuery> {
        let parsed = ParsedQuery::parse(query, &self.aliases)?;
        tracing::debug!(
            normalized = %parsed.normalized,
            words = ?parsed.words,
            "query expanded"
        );
        Some(parsed)
    }

    fn rank(&self, parsed: &ParsedQuery, settings: &SearchSettings) -> Vec<ScoredEntry<'_>> {
        let mut hits: Vec<ScoredEntry<'_>> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let score = score_entry(entry, parsed, &settings.weights);
                (score > settings.min_score).then(|| {
                    tracing::trace!(id = entry.id(), score, question = %entry.question(), "match");
                    ScoredEntry { entry, score }
                })
            })
            .collect();
        // Stable: equal scores keep corpus order.
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits.truncate(settings.max_results);
        hits
    }

    /// Entry by id.
    ///
    /// Built corpora number ids from 1 in order, so the slot at `id - 1` is
    /// tried first. Lists handed to [`Self::from_entries`] may use any ids.
    #[must_use]
    pub fn entry(&self, id: u32) -> Option<&KnowledgeEntry> {
        usize::try_from(id.wrapping_sub(1))
            .ok()
            .and_then(|index| self.entries.get(index))
            .filter(|entry| entry.id() == id)
            .or_else(|| self.entries.iter().find(|entry| entry.id() == id))
    }

    /// All entries in corpus order.
    #[must_use]
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    /// Alias table used for query expansion.
    #[must_use]
    pub fn aliases(&self) -> &AliasMap {
        &self.aliases
    }

    /// Active ranking settings.
    #[must_use]
    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry count per category, every category present.
    #[must_use]
    pub fn category_counts(&self) -> BTreeMap<KnowledgeCategory, usize> {
        let mut counts: BTreeMap<KnowledgeCategory, usize> =
            KnowledgeCategory::ALL.iter().map(|c| (*c, 0)).collect();
        for entry in &self.entries {
            *counts.entry(entry.category()).or_default() += 1;
        }
        counts
    }
}
