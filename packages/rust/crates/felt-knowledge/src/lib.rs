//! felt-knowledge - Keyword search over FeltTheory's poker reference data
//!
//! The knowledge base is a fixed list of question/answer entries generated
//! from the `felt-data` tables plus hand-authored sections. A query is
//! normalized, expanded through the alias table, scored against every entry
//! and the best few entries are returned. Nothing is mutated after the corpus
//! is built.
//!
//! ```text
//! felt-knowledge/src/
//! ├── lib.rs           # Re-exports, process-wide instance (this file)
//! ├── error.rs         # KnowledgeError
//! ├── entry.rs         # KnowledgeEntry, KnowledgeCategory, Priority
//! ├── alias.rs         # AliasMap
//! ├── corpus/          # CorpusBuilder + one module per section
//! ├── query.rs         # normalize, tokenize, expand_aliases
//! ├── scoring.rs       # ScoringWeights, score_entry
//! ├── search.rs        # KnowledgeBase, ScoredEntry
//! ├── settings.rs      # SearchSettings loader
//! ├── section_index.rs # flat quick-find index
//! └── suggest.rs       # starter questions
//! ```
//!
//! # Example
//!
//! ```rust
//! let kb = felt_knowledge::knowledge_base()?;
//! let hits = kb.search("what is spr");
//! assert!(!hits.is_empty());
//! assert!(hits.len() <= 3);
//! # Ok::<(), felt_knowledge::KnowledgeError>(())
//! ```

mod alias;
mod corpus;
mod entry;
mod error;
mod query;
mod scoring;
mod search;
mod section_index;
mod settings;
mod suggest;

use std::sync::{Mutex, OnceLock, PoisonError};

pub use alias::AliasMap;
pub use corpus::build_corpus;
pub use entry::{KnowledgeCategory, KnowledgeEntry, Priority};
pub use error::KnowledgeError;
pub use query::{ParsedQuery, expand_aliases, normalize, tokenize};
pub use scoring::{ScoringWeights, score_entry};
pub use search::{KnowledgeBase, ScoredEntry};
pub use section_index::{LABEL_MAX_CHARS, SectionId, SectionIndex, SectionIndexEntry, truncate_label};
pub use settings::SearchSettings;
pub use suggest::SUGGESTED_QUESTIONS;

static KNOWLEDGE_BASE: OnceLock<KnowledgeBase> = OnceLock::new();
static BUILD_LOCK: Mutex<()> = Mutex::new(());

#[cfg(test)]
static BUILDS: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);

/// Process-wide knowledge base built from the embedded tables.
///
/// Built on first call and never mutated afterwards. Concurrent first calls
/// wait on one build instead of racing their own.
///
/// # Errors
///
/// Returns [`KnowledgeError`] if the embedded tables cannot be built. A
/// failed build is not cached; the next call retries.
pub fn knowledge_base() -> Result<&'static KnowledgeBase, KnowledgeError> {
    if let Some(kb) = KNOWLEDGE_BASE.get() {
        return Ok(kb);
    }
    // The guard protects no data, so a poisoned lock is still usable.
    let _guard = BUILD_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(kb) = KNOWLEDGE_BASE.get() {
        return Ok(kb);
    }
    let kb = KnowledgeBase::builtin()?;
    #[cfg(test)]
    BUILDS.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    Ok(KNOWLEDGE_BASE.get_or_init(|| kb))
}

/// Search the process-wide knowledge base.
///
/// # Errors
///
/// Returns [`KnowledgeError`] only when the knowledge base cannot be built.
pub fn search(query: &str) -> Result<Vec<&'static KnowledgeEntry>, KnowledgeError> {
    Ok(knowledge_base()?.search(query))
}
