//! Knowledge entry types - KnowledgeEntry, KnowledgeCategory, Priority.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::KnowledgeError;

/// Topic section an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KnowledgeCategory {
    /// One entry per glossary term.
    Glossary,
    /// Matchups, outs, equity vs ranges.
    Equity,
    /// C-bets, turn and river play.
    Postflop,
    /// Sizing, SPR, pot odds.
    BetSizing,
    /// Multiway pots.
    Multiway,
    /// Opening, 3-bet, 4-bet and defense ranges.
    Ranges,
    /// General concepts.
    General,
}

impl KnowledgeCategory {
    /// Every category, in corpus build order.
    pub const ALL: [Self; 7] = [
        Self::Glossary,
        Self::Equity,
        Self::Postflop,
        Self::BetSizing,
        Self::Multiway,
        Self::Ranges,
        Self::General,
    ];

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Glossary => "Glossary",
            Self::Equity => "Equity",
            Self::Postflop => "Postflop",
            Self::BetSizing => "Bet Sizing",
            Self::Multiway => "Multiway",
            Self::Ranges => "Ranges",
            Self::General => "General",
        }
    }
}

impl fmt::Display for KnowledgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for KnowledgeCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Authored importance tier: 1 is the most important, 3 the least.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Priority(u8);

impl Priority {
    /// Highest importance.
    pub const HIGH: Self = Self(1);
    /// Medium importance.
    pub const MEDIUM: Self = Self(2);
    /// Lowest importance; the default for generated entries.
    pub const LOW: Self = Self(3);

    /// Validate a raw tier.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (1..=3).contains(&value).then_some(Self(value))
    }

    /// Raw tier value.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Tiers below the top one (0 for priority 1, 2 for priority 3).
    #[must_use]
    pub fn steps_below_top(self) -> i64 {
        i64::from(self.0) - 1
    }
}

/// One searchable question/answer record.
///
/// Fields are read-only after [`KnowledgeEntry::new`]. Lowercased copies of
/// the searchable text are computed there once and skipped during
/// serialization.
///
/// ```compile_fail
/// use felt_knowledge::{KnowledgeCategory, KnowledgeEntry};
///
/// let mut entry = KnowledgeEntry::new(
///     1,
///     vec!["x".to_string()],
///     KnowledgeCategory::General,
///     "Q".to_string(),
///     String::new(),
///     1,
/// )?;
/// entry.question = "What is SPR?".to_string();
/// # Ok::<(), felt_knowledge::KnowledgeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnowledgeEntry {
    id: u32,
    keywords: Vec<String>,
    category: KnowledgeCategory,
    question: String,
    answer: String,
    priority: Priority,
    #[serde(skip)]
    pub(crate) keywords_joined: String,
    #[serde(skip)]
    pub(crate) question_lower: String,
    #[serde(skip)]
    pub(crate) answer_lower: String,
}

impl KnowledgeEntry {
    /// Build an entry. `priority` must be in 1..=3.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError::InvalidPriority`] for an out-of-range tier.
    pub fn new(
        id: u32,
        keywords: Vec<String>,
        category: KnowledgeCategory,
        question: String,
        answer: String,
        priority: u8,
    ) -> Result<Self, KnowledgeError> {
        let Some(priority) = Priority::new(priority) else {
            return Err(KnowledgeError::InvalidPriority { question, priority });
        };
        Ok(Self {
            keywords_joined: keywords.join(" "),
            question_lower: question.to_lowercase(),
            answer_lower: answer.to_lowercase(),
            id,
            keywords,
            category,
            question,
            answer,
            priority,
        })
    }

    /// Unique id, assigned in creation order starting at 1.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Lowercase keywords. Order is preserved from authoring.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Topic section.
    #[must_use]
    pub fn category(&self) -> KnowledgeCategory {
        self.category
    }

    /// Question text as displayed.
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Markdown answer.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Importance tier.
    #[must_use]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// True if `word` is exactly one of the keywords.
    #[must_use]
    pub fn has_keyword(&self, word: &str) -> bool {
        self.keywords.iter().any(|keyword| keyword == word)
    }
}
