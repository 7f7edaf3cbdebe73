//! Query normalization, tokenization and one-level alias expansion.

use serde::Serialize;
use std::collections::HashSet;

use crate::alias::AliasMap;

/// A query reduced to its canonical search form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedQuery {
    /// Lowercased, punctuation-stripped, trimmed query text.
    pub normalized: String,
    /// Unique search words: the query words followed by alias expansions.
    pub words: Vec<String>,
}

impl ParsedQuery {
    /// Parse a raw query. Returns `None` when nothing searchable remains.
    #[must_use]
    pub fn parse(raw: &str, aliases: &AliasMap) -> Option<Self> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return None;
        }
        let tokens = tokenize(&normalized);
        let words = expand_aliases(&tokens, aliases);
        Some(Self { normalized, words })
    }
}

/// Whitespace as query text sees it: Unicode `White_Space` plus the byte
/// order mark, without NEL (U+0085).
fn is_query_space(c: char) -> bool {
    c == '\u{feff}' || (c != '\u{85}' && c.is_whitespace())
}

/// Lowercase, keep only word characters (`[A-Za-z0-9_]`), whitespace and
/// hyphens, then trim.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-' || is_query_space(*c))
        .collect::<String>()
        .trim_matches(is_query_space)
        .to_string()
}

/// Split on runs of whitespace.
#[must_use]
pub fn tokenize(normalized: &str) -> Vec<String> {
    normalized
        .split(is_query_space)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Append the words of every alias target hit by a single token or by an
/// adjacent token pair, then dedupe keeping first occurrences.
///
/// Expansion is one level deep: expanded words are never looked up again.
#[must_use]
pub fn expand_aliases(tokens: &[String], aliases: &AliasMap) -> Vec<String> {
    let mut expanded: Vec<&str> = tokens.iter().map(String::as_str).collect();

    for token in tokens {
        if let Some(target) = aliases.get(token) {
            expanded.extend(target.split_whitespace());
        }
    }
    for pair in tokens.windows(2) {
        let phrase = format!("{} {}", pair[0], pair[1]);
        if let Some(target) = aliases.get(&phrase) {
            expanded.extend(target.split_whitespace());
        }
    }

    let mut seen = HashSet::new();
    expanded
        .into_iter()
        .filter(|word| seen.insert(*word))
        .map(str::to_string)
        .collect()
}
