//! Alias map for alternate spellings and abbreviations.
//!
//! Keys are single words or two-word phrases; values are canonical phrases.
//! Insertion order is kept because glossary keywords list matching aliases in
//! table order.

use std::collections::HashMap;

const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("pfr", "rfi"),
    ("cbet", "c-bet"),
    ("c bet", "c-bet"),
    ("continuation bet", "c-bet"),
    ("3bet", "3-bet"),
    ("three bet", "3-bet"),
    ("threebet", "3-bet"),
    ("4bet", "4-bet"),
    ("four bet", "4-bet"),
    ("fourbet", "4-bet"),
    ("5bet", "5-bet"),
    ("five bet", "5-bet"),
    ("oesd", "open-ended straight draw"),
    ("oesds", "open-ended straight draw"),
    ("fd", "flush draw"),
    ("spr", "stack-to-pot ratio"),
    ("mdf", "minimum defense frequency"),
    ("ev", "expected value"),
    ("gto", "game theory optimal"),
    ("ip", "in position"),
    ("oop", "out of position"),
    ("utg", "under the gun"),
    ("hj", "hijack"),
    ("co", "cutoff"),
    ("btn", "button"),
    ("sb", "small blind"),
    ("bb", "big blind"),
    ("ep", "early position"),
    ("mp", "middle position"),
    ("lp", "late position"),
    ("tpgk", "top pair good kicker"),
    ("vpip", "voluntarily put in pot"),
    ("hu", "heads up"),
    ("nit", "tight player"),
    ("lag", "loose aggressive"),
    ("tag", "tight aggressive"),
    ("donk", "donk bet"),
    ("float", "floating"),
    ("barrel", "double barrel"),
    ("overbet", "overbet"),
    ("probe", "probe bet"),
    ("squeeze", "squeeze play"),
    ("limp", "open limp"),
    ("cold call", "cold call"),
    ("runout", "runout"),
    ("blocker", "blocker"),
    ("blockers", "blocker"),
    ("nuts", "nut advantage"),
    ("polarize", "polarized"),
    ("polarised", "polarized"),
    ("merge", "merged"),
    ("merged", "merged"),
    ("balance", "balanced"),
    ("balanced", "balanced"),
];

/// Immutable alias -> canonical phrase mapping.
#[derive(Debug, Clone, Default)]
pub struct AliasMap {
    pairs: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl AliasMap {
    /// The shipped alias table.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_ALIASES.iter().copied())
    }

    /// Build from `(alias, target)` pairs. Keys and values are lowercased;
    /// a repeated alias keeps its first position and takes the last target.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut map = Self::default();
        for (alias, target) in pairs {
            let alias = alias.as_ref().to_lowercase();
            let target = target.as_ref().to_lowercase();
            if let Some(&slot) = map.index.get(&alias) {
                map.pairs[slot].1 = target;
            } else {
                map.index.insert(alias.clone(), map.pairs.len());
                map.pairs.push((alias, target));
            }
        }
        map
    }

    /// Canonical phrase for `alias`, if any.
    #[must_use]
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.index
            .get(alias)
            .map(|&slot| self.pairs[slot].1.as_str())
    }

    /// `(alias, target)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(alias, target)| (alias.as_str(), target.as_str()))
    }

    /// Aliases whose target equals `term` or `full` (case-insensitive).
    #[must_use]
    pub fn aliases_for(&self, term: &str, full: &str) -> Vec<&str> {
        let term = term.to_lowercase();
        let full = full.to_lowercase();
        self.iter()
            .filter(|(_, target)| *target == term || *target == full)
            .map(|(alias, _)| alias)
            .collect()
    }

    /// Number of aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True if the map has no aliases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let aliases = AliasMap::builtin();
        assert_eq!(aliases.get("pfr"), Some("rfi"));
        assert_eq!(aliases.get("c bet"), Some("c-bet"));
        assert_eq!(aliases.get("spr"), Some("stack-to-pot ratio"));
        assert_eq!(aliases.get("c-bet"), None);
    }

    #[test]
    fn test_aliases_for_matches_term_or_full_name() {
        let aliases = AliasMap::builtin();
        assert_eq!(
            aliases.aliases_for("C-Bet", "Continuation Bet"),
            vec!["cbet", "c bet", "continuation bet"]
        );
        assert_eq!(aliases.aliases_for("BTN", "Button"), vec!["btn"]);
        assert!(aliases.aliases_for("XYZ", "Nothing").is_empty());
    }

    #[test]
    fn test_from_pairs_lowercases_and_overrides() {
        let aliases = AliasMap::from_pairs([("FD", "Flush Draw"), ("x", "a"), ("fd", "fd2")]);
        assert_eq!(aliases.len(), 2);
        assert_eq!(aliases.get("fd"), Some("fd2"));
        assert_eq!(aliases.iter().next(), Some(("fd", "fd2")));
    }
}
