//! Section index: a flat quick-find list over every reference table row.
//!
//! Unlike the knowledge base this is not ranked. Each row becomes one
//! lowercased text blob tagged with the page section it lives on, and
//! [`SectionIndex::filter`] keeps rows containing every query word.

use std::fmt;

use felt_data::{ReferenceData, StreetGuideRow};
use serde::{Serialize, Serializer};

use crate::query::{normalize, tokenize};

/// Maximum label length in characters, ellipsis included.
pub const LABEL_MAX_CHARS: usize = 58;

/// Page section a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    /// Postflop play.
    Postflop,
    /// Glossary.
    Glossary,
    /// Bet sizing theory.
    Sizing,
    /// Hand equity.
    Equity,
    /// Multiway pots.
    Multiway,
}

impl SectionId {
    /// Stable identifier used in links.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Postflop => "postflop",
            Self::Glossary => "glossary",
            Self::Sizing => "sizing",
            Self::Equity => "equity",
            Self::Multiway => "multiway",
        }
    }

    /// Sidebar label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Postflop => "Postflop Play",
            Self::Glossary => "Glossary",
            Self::Sizing => "Bet Sizing Theory",
            Self::Equity => "Hand Equity",
            Self::Multiway => "Multiway Pots",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SectionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One indexed row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionIndexEntry {
    /// Lowercased searchable text.
    pub text: String,
    /// Owning section.
    pub section: SectionId,
    /// Display label, at most [`LABEL_MAX_CHARS`] characters.
    pub label: String,
}

impl SectionIndexEntry {
    fn new(text: &str, section: SectionId, label: &str) -> Self {
        Self {
            text: text.to_lowercase(),
            section,
            label: truncate_label(label),
        }
    }
}

/// Cut `label` to [`LABEL_MAX_CHARS`] characters, ending in `…` when cut.
#[must_use]
pub fn truncate_label(label: &str) -> String {
    if label.chars().count() <= LABEL_MAX_CHARS {
        return label.to_string();
    }
    let mut out: String = label.chars().take(LABEL_MAX_CHARS - 1).collect();
    out.push('…');
    out
}

/// Ordered quick-find index.
#[derive(Debug, Clone, Default)]
pub struct SectionIndex {
    entries: Vec<SectionIndexEntry>,
}

impl SectionIndex {
    /// Index every row of `data`.
    #[must_use]
    pub fn build(data: &ReferenceData) -> Self {
        let mut index = Self::default();
        index.add_glossary(data);
        index.add_postflop(data);
        index.add_sizing(data);
        index.add_equity(data);
        index.add_multiway(data);
        tracing::debug!(entries = index.entries.len(), "section index built");
        index
    }

    /// Rows whose text contains every word of `query`, in index order.
    /// An empty query matches nothing.
    #[must_use]
    pub fn filter(&self, query: &str, limit: usize) -> Vec<&SectionIndexEntry> {
        let words = tokenize(&normalize(query));
        if words.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|entry| words.iter().all(|word| entry.text.contains(word.as_str())))
            .take(limit)
            .collect()
    }

    /// All rows in index order.
    #[must_use]
    pub fn entries(&self) -> &[SectionIndexEntry] {
        &self.entries
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, parts: &[&str], section: SectionId, label: &str) {
        self.entries
            .push(SectionIndexEntry::new(&parts.join(" "), section, label));
    }

    fn add_glossary(&mut self, data: &ReferenceData) {
        for g in &data.glossary.terms {
            let label = if g.full == g.term {
                g.term.clone()
            } else {
                format!("{} — {}", g.term, g.full)
            };
            self.push(
                &[&g.term, &g.full, &g.definition, g.category.as_str()],
                SectionId::Glossary,
                &label,
            );
        }
    }

    fn add_postflop(&mut self, data: &ReferenceData) {
        let postflop = &data.postflop;
        for c in &postflop.cbet_textures {
            self.push(
                &[&c.texture, &c.example, &c.notes, &c.range_adv],
                SectionId::Postflop,
                &format!("C-bet: {}", c.texture),
            );
        }
        self.add_street_rows(&postflop.turn_guide, SectionId::Postflop, |t| {
            format!("Turn: {} — {}", t.action, t.situation)
        });
        self.add_street_rows(&postflop.river_guide, SectionId::Postflop, |r| {
            format!("River: {} — {}", r.action, r.situation)
        });
        for p in &postflop.principles {
            self.push(&[&p.title, &p.body], SectionId::Postflop, &p.title);
        }
    }

    fn add_sizing(&mut self, data: &ReferenceData) {
        let sizing = &data.bet_sizing;
        for p in &sizing.principles {
            self.push(&[&p.title, &p.body], SectionId::Sizing, &p.title);
        }
        for r in &sizing.preflop_rows {
            let sizes = r.sizes.values().map(String::as_str).collect::<Vec<_>>().join(" ");
            self.push(
                &[&r.label, &r.notes, &sizes],
                SectionId::Sizing,
                &format!("Preflop size: {}", r.label),
            );
        }
        for r in &sizing.postflop_rows {
            self.push(
                &[&r.street, &r.situation, &r.size, &r.notes],
                SectionId::Sizing,
                &format!("{} sizing: {}", r.street, r.situation),
            );
        }
        for p in &sizing.pot_odds {
            let bet = format!("{}% pot", p.bet_pct);
            let needed = format!("{}%", p.equity_needed);
            let mdf = format!("{}%", p.mdf);
            self.push(
                &["bet", &bet, "equity needed", &needed, "mdf", &mdf],
                SectionId::Sizing,
                &format!("Pot odds: {}% bet → {}% equity", p.bet_pct, p.equity_needed),
            );
        }
        for s in &sizing.spr_guide {
            self.push(
                &[&s.label, &s.range, &s.strategy, &s.hands],
                SectionId::Sizing,
                &format!("SPR {}: {}", s.range, s.label),
            );
        }
        for s in &sizing.stack_depth_notes {
            self.push(
                &[&s.depth, &s.adjustments],
                SectionId::Sizing,
                &format!("Stack depth: {}", s.depth),
            );
        }
    }

    fn add_equity(&mut self, data: &ReferenceData) {
        let equity = &data.equity;
        for m in &equity.matchups {
            let pct = format!("{}% equity", m.equity);
            self.push(
                &[&m.hero, &m.villain, &m.category, &m.notes, &pct],
                SectionId::Equity,
                &format!("{} vs {} ({}%)", m.hero, m.villain, m.equity),
            );
        }
        for o in &equity.outs_chart {
            let outs = format!("{} outs", o.outs);
            let two_cards = format!("{}% two cards", o.two_cards);
            self.push(
                &[&o.draw, &outs, &o.notes, &two_cards],
                SectionId::Equity,
                &format!("{} ({} outs)", o.draw, o.outs),
            );
        }
        for v in &equity.vs_range_table {
            let widths = [
                format!("top5 {}", v.top_5),
                format!("top10 {}", v.top_10),
                format!("top20 {}", v.top_20),
                format!("top50 {}", v.top_50),
            ];
            self.push(
                &[&v.hand, &v.notes, &widths[0], &widths[1], &widths[2], &widths[3]],
                SectionId::Equity,
                &format!("{} vs ranges", v.hand),
            );
        }
    }

    fn add_multiway(&mut self, data: &ReferenceData) {
        let multiway = &data.multiway;
        for a in &multiway.preflop_adjustments {
            self.push(
                &[&a.aspect, &a.hu, &a.three_way, &a.four_way, &a.note],
                SectionId::Multiway,
                &format!("Multiway preflop: {}", a.aspect),
            );
        }
        for c in &multiway.flop_cbet {
            self.push(
                &[&c.texture, &c.hands, &c.notes, &c.size],
                SectionId::Multiway,
                &format!("Multiway c-bet: {}", c.texture),
            );
        }
        self.add_street_rows(&multiway.turn_river_guide, SectionId::Multiway, |t| {
            format!("Multiway: {}", t.action)
        });
        for p in &multiway.principles {
            self.push(&[&p.title, &p.body], SectionId::Multiway, &p.title);
        }
    }

    fn add_street_rows<F>(&mut self, rows: &[StreetGuideRow], section: SectionId, label: F)
    where
        F: Fn(&StreetGuideRow) -> String,
    {
        for row in rows {
            self.push(
                &[&row.situation, &row.action, &row.hands, &row.notes],
                section,
                &label(row),
            );
        }
    }
}
