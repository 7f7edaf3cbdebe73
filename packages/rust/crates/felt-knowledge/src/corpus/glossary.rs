use felt_data::{Glossary, GlossaryCategory};

use super::{CorpusBuilder, DEFAULT_PRIORITY};
use crate::alias::AliasMap;
use crate::entry::KnowledgeCategory;
use crate::error::KnowledgeError;

/// One entry per term. Keywords: term, full name, each word of the full name,
/// category, then every alias pointing at the term or full name.
pub(super) fn build(
    builder: &mut CorpusBuilder,
    glossary: &Glossary,
    aliases: &AliasMap,
) -> Result<(), KnowledgeError> {
    for term in &glossary.terms {
        let full = term.full.to_lowercase();
        let mut keywords = vec![term.term.to_lowercase(), full.clone()];
        keywords.extend(full.split_whitespace().map(str::to_string));
        keywords.push(term.category.as_str().to_lowercase());
        keywords.extend(
            aliases
                .aliases_for(&term.term, &term.full)
                .into_iter()
                .map(str::to_string),
        );

        let priority = if term.category == GlossaryCategory::Theory {
            2
        } else {
            DEFAULT_PRIORITY
        };
        builder.push(
            keywords,
            KnowledgeCategory::Glossary,
            format!("What is {} ({})?", term.full, term.term),
            format!("**{} ({})** — {}", term.full, term.term, term.definition),
            priority,
        )?;
    }
    Ok(())
}
