use std::collections::BTreeSet;

use docdrift_core::types::{Gap, TokenSet};

/// Vocabulary split between the two sides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermBreakdown {
    pub shared: BTreeSet<String>,
    pub code_only: BTreeSet<String>,
    pub doc_only: BTreeSet<String>,
}

impl TermBreakdown {
    pub fn new(code: &TokenSet, doc: &TokenSet) -> Self {
        let code_vocab = code.vocabulary();
        let doc_vocab = doc.vocabulary();
        Self {
            shared: code_vocab.intersection(&doc_vocab).map(|t| (*t).to_string()).collect(),
            code_only: code_vocab.difference(&doc_vocab).map(|t| (*t).to_string()).collect(),
            doc_only: doc_vocab.difference(&code_vocab).map(|t| (*t).to_string()).collect(),
        }
    }
}

/// Actionable hints, most severe first. Each term list holds at most
/// `max_listed_terms / 2` entries (at least one), in sorted order.
pub fn suggestions(terms: &TermBreakdown, gaps: &[Gap], max_listed_terms: usize) -> Vec<String> {
    let per_list = (max_listed_terms / 2).max(1);
    let listed = |set: &BTreeSet<String>| set.iter().take(per_list).cloned().collect::<Vec<_>>().join(", ");

    let mut out = Vec::new();
    if terms.shared.is_empty() {
        out.push("CRITICAL: No common vocabulary found. Rename identifiers or reword the documentation to share domain terms.".to_string());
    }
    if !terms.doc_only.is_empty() {
        out.push(format!("Consider using these doc terms in your code: {}", listed(&terms.doc_only)));
    }
    if !terms.code_only.is_empty() {
        out.push(format!("Document these code elements: {}", listed(&terms.code_only)));
    }
    for gap in gaps {
        out.push(format!(
            "Code performs {} operations (`{}`) the documentation never mentions; describe it using one of: {}",
            gap.category,
            gap.trigger_found,
            listed(&gap.missing_concepts),
        ));
    }
    out
}
