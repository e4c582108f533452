use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use docdrift_core::traits::GapDetector;
use docdrift_core::types::{Gap, TokenSet};

use crate::catalog::TriggerCatalog;

/// Lower-case and collapse whitespace runs to one space. Punctuation is kept:
/// patterns such as `**2` or `sqrt(` need the original syntax.
pub fn light_normalize(raw: &str) -> String {
    raw.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

pub struct OperationalDetector {
    catalog: Arc<TriggerCatalog>,
}

impl OperationalDetector {
    pub fn new(catalog: Arc<TriggerCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &TriggerCatalog {
        &self.catalog
    }

    /// One gap per category whose pattern fired while none of its concepts
    /// appear in the documentation, in catalog order.
    pub fn detect_gaps(&self, raw_code: &str, doc_tokens: &TokenSet) -> Vec<Gap> {
        let code = light_normalize(raw_code);
        let doc_words: HashSet<&str> = doc_tokens.iter().collect();
        let mut gaps = Vec::new();
        for trigger in self.catalog.triggers() {
            let Some(found) = trigger.code_patterns.iter().find(|p| code.contains(p.as_str())) else {
                continue;
            };
            if trigger.expected_concepts.iter().any(|c| doc_words.contains(c.as_str())) {
                debug!(category = %trigger.category, pattern = %found, "trigger covered by documentation");
                continue;
            }
            debug!(category = %trigger.category, pattern = %found, "operational gap");
            gaps.push(Gap {
                category: trigger.category.clone(),
                trigger_found: found.clone(),
                missing_concepts: trigger.expected_concepts.iter().cloned().collect(),
            });
        }
        gaps
    }
}

impl Default for OperationalDetector {
    fn default() -> Self {
        Self::new(TriggerCatalog::builtin())
    }
}

impl GapDetector for OperationalDetector {
    fn detect_gaps(&self, raw_code: &str, doc_tokens: &TokenSet) -> Vec<Gap> {
        OperationalDetector::detect_gaps(self, raw_code, doc_tokens)
    }
}
