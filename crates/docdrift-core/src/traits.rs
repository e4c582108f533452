//! Seams between the pipeline stages.
//!
//! The engine is generic over these so a stage can be swapped in tests
//! (a fixed-score scorer, a one-entry catalog) without touching the others.

use crate::error::Result;
use crate::types::{ConsistencyReport, Gap, TokenSet};

pub trait Tokenizer: Send + Sync {
    fn normalize(&self, raw: &str) -> TokenSet;
}

pub trait SimilarityScorer: Send + Sync {
    /// Symmetric similarity in `[0, 1]`.
    fn score(&self, code: &TokenSet, doc: &TokenSet) -> f64;
}

pub trait GapDetector: Send + Sync {
    fn detect_gaps(&self, raw_code: &str, doc_tokens: &TokenSet) -> Vec<Gap>;
}

pub trait Analyzer: Send + Sync {
    fn analyze(&self, code: &str, doc: &str) -> Result<ConsistencyReport>;
}
