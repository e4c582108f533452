use std::collections::BTreeMap;

use docdrift_core::traits::SimilarityScorer;
use docdrift_core::types::TokenSet;

/// Number of documents in the corpus: one code, one documentation.
pub const CORPUS_SIZE: usize = 2;

/// `ln((1 + n) / (1 + df)) + 1`; strictly positive for any `df <= n`.
pub fn smoothed_idf(document_frequency: usize, corpus_size: usize) -> f64 {
    let n = corpus_size as f64;
    let df = document_frequency as f64;
    ((1.0 + n) / (1.0 + df)).ln() + 1.0
}

/// Sparse term weights keyed by term, iterated in term order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    weights: BTreeMap<String, f64>,
}

impl TermVector {
    /// Zero for terms outside the vector's vocabulary.
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(t, w)| (t.as_str(), *w))
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Unit-length copy; a zero vector stays empty.
    pub fn l2_normalized(&self) -> TermVector {
        let norm = self.norm();
        if norm == 0.0 {
            return TermVector::default();
        }
        let weights = self.weights.iter().map(|(t, w)| (t.clone(), w / norm)).collect();
        TermVector { weights }
    }

    /// Sum over shared terms in term order, so `a.dot(b)` and `b.dot(a)` are bit-identical.
    ///
    /// Folds from `+0.0`: an empty `f64` sum is `-0.0`.
    pub fn dot(&self, other: &TermVector) -> f64 {
        self.weights
            .iter()
            .filter_map(|(term, w)| other.weights.get(term).map(|o| w * o))
            .fold(0.0, |acc, x| acc + x)
    }
}

/// Build the TF-IDF vectors of both documents over their shared corpus.
pub fn tfidf_pair(code: &TokenSet, doc: &TokenSet) -> (TermVector, TermVector) {
    let code_counts = code.term_counts();
    let doc_counts = doc.term_counts();
    let weigh = |counts: &BTreeMap<&str, usize>, other: &BTreeMap<&str, usize>| {
        let weights = counts
            .iter()
            .map(|(term, tf)| {
                let df = if other.contains_key(term) { 2 } else { 1 };
                ((*term).to_string(), *tf as f64 * smoothed_idf(df, CORPUS_SIZE))
            })
            .collect();
        TermVector { weights }
    };
    (weigh(&code_counts, &doc_counts), weigh(&doc_counts, &code_counts))
}

/// Cosine similarity of the L2-normalized TF-IDF vectors, in `[0, 1]`.
///
/// Empty input on either side, or no shared term, scores 0.0.
pub fn cosine_similarity(code: &TokenSet, doc: &TokenSet) -> f64 {
    if code.is_empty() || doc.is_empty() {
        return 0.0;
    }
    let (code_vec, doc_vec) = tfidf_pair(code, doc);
    let code_unit = code_vec.l2_normalized();
    let doc_unit = doc_vec.l2_normalized();
    let score = code_unit.dot(&doc_unit);
    if score > 0.0 {
        score.min(1.0)
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfScorer;

impl SimilarityScorer for TfIdfScorer {
    fn score(&self, code: &TokenSet, doc: &TokenSet) -> f64 {
        cosine_similarity(code, doc)
    }
}
