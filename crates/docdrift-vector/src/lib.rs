//! docdrift-vector
//!
//! Two-document TF-IDF weighting and cosine similarity over token sets.

pub mod tfidf;

pub use tfidf::{cosine_similarity, smoothed_idf, tfidf_pair, TermVector, TfIdfScorer};
