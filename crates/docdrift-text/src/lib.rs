//! docdrift-text
//!
//! Turns raw code or documentation into a [`TokenSet`](docdrift_core::types::TokenSet):
//! punctuation stripping, identifier splitting, lower-casing, stop-word
//! filtering and word folding, in that order.

pub mod fold;
pub mod normalizer;
pub mod stopwords;

pub use fold::fold_word;
pub use normalizer::{normalize, WordNormalizer};
