//! Domain types passed between the normalizer, scorer, detector and report builder.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Which side of the comparison a piece of text belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TextKind {
    Code,
    Doc,
}

impl fmt::Display for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextKind::Code => f.write_str("code"),
            TextKind::Doc => f.write_str("documentation"),
        }
    }
}

/// Raw text handed to the engine for one side of an analysis.
///
/// Fields are private so a unit cannot be edited after ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextUnit {
    raw: String,
    kind: TextKind,
}

impl TextUnit {
    pub fn new(kind: TextKind, raw: impl Into<String>) -> Self {
        Self { raw: raw.into(), kind }
    }

    pub fn code(raw: impl Into<String>) -> Self {
        Self::new(TextKind::Code, raw)
    }

    pub fn doc(raw: impl Into<String>) -> Self {
        Self::new(TextKind::Doc, raw)
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> TextKind {
        self.kind
    }

    /// Size in bytes of the raw text.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// Ordered normalized tokens of one text unit.
///
/// Tokens are lower-case, alphabetic-or-hyphen and at least two characters
/// long. The normalizer is the only producer that guarantees this; callers
/// building a set by hand (tests, alternative tokenizers) must uphold it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSet {
    tokens: Vec<String>,
}

impl TokenSet {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Distinct terms, sorted.
    pub fn vocabulary(&self) -> BTreeSet<&str> {
        self.iter().collect()
    }

    /// Occurrences per distinct term, sorted by term.
    pub fn term_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for token in self.iter() {
            *counts.entry(token).or_insert(0) += 1;
        }
        counts
    }

    pub fn contains(&self, term: &str) -> bool {
        self.iter().any(|t| t == term)
    }
}

impl FromIterator<String> for TokenSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self { tokens: iter.into_iter().collect() }
    }
}

/// One entry of the operational trigger catalog.
///
/// `code_patterns` are matched as literal substrings of lower-cased code with
/// whitespace collapsed, in declaration order. `expected_concepts` are
/// normalized words of which at least one should appear in the documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationalTrigger {
    pub category: String,
    pub code_patterns: Vec<String>,
    pub expected_concepts: Vec<String>,
}

impl OperationalTrigger {
    pub fn new<P, C>(category: &str, code_patterns: P, expected_concepts: C) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            category: category.to_string(),
            code_patterns: code_patterns.into_iter().map(Into::into).collect(),
            expected_concepts: expected_concepts.into_iter().map(Into::into).collect(),
        }
    }
}

/// A trigger category that fired in the code without any matching concept in the docs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gap {
    pub category: String,
    pub trigger_found: String,
    pub missing_concepts: BTreeSet<String>,
}

/// Lower bound (inclusive) of the EXCELLENT tier.
pub const EXCELLENT_THRESHOLD: f64 = 0.60;
/// Lower bound (inclusive) of the MODERATE tier.
pub const MODERATE_THRESHOLD: f64 = 0.35;

/// Three-tier classification of a similarity score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Excellent,
    Moderate,
    Poor,
}

impl Verdict {
    /// Exact `>=` comparison against the tier thresholds. NaN lands in `Poor`.
    pub fn from_score(score: f64) -> Self {
        if score >= EXCELLENT_THRESHOLD {
            Verdict::Excellent
        } else if score >= MODERATE_THRESHOLD {
            Verdict::Moderate
        } else {
            Verdict::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::Excellent => "Excellent match",
            Verdict::Moderate => "Moderate match",
            Verdict::Poor => "Poor match",
        }
    }

    /// Whether a CI gate should let this verdict through.
    pub fn passes(self) -> bool {
        !matches!(self, Verdict::Poor)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Excellent => f.write_str("EXCELLENT"),
            Verdict::Moderate => f.write_str("MODERATE"),
            Verdict::Poor => f.write_str("POOR"),
        }
    }
}

/// Outcome of one analysis call.
///
/// `score` and `gaps` are independent signals: gaps never move the verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub score: f64,
    pub verdict: Verdict,
    pub shared_terms: BTreeSet<String>,
    pub code_only_terms: BTreeSet<String>,
    pub doc_only_terms: BTreeSet<String>,
    pub gaps: Vec<Gap>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub code_token_count: usize,
    #[serde(default)]
    pub doc_token_count: usize,
}

impl ConsistencyReport {
    /// True when at least one operational gap should be shown as a warning.
    pub fn has_warnings(&self) -> bool {
        !self.gaps.is_empty()
    }
}
