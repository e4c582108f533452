use tracing::debug;

use docdrift_core::config::{Config, EngineSettings, ReportSettings};
use docdrift_core::error::{Error, Result};
use docdrift_core::traits::{Analyzer, GapDetector, SimilarityScorer, Tokenizer};
use docdrift_core::types::{ConsistencyReport, TextKind, TextUnit, TokenSet, Verdict};
use docdrift_intent::{OperationalDetector, TriggerCatalog};
use docdrift_text::WordNormalizer;
use docdrift_vector::TfIdfScorer;

use crate::report::{suggestions, TermBreakdown};

/// Normalizer, scorer and detector wired into one stateless pipeline.
///
/// Holds only read-only parts, so one instance can serve any number of
/// threads at once.
pub struct ConsistencyEngine<T, S, D>
where
    T: Tokenizer,
    S: SimilarityScorer,
    D: GapDetector,
{
    tokenizer: T,
    scorer: S,
    detector: D,
    max_input_bytes: usize,
    max_listed_terms: usize,
}

pub type DefaultEngine = ConsistencyEngine<WordNormalizer, TfIdfScorer, OperationalDetector>;

impl<T, S, D> ConsistencyEngine<T, S, D>
where
    T: Tokenizer,
    S: SimilarityScorer,
    D: GapDetector,
{
    pub fn new(tokenizer: T, scorer: S, detector: D) -> Self {
        Self {
            tokenizer,
            scorer,
            detector,
            max_input_bytes: EngineSettings::default().max_input_bytes,
            max_listed_terms: ReportSettings::default().max_listed_terms,
        }
    }

    pub fn with_max_input_bytes(mut self, limit: usize) -> Self {
        self.max_input_bytes = limit;
        self
    }

    pub fn with_max_listed_terms(mut self, limit: usize) -> Self {
        self.max_listed_terms = limit;
        self
    }

    pub fn max_input_bytes(&self) -> usize {
        self.max_input_bytes
    }

    /// Score, classify and explain an already normalized pair.
    pub fn build_report(&self, code_tokens: &TokenSet, doc_tokens: &TokenSet, raw_code: &str) -> ConsistencyReport {
        let score = self.scorer.score(code_tokens, doc_tokens);
        let verdict = Verdict::from_score(score);
        let terms = TermBreakdown::new(code_tokens, doc_tokens);
        let gaps = self.detector.detect_gaps(raw_code, doc_tokens);
        let suggestions = suggestions(&terms, &gaps, self.max_listed_terms);
        debug!(score, %verdict, gaps = gaps.len(), shared = terms.shared.len(), "built consistency report");
        ConsistencyReport {
            score,
            verdict,
            shared_terms: terms.shared,
            code_only_terms: terms.code_only,
            doc_only_terms: terms.doc_only,
            gaps,
            suggestions,
            code_token_count: code_tokens.len(),
            doc_token_count: doc_tokens.len(),
        }
    }

    /// Analyze two text units. Fails only when a unit exceeds the size limit.
    pub fn analyze_units(&self, code: &TextUnit, doc: &TextUnit) -> Result<ConsistencyReport> {
        self.check_size(code)?;
        self.check_size(doc)?;
        let code_tokens = self.tokenizer.normalize(code.raw());
        let doc_tokens = self.tokenizer.normalize(doc.raw());
        debug!(code_tokens = code_tokens.len(), doc_tokens = doc_tokens.len(), "normalized inputs");
        Ok(self.build_report(&code_tokens, &doc_tokens, code.raw()))
    }

    pub fn analyze(&self, code: &str, doc: &str) -> Result<ConsistencyReport> {
        self.analyze_units(&TextUnit::code(code), &TextUnit::doc(doc))
    }

    /// Like [`ConsistencyEngine::analyze`] for undecoded input: each side must be UTF-8.
    pub fn analyze_bytes(&self, code: &[u8], doc: &[u8]) -> Result<ConsistencyReport> {
        let code = decode(code, TextKind::Code)?;
        let doc = decode(doc, TextKind::Doc)?;
        self.analyze(code, doc)
    }

    fn check_size(&self, unit: &TextUnit) -> Result<()> {
        if unit.len() > self.max_input_bytes {
            return Err(Error::InputTooLarge { kind: unit.kind(), size: unit.len(), limit: self.max_input_bytes });
        }
        Ok(())
    }
}

impl DefaultEngine {
    /// Engine configured from `[engine]`, `[report]` and `[[triggers]]`.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let engine = config.engine()?;
        let report = config.report()?;
        let catalog = TriggerCatalog::from_config(config)?;
        let tokenizer = WordNormalizer::with_extra_stop_words(&engine.extra_stop_words);
        Ok(Self::new(tokenizer, TfIdfScorer, OperationalDetector::new(catalog))
            .with_max_input_bytes(engine.max_input_bytes)
            .with_max_listed_terms(report.max_listed_terms))
    }
}

impl Default for DefaultEngine {
    fn default() -> Self {
        Self::new(WordNormalizer::new(), TfIdfScorer, OperationalDetector::default())
    }
}

impl<T, S, D> Analyzer for ConsistencyEngine<T, S, D>
where
    T: Tokenizer,
    S: SimilarityScorer,
    D: GapDetector,
{
    fn analyze(&self, code: &str, doc: &str) -> Result<ConsistencyReport> {
        Self::analyze(self, code, doc)
    }
}

/// Report for a pre-normalized pair using the built-in scorer and catalog.
pub fn build_report(code_tokens: &TokenSet, doc_tokens: &TokenSet, raw_code: &str) -> ConsistencyReport {
    DefaultEngine::default().build_report(code_tokens, doc_tokens, raw_code)
}

fn decode(bytes: &[u8], kind: TextKind) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|source| Error::InvalidEncoding { kind, source })
}
