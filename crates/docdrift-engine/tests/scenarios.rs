use std::sync::Arc;

use figment::providers::{Format, Toml};
use figment::Figment;

use docdrift_core::config::Config;
use docdrift_core::traits::{Analyzer, GapDetector, SimilarityScorer, Tokenizer};
use docdrift_core::types::{Gap, TokenSet, Verdict};
use docdrift_engine::{build_report, ConsistencyEngine, DefaultEngine};
use docdrift_intent::OperationalDetector;
use docdrift_text::{normalize, WordNormalizer};
use docdrift_vector::TfIdfScorer;

const PRICE_CODE: &str = "def calc_final_price(base, tax_rate, discount):
    price = base * (1 - discount)
    total = price * (1 + tax_rate)
    return round(total, 2)";
const PRICE_DOC: &str = "Calculates the final price. Applies a percentage discount to the price, then computes the \
total price including the tax rate. The final total is rounded to two decimal places.";

const PROFILE_CODE: &str = "def save_user_profile(user_id, data):
    json.dump(data, f)";
const PROFILE_DOC: &str = "Manages user security and IDs. The profile data is kept updated.";

const STATUS_CODE: &str = "def fetch_api_status():
    r = requests.get(url)
    return r.json()";
const STATUS_DOC: &str = "Creates a new security token. The token is an encrypted string used for authentication.";

#[test]
fn matching_docs_are_excellent_without_gaps() {
    let report = DefaultEngine::default().analyze(PRICE_CODE, PRICE_DOC).expect("analyze");
    assert!(report.score >= 0.60, "score={}", report.score);
    assert_eq!(report.verdict, Verdict::Excellent);
    assert!(report.gaps.is_empty(), "{:?}", report.gaps);
    assert!(!report.has_warnings());
    for term in ["calculate", "final", "price", "discount", "total", "tax", "rate", "round"] {
        assert!(report.shared_terms.contains(term), "missing shared term {term}");
    }
}

#[test]
fn partially_matching_docs_are_moderate_with_io_gap() {
    let report = DefaultEngine::default().analyze(PROFILE_CODE, PROFILE_DOC).expect("analyze");
    assert!((0.30..0.45).contains(&report.score), "score={}", report.score);
    assert_eq!(report.verdict, Verdict::Moderate);
    assert!(report.doc_only_terms.contains("security"));
    assert!(report.shared_terms.contains("id"), "`IDs` in prose meets `user_id` in code");
    let io = report.gaps.iter().find(|g| g.category == "io").expect("io gap");
    assert_eq!(io.trigger_found, "json.dump");
    for concept in ["json", "save", "write"] {
        assert!(io.missing_concepts.contains(concept), "concept {concept} listed as missing");
    }
    assert!(report.code_only_terms.contains("json"));
}

#[test]
fn unrelated_docs_are_poor_with_networking_gap() {
    let report = DefaultEngine::default().analyze(STATUS_CODE, STATUS_DOC).expect("analyze");
    assert!(report.score < 0.15, "score={}", report.score);
    assert!(!report.score.is_sign_negative(), "score={:?}", report.score);
    assert_eq!(report.verdict, Verdict::Poor);
    assert!(report.gaps.iter().any(|g| g.category == "networking"), "{:?}", report.gaps);
    assert!(report.shared_terms.is_empty());
    assert!(report.suggestions[0].starts_with("CRITICAL"));
}

#[test]
fn swapping_inputs_keeps_the_score() {
    let engine = DefaultEngine::default();
    for (code, doc) in [(PRICE_CODE, PRICE_DOC), (PROFILE_CODE, PROFILE_DOC), (STATUS_CODE, STATUS_DOC)] {
        let forward = engine.analyze(code, doc).expect("forward");
        let backward = engine.analyze(doc, code).expect("backward");
        assert_eq!(forward.score.to_bits(), backward.score.to_bits());
        assert_eq!(forward.shared_terms, backward.shared_terms);
        assert_eq!(forward.code_only_terms, backward.doc_only_terms);
    }
}

struct FixedScore(f64);

impl SimilarityScorer for FixedScore {
    fn score(&self, _code: &TokenSet, _doc: &TokenSet) -> f64 {
        self.0
    }
}

struct AlwaysGap;

impl GapDetector for AlwaysGap {
    fn detect_gaps(&self, _raw_code: &str, _doc_tokens: &TokenSet) -> Vec<Gap> {
        vec![Gap { category: "math".into(), trigger_found: "sqrt(".into(), missing_concepts: Default::default() }]
    }
}

#[test]
fn verdict_boundaries_are_exact() {
    for (score, expected) in [(0.60, Verdict::Excellent), (0.35, Verdict::Moderate), (0.349_999, Verdict::Poor)] {
        let engine = ConsistencyEngine::new(WordNormalizer::new(), FixedScore(score), OperationalDetector::default());
        let report = engine.analyze("price", "price").expect("analyze");
        assert_eq!(report.verdict, expected, "score {score}");
    }
}

#[test]
fn gaps_never_downgrade_the_verdict() {
    let engine = ConsistencyEngine::new(WordNormalizer::new(), FixedScore(0.9), AlwaysGap);
    let report = engine.analyze("x = sqrt(y)", "unrelated").expect("analyze");
    assert_eq!(report.verdict, Verdict::Excellent);
    assert!(report.has_warnings());
    assert!((report.score - 0.9).abs() < f64::EPSILON, "score is reported untouched");
}

struct Whitespace;

impl Tokenizer for Whitespace {
    fn normalize(&self, raw: &str) -> TokenSet {
        raw.split_whitespace().map(str::to_lowercase).collect()
    }
}

#[test]
fn tokenizer_stage_is_swappable() {
    let engine = ConsistencyEngine::new(Whitespace, TfIdfScorer, OperationalDetector::default());
    let report = engine.analyze("Price total", "price TOTAL").expect("analyze");
    assert!((report.score - 1.0).abs() < 1e-12, "score={}", report.score);
    assert_eq!(report.code_token_count, 2);
}

#[test]
fn free_build_report_matches_engine() {
    let code_tokens = normalize(PROFILE_CODE);
    let doc_tokens = normalize(PROFILE_DOC);
    let report = build_report(&code_tokens, &doc_tokens, PROFILE_CODE);
    assert_eq!(report, DefaultEngine::default().analyze(PROFILE_CODE, PROFILE_DOC).expect("analyze"));
    assert_eq!(report.code_token_count, code_tokens.len());
}

#[test]
fn report_json_has_the_flat_shape() {
    let report = DefaultEngine::default().analyze(STATUS_CODE, STATUS_DOC).expect("analyze");
    let value = serde_json::to_value(&report).expect("json");
    for key in ["score", "verdict", "shared_terms", "code_only_terms", "doc_only_terms", "gaps"] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(value["verdict"], "POOR");
    assert_eq!(serde_json::to_string(&value["score"]).expect("score"), "0.0", "never `-0.0`");
    assert_eq!(value["gaps"][0]["category"], "networking");
    assert!(value["gaps"][0]["missing_concepts"].is_array());
}

#[test]
fn engine_is_shared_across_threads() {
    let engine: Arc<dyn Analyzer> = Arc::new(DefaultEngine::default());
    let expected = engine.analyze(PROFILE_CODE, PROFILE_DOC).expect("analyze");
    std::thread::scope(|scope| {
        for _ in 0..8 {
            let engine = Arc::clone(&engine);
            let expected = &expected;
            scope.spawn(move || {
                let report = engine.analyze(PROFILE_CODE, PROFILE_DOC).expect("analyze");
                assert_eq!(&report, expected);
            });
        }
    });
}

#[test]
fn engine_from_config_applies_limits_and_stop_words() {
    let figment = Figment::from(Toml::string(
        "[engine]\nmax_input_bytes = 64\nextra_stop_words = [\"price\"]\n",
    ));
    let config = Config::from_figment(figment).expect("config");
    let engine = DefaultEngine::from_config(&config).expect("engine");

    assert_eq!(engine.max_input_bytes(), 64);
    assert!(engine.analyze(PRICE_CODE, PRICE_DOC).is_err(), "price code is over 64 bytes");

    let report = engine.analyze("final_price = base", "final price").expect("analyze");
    assert!(!report.shared_terms.contains("price"));
    assert!(report.shared_terms.contains("final"));
}
