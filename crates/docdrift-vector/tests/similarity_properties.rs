use docdrift_core::traits::SimilarityScorer;
use docdrift_core::types::TokenSet;
use docdrift_text::normalize;
use docdrift_vector::TfIdfScorer;

const TEXTS: &[&str] = &[
    "def calc_final_price(base, tax_rate, discount): price = base*(1-discount); total=price*(1+tax_rate); return round(total,2)",
    "Calculates the final price from a base price and applies the discount before tax.",
    "def save_user_profile(user_id, data): json.dump(data, f)",
    "Manages user security and IDs. The user profile data is kept updated per user.",
    "def fetch_api_status(): r = requests.get(url); return r.json()",
    "Creates a new security token. The token is an encrypted string used for authentication.",
    "price price price price tax",
    "",
    "the a is this that",
];

fn pairs() -> impl Iterator<Item = (TokenSet, TokenSet)> {
    TEXTS.iter().flat_map(|a| TEXTS.iter().map(move |b| (normalize(a), normalize(b))))
}

#[test]
fn score_is_symmetric() {
    let scorer = TfIdfScorer;
    for (a, b) in pairs() {
        assert_eq!(scorer.score(&a, &b).to_bits(), scorer.score(&b, &a).to_bits(), "{a:?} vs {b:?}");
    }
}

#[test]
fn score_is_bounded() {
    let scorer = TfIdfScorer;
    for (a, b) in pairs() {
        let score = scorer.score(&a, &b);
        assert!((0.0..=1.0).contains(&score), "score {score} out of range for {a:?} vs {b:?}");
        assert!(!score.is_sign_negative(), "negative zero for {a:?} vs {b:?}");
    }
}

#[test]
fn identical_non_empty_input_scores_one() {
    let scorer = TfIdfScorer;
    for raw in TEXTS {
        let tokens = normalize(raw);
        if tokens.is_empty() {
            continue;
        }
        let score = scorer.score(&tokens, &tokens);
        assert!((score - 1.0).abs() < 1e-12, "self similarity {score} for {raw:?}");
    }
}

#[test]
fn empty_side_scores_zero() {
    let scorer = TfIdfScorer;
    let empty = normalize("");
    for raw in TEXTS {
        let tokens = normalize(raw);
        assert_eq!(scorer.score(&empty, &tokens).to_bits(), 0.0f64.to_bits());
        assert_eq!(scorer.score(&tokens, &empty).to_bits(), 0.0f64.to_bits());
    }
}

#[test]
fn document_length_does_not_bias_score() {
    let scorer = TfIdfScorer;
    let short = normalize("price tax");
    let long = normalize("price tax price tax price tax price tax");
    let score = scorer.score(&short, &long);
    assert!((score - 1.0).abs() < 1e-12, "repeating a document keeps its direction, got {score}");
}
