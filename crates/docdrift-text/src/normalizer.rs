use std::collections::HashSet;

use docdrift_core::traits::Tokenizer;
use docdrift_core::types::TokenSet;

use crate::fold::fold_word;
use crate::stopwords::is_stop_word;

/// Character-class scanner producing normalized word tokens.
///
/// Stages run in a fixed order: strip punctuation, split identifiers,
/// lower-case, filter (length, numeric, stop words), fold (abbreviations and
/// inflections, see [`crate::fold`]). Stop words match the unfolded word.
#[derive(Debug, Clone, Default)]
pub struct WordNormalizer {
    extra_stop_words: HashSet<String>,
}

impl WordNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extra_stop_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra_stop_words = words.into_iter().map(|w| w.as_ref().to_lowercase()).collect();
        Self { extra_stop_words }
    }

    pub fn normalize(&self, raw: &str) -> TokenSet {
        scan_words(raw)
            .iter()
            .flat_map(|word| split_identifier(word))
            .map(|piece| piece.to_lowercase())
            .filter(|token| self.keep(token))
            .map(|token| fold_word(&token))
            .collect()
    }

    fn keep(&self, token: &str) -> bool {
        token.chars().count() > 1
            && !token.chars().all(char::is_numeric)
            && !is_stop_word(token)
            && !self.extra_stop_words.contains(token)
    }
}

impl Tokenizer for WordNormalizer {
    fn normalize(&self, raw: &str) -> TokenSet {
        WordNormalizer::normalize(self, raw)
    }
}

/// Normalize with the built-in stop-word list only.
pub fn normalize(raw: &str) -> TokenSet {
    WordNormalizer::default().normalize(raw)
}

/// Cut raw text into identifier-like runs.
///
/// Letters, digits and underscores are kept; a hyphen is kept only between two
/// letters (`well-known`). Everything else separates words.
fn scan_words(raw: &str) -> Vec<String> {
    let chars: Vec<char> = raw.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        let joins_letters = c == '-'
            && current.chars().last().is_some_and(char::is_alphabetic)
            && chars.get(i + 1).is_some_and(|n| n.is_alphabetic());
        if c.is_alphanumeric() || c == '_' || joins_letters {
            current.push(c);
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// `fetch_api_status` -> fetch, api, status; `calcFinalPrice` -> calc, Final, Price.
fn split_identifier(word: &str) -> Vec<String> {
    word.split('_').filter(|s| !s.is_empty()).flat_map(split_case).collect()
}

fn split_case(segment: &str) -> Vec<String> {
    let chars: Vec<char> = segment.chars().collect();
    let mut pieces = Vec::new();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && is_boundary(&chars, i) && !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces.into_iter().map(singular_acronym).collect()
}

/// `IDs` -> ID, `URLs` -> URL.
fn singular_acronym(piece: String) -> String {
    match piece.strip_suffix('s') {
        Some(head) if head.chars().count() >= 2 && head.chars().all(char::is_uppercase) => head.to_string(),
        _ => piece,
    }
}

fn is_boundary(chars: &[char], i: usize) -> bool {
    let prev = chars[i - 1];
    let c = chars[i];
    if c == '-' || prev == '-' {
        return false;
    }
    if c.is_numeric() != prev.is_numeric() {
        return true;
    }
    if !c.is_uppercase() {
        return false;
    }
    if prev.is_lowercase() {
        return true;
    }
    // Acronym followed by a word: `HTTPServer` -> HTTP, Server.
    match chars.get(i + 1) {
        Some(&next) => prev.is_uppercase() && next.is_lowercase(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(raw: &str) -> Vec<String> {
        normalize(raw).tokens().to_vec()
    }

    #[test]
    fn splits_snake_case() {
        assert_eq!(words("fetch_api_status"), vec!["fetch", "api", "status"]);
    }

    #[test]
    fn splits_camel_case() {
        assert_eq!(words("calcFinalPrice"), vec!["calculate", "final", "price"]);
    }

    #[test]
    fn splits_mixed_conventions() {
        assert_eq!(words("load_HTTPServer_configV2"), vec!["load", "http", "server", "config"]);
    }

    #[test]
    fn plural_acronym_folds_to_singular() {
        assert_eq!(words("user IDs"), vec!["user", "id"]);
        assert_eq!(words("user_id"), vec!["user", "id"]);
        assert_eq!(words("userIDs parseURLs"), vec!["user", "id", "parse", "url"]);
    }

    #[test]
    fn prose_and_identifiers_meet_on_one_form() {
        assert_eq!(words("Calculates totals, rounded"), vec!["calculate", "total", "round"]);
        assert_eq!(words("calc_total round"), vec!["calculate", "total", "round"]);
    }

    #[test]
    fn strips_syntax_and_numbers() {
        assert_eq!(
            words("total = price * (1 + tax_rate); return round(total, 2)"),
            vec!["total", "price", "tax", "rate", "round", "total"]
        );
    }

    #[test]
    fn keeps_hyphen_between_letters_only() {
        assert_eq!(words("a well-known x-1 value"), vec!["well-known", "value"]);
    }

    #[test]
    fn extra_stop_words_are_case_insensitive() {
        let normalizer = WordNormalizer::with_extra_stop_words(["Price"]);
        assert_eq!(normalizer.normalize("final price").tokens(), ["final".to_string()]);
    }

    #[test]
    fn empty_and_scaffolding_only_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("def (self): return None").is_empty());
    }
}
