//! Word folding applied after filtering, so code identifiers and prose meet
//! on one form: `calc` and `calculates` both become `calculate`, `rounded`
//! becomes `round`.
//!
//! A suffix is only removed when the remaining stem still looks like a word;
//! anything doubtful is left alone.

/// Common identifier abbreviations and the word they stand for.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("addr", "address"),
    ("auth", "authentication"),
    ("avg", "average"),
    ("btn", "button"),
    ("calc", "calculate"),
    ("cfg", "config"),
    ("conf", "config"),
    ("ctx", "context"),
    ("db", "database"),
    ("dst", "destination"),
    ("env", "environment"),
    ("idx", "index"),
    ("img", "image"),
    ("len", "length"),
    ("max", "maximum"),
    ("min", "minimum"),
    ("msg", "message"),
    ("num", "number"),
    ("param", "parameter"),
    ("params", "parameters"),
    ("pwd", "password"),
    ("req", "request"),
    ("resp", "response"),
    ("src", "source"),
    ("tmp", "temporary"),
    ("usr", "user"),
    ("val", "value"),
];

/// Expand a known abbreviation, then fold its inflection.
///
/// Expects a lower-cased token.
pub fn fold_word(token: &str) -> String {
    let expanded = ABBREVIATIONS
        .iter()
        .find(|(short, _)| *short == token)
        .map_or(token, |(_, long)| *long);
    fold_inflection(expanded)
}

/// Plural and verb-suffix folding: `applies` -> apply, `fetches` -> fetch,
/// `hashing` -> hash, `stopped` -> stop, `files` -> file.
pub fn fold_inflection(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();

    if len > 4 && token.ends_with("ies") && ends_with_letter(&chars[..len - 3]) {
        return format!("{}y", chars[..len - 3].iter().collect::<String>());
    }
    for suffix in ["ches", "shes", "sses", "xes", "zes"] {
        if len > suffix.len() + 1 && token.ends_with(suffix) {
            return chars[..len - 2].iter().collect();
        }
    }
    for (suffix, min_len) in [("ing", 6), ("ed", 5)] {
        if len >= min_len && token.ends_with(suffix) {
            return strip_verb_suffix(&chars[..len - suffix.len()]).unwrap_or_else(|| token.to_string());
        }
    }
    if len > 3
        && token.ends_with('s')
        && !["ss", "us", "is"].iter().any(|s| token.ends_with(s))
        && ends_with_letter(&chars[..len - 1])
    {
        return chars[..len - 1].iter().collect();
    }
    token.to_string()
}

/// Accept a verb stem only when it ends in two consonants (`round`, `hash`).
/// A doubled final consonant is undoubled (`stopp` -> stop) unless it is one
/// English keeps doubled (`call`, `process`, `buzz`).
fn strip_verb_suffix(stem: &[char]) -> Option<String> {
    let [.., a, b] = stem else {
        return None;
    };
    if a == b && is_consonant(*b) {
        let keep = if matches!(b, 'l' | 's' | 'z') { stem.len() } else { stem.len() - 1 };
        return Some(stem[..keep].iter().collect());
    }
    (is_consonant(*a) && is_consonant(*b)).then(|| stem.iter().collect())
}

fn is_consonant(c: char) -> bool {
    c.is_alphabetic() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn ends_with_letter(chars: &[char]) -> bool {
    chars.last().is_some_and(|c| c.is_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plurals_fold_to_singular() {
        for (word, folded) in [
            ("files", "file"),
            ("applies", "apply"),
            ("fetches", "fetch"),
            ("classes", "class"),
            ("credentials", "credential"),
        ] {
            assert_eq!(fold_inflection(word), folded, "{word}");
        }
    }

    #[test]
    fn latin_endings_are_not_plurals() {
        for word in ["status", "analysis", "process", "ids"] {
            assert_eq!(fold_inflection(word), word);
        }
    }

    #[test]
    fn verb_suffixes_need_a_plausible_stem() {
        assert_eq!(fold_inflection("rounded"), "round");
        assert_eq!(fold_inflection("hashing"), "hash");
        assert_eq!(fold_inflection("encrypted"), "encrypt");
        assert_eq!(fold_inflection("stopped"), "stop");
        assert_eq!(fold_inflection("calling"), "call");
        assert_eq!(fold_inflection("updated"), "updated", "`updat` is not a word");
        assert_eq!(fold_inflection("including"), "including");
        assert_eq!(fold_inflection("used"), "used");
    }

    #[test]
    fn abbreviations_expand_before_folding() {
        assert_eq!(fold_word("calc"), "calculate");
        assert_eq!(fold_word("params"), "parameter");
        assert_eq!(fold_word("price"), "price");
    }

    #[test]
    fn hyphenated_words_keep_a_letter_at_the_end() {
        assert_eq!(fold_inflection("well-known"), "well-known");
        assert_eq!(fold_inflection("ab-ed"), "ab-ed");
    }
}
