//! Words that carry no meaning for code/doc comparison.
//!
//! English function words plus keywords and scaffolding of common languages.
//! Applied to both sides so neither can inflate similarity with them.

pub const STOP_WORDS: &[&str] = &[
    // english
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "that", "the", "to", "was", "will", "with", "or", "but", "not", "this",
    "these", "they", "them", "their", "there", "then", "than", "so", "if", "when", "where", "why",
    "how", "what", "which", "who", "whom", "whose", "can", "could", "should", "would", "may",
    "might", "must", "shall", "do", "does", "did", "have", "had", "having", "into", "onto", "we",
    "you", "your", "our", "us", "been", "being", "were", "all", "any", "also", "just",
    // spelled-out numbers and indefinite pronouns
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "hundred", "thousand", "nothing", "something", "anything", "everything",
    // python
    "def", "return", "import", "class", "self", "cls", "none", "true", "false", "elif", "else",
    "while", "try", "except", "finally", "pass", "lambda", "raise", "yield", "global", "nonlocal",
    "assert", "del", "async", "await", "print", "args", "kwargs", "init",
    // c-family, js, rust, go
    "fn", "let", "mut", "pub", "use", "const", "var", "function", "struct", "impl", "enum",
    "static", "void", "null", "nil", "undefined", "int", "str", "float", "bool", "dict", "list",
    "tuple", "string", "char", "func", "package", "public", "private", "protected", "switch",
    "case", "break", "continue", "extends", "implements", "interface", "type", "typeof",
    "instanceof", "export", "require", "module", "crate", "super", "match", "loop", "mod", "ok",
    "err",
];

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}
