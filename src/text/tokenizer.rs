use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

const MIN_TOKEN_CHARS: usize = 3;

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{P}\p{S}]").expect("punctuation pattern is valid")
});

// Nonspacing marks only; spacing vowel signs (Mc) are part of the letter
static NONSPACING_MARK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\p{Mn}").expect("nonspacing mark pattern is valid")
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("whitespace pattern is valid")
});

// English, then Brazilian Portuguese
const STOPWORDS: &[&str] = &[
    "the", "and", "for", "with", "you", "your", "from", "that", "this", "are", "was", "were",
    "have", "has", "how", "what", "why", "when", "to", "in", "on", "of", "a", "an", "is", "it",
    "by", "or", "as",
    "de", "da", "do", "das", "dos", "e", "o", "os", "para", "com", "sem", "em", "no", "na",
    "nos", "nas", "um", "uma", "que", "por", "como", "porque", "qual",
];

/// Strips diacritics: NFD decompose, drop nonspacing marks, NFC recompose.
pub fn remove_accents(text: &str) -> String {
    let decomposed: String = text.nfd().collect();
    NONSPACING_MARK.replace_all(&decomposed, "").nfc().collect()
}

/// Lowercases, removes accents and punctuation, and collapses whitespace.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let plain = remove_accents(&lowered);
    let without_punctuation = PUNCTUATION.replace_all(&plain, " ");
    let collapsed = WHITESPACE.replace_all(&without_punctuation, " ");
    collapsed.trim().to_string()
}

/// Splits a title into keyword tokens, skipping stopwords and short words.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize_text(text)
        .split_whitespace()
        .filter(|token| is_keyword(token))
        .map(str::to_string)
        .collect()
}

fn is_keyword(token: &str) -> bool {
    token.chars().count() >= MIN_TOKEN_CHARS && !is_stopword(token)
}

fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}
