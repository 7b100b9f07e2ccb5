//! Text normalization applied to résumé and job-description text before scoring.
//!
//! Pipeline: strip invalid codepoints → tokenize on word boundaries →
//! lowercase → drop stop words → (optionally) drop non-alphabetic tokens.
//! The scorers only ever see the output of `normalize`, so length counts and
//! token vectors are stable across ingestion formats.

use unicode_segmentation::UnicodeSegmentation;

/// Standard English stop words, sorted for binary search.
const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "because",
    "been", "before", "being", "between", "both", "but", "by", "can", "could", "did", "do", "does",
    "doing", "down", "during", "each", "few", "for", "from", "further", "had", "has", "have",
    "having", "he", "her", "here", "hers", "him", "his", "how", "i", "if", "in", "into", "is",
    "it", "its", "just", "me", "more", "most", "my", "no", "nor", "not", "now", "of", "off", "on",
    "once", "only", "or", "other", "our", "ours", "out", "over", "own", "re", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "would", "you", "your", "yours",
];

/// Normalizer configuration. `alphabetic_only` additionally drops tokens
/// containing digits (a historical variant of the cleaning pipeline),
/// exposed as a flag rather than silently picking one behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    pub alphabetic_only: bool,
}

/// Cleans raw text into a whitespace-joined string of normalized tokens.
pub fn normalize(text: &str, options: NormalizeOptions) -> String {
    tokenize(text, options).join(" ")
}

/// Cleans raw text into normalized tokens.
pub fn tokenize(text: &str, options: NormalizeOptions) -> Vec<String> {
    let sanitized: String = text.chars().filter(|&c| is_valid_codepoint(c)).collect();

    sanitized
        .unicode_words()
        .map(str::to_lowercase)
        .filter(|token| !is_stop_word(token))
        .filter(|token| !options.alphabetic_only || token.chars().all(char::is_alphabetic))
        .collect()
}

/// Valid codepoint ranges: {0x09, 0x0A, 0x0D, 0x20–0xD7FF, 0xE000–0xFFFD,
/// 0x10000–0x10FFFF}. Anything else (stray control characters from document
/// extraction) is stripped before tokenization.
fn is_valid_codepoint(c: char) -> bool {
    let cp = c as u32;
    matches!(cp, 0x20..=0xD7FF | 0x9 | 0xA | 0xD | 0xE000..=0xFFFD | 0x10000..=0x10FFFF)
}

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.binary_search(&token).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words_are_sorted_for_binary_search() {
        let mut sorted = STOP_WORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(STOP_WORDS, sorted.as_slice());
    }

    #[test]
    fn test_lowercases_and_drops_stop_words() {
        let tokens = tokenize("The Quick Brown Fox", NormalizeOptions::default());
        assert_eq!(tokens, vec!["quick", "brown", "fox"]);
    }

    #[test]
    fn test_punctuation_splits_tokens() {
        let tokens = tokenize("python,sql;aws", NormalizeOptions::default());
        assert_eq!(tokens, vec!["python", "sql", "aws"]);
    }

    #[test]
    fn test_control_characters_are_stripped() {
        let tokens = tokenize("py\u{0}thon rocks", NormalizeOptions::default());
        assert_eq!(tokens, vec!["python", "rocks"]);
    }

    #[test]
    fn test_tab_and_newline_survive_as_separators() {
        let tokens = tokenize("rust\tgo\nkotlin", NormalizeOptions::default());
        assert_eq!(tokens, vec!["rust", "go", "kotlin"]);
    }

    #[test]
    fn test_alphabetic_only_drops_digit_tokens() {
        let options = NormalizeOptions {
            alphabetic_only: true,
        };
        let tokens = tokenize("shipped v2 releases 2021", options);
        assert_eq!(tokens, vec!["shipped", "releases"]);
    }

    #[test]
    fn test_default_keeps_digit_tokens() {
        let tokens = tokenize("shipped 5 releases", NormalizeOptions::default());
        assert_eq!(tokens, vec!["shipped", "5", "releases"]);
    }

    #[test]
    fn test_normalize_joins_with_single_spaces() {
        let cleaned = normalize("Built  APIs, shipped   fast.", NormalizeOptions::default());
        assert_eq!(cleaned, "built apis shipped fast");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(tokenize("", NormalizeOptions::default()).is_empty());
        assert_eq!(normalize("", NormalizeOptions::default()), "");
    }
}
