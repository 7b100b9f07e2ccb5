//! Skill-term harvesting: scans the controlled vocabulary against normalized
//! text.
//!
//! This replaces a dedicated entity extractor with the documented crude
//! approach: single-word vocabulary terms match whole tokens, multi-word
//! terms match as substrings of the normalized text. The skill resolver
//! re-filters the output, so over-collection here is harmless.

use std::collections::HashSet;

use crate::vocabulary::ControlledVocabulary;

/// Collects every vocabulary term present in the normalized text.
pub fn extract_skill_terms(normalized_text: &str, vocab: &ControlledVocabulary) -> Vec<String> {
    let tokens: HashSet<&str> = normalized_text.split_whitespace().collect();

    vocab
        .iter()
        .filter(|term| {
            if term.contains(' ') {
                normalized_text.contains(*term)
            } else {
                tokens.contains(*term)
            }
        })
        .map(str::to_string)
        .collect()
}
