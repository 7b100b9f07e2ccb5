//! Lexical similarity between two normalized text blocks.
//!
//! Token-count vectors over the union vocabulary of both texts (plain
//! bag-of-words, no weighting), cosine similarity, scaled to a percentage.

use std::collections::HashMap;

/// Cosine similarity between the token-count vectors of two texts, as a
/// percentage in [0, 100] rounded to 2 decimal places. Symmetric in its
/// arguments. Either text empty after tokenization yields 0.0 rather than a
/// division by zero.
pub fn similarity(text_a: &str, text_b: &str) -> f64 {
    let counts_a = token_counts(text_a);
    let counts_b = token_counts(text_b);

    if counts_a.is_empty() || counts_b.is_empty() {
        return 0.0;
    }

    let dot: f64 = counts_a
        .iter()
        .filter_map(|(token, &a)| counts_b.get(token).map(|&b| a as f64 * b as f64))
        .sum();

    let norm_a = magnitude(&counts_a);
    let norm_b = magnitude(&counts_b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let cosine = dot / (norm_a * norm_b);
    round2(cosine * 100.0)
}

fn token_counts(text: &str) -> HashMap<&str, u32> {
    let mut counts = HashMap::new();
    for token in text.split_whitespace() {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

fn magnitude(counts: &HashMap<&str, u32>) -> f64 {
    counts
        .values()
        .map(|&c| (c as f64) * (c as f64))
        .sum::<f64>()
        .sqrt()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
