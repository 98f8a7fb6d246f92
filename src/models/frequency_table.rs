use crate::constants::MAX_FREQUENCY_TABLE_TOKENS;
use crate::types::{Token, TokenRef};
use std::collections::HashMap;

/// Per-token discount weights derived from corpus-wide token frequency.
///
/// Only the `MAX_FREQUENCY_TABLE_TOKENS` most frequent tokens across all
/// normalized reference keys are stored; every other token implicitly scores
/// at the full weight of 1.0. A stored token with count `c`, against the
/// corpus maximum single-token count `top`, weighs `(top - c) / top`, so the
/// most common (least informative) tokens contribute the least to fuzzy
/// similarity scoring.
pub struct FrequencyTable {
    weights: HashMap<Token, f32>,
}

impl FrequencyTable {
    /// Builds the table from the normalized reference keys. This is a one-shot,
    /// read-only structure: it must be built once per run and shared across all
    /// fuzzy comparisons, never rebuilt per query.
    pub fn build<'a, I>(normalized_keys: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut token_counts: HashMap<&str, usize> = HashMap::new();
        let mut first_encountered: Vec<&str> = Vec::new();

        for key in normalized_keys {
            for token in key.split_whitespace() {
                let count = token_counts.entry(token).or_insert(0);
                if *count == 0 {
                    first_encountered.push(token);
                }
                *count += 1;
            }
        }

        let mut weights = HashMap::new();

        if let Some(top) = token_counts.values().copied().max() {
            // Stable sort keeps first-encountered order for equal counts, so
            // tie-breaking at the top-N cutoff is deterministic.
            let mut ranked = first_encountered;
            ranked.sort_by_key(|token| std::cmp::Reverse(token_counts[*token]));

            for token in ranked.into_iter().take(MAX_FREQUENCY_TABLE_TOKENS) {
                let count = token_counts[token];
                weights.insert(token.to_string(), (top - count) as f32 / top as f32);
            }
        }

        FrequencyTable { weights }
    }

    /// Returns the stored weight for a token, or `None` if the token is not
    /// one of the top frequency tokens (callers treat absence as weight 1.0).
    pub fn weight_of(&self, token: &TokenRef) -> Option<f32> {
        self.weights.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
