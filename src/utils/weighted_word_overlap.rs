use crate::models::FrequencyTable;
use std::collections::HashSet;

/// Frequency-adjusted word-overlap score between two normalized keys.
///
/// Every whitespace token of the query key contributes its frequency weight
/// (1.0 when the token is not in the table): added when the token occurs in
/// the candidate's token set, subtracted when it does not. The sum is not
/// normalized by length and may be negative.
///
/// # Example
/// ```
/// use ticker_match::models::FrequencyTable;
/// use ticker_match::utils::weighted_word_overlap;
///
/// let frequency_table = FrequencyTable::build([
///     "first national bank",
///     "second national bank",
///     "atlas micro devices",
/// ]);
///
/// let score = weighted_word_overlap("atlas micro", "atlas micro devices", &frequency_table);
/// assert!(score > 0.0);
///
/// let score = weighted_word_overlap("atlas micro", "second national bank", &frequency_table);
/// assert!(score < 0.0);
/// ```
pub fn weighted_word_overlap(
    query_key: &str,
    candidate_key: &str,
    frequency_table: &FrequencyTable,
) -> f32 {
    let candidate_tokens: HashSet<&str> = candidate_key.split_whitespace().collect();

    let mut total_score = 0.0_f32;

    for token in query_key.split_whitespace() {
        let weight = frequency_table.weight_of(token).unwrap_or(1.0);

        if candidate_tokens.contains(token) {
            total_score += weight;
        } else {
            total_score -= weight;
        }
    }

    total_score
}
