use crate::constants::STOP_WORDS;
use crate::types::NormalizedKey;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

/// Canonicalizes raw company names into comparable keys. The resulting key is
/// used both for exact-match lookups and as the token basis for fuzzy scoring.
pub struct NameNormalizer {
    pre_processed_stop_words: HashSet<&'static str>,
}

impl NameNormalizer {
    /// Configuration for company name normalization
    pub fn company_name_normalizer() -> Self {
        Self {
            pre_processed_stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Converts a raw company name into its normalized key.
    ///
    /// Total and deterministic: never fails for any string input, including
    /// empty strings. An empty result is valid and simply will not match
    /// anything except another empty-key name. Idempotent, so normalized keys
    /// may be re-normalized safely.
    pub fn normalize(&self, raw: &str) -> NormalizedKey {
        let lowercased = raw.to_lowercase();

        // Punctuation is deleted outright rather than replaced with a space,
        // so "J.P." collapses to "jp" instead of splitting into stray
        // single-letter tokens.
        let depunctuated: String = lowercased
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect();

        // NFKD decomposition reduces accented letters to their base letter
        // plus combining marks. Only ASCII alphanumerics and whitespace
        // survive; anything that cannot be represented that way is dropped.
        let transliterated: String = depunctuated
            .nfkd()
            .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
            .collect();

        transliterated
            .split_whitespace()
            .filter(|token| !self.pre_processed_stop_words.contains(*token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
