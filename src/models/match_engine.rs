use crate::models::{FrequencyTable, KnownAbbreviations, MatchTier, QueryRecord, ReferenceDirectory};
use crate::utils::weighted_word_overlap;
use log::info;

/// Runs the three-tier match pipeline (exact, known abbreviation, fuzzy) over
/// a reference directory and a batch of query records.
///
/// The reference directory and abbreviation table are injected, read-only
/// collaborators; the frequency table is derived from the directory once at
/// construction and shared across every fuzzy comparison.
pub struct MatchEngine<'a> {
    reference_directory: &'a ReferenceDirectory,
    known_abbreviations: &'a KnownAbbreviations,
    frequency_table: FrequencyTable,
}

impl<'a> MatchEngine<'a> {
    pub fn new(
        reference_directory: &'a ReferenceDirectory,
        known_abbreviations: &'a KnownAbbreviations,
    ) -> Self {
        let frequency_table = FrequencyTable::build(
            reference_directory
                .iter()
                .map(|entry| entry.normalized_key.as_str()),
        );

        MatchEngine {
            reference_directory,
            known_abbreviations,
            frequency_table,
        }
    }

    pub fn frequency_table(&self) -> &FrequencyTable {
        &self.frequency_table
    }

    /// Resolves every record in place. Tiers run strictly in priority order
    /// and short-circuit per record: once a record is resolved it is skipped
    /// by the remaining tiers. After this returns, every record carries a
    /// tier, with `NoMatch` marking queries nothing scored positively against.
    pub fn match_records(&self, records: &mut [QueryRecord]) {
        info!("Applying exact matches...");
        self.apply_exact_matches(records);

        info!("Applying known abbreviations...");
        self.apply_known_abbreviations(records);

        info!("Applying fuzzy matches...");
        self.apply_fuzzy_matches(records);
    }

    fn apply_exact_matches(&self, records: &mut [QueryRecord]) {
        for record in records.iter_mut().filter(|record| !record.is_resolved()) {
            if let Some(entry) = self.reference_directory.get_by_key(&record.normalized_key) {
                record.resolve(
                    MatchTier::Exact,
                    Some(entry.original_name.clone()),
                    Some(entry.ticker.clone()),
                );
            }
        }
    }

    fn apply_known_abbreviations(&self, records: &mut [QueryRecord]) {
        for record in records.iter_mut().filter(|record| !record.is_resolved()) {
            if let Some(ticker) = self.known_abbreviations.get(&record.normalized_key) {
                // The abbreviation table stores normalized short forms, so the
                // matched name is the query's own normalized key.
                let matched_name = record.normalized_key.clone();
                let matched_ticker = ticker.clone();

                record.resolve(
                    MatchTier::Abbreviation,
                    Some(matched_name),
                    Some(matched_ticker),
                );
            }
        }
    }

    // Naive full scan over the directory per unresolved record. This
    // cross-product is the dominant cost of the system; an inverted index
    // from token to candidate set would prune it without changing the
    // scoring or tie-break contract.
    fn apply_fuzzy_matches(&self, records: &mut [QueryRecord]) {
        for record in records.iter_mut().filter(|record| !record.is_resolved()) {
            let mut max_score = 0.0_f32;
            let mut best_entry = None;

            for entry in self.reference_directory.iter() {
                let score = weighted_word_overlap(
                    &record.normalized_key,
                    &entry.normalized_key,
                    &self.frequency_table,
                );

                // Strict comparison: on ties the earliest candidate keeps the
                // win, and only strictly positive scores count as a match.
                if score > max_score {
                    max_score = score;
                    best_entry = Some(entry);
                }
            }

            match best_entry {
                Some(entry) => record.resolve(
                    MatchTier::FuzzyGuess,
                    Some(entry.original_name.clone()),
                    Some(entry.ticker.clone()),
                ),
                None => record.resolve(MatchTier::NoMatch, None, None),
            }
        }
    }
}
