use crate::models::NameNormalizer;
use crate::types::{CompanyName, NormalizedKey, ReferenceList, TickerSymbol};
use std::collections::HashMap;

/// One row of the reference directory.
#[derive(Debug, Clone)]
pub struct ReferenceEntry {
    pub ticker: TickerSymbol,
    pub original_name: CompanyName,
    /// Derived from `original_name`; always `normalizer.normalize(&original_name)`.
    pub normalized_key: NormalizedKey,
}

/// Insertion-ordered, key-indexed store of reference entries.
///
/// Iteration order is part of the matching contract: the fuzzy tier breaks
/// score ties in favor of the earliest candidate, so candidate order must be
/// deterministic and stable across runs.
pub struct ReferenceDirectory {
    entries: Vec<ReferenceEntry>,
    key_index: HashMap<NormalizedKey, usize>,
}

impl ReferenceDirectory {
    pub fn from_reference_list(
        reference_list: &ReferenceList,
        normalizer: &NameNormalizer,
    ) -> Self {
        let mut entries: Vec<ReferenceEntry> = Vec::with_capacity(reference_list.len());
        let mut key_index: HashMap<NormalizedKey, usize> = HashMap::new();

        for (ticker, original_name) in reference_list {
            let normalized_key = normalizer.normalize(original_name);

            match key_index.get(&normalized_key) {
                // Duplicate keys are last-write-wins: the later row overwrites
                // the earlier entry in place, keeping the key's original
                // position in iteration order.
                Some(&index) => {
                    entries[index].ticker = ticker.clone();
                    entries[index].original_name = original_name.clone();
                }
                None => {
                    key_index.insert(normalized_key.clone(), entries.len());
                    entries.push(ReferenceEntry {
                        ticker: ticker.clone(),
                        original_name: original_name.clone(),
                        normalized_key,
                    });
                }
            }
        }

        ReferenceDirectory { entries, key_index }
    }

    /// O(1) lookup of an entry by its normalized key.
    pub fn get_by_key(&self, normalized_key: &str) -> Option<&ReferenceEntry> {
        self.key_index
            .get(normalized_key)
            .map(|&index| &self.entries[index])
    }

    /// Entries in deterministic insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ReferenceEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
