use crate::config::DEFAULT_KNOWN_ABBREVIATIONS;
use crate::types::{NormalizedKey, TickerSymbol};
use std::collections::HashMap;

/// Static override table mapping normalized short names (e.g. "ibm") to
/// ticker symbols. Consulted only on verbatim key equality; it is supplied as
/// configuration and is never derived from the reference directory.
pub struct KnownAbbreviations {
    abbreviations: HashMap<NormalizedKey, TickerSymbol>,
}

impl KnownAbbreviations {
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            abbreviations: pairs
                .into_iter()
                .map(|(short_name, ticker)| (short_name.to_string(), ticker.to_string()))
                .collect(),
        }
    }

    pub fn get(&self, normalized_key: &str) -> Option<&TickerSymbol> {
        self.abbreviations.get(normalized_key)
    }

    pub fn len(&self) -> usize {
        self.abbreviations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abbreviations.is_empty()
    }
}

impl Default for KnownAbbreviations {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_KNOWN_ABBREVIATIONS.iter().copied())
    }
}
