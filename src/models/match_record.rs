use crate::types::{CompanyName, NormalizedKey, TickerSymbol};
use std::fmt;

/// The match-resolution stage that produced a query's result, strictly ordered
/// by priority. A record resolved at an earlier tier is final and is skipped
/// by all later tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Exact,
    Abbreviation,
    FuzzyGuess,
    NoMatch,
}

impl MatchTier {
    /// Serialized tag used in tabular output.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::Exact => "EXACT",
            MatchTier::Abbreviation => "ABBREVIATION",
            MatchTier::FuzzyGuess => "FUZZY_GUESS",
            MatchTier::NoMatch => "NONE",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One query row being resolved against the reference directory.
///
/// Created with the tier unset; exactly one resolution step fills in the final
/// three fields. `NoMatch` is a valid terminal outcome, not an error.
#[derive(Debug, Clone)]
pub struct QueryRecord {
    pub original_name: CompanyName,
    pub normalized_key: NormalizedKey,
    pub matched_name: Option<CompanyName>,
    pub matched_ticker: Option<TickerSymbol>,
    pub tier: Option<MatchTier>,
}

impl QueryRecord {
    pub fn new(original_name: CompanyName, normalized_key: NormalizedKey) -> Self {
        Self {
            original_name,
            normalized_key,
            matched_name: None,
            matched_ticker: None,
            tier: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.tier.is_some()
    }

    /// Assigns the final match fields. Resolution is monotonic; a record must
    /// only be resolved once.
    pub fn resolve(
        &mut self,
        tier: MatchTier,
        matched_name: Option<CompanyName>,
        matched_ticker: Option<TickerSymbol>,
    ) {
        debug_assert!(!self.is_resolved(), "query record resolved twice");

        self.matched_name = matched_name;
        self.matched_ticker = matched_ticker;
        self.tier = Some(tier);
    }
}
