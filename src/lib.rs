mod config;
pub use config::DEFAULT_KNOWN_ABBREVIATIONS;
mod constants;
pub use constants::{MAX_FREQUENCY_TABLE_TOKENS, STOP_WORDS};
pub mod models;
pub use models::{
    Error, FrequencyTable, KnownAbbreviations, MatchEngine, MatchTier, NameNormalizer, QueryRecord,
    ReferenceDirectory, ReferenceEntry,
};
pub mod types;
pub mod utils;
pub use types::{CompanyName, NormalizedKey, ReferenceList, TickerSymbol, Token, TokenRef};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Resolves each query name against the reference directory using the default
/// known-abbreviation table, returning one fully populated record per query in
/// input order.
pub fn match_company_names(
    reference_list: &ReferenceList,
    query_names: &[CompanyName],
) -> Vec<QueryRecord> {
    match_company_names_with_custom_abbreviations(
        reference_list,
        query_names,
        &KnownAbbreviations::default(),
    )
}

/// Same as [`match_company_names`], with a caller-supplied abbreviation table.
///
/// Total over all string inputs: a query that nothing matches comes back with
/// tier [`MatchTier::NoMatch`] rather than an error.
pub fn match_company_names_with_custom_abbreviations(
    reference_list: &ReferenceList,
    query_names: &[CompanyName],
    known_abbreviations: &KnownAbbreviations,
) -> Vec<QueryRecord> {
    let normalizer = NameNormalizer::company_name_normalizer();

    let reference_directory = ReferenceDirectory::from_reference_list(reference_list, &normalizer);

    let mut records: Vec<QueryRecord> = query_names
        .iter()
        .map(|raw_name| QueryRecord::new(raw_name.clone(), normalizer.normalize(raw_name)))
        .collect();

    let match_engine = MatchEngine::new(&reference_directory, known_abbreviations);
    match_engine.match_records(&mut records);

    records
}
