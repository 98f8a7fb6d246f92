/// Tokens removed from company names during normalization: legal-entity
/// suffixes, generic corporate descriptors, and single-letter share-class
/// markers. Kept lowercase because normalization lowercases before filtering.
pub const STOP_WORDS: &[&str] = &[
    "inc",
    "corporation",
    "corp",
    "adr",
    "ltd",
    "sponsored",
    "company",
    "holdings",
    "co",
    "incorporated",
    "partners",
    "limited",
    "sa",
    "holding",
    "properties",
    "group",
    "industries",
    "technologies",
    "plc",
    "com",
    "lp",
    "class",
    "a",
    "b",
    "c",
    "the",
    "of",
];

/// Number of highest-frequency corpus tokens that receive a discounted weight
/// in the `FrequencyTable`. Every other token scores at full weight.
pub const MAX_FREQUENCY_TABLE_TOKENS: usize = 10;
