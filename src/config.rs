/// Default override table of normalized short names to ticker symbols, for
/// large companies that are commonly referred to by abbreviation. Keys must
/// already be in normalized form since they are compared verbatim against
/// normalized query keys.
pub const DEFAULT_KNOWN_ABBREVIATIONS: &[(&str, &str)] = &[
    ("fannie mae", "FNMA"),
    ("ibm", "IBM"),
    ("freddie mac", "FMCC"),
    ("ups", "UPS"),
    ("aig", "AIG"),
    ("adp", "ADP"),
];
