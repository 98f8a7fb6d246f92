pub mod error;
pub use error::Error;

pub mod frequency_table;
pub use frequency_table::FrequencyTable;

pub mod known_abbreviations;
pub use known_abbreviations::KnownAbbreviations;

pub mod match_engine;
pub use match_engine::MatchEngine;

pub mod match_record;
pub use match_record::{MatchTier, QueryRecord};

pub mod name_normalizer;
pub use name_normalizer::NameNormalizer;

pub mod reference_directory;
pub use reference_directory::{ReferenceDirectory, ReferenceEntry};
