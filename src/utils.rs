pub mod read_query_list;
pub mod read_reference_list;
pub mod weighted_word_overlap;
pub mod write_match_records;

pub use read_query_list::{read_query_list_from_path, read_query_list_from_string};
pub use read_reference_list::{read_reference_list_from_path, read_reference_list_from_string};
pub use weighted_word_overlap::weighted_word_overlap;
pub use write_match_records::{write_match_records_to_path, write_match_records_to_string};
