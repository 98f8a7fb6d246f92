use log::{error, info};
use std::env;
use ticker_match::utils::{
    read_query_list_from_path, read_reference_list_from_path, write_match_records_to_path,
};
use ticker_match::{match_company_names, MatchTier};

const DEFAULT_REFERENCE_FILE: &str = "tickerMatchLookup.csv";
const DEFAULT_QUERY_FILE: &str = "tickerSearch.csv";
const DEFAULT_OUTPUT_FILE: &str = "tickerMatchResults.csv";

fn main() {
    // Initialize the logger
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let reference_path = args.get(1).map_or(DEFAULT_REFERENCE_FILE, |arg| arg.as_str());
    let query_path = args.get(2).map_or(DEFAULT_QUERY_FILE, |arg| arg.as_str());
    let output_path = args.get(3).map_or(DEFAULT_OUTPUT_FILE, |arg| arg.as_str());

    // Missing or unreadable inputs are fatal before the matching core runs
    let reference_list = match read_reference_list_from_path(reference_path) {
        Ok(reference_list) => reference_list,
        Err(e) => {
            error!("Failed to read reference list from {}: {}", reference_path, e);
            std::process::exit(1);
        }
    };

    let query_names = match read_query_list_from_path(query_path) {
        Ok(query_names) => query_names,
        Err(e) => {
            error!("Failed to read query list from {}: {}", query_path, e);
            std::process::exit(1);
        }
    };

    info!(
        "Matching {} queries against {} reference entries...",
        query_names.len(),
        reference_list.len()
    );

    let records = match_company_names(&reference_list, &query_names);

    if let Err(e) = write_match_records_to_path(output_path, &records) {
        error!("Failed to write match results to {}: {}", output_path, e);
        std::process::exit(1);
    }

    let matched_count = records
        .iter()
        .filter(|record| record.tier != Some(MatchTier::NoMatch))
        .count();

    info!(
        "Matched {} of {} queries; results written to {}",
        matched_count,
        records.len(),
        output_path
    );
}
