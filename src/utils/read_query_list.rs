use crate::models::Error;
use crate::types::CompanyName;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{Cursor, Read};

/// Reads a query list from a headerless CSV file whose first column holds the
/// raw company names, preserving row order.
pub fn read_query_list_from_path(file_path: &str) -> Result<Vec<CompanyName>, Error> {
    let file = File::open(file_path)?;
    read_query_list(file)
}

/// Reads a query list from an in-memory CSV string.
pub fn read_query_list_from_string(csv: &str) -> Result<Vec<CompanyName>, Error> {
    read_query_list(Cursor::new(csv))
}

fn read_query_list<R: Read>(reader: R) -> Result<Vec<CompanyName>, Error> {
    let mut query_names = Vec::new();

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    for record in csv_reader.records() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        let raw_name = record
            .get(0)
            .ok_or_else(|| Error::ParserError("Missing company name field".to_string()))?;

        query_names.push(raw_name.to_string());
    }

    Ok(query_names)
}
