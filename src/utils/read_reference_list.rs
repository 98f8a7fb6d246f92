use crate::models::Error;
use crate::types::ReferenceList;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{Cursor, Read};

/// Reads a reference directory from a headerless two-column CSV file
/// structured as `TICKER,NAME`, preserving row order.
pub fn read_reference_list_from_path(file_path: &str) -> Result<ReferenceList, Error> {
    let file = File::open(file_path)?;
    read_reference_list(file)
}

/// Reads a reference directory from an in-memory CSV string.
pub fn read_reference_list_from_string(csv: &str) -> Result<ReferenceList, Error> {
    read_reference_list(Cursor::new(csv))
}

fn read_reference_list<R: Read>(reader: R) -> Result<ReferenceList, Error> {
    let mut reference_list = ReferenceList::new();

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    for record in csv_reader.records() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        let ticker = record
            .get(0)
            .ok_or_else(|| Error::ParserError("Missing ticker field".to_string()))?;

        let company_name = record
            .get(1)
            .ok_or_else(|| Error::ParserError("Missing company name field".to_string()))?;

        reference_list.push((ticker.to_string(), company_name.to_string()));
    }

    Ok(reference_list)
}
