use crate::models::{Error, QueryRecord};
use std::io::Write;

/// Serializes match records to a CSV file, one row per query in input order:
/// raw name, normalized key, matched name, matched ticker, tier tag. Matched
/// fields are written as empty strings for unmatched records.
pub fn write_match_records_to_path(file_path: &str, records: &[QueryRecord]) -> Result<(), Error> {
    let mut csv_writer = csv::Writer::from_path(file_path)?;
    write_match_records(&mut csv_writer, records)
}

/// Serializes match records to an in-memory CSV string.
pub fn write_match_records_to_string(records: &[QueryRecord]) -> Result<String, Error> {
    let mut buffer = Vec::new();

    {
        let mut csv_writer = csv::Writer::from_writer(&mut buffer);
        write_match_records(&mut csv_writer, records)?;
    }

    String::from_utf8(buffer).map_err(|e| Error::Other(e.to_string()))
}

fn write_match_records<W: Write>(
    csv_writer: &mut csv::Writer<W>,
    records: &[QueryRecord],
) -> Result<(), Error> {
    for record in records {
        csv_writer.write_record(&[
            record.original_name.as_str(),
            record.normalized_key.as_str(),
            record.matched_name.as_deref().unwrap_or(""),
            record.matched_ticker.as_deref().unwrap_or(""),
            record.tier.map_or("", |tier| tier.as_str()),
        ])?;
    }

    csv_writer.flush()?;

    Ok(())
}
