//! CSV loading
//!
//! Rows become mappings keyed by header. Incomplete rows and exact
//! duplicate rows are dropped before anything reaches the processor.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use contracts::ContractError;
use csv::ReaderBuilder;
use serde_json::{Map, Value};
use tracing::debug;

/// Load a CSV file into row mappings
///
/// # Errors
/// Fails when the file cannot be opened or a record cannot be parsed.
pub fn load_path(path: impl AsRef<Path>) -> Result<Vec<Value>, ContractError> {
    let file = File::open(path.as_ref())?;
    from_reader(file)
}

/// Read CSV into row mappings
///
/// The first record is the header row. Every cell loads as text. Rows
/// with a missing or empty cell are dropped, then exact duplicates are
/// dropped keeping first occurrences.
///
/// # Errors
/// Fails when a record cannot be parsed.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Value>, ContractError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut rows: Vec<Value> = Vec::new();
    let mut dropped_incomplete = 0usize;
    let mut dropped_duplicates = 0usize;

    for record in reader.records() {
        let record = record.map_err(csv_error)?;

        let mut entries = Map::new();
        let mut complete = record.len() >= headers.len();
        for (header, cell) in headers.iter().zip(record.iter()) {
            if cell.is_empty() {
                complete = false;
                break;
            }
            entries.insert(header.to_string(), Value::String(cell.to_string()));
        }

        if !complete {
            dropped_incomplete += 1;
            continue;
        }

        let row = Value::Object(entries);
        if rows.contains(&row) {
            dropped_duplicates += 1;
            continue;
        }
        rows.push(row);
    }

    debug!(
        kept = rows.len(),
        dropped_incomplete, dropped_duplicates, "CSV rows loaded"
    );

    Ok(rows)
}

fn csv_error(error: csv::Error) -> ContractError {
    let line = error.position().map(|p| p.line()).unwrap_or(0);
    ContractError::csv_load(line, error.to_string())
}
