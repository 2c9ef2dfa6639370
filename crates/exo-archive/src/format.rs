//! Decoding TAP result bodies into a [`RawTable`].
//!
//! The JSON format is an array of row objects. The CSV format has a header
//! row; its cells are kept as strings and blank cells become `null` so the
//! normalizer sees the same shape for both.

use exo_config::ResultFormat;
use exo_core::{PLANET_NAME_COLUMN, RawRow, RawTable};
use serde_json::Value;

use crate::error::FetchError;

/// Decode a result body in the configured format.
///
/// # Errors
///
/// Returns [`FetchError::Parse`] if the body is malformed or lacks the
/// planet name column, and [`FetchError::Empty`] if it holds no rows.
pub fn parse_table(body: &str, format: ResultFormat) -> Result<RawTable, FetchError> {
    let table = match format {
        ResultFormat::Json => parse_json(body)?,
        ResultFormat::Csv => parse_csv(body)?,
    };
    if table.is_empty() {
        return Err(FetchError::Empty);
    }
    if !table.rows()[0].contains_key(PLANET_NAME_COLUMN) {
        return Err(FetchError::Parse(format!(
            "result is missing the {PLANET_NAME_COLUMN} column"
        )));
    }
    Ok(table)
}

fn parse_json(body: &str) -> Result<RawTable, FetchError> {
    let rows: Vec<RawRow> = serde_json::from_str(body)
        .map_err(|e| FetchError::Parse(format!("invalid JSON result: {e}")))?;
    Ok(RawTable::new(rows))
}

fn parse_csv(body: &str) -> Result<RawTable, FetchError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| FetchError::Parse(format!("invalid CSV header: {e}")))?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| FetchError::Parse(format!("invalid CSV row: {e}")))?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(column, cell)| {
                let value = if cell.is_empty() {
                    Value::Null
                } else {
                    Value::String(cell.to_string())
                };
                (column.to_string(), value)
            })
            .collect();
        rows.push(row);
    }
    Ok(RawTable::new(rows))
}
