//! CSV loader with per-column dtype inference
//!
//! Reads the whole file into memory in one pass, then types each column:
//! Int64 if every non-empty cell parses as i64, Float64 if every
//! non-empty cell parses as f64, Text otherwise. Empty cells become
//! nulls and never influence the inferred dtype.

use std::fs::File;
use std::path::Path;

use super::types::{Column, ColumnData, DType, DatasetError, Frame};

/// Load a headered CSV file into a `Frame`.
///
/// Fails on a missing/unreadable file, a row whose field count differs
/// from the header, or a file with no header columns.
pub fn load_dataset(path: &Path) -> Result<Frame, DatasetError> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.is_empty() {
        return Err(DatasetError::Empty);
    }

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record?;
        for (i, field) in record.iter().enumerate() {
            cells[i].push(field.to_string());
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, raw)| build_column(name, raw))
        .collect();

    Frame::new(columns)
}

/// Type a raw column and convert its cells
fn build_column(name: String, raw: Vec<String>) -> Column {
    let dtype = infer_dtype(&raw);

    let data = match dtype {
        DType::Int64 | DType::Float64 => ColumnData::Numeric(
            raw.iter()
                .map(|cell| {
                    let cell = cell.trim();
                    if cell.is_empty() {
                        None
                    } else {
                        cell.parse::<f64>().ok()
                    }
                })
                .collect(),
        ),
        DType::Text => ColumnData::Text(
            raw.into_iter()
                .map(|cell| {
                    if cell.trim().is_empty() {
                        None
                    } else {
                        Some(cell)
                    }
                })
                .collect(),
        ),
    };

    Column { name, dtype, data }
}

fn infer_dtype(raw: &[String]) -> DType {
    let mut all_int = true;
    let mut all_float = true;

    for cell in raw {
        let cell = cell.trim();
        if cell.is_empty() {
            continue;
        }
        if all_int && cell.parse::<i64>().is_err() {
            all_int = false;
        }
        if all_float && cell.parse::<f64>().is_err() {
            all_float = false;
            break;
        }
    }

    if all_int {
        DType::Int64
    } else if all_float {
        DType::Float64
    } else {
        DType::Text
    }
}
