//! Spreadsheet workbook (xlsx/xls) decoding
//!
//! Reads the first sheet of a workbook into a [`Dataset`]. Subsequent
//! sheets are ignored; that is this format's scope boundary, not an error.
//! The first row of the sheet is the header; each subsequent row becomes one
//! dataset row.
//!
//! Unlike the delimited decoder, cell values preserve the sheet's native
//! scalar type: numeric cells stay [`Cell::Number`], text cells stay
//! [`Cell::Text`]. Empty trailing cells are absent keys.

use crate::constants::{MAX_INPUT_SIZE_MB, MAX_ROWS};
use crate::data::error::{DataError, DataResult};
use crate::types::{Cell, Dataset, Row};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;
use std::path::Path;

/// Decode workbook bytes into a Dataset.
pub fn decode_workbook(filename: &str, bytes: &[u8]) -> DataResult<Dataset> {
    let size_mb = bytes.len() as u64 / (1024 * 1024);
    if size_mb > MAX_INPUT_SIZE_MB as u64 {
        return Err(DataError::TooLarge {
            size_mb,
            max_mb: MAX_INPUT_SIZE_MB,
        });
    }

    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let sheet_count = workbook.sheet_names().len();
    if sheet_count > 1 {
        tracing::debug!(filename, sheet_count, "multi-sheet workbook; reading first sheet only");
    }

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(DataError::EmptyFile)??;

    let mut sheet_rows = range.rows();

    let header = sheet_rows.next().ok_or(DataError::EmptyFile)?;
    let mut columns: Vec<String> = header.iter().map(header_label).collect();
    while columns.last().is_some_and(|c| c.is_empty()) {
        columns.pop();
    }
    if columns.is_empty() {
        return Err(DataError::NoColumns);
    }

    let mut rows: Vec<Row> = Vec::new();
    for sheet_row in sheet_rows {
        if rows.len() >= MAX_ROWS {
            return Err(DataError::TooManyRows {
                rows: rows.len() + 1,
                max_rows: MAX_ROWS,
            });
        }

        let mut cells: Vec<Option<Cell>> = sheet_row
            .iter()
            .take(columns.len())
            .map(convert_cell)
            .collect();
        // Trailing empty cells are absent keys; interior ones must keep
        // their position and become empty text
        while cells.last().is_some_and(|c| c.is_none()) {
            cells.pop();
        }
        let cells = cells
            .into_iter()
            .map(|c| c.unwrap_or(Cell::Text(String::new())))
            .collect();

        rows.push(Row::new(cells));
    }

    // A sheet of nothing but header rows is fine; an entirely blank sheet is not
    Ok(Dataset::new(dataset_name(filename), columns, rows))
}

fn dataset_name(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Data")
        .to_string()
}

/// Column name from a header cell
fn header_label(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => format!("{}", other).trim().to_string(),
    }
}

/// Convert a sheet cell to a dataset cell. `None` marks an empty cell.
fn convert_cell(cell: &Data) -> Option<Cell> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(Cell::Text(s.clone())),
        Data::Float(f) => Some(Cell::Number(*f)),
        Data::Int(i) => Some(Cell::Number(*i as f64)),
        Data::Bool(b) => Some(Cell::Text(b.to_string())),
        // Serial date number, consistent with how sheets store dates
        Data::DateTime(dt) => Some(Cell::Number(dt.as_f64())),
        Data::DateTimeIso(s) => Some(Cell::Text(s.clone())),
        Data::DurationIso(s) => Some(Cell::Text(s.clone())),
        Data::Error(_) => None,
    }
}
