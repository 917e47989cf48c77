//! Delimited-text (CSV/TSV) file decoding
//!
//! Parses delimited text into a [`Dataset`]. The first line is the header
//! row defining column names; every subsequent line becomes one row. Fields
//! are split with quote awareness: a quoted field may contain the delimiter
//! or newlines verbatim, and a doubled quote escapes a literal quote.
//!
//! Every value decodes as [`Cell::Text`]; no type coercion happens here.
//! All typing decisions are deferred to the schema classifier and the chart
//! transformer. Rows shorter than the header keep their short length, since
//! sparse input is legal.

use crate::constants::{MAX_INPUT_SIZE_MB, MAX_ROWS};
use crate::data::error::{DataError, DataResult};
use crate::types::{Cell, Dataset, Row};
use std::path::Path;

/// Decode delimited-text bytes into a Dataset.
///
/// The delimiter is detected from the file name (`.tsv` uses tab) or by
/// content analysis, whichever candidate appears most frequently in the
/// leading lines. Inputs larger than [`MAX_INPUT_SIZE_MB`]MB or with more
/// than [`MAX_ROWS`] rows are rejected.
pub fn decode_delimited(filename: &str, bytes: &[u8]) -> DataResult<Dataset> {
    let size_mb = bytes.len() as u64 / (1024 * 1024);
    if size_mb > MAX_INPUT_SIZE_MB as u64 {
        return Err(DataError::TooLarge {
            size_mb,
            max_mb: MAX_INPUT_SIZE_MB,
        });
    }

    let content = std::str::from_utf8(bytes)
        .map_err(|_| DataError::Delimited("input is not valid UTF-8".to_string()))?;

    let delimiter = detect_delimiter(filename, content);
    tracing::debug!(filename, delimiter = %delimiter, "decoding delimited text");

    decode_delimited_content(content, delimiter, dataset_name(filename))
}

/// Decode delimited content with an explicit delimiter.
pub fn decode_delimited_content(
    content: &str,
    delimiter: char,
    name: String,
) -> DataResult<Dataset> {
    let mut records = split_records(content, delimiter);

    if records.is_empty() {
        return Err(DataError::EmptyFile);
    }

    let mut columns = records.remove(0);
    // Trailing unnamed header cells carry no addressable data
    while columns.last().is_some_and(|c| c.is_empty()) {
        columns.pop();
    }
    if columns.is_empty() {
        return Err(DataError::NoColumns);
    }

    if records.len() > MAX_ROWS {
        return Err(DataError::TooManyRows {
            rows: records.len(),
            max_rows: MAX_ROWS,
        });
    }

    let rows: Vec<Row> = records
        .into_iter()
        .map(|fields| {
            Row::new(
                fields
                    .into_iter()
                    .take(columns.len())
                    .map(Cell::Text)
                    .collect(),
            )
        })
        .collect();

    Ok(Dataset::new(name, columns, rows))
}

/// Dataset name from the uploaded file name
fn dataset_name(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Data")
        .to_string()
}

/// Detect the delimiter to use for parsing
fn detect_delimiter(filename: &str, content: &str) -> char {
    // Check file extension first
    if let Some(ext) = Path::new(filename).extension().and_then(|e| e.to_str()) {
        if ext.eq_ignore_ascii_case("tsv") {
            return '\t';
        }
    }

    // Count delimiters in the first few lines to determine most likely
    let first_lines: String = content.lines().take(5).collect::<Vec<_>>().join("\n");

    let comma_count = first_lines.matches(',').count();
    let tab_count = first_lines.matches('\t').count();
    let semicolon_count = first_lines.matches(';').count();

    if tab_count > comma_count && tab_count > semicolon_count {
        '\t'
    } else if semicolon_count > comma_count {
        ';'
    } else {
        ','
    }
}

/// Split content into records of fields, respecting quoting.
///
/// Inside quotes, the delimiter and line breaks are literal field content
/// and `""` is an escaped quote. Unquoted fields are trimmed; quoted fields
/// keep their content verbatim. Blank lines produce no record.
fn split_records(content: &str, delimiter: char) -> Vec<Vec<String>> {
    let mut records: Vec<Vec<String>> = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut field_quoted = false;
    let mut in_quotes = false;

    let mut chars = content.chars().peekable();

    let finish_field =
        |fields: &mut Vec<String>, field: &mut String, field_quoted: &mut bool| {
            let value = if *field_quoted {
                std::mem::take(field)
            } else {
                let trimmed = field.trim().to_string();
                field.clear();
                trimmed
            };
            fields.push(value);
            *field_quoted = false;
        };

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        if c == '"' && !field_quoted && field.trim().is_empty() {
            // Opening quote; whitespace before it is not field content
            field.clear();
            field_quoted = true;
            in_quotes = true;
        } else if c == delimiter {
            finish_field(&mut fields, &mut field, &mut field_quoted);
        } else if c == '\r' {
            // Consumed by the '\n' that follows in CRLF input
        } else if c == '\n' {
            finish_field(&mut fields, &mut field, &mut field_quoted);
            let blank = fields.len() == 1 && fields[0].is_empty();
            if !blank {
                records.push(std::mem::take(&mut fields));
            } else {
                fields.clear();
            }
        } else {
            field.push(c);
        }
    }

    // Final record without a trailing newline
    if !field.is_empty() || field_quoted || !fields.is_empty() {
        finish_field(&mut fields, &mut field, &mut field_quoted);
        let blank = fields.len() == 1 && fields[0].is_empty();
        if !blank {
            records.push(fields);
        }
    }

    records
}
