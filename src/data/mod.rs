//! Data ingestion and chart transformation module
//!
//! This module owns the full pipeline from raw uploaded bytes to
//! chart-ready payloads: format routing, the two file decoders, schema
//! classification, the chart data transformer, the gantt layout engine, and
//! the latest-submission-wins ingest session.
//!
//! ## Error Handling
//!
//! Decoding returns `DataResult<T>` with the `DataError` taxonomy; only
//! malformed files are errors. Malformed cells inside a well-formed file
//! degrade gracefully (NaN values, empty labels, placeholder payloads)
//! instead of failing.

pub mod chart_engine;
pub mod delimited;
pub mod error;
pub mod gantt;
pub mod schema;
pub mod session;
pub mod workbook;

pub use chart_engine::*;
pub use delimited::{decode_delimited, decode_delimited_content};
pub use error::*;
pub use gantt::*;
pub use schema::*;
pub use session::*;
pub use workbook::decode_workbook;

use crate::types::Dataset;
use std::path::Path;

/// Ingestion formats recognized by the upload surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileFormat {
    /// Delimited text (.csv, .tsv)
    Delimited,
    /// Spreadsheet workbook (.xlsx, .xls)
    Workbook,
}

impl FileFormat {
    /// Route a file name to a format by extension. Unrecognized extensions
    /// are rejected here, before any decode attempt.
    pub fn from_name(filename: &str) -> DataResult<Self> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" | "tsv" => Ok(FileFormat::Delimited),
            "xlsx" | "xls" => Ok(FileFormat::Workbook),
            _ => Err(DataError::UnsupportedFormat(filename.to_string())),
        }
    }
}

/// Decode one uploaded file into a dataset, routing on the extension hint.
pub fn decode_upload(filename: &str, bytes: &[u8]) -> DataResult<Dataset> {
    match FileFormat::from_name(filename)? {
        FileFormat::Delimited => decode_delimited(filename, bytes),
        FileFormat::Workbook => decode_workbook(filename, bytes),
    }
}
