//! Test helpers and builders for reducing boilerplate in tests.

use chartboard::types::{Cell, Dataset, Row};
use std::path::PathBuf;

/// Builder for in-memory datasets.
///
/// # Example
/// ```ignore
/// let ds = TestDatasetBuilder::new(&["region", "sales"])
///     .text_row(&["north", "100"])
///     .text_row(&["south", "250"])
///     .build();
/// ```
pub struct TestDatasetBuilder {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl TestDatasetBuilder {
    pub fn new(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row of text cells.
    pub fn text_row(mut self, values: &[&str]) -> Self {
        self.rows.push(Row::new(
            values.iter().map(|v| Cell::Text(v.to_string())).collect(),
        ));
        self
    }

    /// Add a row of arbitrary cells.
    pub fn row(mut self, cells: Vec<Cell>) -> Self {
        self.rows.push(Row::new(cells));
        self
    }

    pub fn build(self) -> Dataset {
        Dataset::new("test", self.columns, self.rows)
    }
}

/// Path to a committed test fixture.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Raw bytes of a committed test fixture.
pub fn fixture_bytes(name: &str) -> Vec<u8> {
    std::fs::read(fixture_path(name)).expect("fixture readable")
}
