//! Column schema classification
//!
//! Inspects a dataset and partitions its column names into numeric and
//! categorical candidate sets. The two predicates are independent, so an
//! ambiguous real-world column (say `"5"` in one row and `"north"` in
//! another) lands in both sets. Callers must tolerate the overlap.
//!
//! Classification is recomputed from scratch on every call; nothing is
//! cached or incrementally updated.

use crate::types::{parse_number, AxisSelection, Cell, Dataset};
use serde::{Deserialize, Serialize};

/// Numeric and categorical column candidates, each in column discovery order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnSchema {
    pub numeric: Vec<String>,
    pub categorical: Vec<String>,
}

impl ColumnSchema {
    /// Default-axis policy applied when a dataset is first loaded: the first
    /// categorical column becomes the category axis and the first numeric
    /// column becomes the value axis. Either may stay unset, which defers
    /// chart rendering until the user supplies a selection.
    pub fn default_axes(&self) -> AxisSelection {
        AxisSelection::new(self.categorical.first().cloned(), self.numeric.first().cloned())
    }
}

/// Classify every column of the dataset.
///
/// A column is numeric-eligible if any row's cell is a native number or text
/// fully matching the numeric-literal grammar, and categorical-eligible if
/// any row's cell is non-empty text that fails that grammar. Cells that are
/// absent or empty text satisfy neither predicate, so an all-blank column
/// appears in neither list. An empty dataset yields two empty lists.
pub fn classify(dataset: &Dataset) -> ColumnSchema {
    let mut schema = ColumnSchema::default();
    if dataset.is_empty() {
        return schema;
    }

    for (index, column) in dataset.columns.iter().enumerate() {
        let mut numeric = false;
        let mut categorical = false;

        for row in &dataset.rows {
            match row.cells.get(index) {
                Some(Cell::Number(_)) => numeric = true,
                Some(Cell::Text(s)) => {
                    let trimmed = s.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    if parse_number(trimmed).is_some() {
                        numeric = true;
                    } else {
                        categorical = true;
                    }
                }
                None => {}
            }
            if numeric && categorical {
                break;
            }
        }

        if numeric {
            schema.numeric.push(column.clone());
        }
        if categorical {
            schema.categorical.push(column.clone());
        }
    }

    schema
}
