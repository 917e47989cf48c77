//! Chart data transformation engine
//!
//! Maps a dataset plus an axis selection into the family-specific payload a
//! renderer needs. Transformation is total: malformed cells degrade to NaN
//! or empty values, and an incomplete axis selection yields the
//! [`ChartPayload::Placeholder`] prompt state rather than an error.

use crate::data::gantt::{layout_gantt, GanttTask};
use crate::types::{AxisSelection, ChartKind, Dataset};
use serde::{Deserialize, Serialize};

/// A flat single-series payload: labels and values are index-aligned with
/// the dataset rows. Shared verbatim by the flat and proportional chart
/// families; only the chart kind tag disambiguates interpretation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    /// Series label (the value column name)
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// A leaf of the single-level hierarchy payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HierarchyNode {
    pub name: String,
    /// Raw row value; may be zero, negative, or NaN
    pub weight: f64,
}

impl HierarchyNode {
    /// Weight usable by an area-proportional layout: zero/negative/NaN
    /// weights become zero-area leaves rather than validation errors.
    pub fn area_weight(&self) -> f64 {
        if self.weight.is_finite() && self.weight > 0.0 {
            self.weight
        } else {
            0.0
        }
    }
}

/// Single-level weighted tree: one root, all rows as direct children.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HierarchyData {
    pub name: String,
    pub children: Vec<HierarchyNode>,
}

/// Aggregate payload for gauge rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GaugeData {
    /// Mean of the value column (non-finite cells skipped)
    pub current: f64,
    /// Maximum of the value column (non-finite cells skipped)
    pub max: f64,
    /// `100 * current / max`, clamped to 0 when max is zero or not finite
    pub percentage: f64,
}

/// The transformed data for one chart rendering, tagged by family.
///
/// Renderers match on the variant exhaustively; [`Self::is_renderable`] is
/// the explicit predicate for the prompt state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ChartPayload {
    Series(SeriesData),
    Hierarchy(HierarchyData),
    Gauge(GaugeData),
    Tasks(Vec<GanttTask>),
    /// Soft-fail state: an axis is unset, so the renderer shows a prompt
    Placeholder,
}

impl ChartPayload {
    /// Whether this payload carries chart data, as opposed to the prompt
    /// state presented while axes are unselected.
    pub fn is_renderable(&self) -> bool {
        !matches!(self, ChartPayload::Placeholder)
    }
}

/// Transform a dataset into the payload for the requested chart kind.
///
/// Never fails: with either axis unset every chart kind yields
/// [`ChartPayload::Placeholder`]. Row order is preserved and labels/values
/// stay index-aligned with the dataset; a missing category key becomes an
/// empty label and a missing or non-numeric value cell becomes NaN in the
/// series rather than a skipped row.
pub fn transform(dataset: &Dataset, axes: &AxisSelection, kind: ChartKind) -> ChartPayload {
    let (Some(category), Some(value)) = (axes.category.as_deref(), axes.value.as_deref()) else {
        return ChartPayload::Placeholder;
    };

    match kind {
        ChartKind::Line | ChartKind::Bar | ChartKind::Doughnut | ChartKind::Radar => {
            ChartPayload::Series(build_series(dataset, category, value))
        }
        ChartKind::Treemap => ChartPayload::Hierarchy(build_hierarchy(dataset, category, value)),
        ChartKind::Gauge => ChartPayload::Gauge(build_gauge(dataset, value)),
        // Reads the well-known task columns, not the axis selection
        ChartKind::Gantt => ChartPayload::Tasks(layout_gantt(dataset)),
    }
}

fn build_series(dataset: &Dataset, category: &str, value: &str) -> SeriesData {
    let mut labels = Vec::with_capacity(dataset.row_count());
    let mut values = Vec::with_capacity(dataset.row_count());

    for row in 0..dataset.row_count() {
        labels.push(label_of(dataset, row, category));
        values.push(value_of(dataset, row, value));
    }

    SeriesData {
        label: value.to_string(),
        labels,
        values,
    }
}

fn build_hierarchy(dataset: &Dataset, category: &str, value: &str) -> HierarchyData {
    let children = (0..dataset.row_count())
        .map(|row| HierarchyNode {
            name: label_of(dataset, row, category),
            weight: value_of(dataset, row, value),
        })
        .collect();

    HierarchyData {
        name: "root".to_string(),
        children,
    }
}

fn build_gauge(dataset: &Dataset, value: &str) -> GaugeData {
    let finite: Vec<f64> = (0..dataset.row_count())
        .map(|row| value_of(dataset, row, value))
        .filter(|v| v.is_finite())
        .collect();

    let current = if finite.is_empty() {
        0.0
    } else {
        finite.iter().sum::<f64>() / finite.len() as f64
    };
    let max = finite.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let max = if max.is_finite() { max } else { 0.0 };

    // A zero or degenerate max must render as 0%, never as NaN
    let percentage = if max != 0.0 {
        100.0 * current / max
    } else {
        0.0
    };

    GaugeData {
        current,
        max,
        percentage,
    }
}

/// Label coercion for one row: absent keys become the empty string.
fn label_of(dataset: &Dataset, row: usize, column: &str) -> String {
    dataset
        .cell(row, column)
        .map(|c| c.display())
        .unwrap_or_default()
}

/// Numeric coercion for one row: absent keys and parse failures become NaN.
fn value_of(dataset: &Dataset, row: usize, column: &str) -> f64 {
    dataset
        .cell(row, column)
        .map(|c| c.as_number())
        .unwrap_or(f64::NAN)
}
