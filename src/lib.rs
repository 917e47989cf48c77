//! Chartboard: tabular file ingestion and chart-data transformation.
//!
//! Decodes delimited-text and spreadsheet files into an untyped row model,
//! classifies columns as numeric or categorical for axis defaults, and
//! transforms the rows plus an axis selection into the payload each chart
//! family needs (flat series, proportional series, weighted hierarchy,
//! gauge aggregate, gantt time grid). Rendering is out of scope: payloads
//! serialize to JSON for an external renderer.

pub mod constants;
pub mod data;
pub mod types;
