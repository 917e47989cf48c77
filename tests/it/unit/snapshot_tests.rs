//! Snapshot tests using the insta crate.
//!
//! Payloads cross the boundary to an external renderer as JSON, so their
//! serialized shape is contract, not implementation detail. Inline
//! snapshots pin that shape.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::TestDatasetBuilder;
use chartboard::data::{classify, transform};
use chartboard::types::{AxisSelection, ChartKind};

fn region_sales_axes() -> AxisSelection {
    AxisSelection::new(Some("region".to_string()), Some("sales".to_string()))
}

#[test]
fn snapshot_series_payload() {
    let ds = TestDatasetBuilder::new(&["region", "sales"])
        .text_row(&["north", "100"])
        .text_row(&["south", "250"])
        .build();

    let payload = transform(&ds, &region_sales_axes(), ChartKind::Bar);
    insta::assert_json_snapshot!(payload, @r###"
{
  "Series": {
    "label": "sales",
    "labels": [
      "north",
      "south"
    ],
    "values": [
      100.0,
      250.0
    ]
  }
}
"###);
}

#[test]
fn snapshot_gauge_payload_zero_max() {
    let ds = TestDatasetBuilder::new(&["region", "sales"])
        .text_row(&["north", "0"])
        .text_row(&["south", "0"])
        .build();

    let payload = transform(&ds, &region_sales_axes(), ChartKind::Gauge);
    insta::assert_json_snapshot!(payload, @r###"
{
  "Gauge": {
    "current": 0.0,
    "max": 0.0,
    "percentage": 0.0
  }
}
"###);
}

#[test]
fn snapshot_placeholder_payload() {
    let ds = TestDatasetBuilder::new(&["region", "sales"])
        .text_row(&["north", "100"])
        .build();

    let payload = transform(&ds, &AxisSelection::default(), ChartKind::Bar);
    insta::assert_json_snapshot!(payload, @r###""Placeholder""###);
}

#[test]
fn snapshot_column_schema() {
    let ds = TestDatasetBuilder::new(&["region", "sales"])
        .text_row(&["north", "100"])
        .text_row(&["south", "250"])
        .build();

    insta::assert_json_snapshot!(classify(&ds), @r###"
{
  "numeric": [
    "sales"
  ],
  "categorical": [
    "region"
  ]
}
"###);
}

#[test]
fn snapshot_gantt_payload() {
    let ds = TestDatasetBuilder::new(&["task", "start", "end", "group"])
        .text_row(&["brief", "11", "12", "E"])
        .build();

    let payload = transform(&ds, &region_sales_axes(), ChartKind::Gantt);
    insta::assert_json_snapshot!(payload, @r###"
{
  "Tasks": [
    {
      "name": "brief",
      "start_slot": 11,
      "end_slot": 12,
      "group": "E",
      "slots": [
        {
          "slot": 1,
          "occupied": false,
          "is_start": false,
          "is_end": false
        },
        {
          "slot": 2,
          "occupied": false,
          "is_start": false,
          "is_end": false
        },
        {
          "slot": 3,
          "occupied": false,
          "is_start": false,
          "is_end": false
        },
        {
          "slot": 4,
          "occupied": false,
          "is_start": false,
          "is_end": false
        },
        {
          "slot": 5,
          "occupied": false,
          "is_start": false,
          "is_end": false
        },
        {
          "slot": 6,
          "occupied": false,
          "is_start": false,
          "is_end": false
        },
        {
          "slot": 7,
          "occupied": false,
          "is_start": false,
          "is_end": false
        },
        {
          "slot": 8,
          "occupied": false,
          "is_start": false,
          "is_end": false
        },
        {
          "slot": 9,
          "occupied": false,
          "is_start": false,
          "is_end": false
        },
        {
          "slot": 10,
          "occupied": false,
          "is_start": false,
          "is_end": false
        },
        {
          "slot": 11,
          "occupied": true,
          "is_start": true,
          "is_end": false
        },
        {
          "slot": 12,
          "occupied": true,
          "is_start": false,
          "is_end": true
        }
      ]
    }
  ]
}
"###);
}
