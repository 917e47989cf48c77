//! Gantt layout engine
//!
//! Converts task rows into a fixed 12-slot time grid with per-task
//! start/end occupancy and group-based coloring. The grid is calendar-free:
//! slots are month-like buckets numbered 1..=12 and nothing else.
//!
//! Unlike every other chart family, this engine reads dedicated well-known
//! columns ([`GANTT_TASK_COLUMN`], [`GANTT_START_COLUMN`],
//! [`GANTT_END_COLUMN`], [`GANTT_GROUP_COLUMN`]) and ignores the caller's
//! axis selection entirely.

use crate::constants::{
    GANTT_END_COLUMN, GANTT_FALLBACK_SLOT, GANTT_GROUP_COLUMN, GANTT_NEUTRAL_COLOR,
    GANTT_SLOT_COUNT, GANTT_START_COLUMN, GANTT_TASK_COLUMN,
};
use crate::types::Dataset;
use serde::{Deserialize, Serialize};

/// Group tag on a task, used only for color selection, never for ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupTag {
    #[default]
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    /// Any tag value outside the fixed enumeration
    Other,
}

impl GroupTag {
    /// Map a raw cell value to a group tag. Total: unknown labels become
    /// [`GroupTag::Other`].
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "A" => GroupTag::A,
            "B" => GroupTag::B,
            "C" => GroupTag::C,
            "D" => GroupTag::D,
            "E" => GroupTag::E,
            "F" => GroupTag::F,
            "G" => GroupTag::G,
            _ => GroupTag::Other,
        }
    }

    /// Display color for this group. Total and order-independent.
    pub fn color(&self) -> &'static str {
        match self {
            GroupTag::A => "#ff6b6b",
            GroupTag::B => "#ff8c42",
            GroupTag::C => "#ffd93d",
            GroupTag::D => "#6bcf7f",
            GroupTag::E => "#4d96ff",
            GroupTag::F => "#9b59b6",
            GroupTag::G => "#e91e63",
            GroupTag::Other => GANTT_NEUTRAL_COLOR,
        }
    }
}

/// One slot of a task's occupancy grid.
///
/// `is_start`/`is_end` drive only the rounded-corner visual treatment
/// downstream; they carry no scheduling semantics. A single-slot task is
/// both at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCell {
    /// Slot number, 1..=12
    pub slot: u32,
    pub occupied: bool,
    pub is_start: bool,
    pub is_end: bool,
}

/// A laid-out task row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GanttTask {
    pub name: String,
    pub start_slot: i64,
    pub end_slot: i64,
    pub group: GroupTag,
    /// Fixed-size occupancy grid, one entry per slot
    pub slots: Vec<SlotCell>,
}

impl GanttTask {
    /// Slot numbers this task occupies.
    pub fn occupied_slots(&self) -> Vec<u32> {
        self.slots
            .iter()
            .filter(|s| s.occupied)
            .map(|s| s.slot)
            .collect()
    }
}

/// Lay out every dataset row as a gantt task.
///
/// Task name defaults to the empty string, start/end slots default to slot 1
/// when absent or non-numeric, and the group falls back to
/// [`GroupTag::A`]. A task occupies every slot `s` with
/// `start <= s <= end`, inclusive on both ends; a reversed range occupies
/// nothing (no swap, no wraparound). Out-of-range endpoints simply clip to
/// the grid. Output preserves dataset row order.
pub fn layout_gantt(dataset: &Dataset) -> Vec<GanttTask> {
    dataset
        .rows
        .iter()
        .enumerate()
        .map(|(i, _)| layout_task(dataset, i))
        .collect()
}

fn layout_task(dataset: &Dataset, row: usize) -> GanttTask {
    let name = dataset
        .cell(row, GANTT_TASK_COLUMN)
        .map(|c| c.display())
        .unwrap_or_default();

    let start = slot_value(dataset, row, GANTT_START_COLUMN);
    let end = slot_value(dataset, row, GANTT_END_COLUMN);

    let group = dataset
        .cell(row, GANTT_GROUP_COLUMN)
        .map(|c| GroupTag::from_label(&c.display()))
        .unwrap_or_default();

    let slots = (1..=GANTT_SLOT_COUNT)
        .map(|slot| {
            let s = f64::from(slot);
            let occupied = s >= start && s <= end;
            SlotCell {
                slot,
                occupied,
                is_start: occupied && s == start,
                is_end: occupied && s == end,
            }
        })
        .collect();

    GanttTask {
        name,
        start_slot: start as i64,
        end_slot: end as i64,
        group,
        slots,
    }
}

/// Coerce a slot cell to a number, falling back to slot 1 when the cell is
/// absent or does not parse.
fn slot_value(dataset: &Dataset, row: usize, column: &str) -> f64 {
    match dataset.cell(row, column) {
        Some(cell) => {
            let n = cell.as_number();
            if n.is_nan() {
                GANTT_FALLBACK_SLOT
            } else {
                n
            }
        }
        None => GANTT_FALLBACK_SLOT,
    }
}
