//! Application-wide constants.
//!
//! Centralizes magic numbers and well-known column names to make the
//! codebase more maintainable and self-documenting.

// ============================================================================
// Data Loading
// ============================================================================

/// Maximum number of rows to load from a single file
pub const MAX_ROWS: usize = 100_000;

/// Maximum input size in MB
pub const MAX_INPUT_SIZE_MB: usize = 100;

/// Number of rows shown in the data preview table
pub const PREVIEW_ROWS: usize = 10;

// ============================================================================
// Gantt Grid
// ============================================================================

/// Number of fixed time slots in the gantt grid (month-like buckets)
pub const GANTT_SLOT_COUNT: u32 = 12;

/// Well-known column holding the task name
pub const GANTT_TASK_COLUMN: &str = "task";

/// Well-known column holding the task's first occupied slot
pub const GANTT_START_COLUMN: &str = "start";

/// Well-known column holding the task's last occupied slot
pub const GANTT_END_COLUMN: &str = "end";

/// Well-known column holding the task's group tag
pub const GANTT_GROUP_COLUMN: &str = "group";

/// Slot a task falls back to when its start/end cell is absent or non-numeric
pub const GANTT_FALLBACK_SLOT: f64 = 1.0;

/// Neutral color for group tags outside the fixed A..G enumeration
pub const GANTT_NEUTRAL_COLOR: &str = "#ddd";
