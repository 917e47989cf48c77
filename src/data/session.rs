//! Ingest session: decode orchestration and owned chart state
//!
//! Holds the current dataset snapshot, its schema, and the axis selection
//! behind one lock, and implements the latest-submission-wins decode policy:
//! only one submission is authoritative at a time, and a decode that
//! finishes after a newer submission was made is discarded rather than
//! clobbering newer state. A failed decode never touches the previously
//! installed dataset.
//!
//! Classification and transformation stay synchronous pure functions over
//! the immutable snapshot; decoding is the only operation that runs on a
//! worker thread.

use crate::data::chart_engine::{transform, ChartPayload};
use crate::data::decode_upload;
use crate::data::error::DataResult;
use crate::data::schema::{classify, ColumnSchema};
use crate::types::{AxisSelection, ChartKind, Dataset};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

/// How a completed submission was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The decoded dataset became the current snapshot
    Installed,
    /// A newer submission arrived first; this result was discarded
    Superseded,
}

/// Claim on a single file submission. Created when the submission is made,
/// so later submissions invalidate earlier tickets even while their decodes
/// are still running.
#[derive(Clone, Copy, Debug)]
pub struct SubmissionTicket {
    generation: u64,
}

#[derive(Default)]
struct SessionState {
    dataset: Option<Arc<Dataset>>,
    schema: ColumnSchema,
    axes: AxisSelection,
    last_error: Option<String>,
}

struct Inner {
    state: RwLock<SessionState>,
    generation: AtomicU64,
}

/// Shared ingest state for one upload surface.
pub struct IngestSession {
    inner: Arc<Inner>,
}

impl Default for IngestSession {
    fn default() -> Self {
        Self::new()
    }
}

impl IngestSession {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(SessionState::default()),
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Submit a file for decoding on a worker thread.
    ///
    /// Returns immediately; join the handle to learn whether the decode
    /// failed or its result was installed or superseded. Submitting again
    /// before the previous decode finishes is safe: the newest submission
    /// wins.
    pub fn submit(&self, filename: String, bytes: Vec<u8>) -> JoinHandle<DataResult<SubmitOutcome>> {
        let ticket = self.begin_submission();
        let session = self.clone_handle();
        std::thread::spawn(move || {
            let result = decode_upload(&filename, &bytes);
            session.complete_submission(ticket, result)
        })
    }

    /// Register a new submission and claim its ticket. Lower-level hook for
    /// callers that run the decode on their own executor; [`Self::submit`]
    /// composes this with a worker thread.
    pub fn begin_submission(&self) -> SubmissionTicket {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        SubmissionTicket { generation }
    }

    /// Resolve a submission with its decode result.
    ///
    /// Installs the dataset (and its default axes) only if the ticket is
    /// still the newest submission. A decode error is recorded but leaves
    /// the current dataset untouched.
    pub fn complete_submission(
        &self,
        ticket: SubmissionTicket,
        result: DataResult<Dataset>,
    ) -> DataResult<SubmitOutcome> {
        match result {
            Ok(dataset) => {
                let mut state = self.inner.state.write();
                if ticket.generation != self.inner.generation.load(Ordering::SeqCst) {
                    tracing::warn!(
                        dataset = %dataset.name,
                        "discarding stale decode result; a newer submission exists"
                    );
                    return Ok(SubmitOutcome::Superseded);
                }

                let schema = classify(&dataset);
                state.axes = schema.default_axes();
                tracing::info!(
                    dataset = %dataset.name,
                    rows = dataset.row_count(),
                    columns = dataset.column_count(),
                    "dataset installed"
                );
                state.schema = schema;
                state.dataset = Some(Arc::new(dataset));
                state.last_error = None;
                Ok(SubmitOutcome::Installed)
            }
            Err(err) => {
                let mut state = self.inner.state.write();
                if ticket.generation == self.inner.generation.load(Ordering::SeqCst) {
                    state.last_error = Some(err.to_string());
                }
                Err(err)
            }
        }
    }

    /// Current dataset snapshot, if a decode has succeeded.
    pub fn dataset(&self) -> Option<Arc<Dataset>> {
        self.inner.state.read().dataset.clone()
    }

    /// Column schema of the current dataset.
    pub fn schema(&self) -> ColumnSchema {
        self.inner.state.read().schema.clone()
    }

    /// Current axis selection.
    pub fn axes(&self) -> AxisSelection {
        self.inner.state.read().axes.clone()
    }

    /// Atomically replace both axes. The single handler for axis changes:
    /// callers pass both values instead of patching one and inferring the
    /// other from unrelated state.
    pub fn set_axes(&self, category: Option<String>, value: Option<String>) {
        self.inner.state.write().axes.set(category, value);
    }

    /// Error message from the most recent submission, if it failed.
    pub fn last_error(&self) -> Option<String> {
        self.inner.state.read().last_error.clone()
    }

    /// Chart payload for the current snapshot and axis selection.
    /// The placeholder payload stands in while no dataset is loaded.
    pub fn payload(&self, kind: ChartKind) -> ChartPayload {
        let state = self.inner.state.read();
        match &state.dataset {
            Some(dataset) => transform(dataset, &state.axes, kind),
            None => ChartPayload::Placeholder,
        }
    }

    fn clone_handle(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
