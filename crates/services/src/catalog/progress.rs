use finder_core::model::Record;

use crate::error::SinkError;

/// Observer for batch progress.
///
/// Each call receives a fresh copy of every record completed so far, sorted by id.
pub trait ProgressSink {
    /// # Errors
    ///
    /// Returning an error aborts the load with `LoadError::Sink`.
    fn on_progress(&mut self, snapshot: Vec<Record>) -> Result<(), SinkError>;
}

impl<F> ProgressSink for F
where
    F: FnMut(Vec<Record>) -> Result<(), SinkError>,
{
    fn on_progress(&mut self, snapshot: Vec<Record>) -> Result<(), SinkError> {
        self(snapshot)
    }
}

/// Sink for callers that only want the final result.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_progress(&mut self, _snapshot: Vec<Record>) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Sink that keeps every snapshot it receives.
#[derive(Debug, Clone, Default)]
pub struct SnapshotLog {
    snapshots: Vec<Vec<Record>>,
}

impl SnapshotLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn snapshots(&self) -> &[Vec<Record>] {
        &self.snapshots
    }

    #[must_use]
    pub fn sizes(&self) -> Vec<usize> {
        self.snapshots.iter().map(Vec::len).collect()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&[Record]> {
        self.snapshots.last().map(Vec::as_slice)
    }
}

impl ProgressSink for SnapshotLog {
    fn on_progress(&mut self, snapshot: Vec<Record>) -> Result<(), SinkError> {
        self.snapshots.push(snapshot);
        Ok(())
    }
}
