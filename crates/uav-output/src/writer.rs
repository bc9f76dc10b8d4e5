//! The `OutputWriter` trait implemented by backend writers.

use crate::{BaseRow, CellRow, OutputResult, ProgressRow, RouteRow, UrgencyRow};

/// Sink for planner output.
///
/// Search-time errors are stored rather than returned; see
/// [`ProgressObserver::take_error`][crate::ProgressObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of trajectory rows.
    fn write_routes(&mut self, rows: &[RouteRow]) -> OutputResult<()>;

    fn write_bases(&mut self, rows: &[BaseRow]) -> OutputResult<()>;

    fn write_obstacles(&mut self, rows: &[CellRow]) -> OutputResult<()>;

    fn write_urgencies(&mut self, rows: &[UrgencyRow]) -> OutputResult<()>;

    /// Write one search progress row.
    fn write_progress(&mut self, row: &ProgressRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
