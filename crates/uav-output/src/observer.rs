//! `ProgressObserver<W>`: bridges `SearchObserver` to an `OutputWriter`.

use uav_search::SearchObserver;

use crate::row::ProgressRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SearchObserver`] that writes one [`ProgressRow`] per new best score
/// to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SearchObserver`
/// methods have no return value.  After `search.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct ProgressObserver<W: OutputWriter> {
    writer:     W,
    rows:       usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ProgressObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `search.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Progress rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Unwrap the inner writer, e.g. to export the solution next.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                tracing::warn!(error = %e, "progress write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SearchObserver for ProgressObserver<W> {
    fn on_new_best(&mut self, iteration: usize, score: i64, collisions: usize, temperature: f64) {
        let row = ProgressRow { iteration, score, collisions, temperature };
        let result = self.writer.write_progress(&row);
        if result.is_ok() {
            self.rows += 1;
        }
        self.store_err(result);
    }
}
