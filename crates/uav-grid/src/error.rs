//! Grid-subsystem error type.

use thiserror::Error;

/// Errors produced by `uav-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    /// A token was missing or could not be read as the expected value.
    #[error("instance parse error: expected {expected}, found {found}")]
    Parse { expected: &'static str, found: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GridResult<T> = Result<T, GridError>;
