//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they need it.

use thiserror::Error;

/// The base error type for `uav-core` and a common building block for
/// sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("horizon of {0} ticks does not fit in a Tick")]
    TickOverflow(usize),
}

/// Shorthand result type for `uav-core`.
pub type CoreResult<T> = Result<T, CoreError>;
