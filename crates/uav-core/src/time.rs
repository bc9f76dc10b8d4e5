//! Discrete time model.
//!
//! # Design
//!
//! A planning run covers a fixed horizon of `T` ticks, `0..T`.  Every agent
//! moves at most one grid step per tick, so a tick doubles as the index into
//! an agent's dense trajectory.  Ticks are `u32`: a horizon long enough to
//! overflow it would need a 32 GiB trajectory per agent.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute tick counter within the planning horizon.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u32);

impl Tick {
    /// Cast to `usize` for indexing a trajectory.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Tick at trajectory index `i`.
    ///
    /// Fails with [`CoreError::TickOverflow`] if `i` does not fit in a `u32`.
    /// Planners validate their horizon once with this and cast freely after.
    #[inline]
    pub fn try_from_index(i: usize) -> CoreResult<Tick> {
        u32::try_from(i).map(Tick).map_err(|_| CoreError::TickOverflow(i))
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
