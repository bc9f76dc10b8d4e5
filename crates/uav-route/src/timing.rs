//! When each visit target was started and reached.

use uav_core::Tick;

/// Per-target timing for one agent, recorded by the incremental planner.
///
/// `start[i]` is the tick the agent began heading to target `i` (the tick
/// target `i - 1` was reached, or the resume tick), `end[i]` the tick it
/// reached target `i`.  `None` means "not reached within the horizon" or
/// "not yet recomputed".  Known entries satisfy
/// `start[i] <= end[i] <= start[i + 1]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetTiming {
    pub start: Vec<Option<Tick>>,
    pub end:   Vec<Option<Tick>>,
    /// Tick the sequence was exhausted, if it was.
    pub idle:  Option<Tick>,
}

impl TargetTiming {
    /// Recorded start tick of target `idx`, if known.
    #[inline]
    pub fn start_of(&self, idx: usize) -> Option<Tick> {
        self.start.get(idx).copied().flatten()
    }

    /// Recorded end tick of target `idx`, if known.
    #[inline]
    pub fn end_of(&self, idx: usize) -> Option<Tick> {
        self.end.get(idx).copied().flatten()
    }

    /// Resize to `len` targets, keeping entries before `from` and clearing
    /// everything at or after it, `idle` included.
    pub(crate) fn truncate_from(&mut self, from: usize, len: usize) {
        let keep = from.min(len);
        for v in [&mut self.start, &mut self.end] {
            v.truncate(keep);
            v.resize(len, None);
        }
        self.idle = None;
    }
}
