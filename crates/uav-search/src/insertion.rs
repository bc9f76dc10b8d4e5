//! Cheapest-slot insertion used by the relocate and resolve-collision moves.
//!
//! # Slot cost
//!
//! Inserting `cell` at slot `p` of a sequence costs
//!
//! ```text
//!   dist(prev, cell) + dist(cell, next)        travel detour (Manhattan)
//! + max(0, w(cell) - w(prev))   if p > 0       breaks descending urgency
//! + max(0, w(next) - w(cell))   if next exists breaks descending urgency
//! ```
//!
//! where `prev` is the agent's base at slot 0 and `next` is absent at the end.
//! The first slot with the lowest cost wins.

use uav_core::Position;
use uav_grid::Grid;

/// Cost of inserting `cell` before `seq[slot]` (or at the end when
/// `slot == seq.len()`).
pub fn insertion_cost(grid: &Grid, home: Position, seq: &[Position], cell: Position, slot: usize) -> i64 {
    let weight = |p: Position| i64::from(grid.urgency(p));
    let prev = if slot == 0 { home } else { seq[slot - 1] };
    let next = seq.get(slot).copied();

    let mut cost = i64::from(prev.manhattan(cell));
    if let Some(next) = next {
        cost += i64::from(cell.manhattan(next));
    }
    if slot > 0 {
        cost += (weight(cell) - weight(prev)).max(0);
    }
    if let Some(next) = next {
        cost += (weight(next) - weight(cell)).max(0);
    }
    cost
}

/// Slot in `0..=seq.len()` with the lowest [`insertion_cost`].
pub fn best_insertion(grid: &Grid, home: Position, seq: &[Position], cell: Position) -> usize {
    let mut best = (i64::MAX, 0);
    for slot in 0..=seq.len() {
        let cost = insertion_cost(grid, home, seq, cell, slot);
        if cost < best.0 {
            best = (cost, slot);
        }
    }
    best.1
}

/// Insert `cell` at its [`best_insertion`] slot and return that slot.
pub fn insert_best(grid: &Grid, home: Position, seq: &mut Vec<Position>, cell: Position) -> usize {
    let slot = best_insertion(grid, home, seq, cell);
    seq.insert(slot, cell);
    slot
}
