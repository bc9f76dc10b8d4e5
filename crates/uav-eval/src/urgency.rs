//! Urgency-accumulation scoring.
//!
//! # Score
//!
//! Every urgent cell keeps a ticks-since-visit counter starting at 0.  On
//! every tick each counter is incremented, `counter × weight` is added to the
//! total, and the counter is reset to 0 if any agent stands on the cell that
//! tick.  A cell visited on every tick therefore still costs `weight` per
//! tick.
//!
//! If the table has any collision (see [`has_collision`]) one flat
//! `collision_penalty` is added on top, no matter how many collisions there
//! are.  Lower is better.

use uav_grid::Grid;
use uav_route::{decode, Assignment, RouteResult, RouteTable};

use crate::collision::has_collision;

/// Penalty added once to the score of a table with any collision.
pub const DEFAULT_COLLISION_PENALTY: i64 = 100_000;

// ── UrgencyEvaluator ──────────────────────────────────────────────────────────

/// Scores route tables on one grid.
///
/// Urgent cells are resolved to flat indices once at construction so the
/// per-tick loop only touches dense vectors.
#[derive(Clone, Debug)]
pub struct UrgencyEvaluator<'g> {
    grid:    &'g Grid,
    /// `(flat cell index, weight)` per urgent cell, in grid order.
    urgent:  Vec<(usize, i64)>,
    penalty: i64,
}

impl<'g> UrgencyEvaluator<'g> {
    /// Evaluator with [`DEFAULT_COLLISION_PENALTY`].
    pub fn new(grid: &'g Grid) -> Self {
        let urgent = grid
            .urgent_positions()
            .iter()
            .filter_map(|&p| grid.index_of(p).map(|i| (i, i64::from(grid.urgency(p)))))
            .collect();
        Self { grid, urgent, penalty: DEFAULT_COLLISION_PENALTY }
    }

    /// Replace the collision penalty.
    pub fn with_penalty(mut self, penalty: i64) -> Self {
        self.penalty = penalty;
        self
    }

    pub fn penalty(&self) -> i64 {
        self.penalty
    }

    /// Accumulated urgency of `table`, without the collision penalty.
    pub fn urgency_cost(&self, table: &RouteTable) -> i64 {
        let mut since_visit = vec![0i64; self.urgent.len()];
        let mut occupied = vec![false; self.grid.cell_count()];
        let mut marked = Vec::with_capacity(table.agent_count());
        let mut total = 0i64;

        for t in 0..table.horizon() {
            marked.clear();
            marked.extend(table.at_tick(t).filter_map(|(_, pos)| self.grid.index_of(pos)));
            for &i in &marked {
                occupied[i] = true;
            }

            for (counter, &(cell, weight)) in since_visit.iter_mut().zip(&self.urgent) {
                *counter += 1;
                total += *counter * weight;
                if occupied[cell] {
                    *counter = 0;
                }
            }

            for &i in &marked {
                occupied[i] = false;
            }
        }
        total
    }

    /// Full score: urgency cost plus the penalty if `table` has a collision.
    pub fn evaluate(&self, table: &RouteTable) -> i64 {
        let mut score = self.urgency_cost(table);
        if has_collision(table, self.grid) {
            score += self.penalty;
        }
        score
    }
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Score `table` on `grid` with the given collision penalty.
pub fn evaluate(grid: &Grid, table: &RouteTable, collision_penalty: i64) -> i64 {
    UrgencyEvaluator::new(grid).with_penalty(collision_penalty).evaluate(table)
}

/// Decode `assignment` over `horizon` ticks, then score it.
///
/// # Errors
///
/// Whatever [`decode`] reports: a grid without bases for a non-empty fleet.
pub fn evaluate_assignment(
    grid:              &Grid,
    assignment:        &Assignment,
    horizon:           usize,
    collision_penalty: i64,
) -> RouteResult<i64> {
    let table = decode(grid, assignment, horizon)?;
    Ok(evaluate(grid, &table, collision_penalty))
}
