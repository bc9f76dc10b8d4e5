//! Initial assignment.

use uav_grid::Grid;
use uav_route::Assignment;

/// Deal urgent cells out to `agent_count` agents round-robin, most urgent
/// first.
///
/// Cells are sorted by descending urgency (stable, so ties keep input
/// order); cell `i` goes to agent `i % agent_count`.  With no agents the
/// assignment is empty.
pub fn round_robin(grid: &Grid, agent_count: usize) -> Assignment {
    let mut sequences = vec![Vec::new(); agent_count];
    if agent_count > 0 {
        for (i, cell) in grid.urgent_by_priority().into_iter().enumerate() {
            sequences[i % agent_count].push(cell);
        }
    }
    Assignment::new(sequences)
}
