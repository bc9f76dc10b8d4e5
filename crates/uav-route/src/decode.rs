//! Full tick-major decode of an assignment.
//!
//! This recomputes a path for every agent on every tick, which makes it the
//! simple reference the incremental [`RoutePlanner`][crate::RoutePlanner]
//! must agree with.  The search loop never calls it.

use uav_core::{AgentId, Position, Tick};
use uav_grid::{AStar, Grid, PathFinder};

use crate::{Assignment, RouteError, RouteResult, RouteTable};

/// Simulate `assignment` over `horizon` ticks with the default [`AStar`].
///
/// # Errors
///
/// [`RouteError::NoBases`] if the assignment has agents but the grid has no
/// bases to start them from.
pub fn decode(grid: &Grid, assignment: &Assignment, horizon: usize) -> RouteResult<RouteTable> {
    decode_with(&AStar, grid, assignment, horizon)
}

/// Like [`decode`] but with a caller-chosen [`PathFinder`].
pub fn decode_with<P: PathFinder>(
    finder:     &P,
    grid:       &Grid,
    assignment: &Assignment,
    horizon:    usize,
) -> RouteResult<RouteTable> {
    let agents = assignment.agent_count();
    let homes = home_positions(grid, agents)?;
    Tick::try_from_index(horizon)?;

    let mut table = RouteTable::new(agents, horizon);
    if horizon == 0 {
        return Ok(table);
    }

    let mut current = homes;
    // pointer[d] = index of agent d's next pending target.
    let mut pointer = vec![0usize; agents];
    for (d, &home) in current.iter().enumerate() {
        table.routes_mut()[d][0] = home;
    }

    for t in 1..horizon {
        for (agent, seq) in assignment.iter() {
            let d = agent.index();
            if let Some(&target) = seq.get(pointer[d]) {
                match finder.find_path(grid, current[d], target).next_step() {
                    Some(step) => current[d] = step,
                    None => pointer[d] += 1,
                }
            }
            table.routes_mut()[d][t] = current[d];
        }
    }
    Ok(table)
}

/// Base position of every agent `0..agents`.
///
/// Fails with [`RouteError::NoBases`] when there are agents but no bases.
pub(crate) fn home_positions(grid: &Grid, agents: usize) -> RouteResult<Vec<Position>> {
    AgentId::range(agents)
        .map(|a| grid.base_for(a).ok_or(RouteError::NoBases { agents }))
        .collect()
}
