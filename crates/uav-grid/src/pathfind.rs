//! Pathfinding trait and default A* implementation.
//!
//! # Pluggability
//!
//! The route planners call pathfinding through the [`PathFinder`] trait, so
//! callers can swap in another search (octile heuristic, jump point search)
//! without touching the planners.  [`AStar`] is the default.
//!
//! # Move model
//!
//! An agent may step to any of its 8 neighbours or stay in place.  Every
//! move, including staying, costs exactly 1.  The heuristic is the Manhattan
//! distance to the goal.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use uav_core::Position;

use crate::grid::Grid;

// ── GridPath ──────────────────────────────────────────────────────────────────

/// The result of a pathfinding query: the cells from start to goal,
/// inclusive.
///
/// Empty when the goal is unreachable; `[start]` when `start == goal`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridPath {
    pub cells: Vec<Position>,
}

impl GridPath {
    /// Number of cells on the path, endpoints included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if the goal was unreachable.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell one tick after the start, if the path moves at all.
    pub fn next_step(&self) -> Option<Position> {
        self.cells.get(1).copied()
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable single-agent pathfinding.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so the route planner can share one
/// across Rayon worker threads when building all agents in parallel.
pub trait PathFinder: Send + Sync {
    /// Find a path from `start` to `goal` on `grid`.
    ///
    /// Must return an empty path rather than fail when `goal` is unreachable.
    fn find_path(&self, grid: &Grid, start: Position, goal: Position) -> GridPath;
}

// ── AStar ─────────────────────────────────────────────────────────────────────

/// A* over the 8-neighbourhood plus "stay", unit step cost, Manhattan
/// heuristic.
///
/// Frontier ties on `g + h` are broken by row-major position order, which
/// makes results fully deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

impl PathFinder for AStar {
    fn find_path(&self, grid: &Grid, start: Position, goal: Position) -> GridPath {
        a_star(grid, start, goal)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Candidate successors of `p`: in-bounds, non-obstacle neighbours in
/// `dr`-major order, followed by `p` itself.
#[inline]
fn successors(grid: &Grid, p: Position) -> impl Iterator<Item = Position> + '_ {
    (-1..=1)
        .flat_map(move |dr| (-1..=1).map(move |dc| (dr, dc)))
        .filter(|&(dr, dc)| dr != 0 || dc != 0)
        .map(move |(dr, dc)| p.offset(dr, dc))
        .filter(|&n| grid.is_traversable(n))
        .chain(std::iter::once(p))
}

fn a_star(grid: &Grid, start: Position, goal: Position) -> GridPath {
    if start == goal {
        return GridPath { cells: vec![start] };
    }
    let (Some(start_idx), Some(goal_idx)) = (grid.index_of(start), grid.index_of(goal)) else {
        return GridPath::default();
    };
    if !grid.is_traversable(goal) {
        return GridPath::default();
    }

    let n = grid.cell_count();
    // g[v] = best known step count to reach v.
    let mut g    = vec![u32::MAX; n];
    // prev[v] = cell that reached v; None for unreached cells.
    let mut prev: Vec<Option<usize>> = vec![None; n];

    g[start_idx] = 0;
    prev[start_idx] = Some(start_idx);

    // Min-heap: (g + h, position).  Reverse turns the max-heap into a
    // min-heap; the position is the deterministic tie-break.
    let mut heap: BinaryHeap<Reverse<(u32, Position)>> = BinaryHeap::new();
    heap.push(Reverse((goal.manhattan(start), start)));

    while let Some(Reverse((priority, pos))) = heap.pop() {
        if pos == goal {
            break;
        }
        let Some(idx) = grid.index_of(pos) else { continue };
        let cost = g[idx];
        // Stale entry: a cheaper route to `pos` was already expanded.
        if priority > cost + pos.manhattan(goal) {
            continue;
        }

        for next in successors(grid, pos) {
            let Some(next_idx) = grid.index_of(next) else { continue };
            let next_cost = cost + 1;
            if next_cost < g[next_idx] {
                g[next_idx] = next_cost;
                prev[next_idx] = Some(idx);
                heap.push(Reverse((next_cost + next.manhattan(goal), next)));
            }
        }
    }

    if prev[goal_idx].is_none() {
        return GridPath::default();
    }

    // Walk predecessors back from goal to start.
    let mut cells = Vec::new();
    let mut cur = goal_idx;
    while cur != start_idx {
        cells.push(grid.position_of(cur));
        match prev[cur] {
            Some(p) => cur = p,
            None    => return GridPath::default(),
        }
    }
    cells.push(start);
    cells.reverse();
    GridPath { cells }
}
