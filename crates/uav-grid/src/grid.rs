//! Grid representation and builder.
//!
//! # Data layout
//!
//! Cells are stored in one flat, row-major `Vec<Cell>`:
//!
//! ```text
//! cells[ row * cols + col ]
//! ```
//!
//! so neighbour lookups in the A* inner loop are a bounds check plus an
//! index, and per-cell scratch tables (`g` costs, predecessors, occupancy
//! masks) can be plain `Vec`s of the same length.
//!
//! The grid is immutable once built.  All mutation goes through
//! [`GridBuilder`], whose writes outside the grid are silent no-ops.

use uav_core::{AgentId, BaseId, Position};

// ── Cell / Base ───────────────────────────────────────────────────────────────

/// Static data for one grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Obstacles are never traversable.
    pub is_obstacle: bool,
    /// Weight applied per tick of staleness.  `0` = not an urgent cell.
    pub initial_urgency: u32,
}

/// A home base agents start from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Base {
    pub id:       BaseId,
    pub position: Position,
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// The static planning grid: obstacles, urgency weights and bases.
///
/// Shared read-only by every planner component for the lifetime of a run.
/// Do not construct directly; use [`GridBuilder`].
#[derive(Clone, Debug)]
pub struct Grid {
    rows:  usize,
    cols:  usize,
    /// Row-major cell data, length `rows * cols`.
    cells: Vec<Cell>,
    /// Every cell with urgency > 0, in the order it was first set.
    urgent: Vec<Position>,
    /// Bases in insertion order.  Agent `d` starts at `bases[d % len]`.
    bases: Vec<Base>,
}

impl Grid {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells (`rows * cols`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    // ── Cell queries ──────────────────────────────────────────────────────

    /// `true` if `pos` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.cols
    }

    /// Flat row-major index of `pos`, or `None` when out of bounds.
    #[inline]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| pos.row as usize * self.cols + pos.col as usize)
    }

    /// Position of flat index `i`.  Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn position_of(&self, i: usize) -> Position {
        Position::new((i / self.cols) as i32, (i % self.cols) as i32)
    }

    #[inline]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.index_of(pos).map(|i| &self.cells[i])
    }

    /// `true` if `pos` is in bounds and not an obstacle.
    #[inline]
    pub fn is_traversable(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(|c| !c.is_obstacle)
    }

    /// Urgency weight of `pos`; `0` outside the grid.
    #[inline]
    pub fn urgency(&self, pos: Position) -> u32 {
        self.cell(pos).map_or(0, |c| c.initial_urgency)
    }

    /// Iterator over all obstacle positions, row-major.
    pub fn obstacles(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_obstacle)
            .map(|(i, _)| self.position_of(i))
    }

    // ── Urgent cells ──────────────────────────────────────────────────────

    /// Every cell with urgency > 0, in input order.
    pub fn urgent_positions(&self) -> &[Position] {
        &self.urgent
    }

    /// Urgent cells sorted by descending urgency.  Stable: ties keep input
    /// order.
    pub fn urgent_by_priority(&self) -> Vec<Position> {
        let mut sorted = self.urgent.clone();
        sorted.sort_by_key(|&p| std::cmp::Reverse(self.urgency(p)));
        sorted
    }

    // ── Bases ─────────────────────────────────────────────────────────────

    pub fn bases(&self) -> &[Base] {
        &self.bases
    }

    /// Home position of `agent` (`bases[agent % base_count]`).
    ///
    /// Returns `None` only if the grid has no bases.
    #[inline]
    pub fn base_for(&self, agent: AgentId) -> Option<Position> {
        if self.bases.is_empty() {
            return None;
        }
        Some(self.bases[agent.index() % self.bases.len()].position)
    }

    /// `true` if any base sits on `pos`.
    #[inline]
    pub fn is_base(&self, pos: Position) -> bool {
        self.bases.iter().any(|b| b.position == pos)
    }
}

// ── GridBuilder ───────────────────────────────────────────────────────────────

/// Incremental builder for [`Grid`].
///
/// Every setter ignores coordinates outside the grid and reports whether the
/// write took effect.  Ignored writes are logged at `debug` level.
pub struct GridBuilder {
    grid: Grid,
}

impl GridBuilder {
    /// Start an obstacle-free, urgency-free grid with no bases.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            grid: Grid {
                rows,
                cols,
                cells: vec![Cell::default(); rows * cols],
                urgent: Vec::new(),
                bases: Vec::new(),
            },
        }
    }

    /// Mark `pos` as an obstacle.
    pub fn set_obstacle(&mut self, pos: Position) -> bool {
        let Some(i) = self.grid.index_of(pos) else {
            tracing::debug!(%pos, "ignoring obstacle outside the grid");
            return false;
        };
        self.grid.cells[i].is_obstacle = true;
        true
    }

    /// Set the urgency weight of `pos`.
    ///
    /// A positive weight lists the cell among the urgent positions (once,
    /// at its first appearance); a zero weight removes it again.
    pub fn set_urgency(&mut self, pos: Position, weight: u32) -> bool {
        let Some(i) = self.grid.index_of(pos) else {
            tracing::debug!(%pos, weight, "ignoring urgency outside the grid");
            return false;
        };
        let listed = self.grid.cells[i].initial_urgency > 0;
        self.grid.cells[i].initial_urgency = weight;
        match (listed, weight > 0) {
            (false, true) => self.grid.urgent.push(pos),
            (true, false) => self.grid.urgent.retain(|&p| p != pos),
            _ => {}
        }
        true
    }

    /// Append a base at `pos`.
    pub fn add_base(&mut self, id: BaseId, pos: Position) -> bool {
        if !self.grid.in_bounds(pos) {
            tracing::debug!(%pos, %id, "ignoring base outside the grid");
            return false;
        }
        self.grid.bases.push(Base { id, position: pos });
        true
    }

    /// Finish construction.
    pub fn build(self) -> Grid {
        self.grid
    }
}
