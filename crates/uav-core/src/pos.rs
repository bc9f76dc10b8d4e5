//! Grid coordinate type and distance helpers.
//!
//! `Position` orders row-major (row first, then column).  The derived `Ord`
//! relies on field declaration order, so `row` must stay the first field.

/// A `(row, col)` cell coordinate.
///
/// Coordinates are signed so that neighbour arithmetic (`row - 1`) can step
/// off the grid without wrapping; bounds are checked by `Grid`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan (L1) distance.
    #[inline]
    pub fn manhattan(self, other: Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Chebyshev (L∞) distance: the number of 8-connected steps between two
    /// cells on an empty grid.
    #[inline]
    pub fn chebyshev(self, other: Position) -> u32 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Shift by `(dr, dc)`.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Position {
        Position::new(self.row + dr, self.col + dc)
    }
}

impl From<(i32, i32)> for Position {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Position::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
