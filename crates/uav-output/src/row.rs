//! Plain data row types written by output backends.

/// One agent's cell at one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRow {
    pub tick:  u32,
    pub agent: u32,
    pub row:   i32,
    pub col:   i32,
}

/// A base, in grid order.  `index` is its position in the base list, which
/// is what agents are assigned by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseRow {
    pub index: usize,
    pub id:    u32,
    pub row:   i32,
    pub col:   i32,
}

/// A bare cell coordinate (obstacles).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRow {
    pub row: i32,
    pub col: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrgencyRow {
    pub row:    i32,
    pub col:    i32,
    pub weight: u32,
}

/// One new-best event of the search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressRow {
    pub iteration:   usize,
    pub score:       i64,
    pub collisions:  usize,
    pub temperature: f64,
}
