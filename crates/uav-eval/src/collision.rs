//! Collision detection over a route table.
//!
//! # Base exemption
//!
//! Agents sharing a base are allowed to stack there before they leave.
//!
//! | Function                                 | Exempt occupant                                      |
//! |------------------------------------------|------------------------------------------------------|
//! | [`has_collision`], [`count_collisions`] | any agent on *any* base, at tick 0 only              |
//! | [`detect_collisions`]                    | an agent on its *own* base before its first departure |
//!
//! Outside the exemption, `N` agents on one cell at one tick are `N - 1`
//! collisions.

use std::collections::BTreeMap;

use uav_core::{AgentId, Position, Tick};
use uav_grid::Grid;
use uav_route::RouteTable;

#[cfg(feature = "fx-hash")]
type OccupancyMap = rustc_hash::FxHashMap<Position, usize>;
#[cfg(not(feature = "fx-hash"))]
type OccupancyMap = std::collections::HashMap<Position, usize>;

// ── CollisionRecord ───────────────────────────────────────────────────────────

/// A cell occupied by two or more agents at one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionRecord {
    pub tick:     Tick,
    pub position: Position,
    /// Occupants in ascending agent order.  Always at least two.
    pub agents:   Vec<AgentId>,
}

impl CollisionRecord {
    /// Occupants beyond the first.
    #[inline]
    pub fn excess(&self) -> usize {
        self.agents.len().saturating_sub(1)
    }
}

/// Total excess occupants across `records`.
pub fn excess_occupants(records: &[CollisionRecord]) -> usize {
    records.iter().map(CollisionRecord::excess).sum()
}

// ── Counting (tick-0 exemption) ───────────────────────────────────────────────

/// Walk every tick, calling `on_excess` each time an agent lands on an
/// already-occupied cell.  Stops early when it returns `false`.
fn scan_excess(table: &RouteTable, grid: &Grid, mut on_excess: impl FnMut() -> bool) {
    let mut occupancy = OccupancyMap::default();
    for t in 0..table.horizon() {
        occupancy.clear();
        for (_, pos) in table.at_tick(t) {
            if t == 0 && grid.is_base(pos) {
                continue;
            }
            let n = occupancy.entry(pos).or_insert(0);
            *n += 1;
            if *n > 1 && !on_excess() {
                return;
            }
        }
    }
}

/// `true` if any cell holds two or more agents at some tick.
pub fn has_collision(table: &RouteTable, grid: &Grid) -> bool {
    let mut found = false;
    scan_excess(table, grid, || {
        found = true;
        false
    });
    found
}

/// Number of excess occupants summed over every cell and tick.
pub fn count_collisions(table: &RouteTable, grid: &Grid) -> usize {
    let mut count = 0;
    scan_excess(table, grid, || {
        count += 1;
        true
    });
    count
}

// ── Detailed detection (own-base exemption) ───────────────────────────────────

/// First tick at which `route` is somewhere other than `base`, or
/// `route.len()` if it never leaves.
pub fn first_departure(route: &[Position], base: Position) -> usize {
    route.iter().position(|&c| c != base).unwrap_or(route.len())
}

/// Every collision, tick-major then in row-major position order.
///
/// An agent sitting on its own base before its first departure is not
/// counted as an occupant.
pub fn detect_collisions(table: &RouteTable, grid: &Grid) -> Vec<CollisionRecord> {
    let agents = table.agent_count();
    let homes: Vec<Option<Position>> = AgentId::range(agents).map(|a| grid.base_for(a)).collect();
    let departures: Vec<usize> = AgentId::range(agents)
        .zip(&homes)
        .map(|(a, home)| home.map_or(0, |h| first_departure(table.route(a), h)))
        .collect();

    let mut records = Vec::new();
    let mut occupancy: BTreeMap<Position, Vec<AgentId>> = BTreeMap::new();
    for t in 0..table.horizon() {
        for (agent, pos) in table.at_tick(t) {
            let d = agent.index();
            if t < departures[d] && homes[d] == Some(pos) {
                continue;
            }
            occupancy.entry(pos).or_default().push(agent);
        }
        // Route tables are only built for horizons that fit in a Tick.
        let tick = Tick(t as u32);
        records.extend(
            std::mem::take(&mut occupancy)
                .into_iter()
                .filter(|(_, occupants)| occupants.len() > 1)
                .map(|(position, agents)| CollisionRecord { tick, position, agents }),
        );
    }
    records
}
