//! Dense per-agent trajectories.

use uav_core::{AgentId, Position, Tick};

/// Every agent's position at every tick of the horizon.
///
/// `routes[d][t]` is agent `d`'s cell at tick `t`; `routes[d][0]` is its
/// base.  Every route has exactly `horizon` entries.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteTable {
    horizon: usize,
    routes:  Vec<Vec<Position>>,
}

impl RouteTable {
    /// Table of `agent_count` routes, every entry at the origin.
    pub fn new(agent_count: usize, horizon: usize) -> Self {
        Self {
            horizon,
            routes: vec![vec![Position::default(); horizon]; agent_count],
        }
    }

    pub fn agent_count(&self) -> usize {
        self.routes.len()
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    #[inline]
    pub fn route(&self, agent: AgentId) -> &[Position] {
        &self.routes[agent.index()]
    }

    #[inline]
    pub(crate) fn route_mut(&mut self, agent: AgentId) -> &mut [Position] {
        &mut self.routes[agent.index()]
    }

    /// Position of `agent` at `tick`, or `None` past the horizon.
    #[inline]
    pub fn position(&self, agent: AgentId, tick: Tick) -> Option<Position> {
        self.routes.get(agent.index())?.get(tick.index()).copied()
    }

    pub fn routes(&self) -> &[Vec<Position>] {
        &self.routes
    }

    pub(crate) fn routes_mut(&mut self) -> &mut [Vec<Position>] {
        &mut self.routes
    }

    /// `(agent, position)` for every agent at trajectory index `t`.
    ///
    /// # Panics
    ///
    /// Panics if `t >= horizon`.
    pub fn at_tick(&self, t: usize) -> impl Iterator<Item = (AgentId, Position)> + '_ {
        AgentId::range(self.routes.len()).zip(self.routes.iter().map(move |r| r[t]))
    }
}
