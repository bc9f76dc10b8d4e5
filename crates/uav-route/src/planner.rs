//! Incremental route planner.
//!
//! # Resume model
//!
//! A neighbourhood move edits one or two agents' sequences from some index
//! `i` onwards.  Everything the agent did before it started heading to
//! target `i` only depends on targets `0..i`, which the move left intact, so
//! the planner keeps that trajectory prefix and restarts the simulation at
//! the recorded `start[i]` tick with the sequence pointer at `i`.
//!
//! A full rebuild of the agent is used instead when `i == 0` or when
//! `start[i]` is unknown (the agent never got that far in the previous
//! sequence).  Either way the result is identical to rebuilding every agent
//! from scratch.
//!
//! # Cloning
//!
//! The planner is `Clone`.  The search clones the current planner into a
//! candidate, updates the candidate, and either keeps it or drops it.

use uav_core::{AgentId, Position, Tick};
use uav_grid::{AStar, Grid, PathFinder};

use crate::decode::home_positions;
use crate::{Assignment, ChangeSet, RouteError, RouteResult, RouteTable, TargetTiming};

// ── RoutePlanner ──────────────────────────────────────────────────────────────

/// Route table plus per-agent target timing, kept in sync with an
/// [`Assignment`] by [`build`](Self::build) and [`update`](Self::update).
///
/// # Type parameter
///
/// `P` is the [`PathFinder`] used for every step (default [`AStar`]).
#[derive(Clone, Debug)]
pub struct RoutePlanner<'g, P = AStar> {
    grid:    &'g Grid,
    finder:  P,
    horizon: usize,
    /// Base position per agent.
    homes:   Vec<Position>,
    table:   RouteTable,
    timings: Vec<TargetTiming>,
}

impl<'g> RoutePlanner<'g, AStar> {
    /// Planner for `agent_count` agents over `horizon` ticks using [`AStar`].
    ///
    /// The table is filled by a later [`build`](Self::build).
    pub fn new(grid: &'g Grid, horizon: usize, agent_count: usize) -> RouteResult<Self> {
        Self::with_finder(AStar, grid, horizon, agent_count)
    }
}

impl<'g, P: PathFinder> RoutePlanner<'g, P> {
    /// Like [`RoutePlanner::new`] with a caller-chosen [`PathFinder`].
    ///
    /// # Errors
    ///
    /// - [`RouteError::NoBases`] if `agent_count > 0` and the grid has no
    ///   bases.
    /// - [`RouteError::Core`] if `horizon` does not fit in a [`Tick`].
    pub fn with_finder(
        finder:      P,
        grid:        &'g Grid,
        horizon:     usize,
        agent_count: usize,
    ) -> RouteResult<Self> {
        let homes = home_positions(grid, agent_count)?;
        Tick::try_from_index(horizon)?;
        Ok(Self {
            grid,
            finder,
            horizon,
            homes,
            table: RouteTable::new(agent_count, horizon),
            timings: vec![TargetTiming::default(); agent_count],
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    pub fn agent_count(&self) -> usize {
        self.homes.len()
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn into_table(self) -> RouteTable {
        self.table
    }

    #[inline]
    pub fn timing(&self, agent: AgentId) -> &TargetTiming {
        &self.timings[agent.index()]
    }

    pub fn timings(&self) -> &[TargetTiming] {
        &self.timings
    }

    // ── Simulation ────────────────────────────────────────────────────────

    /// Simulate every agent from its first target at tick 0.
    pub fn build(&mut self, assignment: &Assignment) -> RouteResult<()> {
        self.check_agents(assignment)?;
        let grid   = self.grid;
        let finder = &self.finder;
        let homes  = self.homes.as_slice();

        #[cfg(not(feature = "parallel"))]
        {
            for (((route, timing), seq), &home) in self
                .table
                .routes_mut()
                .iter_mut()
                .zip(self.timings.iter_mut())
                .zip(assignment.sequences())
                .zip(homes)
            {
                simulate_agent(grid, finder, home, seq, route, timing, 0, 0);
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.table
                .routes_mut()
                .par_iter_mut()
                .zip(self.timings.par_iter_mut())
                .zip(assignment.sequences().par_iter())
                .zip(homes.par_iter())
                .for_each(|(((route, timing), seq), &home)| {
                    simulate_agent(grid, finder, home, seq, route, timing, 0, 0);
                });
        }

        Ok(())
    }

    /// Resimulate every agent `changes` touched, each from the earliest
    /// point its recorded timing allows.
    ///
    /// `assignment` is the already-edited assignment.  Untouched agents keep
    /// their trajectory and timing.
    pub fn update(&mut self, assignment: &Assignment, changes: &ChangeSet) -> RouteResult<()> {
        self.check_agents(assignment)?;
        for (agent, idx) in changes.touched() {
            let d = agent.index();
            if d >= self.homes.len() {
                continue;
            }
            let resume = match idx {
                0 => None,
                _ => self.timings[d].start_of(idx),
            };
            let (from_index, from_tick) = resume.map_or((0, 0), |t| (idx, t.index()));

            simulate_agent(
                self.grid,
                &self.finder,
                self.homes[d],
                assignment.sequence(agent),
                self.table.route_mut(agent),
                &mut self.timings[d],
                from_index,
                from_tick,
            );
        }
        Ok(())
    }

    fn check_agents(&self, assignment: &Assignment) -> RouteResult<()> {
        if assignment.agent_count() != self.homes.len() {
            return Err(RouteError::AgentCountMismatch {
                expected: self.homes.len(),
                found:    assignment.agent_count(),
            });
        }
        Ok(())
    }
}

// ── Per-agent simulation ──────────────────────────────────────────────────────

/// Simulate one agent from sequence index `from_index` at tick `from_tick`.
///
/// `route[..=from_tick]` is kept (except that tick 0 is always reset to
/// `home`); everything after is rewritten.  Timing entries at or after
/// `from_index` are cleared and recomputed.
#[allow(clippy::too_many_arguments)]
fn simulate_agent<P: PathFinder>(
    grid:       &Grid,
    finder:     &P,
    home:       Position,
    seq:        &[Position],
    route:      &mut [Position],
    timing:     &mut TargetTiming,
    from_index: usize,
    from_tick:  usize,
) {
    timing.truncate_from(from_index, seq.len());
    let horizon = route.len();
    if horizon == 0 {
        return;
    }
    if from_tick == 0 {
        route[0] = home;
    }

    // Horizon was validated to fit in a Tick at construction.
    let tick = |t: usize| Some(Tick(t as u32));

    let mut current = route[from_tick];
    let mut pointer = from_index;
    if pointer < seq.len() {
        timing.start[pointer] = tick(from_tick);
    } else {
        timing.idle = tick(from_tick);
    }

    for t in from_tick + 1..horizon {
        if let Some(&target) = seq.get(pointer) {
            match finder.find_path(grid, current, target).next_step() {
                Some(step) => current = step,
                None => {
                    timing.end[pointer] = tick(t);
                    pointer += 1;
                    if pointer < seq.len() {
                        timing.start[pointer] = tick(t);
                    } else {
                        timing.idle = tick(t);
                    }
                }
            }
        }
        route[t] = current;
    }
}
