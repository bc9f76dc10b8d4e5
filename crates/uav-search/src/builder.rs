//! Fluent builder for constructing an [`AnnealingSearch`].

use uav_core::{AgentId, SearchRng};
use uav_eval::UrgencyEvaluator;
use uav_grid::{AStar, Grid, PathFinder};
use uav_route::{Assignment, RouteError, RoutePlanner};

use crate::initial::round_robin;
use crate::{AnnealingSearch, SearchConfig, SearchError, SearchResult};

/// Fluent builder for [`AnnealingSearch<P>`].
///
/// # Required inputs
///
/// - `&Grid`: the planning grid (must have a base if `agent_count > 0`)
/// - `agent_count`
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                              |
/// |---------------------|--------------------------------------|
/// | `.config(c)`        | `SearchConfig::default()`            |
/// | `.iterations(n)`    | from the config                      |
/// | `.horizon(t)`       | from the config                      |
/// | `.seed(s)`          | from the config, else OS entropy     |
/// | `.initial(a)`       | [`round_robin`] over the urgent cells |
/// | `.path_finder(p)`   | [`AStar`]                            |
///
/// # Example
///
/// ```rust,ignore
/// let outcome = SearchBuilder::new(&grid, 3)
///     .horizon(50)
///     .iterations(5_000)
///     .seed(42)
///     .build()?
///     .run(&mut NoopObserver)?;
/// ```
pub struct SearchBuilder<'g, P = AStar> {
    grid:        &'g Grid,
    agent_count: usize,
    config:      SearchConfig,
    initial:     Option<Assignment>,
    finder:      P,
}

impl<'g> SearchBuilder<'g, AStar> {
    /// Create a builder with the default configuration and [`AStar`].
    pub fn new(grid: &'g Grid, agent_count: usize) -> Self {
        Self {
            grid,
            agent_count,
            config:  SearchConfig::default(),
            initial: None,
            finder:  AStar,
        }
    }
}

impl<'g, P: PathFinder + Clone> SearchBuilder<'g, P> {
    /// Replace the whole configuration.
    pub fn config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.config.iterations = iterations;
        self
    }

    pub fn horizon(mut self, horizon: usize) -> Self {
        self.config.horizon = horizon;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Start from `assignment` instead of the round-robin seed.
    ///
    /// Must hold exactly `agent_count` sequences.
    pub fn initial(mut self, assignment: Assignment) -> Self {
        self.initial = Some(assignment);
        self
    }

    /// Use a different [`PathFinder`] for every trajectory step.
    pub fn path_finder<Q: PathFinder + Clone>(self, finder: Q) -> SearchBuilder<'g, Q> {
        SearchBuilder {
            grid:        self.grid,
            agent_count: self.agent_count,
            config:      self.config,
            initial:     self.initial,
            finder,
        }
    }

    /// Validate inputs, build and score the initial trajectories, and return
    /// a ready-to-run [`AnnealingSearch`].
    pub fn build(self) -> SearchResult<AnnealingSearch<'g, P>> {
        self.config.validate()?;
        let grid = self.grid;
        let agents = self.agent_count;

        // ── Validate and resolve optional inputs ──────────────────────────
        let homes = AgentId::range(agents)
            .map(|a| grid.base_for(a).ok_or(RouteError::NoBases { agents }))
            .collect::<Result<Vec<_>, _>>()?;

        let current = match self.initial {
            Some(a) => {
                if a.agent_count() != agents {
                    return Err(SearchError::AgentCountMismatch {
                        expected: agents,
                        got:      a.agent_count(),
                        what:     "initial assignment",
                    });
                }
                a
            }
            None => round_robin(grid, agents),
        };

        let rng = match self.config.seed {
            Some(seed) => SearchRng::new(seed),
            None => SearchRng::from_entropy(),
        };

        // ── Initial trajectories and score ────────────────────────────────
        let mut planner = RoutePlanner::with_finder(self.finder, grid, self.config.horizon, agents)?;
        planner.build(&current)?;
        let evaluator = UrgencyEvaluator::new(grid).with_penalty(self.config.collision_penalty);
        let score = evaluator.evaluate(planner.table());

        tracing::debug!(seed = rng.seed(), agents, initial_score = score, "search built");

        Ok(AnnealingSearch {
            grid,
            temperature:   self.config.initial_temperature,
            config:        self.config,
            rng,
            evaluator,
            homes,
            by_priority:   grid.urgent_by_priority(),
            best:          current.clone(),
            best_score:    score,
            current,
            planner,
            current_score: score,
            streak:        0,
            iteration:     0,
            accepted:      0,
        })
    }
}
