//! The annealing loop.
//!
//! # One iteration
//!
//! ```text
//! ① Collisions   detect collisions in the current table; c = excess occupants.
//! ② Select       wait-insert, else shift, else resolve-collision with their
//!                adaptive probabilities; else one generic move uniformly.
//! ③ Edit         apply the move to a copy of the current assignment,
//!                recording the first changed index per agent.
//! ④ Replan       clone the current planner, update it from those indices.
//! ⑤ Evaluate     score the candidate table.
//! ⑥ Accept       Δ < 0, or exp(−Δ/τ) > u with u ~ U[0,1).  An accepted
//!                candidate replaces the current state; a rejected one is
//!                dropped.  Accepted candidates that beat the best become it.
//! ⑦ Cool         τ ← τ × cooling_factor.
//! ```
//!
//! A move that cannot act skips ④–⑦, so the temperature is left unchanged.

use std::time::Instant;

use uav_core::{Position, SearchRng};
use uav_eval::{count_collisions, detect_collisions, excess_occupants, UrgencyEvaluator};
use uav_grid::{AStar, Grid, PathFinder};
use uav_route::{Assignment, ChangeSet, RoutePlanner};

use crate::moves::MoveContext;
use crate::observer::{IterationReport, NoopObserver, SearchObserver, SearchPhase};
use crate::{MoveKind, SearchBuilder, SearchConfig, SearchResult};

// ── SearchOutcome ─────────────────────────────────────────────────────────────

/// Result of a completed [`AnnealingSearch::run`].
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    /// Best assignment seen.
    pub best:       Assignment,
    pub best_score: i64,
    /// Seed the run used; pass it back in to replay.
    pub seed:       u64,
    pub iterations: usize,
    /// Iterations whose candidate was accepted.
    pub accepted:   usize,
}

// ── AnnealingSearch ───────────────────────────────────────────────────────────

/// Simulated annealing over visit-order assignments.
///
/// Build with [`SearchBuilder`][crate::SearchBuilder].
pub struct AnnealingSearch<'g, P = AStar> {
    pub(crate) grid:          &'g Grid,
    pub(crate) config:        SearchConfig,
    pub(crate) rng:           SearchRng,
    pub(crate) evaluator:     UrgencyEvaluator<'g>,
    pub(crate) homes:         Vec<Position>,
    pub(crate) by_priority:   Vec<Position>,

    pub(crate) current:       Assignment,
    pub(crate) planner:       RoutePlanner<'g, P>,
    pub(crate) current_score: i64,

    pub(crate) best:          Assignment,
    pub(crate) best_score:    i64,

    pub(crate) temperature:   f64,
    /// Consecutive iterations that started with a collision.
    pub(crate) streak:        usize,
    pub(crate) iteration:     usize,
    pub(crate) accepted:      usize,
}

impl<'g, P: PathFinder + Clone> AnnealingSearch<'g, P> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn current(&self) -> &Assignment {
        &self.current
    }

    pub fn current_score(&self) -> i64 {
        self.current_score
    }

    /// Planner holding the current assignment's trajectories.
    pub fn planner(&self) -> &RoutePlanner<'g, P> {
        &self.planner
    }

    pub fn best(&self) -> &Assignment {
        &self.best
    }

    pub fn best_score(&self) -> i64 {
        self.best_score
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Iterations performed so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    // ── Loop ──────────────────────────────────────────────────────────────

    /// Run the configured number of iterations and return the best
    /// assignment found.
    pub fn run<O: SearchObserver>(mut self, observer: &mut O) -> SearchResult<SearchOutcome> {
        tracing::info!(
            seed = self.seed(),
            agents = self.current.agent_count(),
            horizon = self.planner.horizon(),
            iterations = self.config.iterations,
            initial_score = self.current_score,
            "annealing search started"
        );
        observer.on_search_start(self.seed(), self.current_score);

        for _ in 0..self.config.iterations {
            self.step(observer)?;
        }

        tracing::info!(
            best_score = self.best_score,
            accepted = self.accepted,
            iterations = self.iteration,
            "annealing search finished"
        );
        observer.on_search_end(self.best_score, self.iteration);

        Ok(SearchOutcome {
            seed:       self.seed(),
            best:       self.best,
            best_score: self.best_score,
            iterations: self.iteration,
            accepted:   self.accepted,
        })
    }

    /// Perform one iteration.
    pub fn step<O: SearchObserver>(&mut self, observer: &mut O) -> SearchResult<IterationReport> {
        let iteration = self.iteration;
        self.iteration += 1;

        // ── ① Collisions ─────────────────────────────────────────────────
        let records = detect_collisions(self.planner.table(), self.grid);
        let collisions = excess_occupants(&records);
        self.streak = if collisions > 0 { self.streak + 1 } else { 0 };

        // ── ② Select / ③ Edit ────────────────────────────────────────────
        let kind = self.select_move(collisions, !records.is_empty());
        let mut candidate = self.current.clone();
        let mut changes = ChangeSet::new(candidate.agent_count());
        let ctx = MoveContext {
            grid:        self.grid,
            homes:       &self.homes,
            by_priority: &self.by_priority,
            table:       self.planner.table(),
            records:     &records,
        };
        let applied = ctx.apply(kind, &mut candidate, &mut self.rng, &mut changes);

        let mut report = IterationReport {
            iteration,
            kind,
            applied,
            delta: None,
            accepted: false,
            temperature: self.temperature,
            collisions,
        };

        if applied {
            // ── ④ Replan ─────────────────────────────────────────────────
            let started = Instant::now();
            let mut next = self.planner.clone();
            next.update(&candidate, &changes)?;
            observer.on_phase(SearchPhase::Replan, started.elapsed());

            // ── ⑤ Evaluate ───────────────────────────────────────────────
            let started = Instant::now();
            let score = self.evaluator.evaluate(next.table());
            observer.on_phase(SearchPhase::Evaluate, started.elapsed());

            // ── ⑥ Accept ─────────────────────────────────────────────────
            let delta = score - self.current_score;
            let accept = delta < 0 || (-(delta as f64) / self.temperature).exp() > self.rng.unit();
            report.delta = Some(delta);
            report.accepted = accept;

            if accept {
                self.accepted += 1;
                if score < self.best_score {
                    let table_collisions = count_collisions(next.table(), self.grid);
                    tracing::debug!(iteration, score, collisions = table_collisions, "new best");
                    observer.on_new_best(iteration, score, table_collisions, self.temperature);
                    self.best = candidate.clone();
                    self.best_score = score;
                }
                self.current = candidate;
                self.current_score = score;
                self.planner = next;
            }
        }

        tracing::trace!(
            iteration,
            kind = %kind,
            applied,
            delta = ?report.delta,
            accepted = report.accepted,
            temperature = self.temperature,
            "iteration"
        );

        // ── ⑦ Cool ───────────────────────────────────────────────────────
        if applied {
            self.temperature *= self.config.cooling_factor;
        }

        observer.on_iteration(&report);
        Ok(report)
    }

    /// Pick the move for this iteration from the adaptive probabilities.
    fn select_move(&mut self, collisions: usize, has_records: bool) -> MoveKind {
        let cfg = &self.config;
        let p_wait    = cfg.wait_probability(collisions, self.streak);
        let p_shift   = cfg.shift_probability(collisions);
        let p_resolve = cfg.resolve_probability(collisions);

        if has_records && p_wait > 0.0 && self.rng.unit() < p_wait {
            return MoveKind::WaitInsert;
        }
        if p_shift > 0.0 && self.rng.unit() < p_shift {
            return MoveKind::Shift;
        }
        if has_records && p_resolve > 0.0 && self.rng.unit() < p_resolve {
            return MoveKind::ResolveCollision;
        }
        self.rng
            .choose(&MoveKind::GENERIC)
            .copied()
            .unwrap_or(MoveKind::IntraSwap)
    }
}

// ── Convenience entry point ───────────────────────────────────────────────────

/// Run a default-configured search with an entropy seed and return the best
/// assignment.
///
/// Use [`SearchBuilder`] for a fixed seed, observers or custom settings.
pub fn search(
    grid:        &Grid,
    agent_count: usize,
    horizon:     usize,
    iterations:  usize,
) -> SearchResult<Assignment> {
    let outcome = SearchBuilder::new(grid, agent_count)
        .horizon(horizon)
        .iterations(iterations)
        .build()?
        .run(&mut NoopObserver)?;
    Ok(outcome.best)
}
