//! Search observer trait for progress reporting and phase timing.

use std::fmt;
use std::time::Duration;

use crate::MoveKind;

// ── Reports ───────────────────────────────────────────────────────────────────

/// The two timed phases of every evaluated iteration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SearchPhase {
    /// Incremental trajectory update of the candidate.
    Replan,
    /// Scoring the candidate's route table.
    Evaluate,
}

impl fmt::Display for SearchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SearchPhase::Replan   => "replan",
            SearchPhase::Evaluate => "evaluate",
        })
    }
}

/// What happened during one iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct IterationReport {
    pub iteration:   usize,
    /// Move selected this iteration.
    pub kind:        MoveKind,
    /// `false` if the move could not act; nothing was evaluated.
    pub applied:     bool,
    /// Candidate score minus current score, if evaluated.
    pub delta:       Option<i64>,
    pub accepted:    bool,
    /// Temperature the acceptance test used.
    pub temperature: f64,
    /// Excess occupants in the current table before the move.
    pub collisions:  usize,
}

// ── SearchObserver ────────────────────────────────────────────────────────────

/// Callbacks invoked by [`AnnealingSearch::run`][crate::AnnealingSearch::run]
/// at key points of the annealing loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: new-best printer
///
/// ```rust,ignore
/// struct BestPrinter;
///
/// impl SearchObserver for BestPrinter {
///     fn on_new_best(&mut self, iteration: usize, score: i64, collisions: usize, _t: f64) {
///         println!("[{iteration}] best {score} ({collisions} collisions)");
///     }
/// }
/// ```
pub trait SearchObserver {
    /// Called once before the first iteration.
    fn on_search_start(&mut self, _seed: u64, _initial_score: i64) {}

    /// Called at the end of every iteration.
    fn on_iteration(&mut self, _report: &IterationReport) {}

    /// Called when an accepted candidate beats the best score so far.
    ///
    /// `collisions` is the candidate's [`count_collisions`][uav_eval::count_collisions].
    fn on_new_best(&mut self, _iteration: usize, _score: i64, _collisions: usize, _temperature: f64) {}

    /// Called with the wall time of each timed phase.
    fn on_phase(&mut self, _phase: SearchPhase, _elapsed: Duration) {}

    /// Called once after the last iteration.
    fn on_search_end(&mut self, _best_score: i64, _iterations: usize) {}
}

/// A [`SearchObserver`] that does nothing.
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Forward every callback to both observers, `A` first.
impl<A: SearchObserver, B: SearchObserver> SearchObserver for (A, B) {
    fn on_search_start(&mut self, seed: u64, initial_score: i64) {
        self.0.on_search_start(seed, initial_score);
        self.1.on_search_start(seed, initial_score);
    }

    fn on_iteration(&mut self, report: &IterationReport) {
        self.0.on_iteration(report);
        self.1.on_iteration(report);
    }

    fn on_new_best(&mut self, iteration: usize, score: i64, collisions: usize, temperature: f64) {
        self.0.on_new_best(iteration, score, collisions, temperature);
        self.1.on_new_best(iteration, score, collisions, temperature);
    }

    fn on_phase(&mut self, phase: SearchPhase, elapsed: Duration) {
        self.0.on_phase(phase, elapsed);
        self.1.on_phase(phase, elapsed);
    }

    fn on_search_end(&mut self, best_score: i64, iterations: usize) {
        self.0.on_search_end(best_score, iterations);
        self.1.on_search_end(best_score, iterations);
    }
}

impl<T: SearchObserver + ?Sized> SearchObserver for &mut T {
    fn on_search_start(&mut self, seed: u64, initial_score: i64) {
        (**self).on_search_start(seed, initial_score);
    }

    fn on_iteration(&mut self, report: &IterationReport) {
        (**self).on_iteration(report);
    }

    fn on_new_best(&mut self, iteration: usize, score: i64, collisions: usize, temperature: f64) {
        (**self).on_new_best(iteration, score, collisions, temperature);
    }

    fn on_phase(&mut self, phase: SearchPhase, elapsed: Duration) {
        (**self).on_phase(phase, elapsed);
    }

    fn on_search_end(&mut self, best_score: i64, iterations: usize) {
        (**self).on_search_end(best_score, iterations);
    }
}

// ── PhaseTimings ──────────────────────────────────────────────────────────────

/// Accumulates wall time and call counts per [`SearchPhase`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhaseTimings {
    pub replan:         Duration,
    pub replan_calls:   usize,
    pub evaluate:       Duration,
    pub evaluate_calls: usize,
}

impl PhaseTimings {
    /// Total time across both phases.
    pub fn total(&self) -> Duration {
        self.replan + self.evaluate
    }
}

impl SearchObserver for PhaseTimings {
    fn on_phase(&mut self, phase: SearchPhase, elapsed: Duration) {
        match phase {
            SearchPhase::Replan => {
                self.replan += elapsed;
                self.replan_calls += 1;
            }
            SearchPhase::Evaluate => {
                self.evaluate += elapsed;
                self.evaluate_calls += 1;
            }
        }
    }
}
