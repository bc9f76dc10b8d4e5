//! Search configuration.

use crate::{SearchError, SearchResult};

// ── SearchConfig ──────────────────────────────────────────────────────────────

/// Tuning knobs of the annealing search.
///
/// Typically built from CLI arguments, optionally layered over a JSON file
/// by the application crate.  Missing fields in a deserialized config take
/// their [`Default`] values.
///
/// # Adaptive move probabilities
///
/// With `c` excess occupants in the current route table and `s` consecutive
/// iterations with any collision:
///
/// | Move              | Probability (when `c > 0`, else 0)                        |
/// |-------------------|-----------------------------------------------------------|
/// | wait-insert       | `min(wait_cap, wait_base + wait_streak_step × min(s, wait_streak_limit))` |
/// | shift             | `min(shift_cap, c / (c + shift_weight))`                  |
/// | resolve-collision | `min(resolve_cap, c / (c + resolve_weight))`              |
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Annealing iterations.  Default: 10 000.
    pub iterations: usize,

    /// Planning horizon in ticks.  Default: 100.
    pub horizon: usize,

    /// RNG seed.  `None` draws one from OS entropy; the chosen seed is
    /// logged so the run can be replayed.
    pub seed: Option<u64>,

    /// Starting temperature.  Default: 1000.0.
    pub initial_temperature: f64,

    /// Geometric cooling factor applied every iteration.  Default: 0.995.
    pub cooling_factor: f64,

    /// Flat score penalty for a route table with any collision.
    /// Default: 100 000.
    pub collision_penalty: i64,

    pub shift_weight: f64,
    pub shift_cap: f64,
    pub resolve_weight: f64,
    pub resolve_cap: f64,
    pub wait_base: f64,
    pub wait_streak_step: f64,
    pub wait_streak_limit: usize,
    pub wait_cap: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iterations:          10_000,
            horizon:             100,
            seed:                None,
            initial_temperature: 1000.0,
            cooling_factor:      0.995,
            collision_penalty:   uav_eval::DEFAULT_COLLISION_PENALTY,
            shift_weight:        5.0,
            shift_cap:           0.65,
            resolve_weight:      2.0,
            resolve_cap:         0.5,
            wait_base:           0.25,
            wait_streak_step:    0.08,
            wait_streak_limit:   10,
            wait_cap:            0.9,
        }
    }
}

impl SearchConfig {
    /// Check every field is in range.
    pub fn validate(&self) -> SearchResult<()> {
        let err = |msg: String| Err(SearchError::Config(msg));

        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return err(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            ));
        }
        if !(self.cooling_factor > 0.0 && self.cooling_factor < 1.0) {
            return err(format!("cooling_factor must be in (0, 1), got {}", self.cooling_factor));
        }
        if self.collision_penalty < 0 {
            return err(format!(
                "collision_penalty must be non-negative, got {}",
                self.collision_penalty
            ));
        }
        for (name, weight) in [("shift_weight", self.shift_weight), ("resolve_weight", self.resolve_weight)] {
            if !(weight > 0.0 && weight.is_finite()) {
                return err(format!("{name} must be positive and finite, got {weight}"));
            }
        }
        for (name, p) in [
            ("shift_cap", self.shift_cap),
            ("resolve_cap", self.resolve_cap),
            ("wait_base", self.wait_base),
            ("wait_streak_step", self.wait_streak_step),
            ("wait_cap", self.wait_cap),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return err(format!("{name} must be in [0, 1], got {p}"));
            }
        }
        Ok(())
    }

    // ── Adaptive probabilities ────────────────────────────────────────────

    /// Probability of a wait-insert given `collisions` excess occupants and
    /// a collision `streak`.
    pub fn wait_probability(&self, collisions: usize, streak: usize) -> f64 {
        if collisions == 0 {
            return 0.0;
        }
        let extra = self.wait_streak_step * streak.min(self.wait_streak_limit) as f64;
        (self.wait_base + extra).min(self.wait_cap)
    }

    /// Probability of a shift given `collisions` excess occupants.
    pub fn shift_probability(&self, collisions: usize) -> f64 {
        saturating(collisions, self.shift_weight, self.shift_cap)
    }

    /// Probability of a resolve-collision move given `collisions` excess
    /// occupants.
    pub fn resolve_probability(&self, collisions: usize) -> f64 {
        saturating(collisions, self.resolve_weight, self.resolve_cap)
    }
}

/// `min(cap, c / (c + weight))`, or 0 when `c == 0`.
#[inline]
fn saturating(c: usize, weight: f64, cap: f64) -> f64 {
    if c == 0 {
        return 0.0;
    }
    let c = c as f64;
    (c / (c + weight)).min(cap)
}
