//! Deterministic search RNG wrapper.
//!
//! # Determinism strategy
//!
//! The annealing loop draws every random decision (move selection, operand
//! picks, Metropolis acceptance) from a single `SearchRng` it owns.  There is
//! no process-wide generator: two searches built with the same seed and the
//! same inputs make identical draws in identical order.
//!
//! Unseeded runs pick a seed from the OS and expose it via [`SearchRng::seed`]
//! so the caller can log it and replay the run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seedable RNG for the search loop.
pub struct SearchRng {
    rng:  SmallRng,
    seed: u64,
}

impl SearchRng {
    pub fn new(seed: u64) -> Self {
        SearchRng { rng: SmallRng::seed_from_u64(seed), seed }
    }

    /// Seed from OS entropy.  The chosen seed is still recorded.
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::thread_rng().r#gen();
        Self::new(seed)
    }

    /// The seed this generator was created with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform `f64` in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.rng.gen_range(range)
    }

    /// Uniform index in `0..len`.  `None` when `len == 0`.
    #[inline]
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.gen_range(0..len))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.rng)
    }
}

impl std::fmt::Debug for SearchRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchRng").field("seed", &self.seed).finish()
    }
}
