//! # RandomNumberGenerator
//!
//! A seedable wrapper around the `rand` crate's `StdRng`. A single instance is
//! created by the caller and threaded through every randomized operation
//! (schedule generation, selection, crossover, mutation), so a fixed seed
//! reproduces an entire run.
//!
//! ```rust
//! use evotimetable::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let slot: u32 = rng.gen_range(1..=5);
//! assert!((1..=5).contains(&slot));
//! ```

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A seedable random number generator used by all randomized operations.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates a random value in the given range.
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.rng.gen_range(range)
    }

    /// Returns `true` with probability `p`.
    ///
    /// `p` must be in `[0, 1]`; callers pass the validated mutation rate.
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p)
    }

    /// Generates a uniform value in `[0, 1)`.
    pub fn gen_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
