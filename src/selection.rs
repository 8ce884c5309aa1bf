//! # Selection
//!
//! Two selectors drive the generational loop:
//!
//! * [`RouletteWheelSelection`] — fitness-proportionate selection with
//!   replacement, used to pick breeding parents. Individuals are chosen with
//!   probability proportional to their fitness score; the same individual may
//!   be drawn repeatedly, including as both parents of one breeding pair.
//! * [`select_best`] — the deterministic best-of-generation scan used once
//!   per generation to update the running champion. Ties keep the first
//!   individual encountered.
//!
//! Roulette wheel selection requires strictly positive fitness values. The
//! conflict-based score satisfies this by construction (its minimum is
//! `1 / (max_conflicts + 1) > 0`), but the invariant is still checked so a
//! misuse fails loudly instead of skewing the wheel.

use crate::error::{Result, ScheduleError};
use crate::rng::RandomNumberGenerator;
use crate::schedule::Schedule;

/// Fitness-proportionate selection over one generation's fitness scores.
///
/// Built once per generation from the fitness slice; each [`sample`] draw is
/// independent and with replacement.
///
/// [`sample`]: RouletteWheelSelection::sample
#[derive(Debug, Clone)]
pub struct RouletteWheelSelection {
    /// Cumulative selection probabilities, ascending, last entry exactly 1.0.
    cumulative: Vec<f64>,
}

impl RouletteWheelSelection {
    /// Builds the wheel from a slice of fitness scores.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::EmptyPopulation`] for an empty slice and
    /// [`ScheduleError::Selection`] if any score is non-positive or
    /// non-finite.
    pub fn from_fitness(fitness: &[f64]) -> Result<Self> {
        if fitness.is_empty() {
            return Err(ScheduleError::EmptyPopulation);
        }
        if fitness.iter().any(|&f| !f.is_finite() || f <= 0.0) {
            return Err(ScheduleError::Selection(
                "roulette wheel selection requires positive finite fitness values".to_string(),
            ));
        }

        let sum: f64 = fitness.iter().sum();
        let mut cumulative = Vec::with_capacity(fitness.len());
        let mut running = 0.0;
        for &f in fitness {
            running += f / sum;
            cumulative.push(running);
        }
        // Pin the last entry to 1.0 so floating-point drift cannot leave the
        // top of the wheel unreachable.
        if let Some(last) = cumulative.last_mut() {
            *last = 1.0;
        }

        Ok(Self { cumulative })
    }

    /// Number of individuals on the wheel.
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Draws one population index with probability proportional to fitness.
    pub fn sample(&self, rng: &mut RandomNumberGenerator) -> usize {
        let r = rng.gen_unit();
        for (i, &prob) in self.cumulative.iter().enumerate() {
            if r <= prob {
                return i;
            }
        }
        // Unreachable for r in [0, 1) since the last entry is pinned to 1.0.
        self.cumulative.len() - 1
    }

    /// Draws two independent parent indices with replacement.
    ///
    /// The two draws are not constrained to be distinct: a strong candidate
    /// may be selected as both parents of one breeding pair.
    pub fn select_parents(&self, rng: &mut RandomNumberGenerator) -> (usize, usize) {
        (self.sample(rng), self.sample(rng))
    }
}

/// Returns the index and score of the best individual in the population.
///
/// Deterministic scan: the first individual with the strictly highest score
/// wins, so ties keep the earliest position.
///
/// # Errors
///
/// Returns [`ScheduleError::EmptyPopulation`] for an empty population and
/// [`ScheduleError::Selection`] if the fitness slice length does not match
/// the population length.
pub fn select_best(population: &[Schedule], fitness: &[f64]) -> Result<(usize, f64)> {
    if population.is_empty() {
        return Err(ScheduleError::EmptyPopulation);
    }
    if fitness.len() != population.len() {
        return Err(ScheduleError::Selection(format!(
            "fitness slice length ({}) does not match population length ({})",
            fitness.len(),
            population.len()
        )));
    }

    let mut best_index = 0;
    let mut best_score = fitness[0];
    for (i, &score) in fitness.iter().enumerate().skip(1) {
        if score > best_score {
            best_index = i;
            best_score = score;
        }
    }
    Ok((best_index, best_score))
}
