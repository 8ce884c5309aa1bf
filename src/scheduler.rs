//! # GeneticScheduler
//!
//! The evolution driver. Ties the generator, fitness evaluator, and breeding
//! operators into the generational loop and exposes the single entry point,
//! [`GeneticScheduler::solve`].
//!
//! Each generation evaluates the whole population, records the running
//! champion, then breeds a full replacement population through roulette
//! wheel selection, single-point crossover, and per-position mutation. The
//! champion is a true global best across all generations; the final result
//! is the champion together with its freshly recomputed fitness score.
//!
//! ```rust
//! use evotimetable::config::SchedulerConfig;
//! use evotimetable::rng::RandomNumberGenerator;
//! use evotimetable::scheduler::GeneticScheduler;
//!
//! let config = SchedulerConfig::builder()
//!     .subjects(["IS", "Quants", "Refactoring"])
//!     .teachers(["Kulyabko", "Derevyanchenko", "Glibovec"])
//!     .groups(["TK-41", "TK-42"])
//!     .classes_per_day(5)
//!     .population_size(20)
//!     .mutation_rate(0.1)
//!     .generations(10)
//!     .build()
//!     .unwrap();
//!
//! let scheduler = GeneticScheduler::new(config);
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let result = scheduler.solve(&mut rng).unwrap();
//! assert_eq!(result.schedule.len(), 3);
//! assert!(result.fitness > 0.0 && result.fitness <= 1.0);
//! ```

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::breeding;
use crate::config::SchedulerConfig;
use crate::error::{Result, ScheduleError};
use crate::fitness;
use crate::rng::RandomNumberGenerator;
use crate::schedule::{ClassAssignment, Schedule};
use crate::selection::{select_best, RouletteWheelSelection};

/// The result of a run: the best schedule found and its fitness score.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    /// The best schedule observed across all generations.
    pub schedule: Schedule,
    /// The schedule's fitness, recomputed at the end of the run.
    pub fitness: f64,
}

/// Genetic search over candidate timetables for a validated configuration.
#[derive(Debug, Clone)]
pub struct GeneticScheduler {
    config: SchedulerConfig,
}

impl GeneticScheduler {
    /// Creates a scheduler for the given configuration.
    ///
    /// The configuration is validated at build time, so construction itself
    /// cannot fail.
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Generates one random candidate: a uniform random assignment per
    /// subject in the configured subject order.
    pub fn random_schedule(&self, rng: &mut RandomNumberGenerator) -> Schedule {
        (0..self.config.subjects().len())
            .map(|_| {
                ClassAssignment::random(
                    self.config.teachers().len(),
                    self.config.groups().len(),
                    self.config.classes_per_day(),
                    rng,
                )
            })
            .collect()
    }

    /// Generates `size` independent random candidates.
    pub fn random_population(
        &self,
        size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Vec<Schedule> {
        (0..size).map(|_| self.random_schedule(rng)).collect()
    }

    /// Computes fitness for every member of the population.
    ///
    /// Runs in parallel once the population reaches the configured threshold;
    /// evaluation is pure and per-member, so no synchronization is needed
    /// beyond the implicit barrier when the map completes.
    fn evaluate(&self, population: &[Schedule]) -> Vec<f64> {
        if population.len() >= self.config.parallel_threshold() {
            population.par_iter().map(fitness::score).collect()
        } else {
            population.iter().map(fitness::score).collect()
        }
    }

    /// Breeds the replacement population for the next generation.
    ///
    /// Repeatedly selects two parents by roulette wheel, crosses them over,
    /// mutates both children, and appends the pair. For single-subject
    /// configurations crossover has no valid cut point and is bypassed; the
    /// children are then the parents themselves, still subject to mutation.
    /// When `population_size` is odd the surplus final child is dropped, so
    /// every generation holds exactly `population_size` members.
    fn breed(
        &self,
        population: &[Schedule],
        scores: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Schedule>> {
        let target = self.config.population_size();
        let wheel = RouletteWheelSelection::from_fitness(scores)?;
        let mut next = Vec::with_capacity(target + 1);

        while next.len() < target {
            let (first, second) = wheel.select_parents(rng);
            let parent1 = &population[first];
            let parent2 = &population[second];

            let (child_a, child_b) = if parent1.len() < 2 {
                (parent1.clone(), parent2.clone())
            } else {
                breeding::crossover(parent1, parent2, rng)?
            };

            next.push(breeding::mutate(&self.config, &child_a, rng));
            next.push(breeding::mutate(&self.config, &child_b, rng));
        }
        next.truncate(target);

        Ok(next)
    }

    /// Runs the full evolutionary search and returns the champion schedule
    /// with its freshly recomputed fitness score.
    ///
    /// The loop runs for the configured number of generations, or until the
    /// optional wall-clock budget is exhausted; the first generation is
    /// always evaluated, so a champion exists even under a zero budget.
    ///
    /// # Errors
    ///
    /// Propagates selection and breeding errors. With a validated
    /// configuration these indicate an internal invariant violation, not a
    /// condition the caller can provoke.
    pub fn solve(&self, rng: &mut RandomNumberGenerator) -> Result<SolveResult> {
        let started = Instant::now();
        let mut population = self.random_population(self.config.population_size(), rng);
        let mut champion: Option<(Schedule, f64)> = None;

        for generation in 0..self.config.generations() {
            if let Some(budget) = self.config.time_budget() {
                if generation > 0 && started.elapsed() >= budget {
                    debug!(generation, "time budget exhausted, stopping early");
                    break;
                }
            }

            let scores = self.evaluate(&population);
            let (best_index, best_score) = select_best(&population, &scores)?;

            // Strictly-better replacement keeps a true global champion.
            let improved = match &champion {
                Some((_, current)) => best_score > *current,
                None => true,
            };
            if improved {
                champion = Some((population[best_index].clone(), best_score));
            }

            let running_best = champion.as_ref().map(|(_, s)| *s).unwrap_or(0.0);
            trace!(generation, generation_best = best_score, running_best);
            if improved {
                debug!(generation, best = best_score, "new champion recorded");
            }

            population = self.breed(&population, &scores, rng)?;
        }

        let (schedule, _) = champion.ok_or_else(|| {
            ScheduleError::Evolution("no generation produced a champion".to_string())
        })?;
        let fitness = fitness::score(&schedule);
        Ok(SolveResult { schedule, fitness })
    }
}
