//! # SchedulerConfig
//!
//! The `SchedulerConfig` struct carries everything the genetic search needs:
//! the timetabling inputs (ordered subjects, teachers, groups, slots per day)
//! and the search tunables (population size, mutation rate, generation count,
//! parallel evaluation threshold, optional wall-clock budget).
//!
//! Configurations are built through the fluent builder, whose `build` method
//! validates every precondition up front. The evolution loop itself has no
//! recoverable errors, so anything invalid is rejected here, never silently
//! defaulted mid-run.
//!
//! ```rust
//! use evotimetable::config::SchedulerConfig;
//!
//! let config = SchedulerConfig::builder()
//!     .subjects(["IS", "Quants", "Refactoring"])
//!     .teachers(["Kulyabko", "Derevyanchenko"])
//!     .groups(["TK-41", "TK-42"])
//!     .classes_per_day(5)
//!     .population_size(100)
//!     .mutation_rate(0.1)
//!     .generations(100)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.subjects().len(), 3);
//! ```

use std::time::Duration;

use crate::error::{Result, ScheduleError};

const DEFAULT_POPULATION_SIZE: usize = 100;
const DEFAULT_MUTATION_RATE: f64 = 0.1;
const DEFAULT_GENERATIONS: usize = 100;
/// Minimum population size for parallel fitness evaluation.
const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// Validated configuration for a [`GeneticScheduler`](crate::scheduler::GeneticScheduler).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    subjects: Vec<String>,
    teachers: Vec<String>,
    groups: Vec<String>,
    classes_per_day: u32,
    population_size: usize,
    mutation_rate: f64,
    generations: usize,
    parallel_threshold: usize,
    time_budget: Option<Duration>,
}

impl SchedulerConfig {
    /// Returns a builder for constructing a validated configuration.
    pub fn builder() -> SchedulerConfigBuilder {
        SchedulerConfigBuilder::default()
    }

    /// Ordered subject list; schedule position `i` is subject `i`.
    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn teachers(&self) -> &[String] {
        &self.teachers
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Number of time slots per day; slots are numbered `1..=classes_per_day`.
    pub fn classes_per_day(&self) -> u32 {
        self.classes_per_day
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Per-position mutation probability in `[0, 1]`.
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn generations(&self) -> usize {
        self.generations
    }

    /// Minimum population size at which fitness evaluation runs in parallel.
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Optional wall-clock budget; when exhausted the loop stops early and
    /// the champion recorded so far is returned.
    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget
    }
}

/// Fluent builder for [`SchedulerConfig`].
#[derive(Debug, Clone, Default)]
pub struct SchedulerConfigBuilder {
    subjects: Vec<String>,
    teachers: Vec<String>,
    groups: Vec<String>,
    classes_per_day: Option<u32>,
    population_size: Option<usize>,
    mutation_rate: Option<f64>,
    generations: Option<usize>,
    parallel_threshold: Option<usize>,
    time_budget: Option<Duration>,
}

impl SchedulerConfigBuilder {
    /// Sets the ordered subject list.
    pub fn subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects = subjects.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the teacher list.
    pub fn teachers<I, S>(mut self, teachers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.teachers = teachers.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the group list.
    pub fn groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the number of time slots per day.
    pub fn classes_per_day(mut self, classes_per_day: u32) -> Self {
        self.classes_per_day = Some(classes_per_day);
        self
    }

    /// Sets the population size.
    pub fn population_size(mut self, population_size: usize) -> Self {
        self.population_size = Some(population_size);
        self
    }

    /// Sets the per-position mutation probability.
    pub fn mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = Some(mutation_rate);
        self
    }

    /// Sets the number of generations to evolve.
    pub fn generations(mut self, generations: usize) -> Self {
        self.generations = Some(generations);
        self
    }

    /// Sets the minimum population size for parallel fitness evaluation.
    pub fn parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = Some(parallel_threshold);
        self
    }

    /// Sets an optional wall-clock budget for the whole run.
    pub fn time_budget(mut self, time_budget: Duration) -> Self {
        self.time_budget = Some(time_budget);
        self
    }

    /// Validates the configuration and builds it.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Configuration`] if the subject, teacher, or
    /// group list is empty, `classes_per_day` is zero, `population_size` is
    /// zero, `generations` is zero, or `mutation_rate` is outside `[0, 1]`.
    pub fn build(self) -> Result<SchedulerConfig> {
        if self.subjects.is_empty() {
            return Err(ScheduleError::Configuration(
                "subject list cannot be empty".to_string(),
            ));
        }
        if self.teachers.is_empty() {
            return Err(ScheduleError::Configuration(
                "teacher list cannot be empty".to_string(),
            ));
        }
        if self.groups.is_empty() {
            return Err(ScheduleError::Configuration(
                "group list cannot be empty".to_string(),
            ));
        }

        let classes_per_day = self.classes_per_day.unwrap_or(0);
        if classes_per_day == 0 {
            return Err(ScheduleError::Configuration(
                "classes_per_day must be positive".to_string(),
            ));
        }

        let population_size = self.population_size.unwrap_or(DEFAULT_POPULATION_SIZE);
        if population_size == 0 {
            return Err(ScheduleError::Configuration(
                "population size cannot be zero".to_string(),
            ));
        }

        let generations = self.generations.unwrap_or(DEFAULT_GENERATIONS);
        if generations == 0 {
            return Err(ScheduleError::Configuration(
                "at least one generation is required to produce a result".to_string(),
            ));
        }

        let mutation_rate = self.mutation_rate.unwrap_or(DEFAULT_MUTATION_RATE);
        if !mutation_rate.is_finite() || !(0.0..=1.0).contains(&mutation_rate) {
            return Err(ScheduleError::Configuration(format!(
                "mutation rate must be in [0, 1], got {mutation_rate}"
            )));
        }

        Ok(SchedulerConfig {
            subjects: self.subjects,
            teachers: self.teachers,
            groups: self.groups,
            classes_per_day,
            population_size,
            mutation_rate,
            generations,
            parallel_threshold: self.parallel_threshold.unwrap_or(DEFAULT_PARALLEL_THRESHOLD),
            time_budget: self.time_budget,
        })
    }
}
