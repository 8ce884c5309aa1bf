//! # Breeding Operators
//!
//! Single-point crossover and per-position regeneration mutation. Both
//! operators follow value semantics: parents and inputs are read-only, and
//! every call builds fresh [`Schedule`]s, so no population slot ever aliases
//! another.

use crate::config::SchedulerConfig;
use crate::error::{Result, ScheduleError};
use crate::rng::RandomNumberGenerator;
use crate::schedule::{ClassAssignment, Schedule};

/// Performs single-point crossover on two parent schedules.
///
/// A cut point `c` is drawn uniformly from `[1, L - 1]`. Child A carries
/// parent 1's positions `[0, c)` followed by parent 2's `[c, L)`; child B is
/// the complementary concatenation. Both children keep length `L`, and each
/// position still corresponds to the same subject.
///
/// # Errors
///
/// Returns [`ScheduleError::Breeding`] if the parents have different lengths
/// or fewer than two positions (no valid cut point exists). The driver
/// bypasses crossover entirely for single-subject configurations.
pub fn crossover(
    parent1: &Schedule,
    parent2: &Schedule,
    rng: &mut RandomNumberGenerator,
) -> Result<(Schedule, Schedule)> {
    if parent1.len() != parent2.len() {
        return Err(ScheduleError::Breeding(format!(
            "parents have mismatched lengths ({} vs {})",
            parent1.len(),
            parent2.len()
        )));
    }
    let len = parent1.len();
    if len < 2 {
        return Err(ScheduleError::Breeding(
            "crossover requires at least two positions".to_string(),
        ));
    }

    let cut = rng.gen_range(1..len);
    let first = parent1.assignments();
    let second = parent2.assignments();

    let child_a: Schedule = first[..cut]
        .iter()
        .chain(&second[cut..])
        .copied()
        .collect();
    let child_b: Schedule = second[..cut]
        .iter()
        .chain(&first[cut..])
        .copied()
        .collect();

    Ok((child_a, child_b))
}

/// Mutates a schedule position by position.
///
/// Each position independently mutates with probability
/// `config.mutation_rate()`. A mutating position is not perturbed but
/// replaced outright by a freshly drawn random assignment, keeping the
/// subject fixed since subject identity is positional. The input schedule is
/// left untouched.
pub fn mutate(
    config: &SchedulerConfig,
    schedule: &Schedule,
    rng: &mut RandomNumberGenerator,
) -> Schedule {
    schedule
        .iter()
        .map(|assignment| {
            if rng.gen_bool(config.mutation_rate()) {
                ClassAssignment::random(
                    config.teachers().len(),
                    config.groups().len(),
                    config.classes_per_day(),
                    rng,
                )
            } else {
                *assignment
            }
        })
        .collect()
}
