//! # Fitness Evaluation
//!
//! Scores a candidate timetable by counting scheduling conflicts. Two
//! assignments conflict when they share a time slot and also share a teacher
//! or a group; a pair sharing the slot plus both attributes counts twice.
//! The score is `1 / (conflicts + 1)`, so it lies in `(0, 1]` and equals
//! exactly `1.0` for a conflict-free schedule.
//!
//! Both functions are pure and deterministic, which is what makes the
//! per-generation parallel evaluation in the driver safe without locking.

use crate::schedule::Schedule;

/// Counts scheduling conflicts in a candidate timetable.
///
/// For every unordered pair of positions sharing a time slot, the count is
/// incremented once if the teachers match and once more, independently, if
/// the groups match. Quadratic in the subject count, which stays small by
/// construction.
pub fn count_conflicts(schedule: &Schedule) -> u32 {
    let assignments = schedule.assignments();
    let mut conflicts = 0;
    for i in 0..assignments.len() {
        for j in (i + 1)..assignments.len() {
            if assignments[i].time_slot == assignments[j].time_slot {
                if assignments[i].teacher == assignments[j].teacher {
                    conflicts += 1;
                }
                if assignments[i].group == assignments[j].group {
                    conflicts += 1;
                }
            }
        }
    }
    conflicts
}

/// Returns the fitness score `1.0 / (conflicts + 1.0)`.
///
/// Always in `(0, 1]`, strictly decreasing in the conflict count, and `1.0`
/// if and only if the schedule is conflict-free.
pub fn score(schedule: &Schedule) -> f64 {
    1.0 / (f64::from(count_conflicts(schedule)) + 1.0)
}
