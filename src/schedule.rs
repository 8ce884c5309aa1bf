//! # Schedule Data Model
//!
//! A [`Schedule`] is one candidate timetable: an ordered sequence of
//! [`ClassAssignment`]s, one per subject in the configuration's subject list.
//! The subject itself is not stored on the assignment — position `i` of a
//! schedule always corresponds to subject `i`, so subject identity is
//! positional and survives crossover and mutation unchanged.
//!
//! Schedules are value-like: every breeding operator builds a fresh
//! `Schedule` rather than mutating a shared one, which rules out aliasing
//! bugs between population slots.

use std::ops::Index;

use crate::rng::RandomNumberGenerator;

/// Index of a teacher in the configuration's teacher list.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TeacherId(pub usize);

/// Index of a group in the configuration's group list.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub usize);

/// One scheduled session: a teacher, a group, and a time slot for the subject
/// identified by the assignment's position in its owning [`Schedule`].
///
/// Immutable once constructed; mutation replaces the whole value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassAssignment {
    pub teacher: TeacherId,
    pub group: GroupId,
    /// Time slot in `1..=classes_per_day`.
    pub time_slot: u32,
}

impl ClassAssignment {
    /// Draws a uniformly random assignment: a time slot in
    /// `[1, classes_per_day]`, a teacher, and a group.
    ///
    /// Counts must be positive and `classes_per_day` at least 1; the
    /// configuration validates this before any drawing happens.
    pub fn random(
        teacher_count: usize,
        group_count: usize,
        classes_per_day: u32,
        rng: &mut RandomNumberGenerator,
    ) -> Self {
        Self {
            teacher: TeacherId(rng.gen_range(0..teacher_count)),
            group: GroupId(rng.gen_range(0..group_count)),
            time_slot: rng.gen_range(1..=classes_per_day),
        }
    }
}

/// One candidate timetable: a fixed-length sequence of assignments, one per
/// subject, where position `i` corresponds to subject `i`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    assignments: Vec<ClassAssignment>,
}

impl Schedule {
    pub fn new(assignments: Vec<ClassAssignment>) -> Self {
        Self { assignments }
    }

    /// Number of assignments, which always equals the subject count.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn assignments(&self) -> &[ClassAssignment] {
        &self.assignments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassAssignment> {
        self.assignments.iter()
    }
}

impl Index<usize> for Schedule {
    type Output = ClassAssignment;

    fn index(&self, index: usize) -> &Self::Output {
        &self.assignments[index]
    }
}

impl FromIterator<ClassAssignment> for Schedule {
    fn from_iter<I: IntoIterator<Item = ClassAssignment>>(iter: I) -> Self {
        Self {
            assignments: iter.into_iter().collect(),
        }
    }
}
