//! # Error Types
//!
//! This module defines the error type used throughout the timetabling library,
//! with specific variants for the failure scenarios that can occur while
//! configuring and running the genetic search.
//!
//! All fallible operations in the crate return the [`Result`] alias defined here:
//!
//! ```rust
//! use evotimetable::error::{Result, ScheduleError};
//!
//! fn check_positive(n: usize) -> Result<()> {
//!     if n == 0 {
//!         return Err(ScheduleError::Configuration(
//!             "value must be positive".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running the scheduler.
///
/// All variants are terminal: the genetic search has no transient or retryable
/// failures, so every error reported here is either an invalid configuration
/// or a violated internal precondition.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when a crossover or mutation operation fails.
    #[error("Breeding error: {0}")]
    Breeding(String),

    /// Error that occurs when parent selection fails.
    #[error("Selection error: {0}")]
    Selection(String),

    /// Error that occurs when the evolution loop fails to produce a result.
    #[error("Evolution error: {0}")]
    Evolution(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,
}

/// A specialized Result type for scheduling operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `ScheduleError`.
pub type Result<T> = std::result::Result<T, ScheduleError>;
