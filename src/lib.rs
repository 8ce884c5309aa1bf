pub mod breeding;
pub mod config;
pub mod error;
pub mod fitness;
pub mod rng;
pub mod schedule;
pub mod scheduler;
pub mod selection;

// Re-export commonly used types for convenience
pub use config::{SchedulerConfig, SchedulerConfigBuilder};
pub use error::{Result, ScheduleError};
pub use schedule::{ClassAssignment, GroupId, Schedule, TeacherId};
pub use scheduler::{GeneticScheduler, SolveResult};
