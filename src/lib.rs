//! Next Release Problem planning for the U-Engine ecosystem.
//!
//! Provides the plan encoding and the mutation operator an evolutionary
//! search uses to explore task-to-employee release plans. Selection,
//! crossover, fitness and instance loading belong to the host.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Employee`, `Skill`
//! - **`problem`**: `PlanningProblem` registry trait and `NextReleaseProblem`
//! - **`plan`**: `PlanningSolution` (planned sequence + unplanned set)
//! - **`ga`**: `MutationOperator` and `PlanningMutationOperator`
//! - **`random`**: `RandomSource`, implemented for every `rand::Rng`
//! - **`config`**: `MutationConfig`
//! - **`validation`**: Input integrity checks (duplicate IDs, staffing, DAG cycles)
//!
//! # Concurrency
//!
//! Nothing here holds shared mutable state. Each worker passes its own
//! generator to `mutate`; the problem is shared by reference.
//!
//! # References
//!
//! - Bagnall, Rayward-Smith & Whittley (2001), "The next release problem"
//! - Alba & Chicano (2007), "Software project management with GAs"

pub mod config;
pub mod error;
pub mod ga;
pub mod models;
pub mod plan;
pub mod problem;
pub mod random;
pub mod validation;

pub use error::{NrpError, Result};
