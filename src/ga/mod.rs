//! GA operators for release planning.
//!
//! The evolutionary loop (selection, crossover, replacement) lives in the
//! host. This module supplies the plan-specific mutation it plugs in.
//!
//! # Submodules
//!
//! - [`operator`]: the [`MutationOperator`] capability
//! - [`mutation`]: [`PlanningMutationOperator`], per-slot stochastic mutation
//!   of a [`PlanningSolution`](crate::plan::PlanningSolution)

pub mod mutation;
pub mod operator;

pub use mutation::PlanningMutationOperator;
pub use operator::MutationOperator;
