//! Error types for planning and mutation.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NrpError>;

/// Errors raised while building problems, plans and operators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NrpError {
    #[error("Mutation probability is negative: {0}")]
    NegativeProbability(f64),

    #[error("Mutation probability is not a number")]
    NanProbability,

    #[error("Problem input is invalid ({} error(s))", .0.len())]
    InvalidProblem(Vec<ValidationError>),

    #[error("Unknown task: {0}")]
    UnknownTask(String),

    #[error("Task '{0}' is both planned and unplanned")]
    TaskInBothPartitions(String),

    #[error("Task '{0}' is planned more than once")]
    DuplicatePlannedTask(String),

    #[error("Task '{0}' is unplanned more than once")]
    DuplicateUnplannedTask(String),

    #[error("Task '{0}' is neither planned nor unplanned")]
    MissingTask(String),

    #[error("Employee '{employee}' lacks skill '{skill}' required by task '{task}'")]
    MissingSkill {
        task: String,
        employee: String,
        skill: String,
    },

    #[error("Config parse error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for NrpError {
    fn from(err: serde_json::Error) -> Self {
        NrpError::Config(err.to_string())
    }
}
