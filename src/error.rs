//! Error types.

use thiserror::Error;

use crate::config::ConfigError;
use crate::validation::ValidationError;

/// Errors surfaced by building or solving a roster.
#[derive(Debug, Error)]
pub enum DutyError {
    /// The roster failed validation; the solver was not invoked.
    #[error("Invalid roster: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// The constraint set admits no assignment.
    #[error("No feasible assignment exists for this roster")]
    Infeasible,

    /// The time limit expired before the backend found any assignment.
    #[error("Time limit reached before a feasible assignment was found")]
    TimeLimit,

    /// The MIP backend failed or returned an inconsistent solution.
    #[error("Solver error: {0}")]
    Solver(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Export error: {0}")]
    Export(#[from] serde_json::Error),
}

impl From<Vec<ValidationError>> for DutyError {
    fn from(errors: Vec<ValidationError>) -> Self {
        DutyError::Validation(errors)
    }
}

impl DutyError {
    /// Process exit code for the command-line front end.
    ///
    /// | Error | Code |
    /// |-------|------|
    /// | `Infeasible` | 2 |
    /// | `TimeLimit` | 3 |
    /// | anything else | 1 |
    pub fn exit_code(&self) -> u8 {
        match self {
            DutyError::Infeasible => 2,
            DutyError::TimeLimit => 3,
            _ => 1,
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
