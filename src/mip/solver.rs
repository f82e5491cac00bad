//! Solver adapter.
//!
//! Runs an exact MIP backend (any `good_lp::Solver`) against a
//! [`DutyModel`] and reads the result back into an [`Assignment`].
//!
//! Variable values are read with a 0.5 threshold: LP-based
//! branch-and-bound returns binaries as floats that may sit a few ulps
//! away from 0 or 1.
//!
//! # Time limits
//! [`DutyModel::solve`] applies a wall-clock limit on HiGHS (`highs`
//! feature). A run stopped by the limit returns its best incumbent with
//! [`SolveStatus::TimeLimit`]; a run stopped before any incumbent is
//! [`DutyError::TimeLimit`]. The pure-Rust `microlp` backend has no
//! limit and always solves to optimality.

use std::time::{Duration, Instant};

use good_lp::{ResolutionError, Solution, SolutionStatus, Solver, SolverModel};
use tracing::{info, warn};

use super::DutyModel;
use crate::error::DutyError;
use crate::models::{Assignment, Placement, SolveStatus};

const SELECTED: f64 = 0.5;

impl DutyModel {
    /// Solves the model once with the crate's backend.
    ///
    /// `time_limit` is applied on HiGHS and logged as unsupported on
    /// `microlp`.
    pub fn solve(self, time_limit: Option<Duration>) -> Result<Assignment, DutyError> {
        #[cfg(feature = "highs")]
        let outcome = {
            use good_lp::WithTimeLimit;
            self.solve_configured(good_lp::solvers::highs::highs, move |problem| {
                match time_limit {
                    Some(limit) => problem.with_time_limit(limit.as_secs_f64()),
                    None => problem,
                }
            })
        };

        #[cfg(not(feature = "highs"))]
        let outcome = {
            if let Some(limit) = time_limit {
                warn!(?limit, "microlp has no time limit; solving to optimality");
            }
            self.solve_configured(good_lp::solvers::microlp::microlp, |problem| problem)
        };

        outcome
    }

    /// Solves the model once with the given backend and no time limit.
    ///
    /// # Errors
    /// - [`DutyError::Infeasible`] if the backend proves no assignment exists
    /// - [`DutyError::Solver`] for any other backend failure, or if the
    ///   returned values do not place every person on exactly one slot
    pub fn solve_with<S>(self, backend: S) -> Result<Assignment, DutyError>
    where
        S: Solver,
        S::Model: SolverModel<Error = ResolutionError>,
    {
        self.solve_configured(backend, |problem| problem)
    }

    fn solve_configured<S, F>(self, backend: S, configure: F) -> Result<Assignment, DutyError>
    where
        S: Solver,
        S::Model: SolverModel<Error = ResolutionError>,
        F: FnOnce(S::Model) -> S::Model,
    {
        if self.person_ids.is_empty() {
            info!(event = "solve_skipped", reason = "empty roster");
            return Ok(Assignment::new());
        }
        if self.slot_ids.is_empty() {
            warn!(event = "solve_skipped", reason = "no slots");
            return Err(DutyError::Infeasible);
        }

        let started = Instant::now();
        let DutyModel {
            variables,
            assign,
            used,
            objective,
            constraints,
            scores,
            person_ids,
            slot_ids,
        } = self;

        let mut problem = variables.maximise(objective).using(backend);
        for (_, constraint) in constraints {
            problem.add_constraint(constraint);
        }
        let problem = configure(problem);

        let solution = match problem.solve() {
            Ok(solution) => solution,
            Err(ResolutionError::Infeasible) => {
                warn!(event = "solve_end", status = "infeasible");
                return Err(DutyError::Infeasible);
            }
            Err(e) => {
                warn!(event = "solve_end", status = "error", error = %e);
                return Err(DutyError::Solver(e.to_string()));
            }
        };

        let status = solve_status(solution.status());
        let mut assignment = Assignment::new();
        assignment.status = status;
        for (p, row) in assign.iter().enumerate() {
            let selected: Vec<usize> = row
                .iter()
                .enumerate()
                .filter(|(_, var)| solution.value(**var) > SELECTED)
                .map(|(s, _)| s)
                .collect();
            let &[s] = selected.as_slice() else {
                if status != SolveStatus::Optimal {
                    warn!(event = "solve_end", status = ?status, "stopped without incumbent");
                    return Err(DutyError::TimeLimit);
                }
                return Err(DutyError::Solver(format!(
                    "person '{}' selected on {} slots",
                    person_ids[p],
                    selected.len()
                )));
            };
            assignment.add_placement(Placement::new(
                person_ids[p].as_str(),
                slot_ids[s].as_str(),
                scores.get(p, s),
            ));
        }

        assignment.used_slots = used
            .iter()
            .zip(&slot_ids)
            .filter(|(var, _)| solution.value(**var) > SELECTED)
            .map(|(_, id)| id.clone())
            .collect();

        info!(
            event = "solve_end",
            status = ?status,
            total_score = assignment.total_score,
            used_slots = assignment.used_slots.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
        );

        Ok(assignment)
    }
}

fn solve_status(status: SolutionStatus) -> SolveStatus {
    match status {
        SolutionStatus::Optimal => SolveStatus::Optimal,
        SolutionStatus::TimeLimit => SolveStatus::TimeLimit,
        SolutionStatus::GapLimit => SolveStatus::GapLimit,
    }
}
