//! Weekly duty rostering for the U-Engine ecosystem.
//!
//! Assigns a roster of persons to (day, period) duty slots so that total
//! preference satisfaction is maximal, subject to per-slot staffing
//! bounds and group cohesion. The problem is solved exactly as a binary
//! integer program.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Person`, `Slot`, `SlotCalendar`,
//!   `Roster`, `PreferenceScores`, `Assignment`
//! - **`config`**: TOML/JSON instance loading and the reference instance
//! - **`validation`**: Input integrity checks (duplicate IDs, unknown slots,
//!   oversized groups)
//! - **`mip`**: Model builder and solver adapter over `good_lp`
//! - **`report`**: Slot tables and satisfaction KPIs
//!
//! # Example
//!
//! ```
//! use u_duty::models::{Person, Roster, SlotCalendar};
//!
//! let roster = Roster::new(SlotCalendar::new(["S"], ["1", "2"]))
//!     .with_person(Person::new("A").with_preferences(["S1", "S2"]))
//!     .with_person(Person::new("B").with_preference("S1"));
//!
//! let assignment = u_duty::solve(&roster).unwrap();
//! assert_eq!(assignment.slot_of("A"), Some("S1"));
//! assert_eq!(assignment.slot_of("B"), Some("S1"));
//! ```

pub mod config;
pub mod error;
pub mod mip;
pub mod models;
pub mod report;
pub mod validation;

pub use error::DutyError;

use std::time::Duration;

use good_lp::{ResolutionError, Solver, SolverModel};

use config::RosterConfig;
use mip::DutyModelBuilder;
use models::{Assignment, Roster};

/// Validates, builds and solves a roster with the default backend.
pub fn solve(roster: &Roster) -> Result<Assignment, DutyError> {
    solve_within(roster, None)
}

/// Validates, builds and solves a roster, stopping the backend after
/// `time_limit` when it supports one.
///
/// A run cut short returns its best incumbent with a non-optimal
/// [`models::SolveStatus`].
///
/// # Errors
/// As [`solve_with`], plus [`DutyError::TimeLimit`] if the limit expires
/// before any assignment is found.
pub fn solve_within(
    roster: &Roster,
    time_limit: Option<Duration>,
) -> Result<Assignment, DutyError> {
    validation::validate_roster(roster)?;
    DutyModelBuilder::new(roster).build().solve(time_limit)
}

/// Builds the roster described by `config` and solves it under the
/// configured solver settings.
pub fn solve_config(config: &RosterConfig) -> Result<(Roster, Assignment), DutyError> {
    let roster = config.roster();
    let assignment = solve_within(&roster, config.solver.time_limit())?;
    Ok((roster, assignment))
}

/// Validates, builds and solves a roster with the given backend.
///
/// # Errors
/// - [`DutyError::Validation`] before any solver work if the roster is malformed
/// - [`DutyError::Infeasible`] if no assignment satisfies the constraints
/// - [`DutyError::Solver`] on backend failure
pub fn solve_with<S>(roster: &Roster, backend: S) -> Result<Assignment, DutyError>
where
    S: Solver,
    S::Model: SolverModel<Error = ResolutionError>,
{
    validation::validate_roster(roster)?;
    DutyModelBuilder::new(roster).build().solve_with(backend)
}
