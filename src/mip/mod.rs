//! Mixed-integer formulation and solving.
//!
//! [`DutyModelBuilder`] translates a [`Roster`](crate::models::Roster)
//! into a binary integer program; [`DutyModel::solve_with`] runs it on a
//! `good_lp` backend and extracts the [`Assignment`](crate::models::Assignment).
//!
//! The default backend is `good_lp::default_solver`, which is the
//! pure-Rust `microlp` branch-and-bound in the default build and HiGHS
//! with the `highs` feature.
//!
//! # Reference
//! - Wolsey (1998), "Integer Programming", Ch. 1 (assignment formulations)

mod builder;
mod solver;

pub use builder::{ConstraintKind, DutyModel, DutyModelBuilder};
