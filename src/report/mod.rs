//! Reporting on solved rosters.
//!
//! Renders the slot table and the non-preferred table, and computes
//! satisfaction KPIs. Reporting only reads an [`Assignment`]; it never
//! mutates it.
//!
//! [`Assignment`]: crate::models::Assignment

mod kpi;
mod table;

pub use kpi::RosterKpi;
pub use table::{non_preferred_table, render_json, render_report, slot_table};
