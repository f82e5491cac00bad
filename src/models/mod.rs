//! Duty rostering domain models.
//!
//! Provides the data types for a weekly duty-rostering instance and
//! its solution.
//!
//! | Type | Role |
//! |------|------|
//! | `Person` | Roster member with ranked slot preferences and an optional group |
//! | `Slot` / `SlotCalendar` | The weekly (day × period) grid |
//! | `ScoreScale` / `PreferenceScores` | Rank → objective weight |
//! | `Roster` | Complete static instance (persons, calendar, capacity, scale) |
//! | `Assignment` | Solver output: one slot per person |

mod assignment;
mod calendar;
mod person;
mod preference;
mod roster;

pub use assignment::{Assignment, NonPreferred, Placement, SolveStatus};
pub use calendar::{Slot, SlotCalendar};
pub use person::Person;
pub use preference::{PreferenceScores, ScoreScale, DEFAULT_MAX_RANKS};
pub use roster::{Group, Roster, SlotCapacity};
