//! Assignment (solution) model.
//!
//! An assignment maps every person to exactly one slot. It is produced
//! once by the solver adapter and only read afterwards.

use serde::{Deserialize, Serialize};

use super::{Roster, SlotCalendar};

/// A complete person → slot assignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// One placement per person, in roster order.
    pub placements: Vec<Placement>,
    /// Slots flagged as used by the solver, in calendar order.
    pub used_slots: Vec<String>,
    /// Total preference score of the placements.
    pub total_score: u32,
    /// Whether the backend proved optimality or stopped at its time limit.
    #[serde(default)]
    pub status: SolveStatus,
}

/// How the backend finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    /// Proven optimal.
    #[default]
    Optimal,
    /// Best incumbent when the time limit was reached; may be suboptimal.
    TimeLimit,
    /// Best incumbent within the backend's relative MIP gap.
    GapLimit,
}

/// One person placed on one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Person ID.
    pub person_id: String,
    /// Assigned slot ID.
    pub slot_id: String,
    /// Score earned by this placement (0 if not preferred).
    pub score: u32,
}

/// A person placed outside their preference list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonPreferred {
    /// Person ID.
    pub person_id: String,
    /// Slot actually assigned.
    pub assigned: String,
    /// The person's full preference list.
    pub preferences: Vec<String>,
}

impl Placement {
    /// Creates a placement.
    pub fn new(person_id: impl Into<String>, slot_id: impl Into<String>, score: u32) -> Self {
        Self {
            person_id: person_id.into(),
            slot_id: slot_id.into(),
            score,
        }
    }
}

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a placement and accumulates its score.
    pub fn add_placement(&mut self, placement: Placement) {
        self.total_score += placement.score;
        self.placements.push(placement);
    }

    /// Number of placed persons.
    #[inline]
    pub fn person_count(&self) -> usize {
        self.placements.len()
    }

    /// Whether the assignment is proven optimal.
    #[inline]
    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }

    /// Whether no one is placed (empty roster).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Slot assigned to a person.
    pub fn slot_of(&self, person_id: &str) -> Option<&str> {
        self.placements
            .iter()
            .find(|p| p.person_id == person_id)
            .map(|p| p.slot_id.as_str())
    }

    /// Persons placed on a slot, in roster order.
    pub fn persons_in(&self, slot_id: &str) -> Vec<&str> {
        self.placements
            .iter()
            .filter(|p| p.slot_id == slot_id)
            .map(|p| p.person_id.as_str())
            .collect()
    }

    /// Occupied slots with their persons, in calendar order.
    pub fn by_slot(&self, calendar: &SlotCalendar) -> Vec<(String, Vec<&str>)> {
        calendar
            .slot_ids()
            .into_iter()
            .filter_map(|slot_id| {
                let persons = self.persons_in(&slot_id);
                if persons.is_empty() {
                    None
                } else {
                    Some((slot_id, persons))
                }
            })
            .collect()
    }

    /// Persons whose assigned slot is not in their preference list.
    pub fn non_preferred(&self, roster: &Roster) -> Vec<NonPreferred> {
        roster
            .persons
            .iter()
            .filter_map(|person| {
                let assigned = self.slot_of(&person.id)?;
                if person.prefers(assigned) {
                    None
                } else {
                    Some(NonPreferred {
                        person_id: person.id.clone(),
                        assigned: assigned.to_string(),
                        preferences: person.preferences.clone(),
                    })
                }
            })
            .collect()
    }
}
