//! Roster: the complete static problem instance.
//!
//! Bundles persons, the slot calendar, per-slot staffing bounds and the
//! rank scoring scale. A roster is built once and handed to the model
//! builder; it holds no solver state, so the same roster can be solved
//! repeatedly or varied in parameter sweeps.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Person, PreferenceScores, ScoreScale, SlotCalendar};

/// Staffing bounds for a used slot.
///
/// An unused slot holds nobody; a used slot holds between
/// `min_per_slot` and `max_per_slot` persons inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCapacity {
    /// Minimum occupancy of a used slot.
    pub min_per_slot: usize,
    /// Maximum occupancy of a used slot.
    pub max_per_slot: usize,
}

impl SlotCapacity {
    /// Creates capacity bounds.
    pub fn new(min_per_slot: usize, max_per_slot: usize) -> Self {
        Self {
            min_per_slot,
            max_per_slot,
        }
    }

    /// Whether `count` persons is an admissible occupancy (0 or min..=max).
    #[inline]
    pub fn admits(&self, count: usize) -> bool {
        count == 0 || (self.min_per_slot..=self.max_per_slot).contains(&count)
    }
}

impl Default for SlotCapacity {
    fn default() -> Self {
        Self::new(2, 5)
    }
}

/// A group of persons that must share a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Group tag.
    pub id: String,
    /// Member indices into `Roster::persons`, in roster order.
    pub members: Vec<usize>,
}

impl Group {
    /// The member every other member is tied to.
    #[inline]
    pub fn reference(&self) -> Option<usize> {
        self.members.first().copied()
    }

    /// Number of members.
    #[inline]
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

/// Static problem instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    /// Persons to assign, in roster order.
    pub persons: Vec<Person>,
    /// Slot grid.
    pub calendar: SlotCalendar,
    /// Staffing bounds per used slot.
    pub capacity: SlotCapacity,
    /// Rank-to-score mapping.
    pub scale: ScoreScale,
}

impl Roster {
    /// Creates an empty roster on the given calendar with default bounds.
    pub fn new(calendar: SlotCalendar) -> Self {
        Self {
            persons: Vec::new(),
            calendar,
            capacity: SlotCapacity::default(),
            scale: ScoreScale::default(),
        }
    }

    /// Adds a person.
    pub fn with_person(mut self, person: Person) -> Self {
        self.persons.push(person);
        self
    }

    /// Adds several persons.
    pub fn with_persons(mut self, persons: impl IntoIterator<Item = Person>) -> Self {
        self.persons.extend(persons);
        self
    }

    /// Sets the staffing bounds.
    pub fn with_capacity(mut self, capacity: SlotCapacity) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the scoring scale.
    pub fn with_scale(mut self, scale: ScoreScale) -> Self {
        self.scale = scale;
        self
    }

    /// Number of persons.
    #[inline]
    pub fn person_count(&self) -> usize {
        self.persons.len()
    }

    /// Finds a person's index by ID.
    pub fn person_index(&self, id: &str) -> Option<usize> {
        self.persons.iter().position(|p| p.id == id)
    }

    /// Slot IDs in calendar order.
    pub fn slot_ids(&self) -> Vec<String> {
        self.calendar.slot_ids()
    }

    /// Groups keyed by tag, members in roster order.
    ///
    /// Includes single-member groups; those impose no constraint.
    pub fn groups(&self) -> Vec<Group> {
        let mut by_tag: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (idx, person) in self.persons.iter().enumerate() {
            if let Some(tag) = person.group.as_deref() {
                by_tag.entry(tag).or_default().push(idx);
            }
        }
        by_tag
            .into_iter()
            .map(|(id, members)| Group {
                id: id.to_string(),
                members,
            })
            .collect()
    }

    /// Score matrix for this roster.
    pub fn scores(&self) -> PreferenceScores {
        PreferenceScores::build(&self.persons, &self.slot_ids(), self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_slot_calendar() -> SlotCalendar {
        SlotCalendar::new(["S"], ["1", "2"])
    }

    #[test]
    fn test_capacity_admits() {
        let cap = SlotCapacity::default();
        assert!(cap.admits(0));
        assert!(!cap.admits(1));
        assert!(cap.admits(2));
        assert!(cap.admits(5));
        assert!(!cap.admits(6));
    }

    #[test]
    fn test_groups_in_roster_order() {
        let roster = Roster::new(two_slot_calendar()).with_persons([
            Person::new("A").with_group("G2"),
            Person::new("B"),
            Person::new("C").with_group("G1"),
            Person::new("D").with_group("G2"),
            Person::new("E").with_group("G1"),
        ]);

        let groups = roster.groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].id, "G1");
        assert_eq!(groups[0].members, vec![2, 4]);
        assert_eq!(groups[1].id, "G2");
        assert_eq!(groups[1].members, vec![0, 3]);
        assert_eq!(groups[1].reference(), Some(0));
    }

    #[test]
    fn test_person_index() {
        let roster = Roster::new(two_slot_calendar())
            .with_person(Person::new("A"))
            .with_person(Person::new("B"));
        assert_eq!(roster.person_index("B"), Some(1));
        assert_eq!(roster.person_index("Z"), None);
    }

    #[test]
    fn test_scores_follow_calendar_order() {
        let roster = Roster::new(two_slot_calendar())
            .with_person(Person::new("A").with_preferences(["S2", "S1"]));
        let scores = roster.scores();
        assert_eq!(scores.row(0), &[4, 5]);
    }
}
