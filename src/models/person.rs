//! Person model.
//!
//! A person is one member of the roster: an identifier, an ordered list
//! of preferred slots, and an optional group tag. Persons sharing a
//! group tag must be placed on the same slot.

use serde::{Deserialize, Serialize};

/// A roster member to be assigned to exactly one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique person identifier.
    pub id: String,
    /// Preferred slot IDs, most preferred first (rank 1).
    #[serde(default)]
    pub preferences: Vec<String>,
    /// Group tag. Persons with the same tag share a slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl Person {
    /// Creates a person with no preferences and no group.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            preferences: Vec::new(),
            group: None,
        }
    }

    /// Appends one preferred slot at the next rank.
    pub fn with_preference(mut self, slot_id: impl Into<String>) -> Self {
        self.preferences.push(slot_id.into());
        self
    }

    /// Replaces the preference list.
    pub fn with_preferences<I>(mut self, slot_ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.preferences = slot_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the group tag.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// 1-based rank of a slot in this person's preferences.
    pub fn rank_of(&self, slot_id: &str) -> Option<usize> {
        self.preferences
            .iter()
            .position(|s| s == slot_id)
            .map(|i| i + 1)
    }

    /// Whether the slot appears in this person's preferences.
    #[inline]
    pub fn prefers(&self, slot_id: &str) -> bool {
        self.rank_of(slot_id).is_some()
    }
}
