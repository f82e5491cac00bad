//! Slot calendar model.
//!
//! Defines the weekly grid of duty slots: every slot is a (day, period)
//! pair, and the calendar is the Cartesian product of its day and
//! period lists.
//!
//! # Ordering
//! Slots are enumerated days-outer, periods-inner. The slot index used
//! by the optimization model is the position in this enumeration, so
//! reports and solver variables share one stable order.

use serde::{Deserialize, Serialize};

/// A single schedulable (day, period) unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Day label (e.g. "Mon").
    pub day: String,
    /// Period label within the day (e.g. "2").
    pub period: String,
}

impl Slot {
    /// Creates a new slot.
    pub fn new(day: impl Into<String>, period: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            period: period.into(),
        }
    }

    /// Slot identifier: day label followed by period label ("Mon2").
    pub fn id(&self) -> String {
        format!("{}{}", self.day, self.period)
    }
}

/// Weekly slot grid (days × periods).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotCalendar {
    /// Day labels, in calendar order.
    pub days: Vec<String>,
    /// Period labels, in calendar order.
    pub periods: Vec<String>,
}

impl SlotCalendar {
    /// Creates a calendar from day and period labels.
    pub fn new<D, P>(days: D, periods: P) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            days: days.into_iter().map(Into::into).collect(),
            periods: periods.into_iter().map(Into::into).collect(),
        }
    }

    /// The Monday–Friday, periods 2–5 week (20 slots).
    pub fn weekday_periods() -> Self {
        Self::new(["Mon", "Tue", "Wed", "Thu", "Fri"], ["2", "3", "4", "5"])
    }

    /// All slots, days-outer and periods-inner.
    pub fn slots(&self) -> Vec<Slot> {
        self.days
            .iter()
            .flat_map(|d| self.periods.iter().map(move |p| Slot::new(d.as_str(), p.as_str())))
            .collect()
    }

    /// All slot identifiers in calendar order.
    pub fn slot_ids(&self) -> Vec<String> {
        self.slots().iter().map(Slot::id).collect()
    }

    /// Number of slots in the grid.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.days.len() * self.periods.len()
    }

    /// Position of a slot identifier in calendar order.
    pub fn index_of(&self, slot_id: &str) -> Option<usize> {
        self.slot_ids().iter().position(|id| id == slot_id)
    }
}

impl Default for SlotCalendar {
    fn default() -> Self {
        Self::weekday_periods()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_grid() {
        let cal = SlotCalendar::weekday_periods();
        assert_eq!(cal.slot_count(), 20);

        let ids = cal.slot_ids();
        assert_eq!(ids.len(), 20);
        assert_eq!(ids[0], "Mon2");
        assert_eq!(ids[3], "Mon5");
        assert_eq!(ids[4], "Tue2");
        assert_eq!(ids[19], "Fri5");
    }

    #[test]
    fn test_index_of() {
        let cal = SlotCalendar::weekday_periods();
        assert_eq!(cal.index_of("Mon2"), Some(0));
        assert_eq!(cal.index_of("Wed4"), Some(10));
        assert_eq!(cal.index_of("Sat2"), None);
    }

    #[test]
    fn test_slot_id() {
        let slot = Slot::new("Thu", "3");
        assert_eq!(slot.id(), "Thu3");
    }

    #[test]
    fn test_empty_calendar() {
        let cal = SlotCalendar::new(Vec::<String>::new(), ["1"]);
        assert_eq!(cal.slot_count(), 0);
        assert!(cal.slots().is_empty());
    }
}
