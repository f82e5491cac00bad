//! Roster quality metrics (KPIs).
//!
//! Computes preference-satisfaction indicators from a solved
//! assignment and its roster.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total score | Σ preference score of each placement |
//! | Max score | Σ of each person's best score (ignores constraints) |
//! | First-choice count | Persons placed on their rank-1 slot |
//! | Preferred rate | Fraction placed on any listed slot |
//! | Used slots | Slots with at least one person |
//! | Avg occupancy | Persons per used slot |

use crate::models::{Assignment, Roster};

/// Assignment quality indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterKpi {
    /// Objective value of the assignment.
    pub total_score: u32,
    /// Unconstrained upper bound on the objective.
    pub max_score: u32,
    /// Persons on their first choice.
    pub first_choice_count: usize,
    /// Persons on any preferred slot.
    pub preferred_count: usize,
    /// Fraction of persons on a preferred slot (0.0..1.0).
    pub preferred_rate: f64,
    /// Number of occupied slots.
    pub used_slots: usize,
    /// Mean persons per occupied slot.
    pub avg_occupancy: f64,
}

impl RosterKpi {
    /// Computes KPIs from an assignment and its roster.
    pub fn calculate(assignment: &Assignment, roster: &Roster) -> Self {
        let mut first_choice_count = 0;
        let mut preferred_count = 0;

        for person in &roster.persons {
            let Some(slot) = assignment.slot_of(&person.id) else {
                continue;
            };
            match person.rank_of(slot) {
                Some(1) => {
                    first_choice_count += 1;
                    preferred_count += 1;
                }
                Some(_) => preferred_count += 1,
                None => {}
            }
        }

        let placed = assignment.person_count();
        let preferred_rate = if placed == 0 {
            1.0
        } else {
            preferred_count as f64 / placed as f64
        };

        let used_slots = assignment.by_slot(&roster.calendar).len();
        let avg_occupancy = if used_slots == 0 {
            0.0
        } else {
            placed as f64 / used_slots as f64
        };

        Self {
            total_score: assignment.total_score,
            max_score: roster.scores().max_total(),
            first_choice_count,
            preferred_count,
            preferred_rate,
            used_slots,
            avg_occupancy,
        }
    }

    /// Whether every person received a slot from their list.
    pub fn all_preferred(&self) -> bool {
        (self.preferred_rate - 1.0).abs() < 1e-10
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Person, Placement, SlotCalendar};

    fn make_roster() -> Roster {
        Roster::new(SlotCalendar::new(["S"], ["1", "2"])).with_persons([
            Person::new("A").with_preferences(["S1", "S2"]),
            Person::new("B").with_preferences(["S2", "S1"]),
            Person::new("C").with_preferences(["S2"]),
            Person::new("D").with_preferences(["S2"]),
        ])
    }

    #[test]
    fn test_kpi_basic() {
        let roster = make_roster();
        let mut asg = Assignment::new();
        asg.add_placement(Placement::new("A", "S1", 5));
        asg.add_placement(Placement::new("B", "S1", 4));
        asg.add_placement(Placement::new("C", "S2", 5));
        asg.add_placement(Placement::new("D", "S2", 5));

        let kpi = RosterKpi::calculate(&asg, &roster);
        assert_eq!(kpi.total_score, 19);
        assert_eq!(kpi.max_score, 20);
        assert_eq!(kpi.first_choice_count, 3);
        assert_eq!(kpi.preferred_count, 4);
        assert!(kpi.all_preferred());
        assert_eq!(kpi.used_slots, 2);
        assert!((kpi.avg_occupancy - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_non_preferred() {
        let roster = make_roster();
        let mut asg = Assignment::new();
        asg.add_placement(Placement::new("A", "S2", 4));
        asg.add_placement(Placement::new("B", "S2", 5));
        asg.add_placement(Placement::new("C", "S1", 0));
        asg.add_placement(Placement::new("D", "S1", 0));

        let kpi = RosterKpi::calculate(&asg, &roster);
        assert_eq!(kpi.preferred_count, 2);
        assert!((kpi.preferred_rate - 0.5).abs() < 1e-10);
        assert!(!kpi.all_preferred());
    }

    #[test]
    fn test_kpi_empty() {
        let roster = Roster::new(SlotCalendar::weekday_periods());
        let kpi = RosterKpi::calculate(&Assignment::new(), &roster);
        assert_eq!(kpi.total_score, 0);
        assert_eq!(kpi.used_slots, 0);
        assert!((kpi.avg_occupancy - 0.0).abs() < 1e-10);
        assert!(kpi.all_preferred());
    }
}
