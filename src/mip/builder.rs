//! Integer-program formulation of the duty roster.
//!
//! # Variables
//! - `assign[p][s]` binary: person `p` works slot `s`
//! - `used[s]` binary: slot `s` has at least one assignee
//!
//! # Objective
//! Maximize `Σ score[p][s] · assign[p][s]`.
//!
//! # Constraints
//! - Coverage: `Σ_s assign[p][s] = 1` for every person
//! - Capacity: `min · used[s] ≤ Σ_p assign[p][s] ≤ max · used[s]` for every slot
//! - Cohesion: `assign[m][s] = assign[ref][s]` for every group member `m`
//!   other than the group's reference member, for every slot
//!
//! The two capacity inequalities are the only link between `used` and
//! occupancy. An occupied slot violates the upper bound unless `used = 1`,
//! and an empty slot violates the lower bound unless `used = 0`.

use good_lp::{variable, Constraint, Expression, ProblemVariables, Variable};
use tracing::{debug, info};

use crate::models::{PreferenceScores, Roster};

/// Constraint families of the roster model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// Each person on exactly one slot.
    Coverage,
    /// Used slot holds at least `min_per_slot`.
    CapacityMin,
    /// Used slot holds at most `max_per_slot`; unused slot holds nobody.
    CapacityMax,
    /// Group members share a slot.
    Cohesion,
}

/// A fully built, unsolved roster model.
///
/// Owns the decision variables, objective and constraints. Consumed by
/// [`DutyModel::solve_with`](crate::mip::DutyModel::solve_with).
pub struct DutyModel {
    pub(crate) variables: ProblemVariables,
    pub(crate) assign: Vec<Vec<Variable>>,
    pub(crate) used: Vec<Variable>,
    pub(crate) objective: Expression,
    pub(crate) constraints: Vec<(ConstraintKind, Constraint)>,
    pub(crate) scores: PreferenceScores,
    pub(crate) person_ids: Vec<String>,
    pub(crate) slot_ids: Vec<String>,
}

impl DutyModel {
    /// Number of persons in the model.
    pub fn person_count(&self) -> usize {
        self.person_ids.len()
    }

    /// Number of slots in the model.
    pub fn slot_count(&self) -> usize {
        self.slot_ids.len()
    }

    /// Number of decision variables (`assign` plus `used`).
    pub fn variable_count(&self) -> usize {
        self.assign.iter().map(Vec::len).sum::<usize>() + self.used.len()
    }

    /// Total number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Number of constraints of one family.
    pub fn constraint_count_of(&self, kind: ConstraintKind) -> usize {
        self.constraints.iter().filter(|(k, _)| *k == kind).count()
    }

    /// Objective weights used by the model.
    pub fn scores(&self) -> &PreferenceScores {
        &self.scores
    }
}

/// Builds a [`DutyModel`] from a roster.
///
/// The builder performs no validation and never calls a solver; run
/// [`validate_roster`](crate::validation::validate_roster) first.
///
/// # Example
/// ```
/// use u_duty::mip::DutyModelBuilder;
/// use u_duty::models::{Person, Roster, SlotCalendar};
///
/// let roster = Roster::new(SlotCalendar::new(["S"], ["1", "2"]))
///     .with_person(Person::new("A").with_preferences(["S1", "S2"]))
///     .with_person(Person::new("B").with_preference("S1"));
/// let model = DutyModelBuilder::new(&roster).build();
/// assert_eq!(model.variable_count(), 2 * 2 + 2);
/// ```
pub struct DutyModelBuilder<'a> {
    roster: &'a Roster,
}

impl<'a> DutyModelBuilder<'a> {
    /// Creates a builder over a roster.
    pub fn new(roster: &'a Roster) -> Self {
        Self { roster }
    }

    /// Builds the model.
    pub fn build(&self) -> DutyModel {
        let roster = self.roster;
        let slot_ids = roster.slot_ids();
        let scores = roster.scores();
        let n_persons = roster.person_count();
        let n_slots = slot_ids.len();

        let mut variables = ProblemVariables::new();

        let mut assign = Vec::with_capacity(n_persons);
        for _ in 0..n_persons {
            let mut row = Vec::with_capacity(n_slots);
            for _ in 0..n_slots {
                row.push(variables.add(variable().binary()));
            }
            assign.push(row);
        }

        let mut used = Vec::with_capacity(n_slots);
        for _ in 0..n_slots {
            used.push(variables.add(variable().binary()));
        }

        // Objective: unlisted slots score 0 and are left out.
        let mut objective = Expression::with_capacity(n_persons * n_slots);
        for (p, row) in assign.iter().enumerate() {
            for (s, &var) in row.iter().enumerate() {
                let score = scores.get(p, s);
                if score > 0 {
                    objective.add_mul(f64::from(score), var);
                }
            }
        }

        let mut constraints = Vec::new();

        for row in &assign {
            constraints.push((ConstraintKind::Coverage, sum_of(row.iter().copied()).eq(1.0)));
        }

        let min = roster.capacity.min_per_slot as f64;
        let max = roster.capacity.max_per_slot as f64;
        for (s, &used_s) in used.iter().enumerate() {
            let load = sum_of(assign.iter().map(|row| row[s]));
            constraints.push((ConstraintKind::CapacityMin, load.clone().geq(min * used_s)));
            constraints.push((ConstraintKind::CapacityMax, load.leq(max * used_s)));
        }

        for group in roster.groups() {
            let Some(reference) = group.reference() else {
                continue;
            };
            debug!(group = %group.id, members = group.size(), "tying group members");
            for &member in &group.members[1..] {
                for s in 0..n_slots {
                    constraints.push((
                        ConstraintKind::Cohesion,
                        Expression::from(assign[member][s]).eq(assign[reference][s]),
                    ));
                }
            }
        }

        let model = DutyModel {
            variables,
            assign,
            used,
            objective,
            constraints,
            scores,
            person_ids: roster.persons.iter().map(|p| p.id.clone()).collect(),
            slot_ids,
        };

        info!(
            event = "model_built",
            persons = n_persons,
            slots = n_slots,
            variables = model.variable_count(),
            constraints = model.constraint_count(),
        );

        model
    }
}

fn sum_of(vars: impl IntoIterator<Item = Variable>) -> Expression {
    let mut expr = Expression::default();
    for var in vars {
        expr.add_mul(1.0, var);
    }
    expr
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Person, SlotCalendar};

    fn make_roster() -> Roster {
        Roster::new(SlotCalendar::new(["Mon", "Tue"], ["1", "2"])).with_persons([
            Person::new("A").with_preferences(["Mon1", "Tue2"]).with_group("G1"),
            Person::new("B").with_preferences(["Tue1"]).with_group("G1"),
            Person::new("C").with_preferences(["Mon2"]).with_group("G1"),
            Person::new("D").with_preferences(["Mon1"]),
            Person::new("E").with_preferences(["Tue2"]).with_group("solo"),
        ])
    }

    #[test]
    fn test_variable_count() {
        let roster = make_roster();
        let model = DutyModelBuilder::new(&roster).build();

        assert_eq!(model.person_count(), 5);
        assert_eq!(model.slot_count(), 4);
        // 5 × 4 assign + 4 used
        assert_eq!(model.variable_count(), 24);
    }

    #[test]
    fn test_constraint_families() {
        let roster = make_roster();
        let model = DutyModelBuilder::new(&roster).build();

        assert_eq!(model.constraint_count_of(ConstraintKind::Coverage), 5);
        assert_eq!(model.constraint_count_of(ConstraintKind::CapacityMin), 4);
        assert_eq!(model.constraint_count_of(ConstraintKind::CapacityMax), 4);
        // G1 has 3 members → 2 ties per slot; "solo" adds none
        assert_eq!(model.constraint_count_of(ConstraintKind::Cohesion), 2 * 4);
        assert_eq!(model.constraint_count(), 5 + 4 + 4 + 8);
    }

    #[test]
    fn test_scores_carried_into_model() {
        let roster = make_roster();
        let model = DutyModelBuilder::new(&roster).build();

        assert_eq!(model.scores().row(0), &[5, 0, 0, 4]);
        assert_eq!(model.scores().max_total(), 25);
    }

    #[test]
    fn test_empty_roster_model() {
        let roster = Roster::new(SlotCalendar::weekday_periods());
        let model = DutyModelBuilder::new(&roster).build();

        assert_eq!(model.variable_count(), 20);
        assert_eq!(model.constraint_count_of(ConstraintKind::Coverage), 0);
        assert_eq!(model.constraint_count_of(ConstraintKind::CapacityMin), 20);
    }
}
