//! Plain-text report tables.

use super::RosterKpi;
use crate::error::DutyError;
use crate::models::{Assignment, Roster};

/// Renders occupied slots with their comma-joined persons, in calendar order.
pub fn slot_table(assignment: &Assignment, roster: &Roster) -> String {
    let rows: Vec<Vec<String>> = assignment
        .by_slot(&roster.calendar)
        .into_iter()
        .map(|(slot, persons)| vec![slot, persons.join(", ")])
        .collect();
    render(&["Slot", "Persons"], &rows)
}

/// Renders persons placed outside their preferences.
///
/// Returns `None` when everyone received a listed slot.
pub fn non_preferred_table(assignment: &Assignment, roster: &Roster) -> Option<String> {
    let rows: Vec<Vec<String>> = assignment
        .non_preferred(roster)
        .into_iter()
        .map(|np| vec![np.person_id, np.assigned, np.preferences.join(", ")])
        .collect();
    if rows.is_empty() {
        None
    } else {
        Some(render(&["Person", "Assigned", "Preferences"], &rows))
    }
}

/// Full report: slot table, non-preferred table and score summary.
pub fn render_report(assignment: &Assignment, roster: &Roster) -> String {
    let kpi = RosterKpi::calculate(assignment, roster);
    let mut out = String::from("[Slot assignments]\n");
    out.push_str(&slot_table(assignment, roster));

    out.push('\n');
    match non_preferred_table(assignment, roster) {
        Some(table) => {
            out.push_str("[Assigned outside preferences]\n");
            out.push_str(&table);
        }
        None => out.push_str("Everyone was assigned a preferred slot.\n"),
    }

    out.push('\n');
    out.push_str(&format!(
        "Score {} / {} | first choice {} | preferred {}/{} | {} slots, {:.1} per slot\n",
        kpi.total_score,
        kpi.max_score,
        kpi.first_choice_count,
        kpi.preferred_count,
        assignment.person_count(),
        kpi.used_slots,
        kpi.avg_occupancy,
    ));
    if !assignment.is_optimal() {
        out.push_str(&format!(
            "Stopped early ({:?}); the assignment may not be optimal.\n",
            assignment.status
        ));
    }
    out
}

/// Pretty-printed JSON of the assignment.
pub fn render_json(assignment: &Assignment) -> Result<String, DutyError> {
    Ok(serde_json::to_string_pretty(assignment)?)
}

/// Left-aligned columns separated by two spaces.
fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    for row in std::iter::once(&header).chain(rows) {
        let last = row.len().saturating_sub(1);
        for (i, (cell, &w)) in row.iter().zip(&widths).enumerate() {
            if i == last {
                out.push_str(cell);
            } else {
                out.push_str(&format!("{cell:<w$}  "));
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Person, Placement, SlotCalendar, SolveStatus};

    fn sample() -> (Roster, Assignment) {
        let roster = Roster::new(SlotCalendar::new(["Mon", "Tue"], ["2", "3"])).with_persons([
            Person::new("A").with_preferences(["Tue2"]),
            Person::new("B").with_preferences(["Tue2", "Mon2"]),
            Person::new("C").with_preferences(["Mon3", "Tue3"]),
        ]);
        let mut asg = Assignment::new();
        asg.add_placement(Placement::new("A", "Tue2", 5));
        asg.add_placement(Placement::new("B", "Tue2", 5));
        asg.add_placement(Placement::new("C", "Tue2", 0));
        (roster, asg)
    }

    #[test]
    fn test_slot_table() {
        let (roster, asg) = sample();
        let table = slot_table(&asg, &roster);
        assert_eq!(table, "Slot  Persons\nTue2  A, B, C\n");
    }

    #[test]
    fn test_non_preferred_table() {
        let (roster, asg) = sample();
        let table = non_preferred_table(&asg, &roster).unwrap();
        assert_eq!(
            table,
            "Person  Assigned  Preferences\nC       Tue2      Mon3, Tue3\n"
        );
    }

    #[test]
    fn test_report_all_preferred() {
        let roster = Roster::new(SlotCalendar::new(["S"], ["1"])).with_persons([
            Person::new("A").with_preferences(["S1"]),
            Person::new("B").with_preferences(["S1"]),
        ]);
        let mut asg = Assignment::new();
        asg.add_placement(Placement::new("A", "S1", 5));
        asg.add_placement(Placement::new("B", "S1", 5));

        assert!(non_preferred_table(&asg, &roster).is_none());
        let report = render_report(&asg, &roster);
        assert!(report.contains("Everyone was assigned a preferred slot."));
        assert!(report.contains("Score 10 / 10"));
    }

    #[test]
    fn test_report_sections() {
        let (roster, asg) = sample();
        let report = render_report(&asg, &roster);
        assert!(report.starts_with("[Slot assignments]\n"));
        assert!(report.contains("[Assigned outside preferences]"));
        assert!(report.contains("preferred 2/3"));
    }

    #[test]
    fn test_report_flags_time_limit() {
        let (roster, mut asg) = sample();
        assert!(!render_report(&asg, &roster).contains("Stopped early"));

        asg.status = SolveStatus::TimeLimit;
        let report = render_report(&asg, &roster);
        assert!(report.ends_with("Stopped early (TimeLimit); the assignment may not be optimal.\n"));
    }

    #[test]
    fn test_render_json() {
        let (_, mut asg) = sample();
        asg.used_slots = vec!["Tue2".into()];
        let json = render_json(&asg).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_score"], 10);
        assert_eq!(value["status"], "optimal");
        assert_eq!(value["used_slots"][0], "Tue2");
        assert_eq!(value["placements"][2]["person_id"], "C");
        assert_eq!(value["placements"][2]["score"], 0);
        assert!(json.contains('\n'));
    }
}
