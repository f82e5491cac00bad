//! Input validation for rostering problems.
//!
//! Checks structural integrity of the roster before a model is built.
//! Detects:
//! - Duplicate person or slot IDs
//! - Persons without preferences, or with more than the scale ranks
//! - Preferences naming slots outside the calendar, or listed twice
//! - Inconsistent staffing bounds
//! - Groups too large to ever fit in one slot
//!
//! Unknown slots are rejected rather than scored as zero, so data
//! entry mistakes do not silently degrade the objective.

use crate::models::Roster;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two persons or two slots share the same ID.
    DuplicateId,
    /// A person lists no preferred slots.
    EmptyPreferences,
    /// A person lists more preferences than the scale ranks.
    TooManyPreferences,
    /// A preference names a slot not in the calendar.
    UnknownSlot,
    /// A person lists the same slot twice.
    DuplicatePreference,
    /// Staffing bounds are empty or inverted.
    InvalidCapacity,
    /// A group has more members than a slot can hold.
    DegenerateGroup,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a roster.
///
/// Checks:
/// 1. No duplicate slot IDs in the calendar
/// 2. No duplicate person IDs
/// 3. Staffing bounds satisfy `1 <= min <= max`
/// 4. Every person has between 1 and `max_ranks` preferences
/// 5. Every preference names a calendar slot, at most once per person
/// 6. No group exceeds `max_per_slot` members
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(roster: &Roster) -> ValidationResult {
    let mut errors = Vec::new();

    let mut slot_ids = HashSet::new();
    for id in roster.slot_ids() {
        if !slot_ids.insert(id.clone()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate slot ID: {id}"),
            ));
        }
    }

    let cap = roster.capacity;
    if cap.min_per_slot == 0 || cap.min_per_slot > cap.max_per_slot {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCapacity,
            format!(
                "Invalid slot capacity: min {} / max {}",
                cap.min_per_slot, cap.max_per_slot
            ),
        ));
    }

    let max_ranks = roster.scale.max_ranks;
    let mut person_ids = HashSet::new();
    for person in &roster.persons {
        if !person_ids.insert(person.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate person ID: {}", person.id),
            ));
        }

        if person.preferences.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyPreferences,
                format!("Person '{}' has no preferences", person.id),
            ));
        }

        if person.preferences.len() > max_ranks {
            errors.push(ValidationError::new(
                ValidationErrorKind::TooManyPreferences,
                format!(
                    "Person '{}' lists {} preferences (max {max_ranks})",
                    person.id,
                    person.preferences.len()
                ),
            ));
        }

        let mut seen = HashSet::new();
        for pref in &person.preferences {
            if !slot_ids.contains(pref) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSlot,
                    format!("Person '{}' prefers unknown slot '{pref}'", person.id),
                ));
            }
            if !seen.insert(pref.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicatePreference,
                    format!("Person '{}' lists slot '{pref}' more than once", person.id),
                ));
            }
        }
    }

    for group in roster.groups() {
        if group.size() > cap.max_per_slot {
            errors.push(ValidationError::new(
                ValidationErrorKind::DegenerateGroup,
                format!(
                    "Group '{}' has {} members but a slot holds at most {}",
                    group.id,
                    group.size(),
                    cap.max_per_slot
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
