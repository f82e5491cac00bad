//! Roster configuration.
//!
//! Loads a complete rostering instance (calendar, staffing bounds,
//! scoring scale, solver settings and persons) from TOML or JSON so
//! that instances can be swapped without code changes.
//!
//! # Example
//!
//! ```
//! use u_duty::config::RosterConfig;
//!
//! let config = RosterConfig::from_toml_str(r#"
//!     [calendar]
//!     days = ["Mon", "Tue"]
//!     periods = ["1", "2"]
//!
//!     [capacity]
//!     min_per_slot = 2
//!     max_per_slot = 3
//!
//!     [[persons]]
//!     id = "A"
//!     preferences = ["Mon1", "Tue2"]
//!     group = "G1"
//! "#).unwrap();
//!
//! assert_eq!(config.calendar.slot_count(), 4);
//! assert_eq!(config.scoring.max_ranks, 5);
//! assert_eq!(config.persons.len(), 1);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Person, Roster, ScoreScale, SlotCalendar, SlotCapacity};

const REFERENCE_INSTANCE: &str = include_str!("../data/reference.toml");

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// A complete rostering instance.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RosterConfig {
    /// Slot grid.
    #[serde(default)]
    pub calendar: SlotCalendar,

    /// Staffing bounds for a used slot.
    #[serde(default)]
    pub capacity: SlotCapacity,

    /// Rank-to-score mapping.
    #[serde(default)]
    pub scoring: ScoreScale,

    /// Solver settings.
    #[serde(default)]
    pub solver: SolverSettings,

    /// Persons to assign, in roster order.
    #[serde(default)]
    pub persons: Vec<Person>,
}

/// Solver settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SolverSettings {
    /// Wall-clock limit for backends that support one.
    #[serde(default)]
    pub time_limit_secs: Option<u64>,
}

impl SolverSettings {
    /// Time limit as a duration.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_secs.map(Duration::from_secs)
    }
}

impl RosterConfig {
    /// Loads configuration from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&contents),
            Some("json") => Self::from_json_str(&contents),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Parses configuration from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// The built-in 20-person weekly instance.
    pub fn reference() -> Result<Self, ConfigError> {
        Self::from_toml_str(REFERENCE_INSTANCE)
    }

    /// Builds the roster described by this configuration.
    pub fn roster(&self) -> Roster {
        Roster::new(self.calendar.clone())
            .with_persons(self.persons.iter().cloned())
            .with_capacity(self.capacity)
            .with_scale(self.scoring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RosterConfig::from_toml_str("").unwrap();
        assert_eq!(config.calendar, SlotCalendar::weekday_periods());
        assert_eq!(config.capacity, SlotCapacity::new(2, 5));
        assert_eq!(config.scoring.max_ranks, 5);
        assert_eq!(config.solver.time_limit(), None);
        assert!(config.persons.is_empty());
    }

    #[test]
    fn test_reference_instance() {
        let config = RosterConfig::reference().unwrap();
        assert_eq!(config.persons.len(), 20);
        assert_eq!(config.calendar.slot_count(), 20);

        let roster = config.roster();
        let groups = roster.groups();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[2].id, "G3");
        assert_eq!(groups[2].size(), 3);
        assert!(crate::validation::validate_roster(&roster).is_ok());
    }

    #[test]
    fn test_solver_time_limit() {
        let config = RosterConfig::from_toml_str(
            r#"
            [solver]
            time_limit_secs = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.solver.time_limit(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_from_json() {
        let config = RosterConfig::from_json_str(
            r#"{
                "calendar": { "days": ["S"], "periods": ["1", "2"] },
                "persons": [
                    { "id": "A", "preferences": ["S1", "S2"] },
                    { "id": "B", "preferences": ["S1"], "group": "G" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(config.calendar.slot_ids(), vec!["S1", "S2"]);
        assert_eq!(config.persons[1].group.as_deref(), Some("G"));
    }

    #[test]
    fn test_load_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[[persons]]\nid = \"A\"\npreferences = [\"Mon2\"]").unwrap();
        let config = RosterConfig::load(file.path()).unwrap();
        assert_eq!(config.persons[0].id, "A");

        let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        let err = RosterConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(ext) if ext == "yaml"));
    }

    #[test]
    fn test_missing_file() {
        let err = RosterConfig::load("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            RosterConfig::from_toml_str("[calendar\n"),
            Err(ConfigError::Toml(_))
        ));
    }
}
