//! Preference scoring.
//!
//! Converts ordinal preference ranks into the integer weights used by
//! the objective. With `max_ranks = 5`:
//!
//! | Rank | 1 | 2 | 3 | 4 | 5 | unlisted |
//! |------|---|---|---|---|---|----------|
//! | Score | 5 | 4 | 3 | 2 | 1 | 0 |

use serde::{Deserialize, Serialize};

use super::Person;

/// Maximum number of ranks a person may list by default.
pub const DEFAULT_MAX_RANKS: usize = 5;

/// Rank-to-score mapping: rank `r` scores `max_ranks + 1 - r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreScale {
    /// Number of ranks that carry a positive score.
    pub max_ranks: usize,
}

impl ScoreScale {
    /// Creates a scale with the given number of ranks.
    pub fn new(max_ranks: usize) -> Self {
        Self { max_ranks }
    }

    /// Score for a 1-based rank. Ranks outside `1..=max_ranks` score 0.
    #[inline]
    pub fn score_for_rank(&self, rank: usize) -> u32 {
        if rank == 0 || rank > self.max_ranks {
            0
        } else {
            (self.max_ranks + 1 - rank) as u32
        }
    }
}

impl Default for ScoreScale {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RANKS)
    }
}

/// Fixed score matrix indexed by `[person][slot]`.
///
/// Built once from the roster; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceScores {
    scores: Vec<Vec<u32>>,
}

impl PreferenceScores {
    /// Scores every (person, slot) pair.
    ///
    /// `slot_ids` fixes the column order. Preferences naming a slot not in
    /// `slot_ids` contribute nothing; validation rejects them upstream.
    pub fn build(persons: &[Person], slot_ids: &[String], scale: ScoreScale) -> Self {
        let scores = persons
            .iter()
            .map(|person| {
                let mut row = vec![0; slot_ids.len()];
                for (i, pref) in person.preferences.iter().enumerate() {
                    if let Some(col) = slot_ids.iter().position(|s| s == pref) {
                        // First listing wins if a slot is repeated.
                        if row[col] == 0 {
                            row[col] = scale.score_for_rank(i + 1);
                        }
                    }
                }
                row
            })
            .collect();
        Self { scores }
    }

    /// Score of person `p` on slot `s`.
    #[inline]
    pub fn get(&self, p: usize, s: usize) -> u32 {
        self.scores[p][s]
    }

    /// Score row for one person.
    pub fn row(&self, p: usize) -> &[u32] {
        &self.scores[p]
    }

    /// Number of persons (rows).
    pub fn person_count(&self) -> usize {
        self.scores.len()
    }

    /// Number of slots (columns).
    pub fn slot_count(&self) -> usize {
        self.scores.first().map_or(0, Vec::len)
    }

    /// Total score of a person → slot-index mapping.
    pub fn total(&self, slot_of_person: &[usize]) -> u32 {
        slot_of_person
            .iter()
            .enumerate()
            .map(|(p, &s)| self.get(p, s))
            .sum()
    }

    /// Upper bound: every person on their best-scoring slot.
    pub fn max_total(&self) -> u32 {
        self.scores
            .iter()
            .map(|row| row.iter().copied().max().unwrap_or(0))
            .sum()
    }
}
