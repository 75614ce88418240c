use serde::{Deserialize, Serialize};

use crate::match_outcome::MatchOutcome;

/// A competitor's tournament record as supplied by the host application.
///
/// `final_score` is derived: ranking overwrites it every time it runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub name: String,
    /// Chronological match history.
    #[serde(default)]
    pub matches: Vec<MatchOutcome>,
    #[serde(default)]
    pub is_disqualified: bool,
    /// Points deducted before clamping. Kept signed so that a bad value from
    /// the data source is rejected by the calculator instead of wrapping.
    #[serde(default)]
    pub penalty_points: i32,
    #[serde(default)]
    pub final_score: u32,
}

impl Competitor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            matches: Vec::new(),
            is_disqualified: false,
            penalty_points: 0,
            final_score: 0,
        }
    }

    pub fn with_matches(mut self, matches: Vec<MatchOutcome>) -> Self {
        self.matches = matches;
        self
    }

    pub fn with_penalty(mut self, penalty_points: i32) -> Self {
        self.penalty_points = penalty_points;
        self
    }

    pub fn disqualified(mut self) -> Self {
        self.is_disqualified = true;
        self
    }

    /// Number of wins in the match history.
    pub fn wins(&self) -> usize {
        self.matches.iter().filter(|m| m.is_win()).count()
    }
}
