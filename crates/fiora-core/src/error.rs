/// Validation failures raised by the score calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    /// No match list was supplied.
    NullMatches,
    /// A negative penalty was supplied.
    NegativePenalty { penalty_points: i32 },
}

impl ScoreError {
    /// Name of the argument that failed validation.
    pub fn param(&self) -> &'static str {
        match self {
            Self::NullMatches => "matches",
            Self::NegativePenalty { .. } => "penaltyPoints",
        }
    }
}

impl std::fmt::Display for ScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NullMatches => write!(f, "Match list cannot be null. (Parameter 'matches')"),
            Self::NegativePenalty { penalty_points } => write!(
                f,
                "Penalty points cannot be negative. (Parameter 'penaltyPoints', got {penalty_points})"
            ),
        }
    }
}

impl std::error::Error for ScoreError {}
