use serde::{Deserialize, Serialize};

/// Result of a single match from the competitor's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    pub fn is_win(self) -> bool {
        matches!(self, Self::Win)
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Win => "Win",
            Self::Draw => "Draw",
            Self::Loss => "Loss",
        };
        f.write_str(s)
    }
}
