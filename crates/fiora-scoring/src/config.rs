use std::path::Path;

use serde::{Deserialize, Serialize};

/// Environment variable naming an alternative rules file.
pub const CONFIG_ENV_VAR: &str = "FIORA_SCORING_CONFIG";
/// Rules file read when the environment variable is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config/scoring.toml";

/// Data-driven point values for the score calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Points for a win.
    pub win_points: i32,
    /// Points for a draw.
    pub draw_points: i32,
    /// Points for a loss.
    pub loss_points: i32,
    /// Consecutive wins needed to earn the streak bonus. 0 disables the bonus.
    pub streak_length: u32,
    /// Bonus awarded once per streak, at the moment it reaches `streak_length`.
    pub streak_bonus: i32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            win_points: 3,
            draw_points: 1,
            loss_points: 0,
            streak_length: 3,
            streak_bonus: 5,
        }
    }
}

impl ScoringRules {
    /// Load rules from `$FIORA_SCORING_CONFIG` or `config/scoring.toml`,
    /// falling back to defaults if the file is missing or unparseable.
    pub fn load() -> Self {
        let path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(path)
    }

    /// Load rules from a specific TOML file with the same fallback as [`Self::load`].
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(rules) => {
                    for problem in rules.validate() {
                        tracing::warn!(path = %path.display(), "{problem}");
                    }
                    rules
                },
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {e}, using defaults", path.display());
                    Self::default()
                },
            },
            Err(_) => Self::default(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Check the rules for values that are accepted but probably unintended.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.streak_length == 0 {
            problems.push("streak_length is 0, streak bonus is disabled".to_string());
        }
        for (key, value) in [
            ("win_points", self.win_points),
            ("draw_points", self.draw_points),
            ("loss_points", self.loss_points),
            ("streak_bonus", self.streak_bonus),
        ] {
            if value < 0 {
                problems.push(format!("{key} is negative ({value})"));
            }
        }
        if self.draw_points > self.win_points {
            problems.push(format!(
                "draw_points ({}) exceeds win_points ({})",
                self.draw_points, self.win_points
            ));
        }
        problems
    }
}
