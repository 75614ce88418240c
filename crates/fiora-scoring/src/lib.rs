pub mod config;
pub mod scoring;
pub mod streak;

pub use config::ScoringRules;
pub use scoring::{ScoreBreakdown, ScoreCalculator, ScoreOptions, calculate_score};
