use serde::Serialize;

use fiora_core::competitor::Competitor;
use fiora_core::error::ScoreError;
use fiora_core::match_outcome::MatchOutcome;

use crate::config::ScoringRules;

/// Per-call adjustments applied on top of the match history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreOptions {
    /// Forces the final score to 0. Defaults to `false`.
    pub is_disqualified: bool,
    /// Deducted after match and bonus points. Must be >= 0. Defaults to 0.
    pub penalty_points: i32,
}

impl ScoreOptions {
    pub fn disqualified() -> Self {
        Self {
            is_disqualified: true,
            ..Self::default()
        }
    }

    pub fn with_penalty(penalty_points: i32) -> Self {
        Self {
            penalty_points,
            ..Self::default()
        }
    }
}

impl From<&Competitor> for ScoreOptions {
    fn from(competitor: &Competitor) -> Self {
        Self {
            is_disqualified: competitor.is_disqualified,
            penalty_points: competitor.penalty_points,
        }
    }
}

/// How a final score was reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    /// Sum of per-match points.
    pub base_points: i64,
    /// Number of streak bonuses awarded.
    pub streak_bonuses: u32,
    pub bonus_points: i64,
    /// Penalty actually deducted (0 when disqualified).
    pub penalty_points: i64,
    pub final_score: u32,
    pub disqualified: bool,
}

/// Running state of the fold over a match history.
#[derive(Debug, Default)]
struct Tally {
    points: i64,
    consecutive_wins: u32,
    streak_bonuses: u32,
}

impl Tally {
    fn record(mut self, index: usize, outcome: MatchOutcome, rules: &ScoringRules) -> Self {
        match outcome {
            MatchOutcome::Win => {
                self.points += i64::from(rules.win_points);
                self.consecutive_wins += 1;
            },
            MatchOutcome::Draw => {
                self.points += i64::from(rules.draw_points);
                self.consecutive_wins = 0;
            },
            MatchOutcome::Loss => {
                self.points += i64::from(rules.loss_points);
                self.consecutive_wins = 0;
            },
        }
        // Only the instant the run reaches the threshold counts, so longer
        // runs earn a single bonus.
        if rules.streak_length > 0 && self.consecutive_wins == rules.streak_length {
            self.streak_bonuses += 1;
            tracing::trace!(match_index = index, "streak bonus awarded");
        }
        self
    }
}

/// Turns a match history into a tournament score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreCalculator {
    rules: ScoringRules,
}

impl ScoreCalculator {
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Calculate the final score for a match history.
    ///
    /// Validation runs in a fixed order: missing matches, then negative
    /// penalty, then disqualification. Scoring rules (defaults):
    /// - Win: +3, Draw: +1, Loss: 0
    /// - Third consecutive win: +5, once per streak
    /// - Penalty deducted last, result clamped at 0
    pub fn calculate_score(
        &self,
        matches: Option<&[MatchOutcome]>,
        options: ScoreOptions,
    ) -> Result<u32, ScoreError> {
        self.breakdown(matches, options).map(|b| b.final_score)
    }

    /// Same as [`Self::calculate_score`] but keeps the intermediate totals.
    pub fn breakdown(
        &self,
        matches: Option<&[MatchOutcome]>,
        options: ScoreOptions,
    ) -> Result<ScoreBreakdown, ScoreError> {
        let matches = matches.ok_or(ScoreError::NullMatches)?;
        if options.penalty_points < 0 {
            return Err(ScoreError::NegativePenalty {
                penalty_points: options.penalty_points,
            });
        }
        if options.is_disqualified {
            return Ok(ScoreBreakdown {
                disqualified: true,
                ..ScoreBreakdown::default()
            });
        }

        let tally = matches
            .iter()
            .enumerate()
            .fold(Tally::default(), |tally, (i, &outcome)| {
                tally.record(i, outcome, &self.rules)
            });

        let bonus_points = i64::from(tally.streak_bonuses) * i64::from(self.rules.streak_bonus);
        let penalty_points = i64::from(options.penalty_points);
        let total = tally.points + bonus_points - penalty_points;
        let final_score = u32::try_from(total.max(0)).unwrap_or(u32::MAX);

        tracing::debug!(
            matches = matches.len(),
            base_points = tally.points,
            streak_bonuses = tally.streak_bonuses,
            penalty_points,
            final_score,
            "score calculated"
        );

        Ok(ScoreBreakdown {
            base_points: tally.points,
            streak_bonuses: tally.streak_bonuses,
            bonus_points,
            penalty_points,
            final_score,
            disqualified: false,
        })
    }

    /// Score a competitor's stored record.
    pub fn score_competitor(&self, competitor: &Competitor) -> Result<u32, ScoreError> {
        self.calculate_score(Some(&competitor.matches), ScoreOptions::from(competitor))
    }
}

/// Calculate a score with the default rules.
pub fn calculate_score(
    matches: Option<&[MatchOutcome]>,
    options: ScoreOptions,
) -> Result<u32, ScoreError> {
    ScoreCalculator::default().calculate_score(matches, options)
}
