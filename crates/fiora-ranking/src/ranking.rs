use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use fiora_core::competitor::Competitor;
use fiora_core::error::ScoreError;
use fiora_scoring::ScoreCalculator;

/// One row of the published standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based position in the ranking.
    pub position: usize,
    pub name: String,
    pub score: u32,
}

/// Orders a tournament field by final score.
#[derive(Debug, Clone, Copy, Default)]
pub struct TournamentRanking {
    calculator: ScoreCalculator,
}

impl TournamentRanking {
    pub fn new(calculator: ScoreCalculator) -> Self {
        Self { calculator }
    }

    /// Recompute every competitor's `final_score`, then sort by score
    /// descending with ties broken by name ascending.
    pub fn rank(&self, competitors: &mut [Competitor]) -> Result<(), ScoreError> {
        for competitor in competitors.iter_mut() {
            let score = self
                .calculator
                .score_competitor(competitor)
                .inspect_err(|e| {
                    tracing::warn!(competitor = %competitor.name, error = %e, "Rejected competitor record");
                })?;
            competitor.final_score = score;
        }
        competitors.sort_by(ranking_order);
        tracing::debug!(competitors = competitors.len(), "field ranked");
        Ok(())
    }

    /// Top of the ranking, or `None` for an empty field.
    pub fn champion<'a>(
        &self,
        competitors: &'a mut [Competitor],
    ) -> Result<Option<&'a Competitor>, ScoreError> {
        self.rank(competitors)?;
        Ok(competitors.first())
    }

    /// Rank the field and return it as numbered rows.
    pub fn standings(&self, competitors: &mut [Competitor]) -> Result<Vec<Standing>, ScoreError> {
        self.rank(competitors)?;
        Ok(competitors
            .iter()
            .enumerate()
            .map(|(i, c)| Standing {
                position: i + 1,
                name: c.name.clone(),
                score: c.final_score,
            })
            .collect())
    }
}

fn ranking_order(a: &Competitor, b: &Competitor) -> Ordering {
    b.final_score
        .cmp(&a.final_score)
        .then_with(|| a.name.cmp(&b.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fiora_core::test_helpers::{make_competitor, make_field};

    fn names(competitors: &[Competitor]) -> Vec<&str> {
        competitors.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn ranks_by_score_descending() {
        let mut field = vec![
            make_competitor("Low", "LLD"),
            make_competitor("High", "WWW"),
            make_competitor("Mid", "WDW"),
        ];
        TournamentRanking::default().rank(&mut field).unwrap();
        assert_eq!(names(&field), ["High", "Mid", "Low"]);
        assert_eq!(field[0].final_score, 14);
        assert_eq!(field[1].final_score, 7);
        assert_eq!(field[2].final_score, 1);
    }

    #[test]
    fn ties_broken_by_name() {
        let mut field = vec![
            make_competitor("Charlie", "WD"),
            make_competitor("Alice", "WD"),
            make_competitor("Bob", "DW"),
        ];
        TournamentRanking::default().rank(&mut field).unwrap();
        assert_eq!(names(&field), ["Alice", "Bob", "Charlie"]);
    }

    #[test]
    fn disqualification_and_penalty_applied() {
        let mut field = vec![
            make_competitor("Cheater", "WWWW").disqualified(),
            make_competitor("Penalized", "WWW").with_penalty(10),
            make_competitor("Clean", "WW"),
        ];
        TournamentRanking::default().rank(&mut field).unwrap();
        // Clean 6, Penalized 14 - 10 = 4, Cheater 0
        assert_eq!(names(&field), ["Clean", "Penalized", "Cheater"]);
        assert_eq!(field[2].final_score, 0);
    }

    #[test]
    fn stale_final_score_is_overwritten() {
        let mut field = vec![make_competitor("Alice", "W")];
        field[0].final_score = 999;
        TournamentRanking::default().rank(&mut field).unwrap();
        assert_eq!(field[0].final_score, 3);
    }

    #[test]
    fn negative_penalty_fails_ranking() {
        let mut field = vec![
            make_competitor("Alice", "W"),
            make_competitor("Bob", "W").with_penalty(-2),
        ];
        let err = TournamentRanking::default().rank(&mut field).unwrap_err();
        assert_eq!(err, ScoreError::NegativePenalty { penalty_points: -2 });
    }

    #[test]
    fn champion_is_top_ranked() {
        let mut field = make_field(3, "WD");
        field.push(make_competitor("Zed", "WWW"));
        let ranking = TournamentRanking::default();
        let champ = ranking.champion(&mut field).unwrap().unwrap();
        assert_eq!(champ.name, "Zed");
        assert_eq!(champ.final_score, 14);
    }

    #[test]
    fn champion_of_empty_field_is_none() {
        let mut field: Vec<Competitor> = Vec::new();
        assert_eq!(TournamentRanking::default().champion(&mut field), Ok(None));
    }

    #[test]
    fn standings_are_numbered_from_one() {
        let mut field = vec![
            make_competitor("Bob", "WDL"),
            make_competitor("Alice", "WWWW"),
        ];
        let rows = TournamentRanking::default().standings(&mut field).unwrap();
        assert_eq!(
            rows,
            vec![
                Standing {
                    position: 1,
                    name: "Alice".to_string(),
                    score: 17,
                },
                Standing {
                    position: 2,
                    name: "Bob".to_string(),
                    score: 4,
                },
            ]
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn ranking_is_sorted_and_complete(
                field in proptest::collection::vec(("[a-z]{1,6}", "[WDL]{0,12}", 0i32..20, proptest::bool::ANY), 0..12),
            ) {
                let mut competitors: Vec<Competitor> = field
                    .iter()
                    .map(|(name, pattern, penalty, dq)| {
                        let mut c = make_competitor(name, pattern).with_penalty(*penalty);
                        c.is_disqualified = *dq;
                        c
                    })
                    .collect();
                TournamentRanking::default().rank(&mut competitors).unwrap();

                prop_assert_eq!(competitors.len(), field.len());
                for pair in competitors.windows(2) {
                    prop_assert_ne!(ranking_order(&pair[0], &pair[1]), Ordering::Greater);
                }
            }
        }
    }
}
