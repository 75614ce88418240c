use fiora_core::match_outcome::MatchOutcome;

/// Length of the longest run of consecutive wins.
pub fn longest_win_streak(matches: &[MatchOutcome]) -> usize {
    matches
        .iter()
        .fold((0, 0), |(best, run), m| {
            let run = if m.is_win() { run + 1 } else { 0 };
            (best.max(run), run)
        })
        .0
}

/// Number of streak bonuses earned: one per maximal run of at least
/// `streak_length` consecutive wins. A `streak_length` of 0 never qualifies.
pub fn count_streak_bonuses(matches: &[MatchOutcome], streak_length: usize) -> usize {
    if streak_length == 0 {
        return 0;
    }
    matches
        .split(|m| !m.is_win())
        .filter(|run| run.len() >= streak_length)
        .count()
}
