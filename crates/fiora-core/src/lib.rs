pub mod competitor;
pub mod error;
pub mod match_outcome;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::competitor::Competitor;
    use crate::match_outcome::MatchOutcome;

    /// Build an outcome list from a compact string: `W` win, `D` draw, `L` loss.
    /// Any other character (spaces, dashes) is skipped.
    pub fn outcomes(pattern: &str) -> Vec<MatchOutcome> {
        pattern
            .chars()
            .filter_map(|c| match c.to_ascii_uppercase() {
                'W' => Some(MatchOutcome::Win),
                'D' => Some(MatchOutcome::Draw),
                'L' => Some(MatchOutcome::Loss),
                _ => None,
            })
            .collect()
    }

    /// Create an eligible competitor with no penalty from a compact outcome string.
    pub fn make_competitor(name: &str, pattern: &str) -> Competitor {
        Competitor::new(name).with_matches(outcomes(pattern))
    }

    /// Create `n` competitors named `Player1..PlayerN` sharing the same history.
    pub fn make_field(n: usize, pattern: &str) -> Vec<Competitor> {
        (0..n)
            .map(|i| make_competitor(&format!("Player{}", i + 1), pattern))
            .collect()
    }
}
