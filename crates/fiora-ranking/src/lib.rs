pub mod ranking;

pub use ranking::{Standing, TournamentRanking};
