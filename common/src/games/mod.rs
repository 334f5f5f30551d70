mod match_score;
mod session_rng;

pub mod blackjack;
pub mod rps;
pub mod tictactoe;

pub use match_score::{MatchScore, Side};
pub use session_rng::SessionRng;
