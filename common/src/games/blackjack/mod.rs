mod card;
mod deck;
mod error;
mod hand;
mod round;

pub use card::{Card, Rank, Suit};
pub use deck::{DECK_SIZE, Deck};
pub use error::BlackjackError;
pub use hand::{DEALER_STAY_THRESHOLD, Hand, WIN_THRESHOLD};
pub use round::{BlackjackRound, RoundPhase, RoundResult, resolve_round};
