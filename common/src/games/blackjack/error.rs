use thiserror::Error;

use super::RoundPhase;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlackjackError {
    #[error("The deck is empty")]
    EmptyDeck,

    #[error("Action not allowed during {0:?}")]
    OutOfTurn(RoundPhase),
}
