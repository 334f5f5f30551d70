use thiserror::Error;

use super::Move;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RpsError {
    #[error("'{0}' is not a move in this game")]
    UnknownMove(String),

    #[error("No rule decides {0} against {1}")]
    IncompleteRuleSet(Move, Move),

    #[error("Invalid rule: {0}")]
    InvalidRule(String),
}
