use thiserror::Error;

use crate::games::Side;

use super::Marker;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TicTacToeError {
    #[error("Square {0} does not exist, choose 1 to 9")]
    InvalidPosition(usize),

    #[error("Square {0} is already taken")]
    OccupiedSquare(usize),

    #[error("It is not the {0:?} player's turn")]
    NotYourTurn(Side),

    #[error("The game is already over")]
    GameOver,

    #[error("'{0}' cannot be used as a marker")]
    InvalidMarker(char),

    #[error("Both players cannot use '{0}'")]
    SameMarker(Marker),
}
