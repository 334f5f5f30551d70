use core::fmt;

use serde::{Deserialize, Serialize};

use crate::games::Side;

use super::TicTacToeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Marker(char);

impl Marker {
    pub const X: Marker = Marker('X');
    pub const O: Marker = Marker('O');

    pub fn new(symbol: char) -> Result<Self, TicTacToeError> {
        if symbol.is_whitespace() || symbol.is_control() {
            return Err(TicTacToeError::InvalidMarker(symbol));
        }
        Ok(Self(symbol))
    }

    pub fn symbol(&self) -> char {
        self.0
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    HumanWon,
    ComputerWon,
    Draw,
}

impl GameStatus {
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameStatus::HumanWon => Some(Side::Human),
            GameStatus::ComputerWon => Some(Side::Computer),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstToMove {
    #[default]
    Human,
    Computer,
}

impl From<FirstToMove> for Side {
    fn from(value: FirstToMove) -> Self {
        match value {
            FirstToMove::Human => Side::Human,
            FirstToMove::Computer => Side::Computer,
        }
    }
}
