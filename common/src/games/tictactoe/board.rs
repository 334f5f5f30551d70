use super::{Marker, TicTacToeError};

pub const BOARD_SIZE: usize = 9;
pub const CENTER: usize = 5;

// Squares are keyed 1 to 9, left to right, top to bottom:
//  1 | 2 | 3
//  4 | 5 | 6
//  7 | 8 | 9
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Marker>; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    fn index(position: usize) -> Result<usize, TicTacToeError> {
        if (1..=BOARD_SIZE).contains(&position) {
            Ok(position - 1)
        } else {
            Err(TicTacToeError::InvalidPosition(position))
        }
    }

    pub fn get(&self, position: usize) -> Option<Marker> {
        Self::index(position).ok().and_then(|index| self.squares[index])
    }

    pub fn is_unmarked(&self, position: usize) -> bool {
        Self::index(position).is_ok_and(|index| self.squares[index].is_none())
    }

    pub fn apply_move(&mut self, position: usize, marker: Marker) -> Result<(), TicTacToeError> {
        let index = Self::index(position)?;
        if self.squares[index].is_some() {
            return Err(TicTacToeError::OccupiedSquare(position));
        }
        self.squares[index] = Some(marker);
        Ok(())
    }

    pub fn unmarked_keys(&self) -> Vec<usize> {
        (1..=BOARD_SIZE).filter(|&position| self.is_unmarked(position)).collect()
    }

    pub fn is_full(&self) -> bool {
        self.squares.iter().all(Option::is_some)
    }
}
