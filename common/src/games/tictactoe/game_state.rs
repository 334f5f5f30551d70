use crate::games::{SessionRng, Side};

use super::bot_controller::choose_computer_move;
use super::win_detector::winning_marker;
use super::{BOARD_SIZE, Board, GameStatus, Marker, TicTacToeError};

#[derive(Debug, Clone)]
pub struct TicTacToeGame {
    board: Board,
    human_marker: Marker,
    computer_marker: Marker,
    current_turn: Side,
    status: GameStatus,
}

impl TicTacToeGame {
    pub fn new(
        human_marker: Marker,
        computer_marker: Marker,
        first_to_move: Side,
    ) -> Result<Self, TicTacToeError> {
        if human_marker == computer_marker {
            return Err(TicTacToeError::SameMarker(human_marker));
        }

        Ok(Self {
            board: Board::new(),
            human_marker,
            computer_marker,
            current_turn: first_to_move,
            status: GameStatus::InProgress,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    fn marker_for(&self, side: Side) -> Marker {
        match side {
            Side::Human => self.human_marker,
            Side::Computer => self.computer_marker,
        }
    }

    pub fn current_turn(&self) -> Side {
        self.current_turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn play(&mut self, side: Side, position: usize) -> Result<(), TicTacToeError> {
        if self.is_over() {
            return Err(TicTacToeError::GameOver);
        }

        if side != self.current_turn {
            return Err(TicTacToeError::NotYourTurn(side));
        }

        self.board.apply_move(position, self.marker_for(side))?;

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.current_turn = self.current_turn.opponent();
        }

        Ok(())
    }

    pub fn play_computer(&mut self, rng: &mut SessionRng) -> Result<usize, TicTacToeError> {
        if self.is_over() {
            return Err(TicTacToeError::GameOver);
        }

        let position = choose_computer_move(&self.board, self.human_marker, self.computer_marker, rng)
            .ok_or(TicTacToeError::GameOver)?;
        self.play(Side::Computer, position)?;
        Ok(position)
    }

    fn check_game_over(&mut self) {
        if let Some(marker) = winning_marker(&self.board) {
            self.status = if marker == self.human_marker {
                GameStatus::HumanWon
            } else {
                GameStatus::ComputerWon
            };
            crate::log!("{:?} after {} moves", self.status, BOARD_SIZE - self.board.unmarked_keys().len());
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}
