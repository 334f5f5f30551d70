mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CENTER};
pub use bot_controller::{choose_computer_move, find_line_completion, pick_computer_name};
pub use error::TicTacToeError;
pub use game_state::TicTacToeGame;
pub use types::{FirstToMove, GameStatus, Marker};
pub use win_detector::{WINNING_LINES, winning_line, winning_marker};
