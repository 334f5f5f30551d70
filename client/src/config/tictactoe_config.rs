use console_games_common::config::Validate;
use console_games_common::games::tictactoe::{FirstToMove, Marker};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TicTacToeConfig {
    pub games_per_match: u32,
    pub computer_marker: char,
    pub first_to_move: FirstToMove,
}

impl TicTacToeConfig {
    pub fn computer_marker(&self) -> Result<Marker, String> {
        Marker::new(self.computer_marker).map_err(|err| err.to_string())
    }
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.games_per_match == 0 || self.games_per_match > 99 {
            return Err("tictactoe games_per_match must be between 1 and 99".to_string());
        }
        self.computer_marker()?;
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            games_per_match: 5,
            computer_marker: 'O',
            first_to_move: FirstToMove::Human,
        }
    }
}
