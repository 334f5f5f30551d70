use console_games_common::config::ConfigError;
use console_games_common::games::blackjack::BlackjackError;
use console_games_common::games::rps::RpsError;
use console_games_common::games::tictactoe::TicTacToeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("console error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("blackjack error: {0}")]
    Blackjack(#[from] BlackjackError),

    #[error("rock paper scissors error: {0}")]
    Rps(#[from] RpsError),

    #[error("tic-tac-toe error: {0}")]
    TicTacToe(#[from] TicTacToeError),
}

impl ClientError {
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, ClientError::Io(err) if err.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}
