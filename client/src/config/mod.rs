mod blackjack_config;
mod config;
mod display_config;
mod rps_config;
mod tictactoe_config;

pub use blackjack_config::BlackjackConfig;
pub use config::{GamesConfig, get_config_manager};
pub use display_config::DisplayConfig;
pub use rps_config::RpsConfig;
pub use tictactoe_config::TicTacToeConfig;
