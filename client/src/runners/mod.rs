mod blackjack_runner;
mod rps_runner;
mod tictactoe_runner;

pub use blackjack_runner::run_blackjack;
pub use rps_runner::run_rps;
pub use tictactoe_runner::run_tictactoe;
