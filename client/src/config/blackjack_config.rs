use console_games_common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct BlackjackConfig {
    pub rounds_to_win: u32,
    pub player_name: String,
}

impl Validate for BlackjackConfig {
    fn validate(&self) -> Result<(), String> {
        if self.rounds_to_win == 0 || self.rounds_to_win > 99 {
            return Err("blackjack rounds_to_win must be between 1 and 99".to_string());
        }
        if self.player_name.trim().is_empty() {
            return Err("blackjack player_name must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for BlackjackConfig {
    fn default() -> Self {
        Self {
            rounds_to_win: 3,
            player_name: "Player".to_string(),
        }
    }
}
