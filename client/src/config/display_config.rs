use std::time::Duration;

use console_games_common::config::Validate;
use serde::{Deserialize, Serialize};

const MAX_PAUSE_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub clear_screen: bool,
    pub pause_ms: u64,
}

impl DisplayConfig {
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.pause_ms > MAX_PAUSE_MS {
            return Err(format!("pause_ms must not exceed {}", MAX_PAUSE_MS));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            pause_ms: 1500,
        }
    }
}
