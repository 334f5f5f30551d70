use console_games_common::config::Validate;
use console_games_common::games::rps::RuleSetKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct RpsConfig {
    pub default_variant: Option<RuleSetKind>,
}

impl Validate for RpsConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
