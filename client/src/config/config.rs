use std::path::{Path, PathBuf};

use console_games_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use serde::{Deserialize, Serialize};

use super::{BlackjackConfig, DisplayConfig, RpsConfig, TicTacToeConfig};

const CONFIG_FILE_NAME: &str = "console_games_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, GamesConfig, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct GamesConfig {
    pub display: DisplayConfig,
    pub blackjack: BlackjackConfig,
    pub rps: RpsConfig,
    pub tictactoe: TicTacToeConfig,
}

impl Validate for GamesConfig {
    fn validate(&self) -> Result<(), String> {
        self.display.validate()?;
        self.blackjack.validate()?;
        self.rps.validate()?;
        self.tictactoe.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_games_common::config::{ConfigContentProvider, ConfigSerializer};
    use console_games_common::games::rps::RuleSetKind;
    use console_games_common::games::tictactoe::FirstToMove;

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_console_games_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = GamesConfig::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: GamesConfig = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_file() {
        let default_config = GamesConfig::default();
        let serializer = YamlConfigSerializer::new();
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(&file_path);

        let serialized_string = serializer.serialize(&default_config).unwrap();
        content_provider.set_config_content(&serialized_string).unwrap();

        let read_string = content_provider.get_config_content().unwrap().unwrap();
        let deserialized_config: GamesConfig = serializer.deserialize(&read_string).unwrap();
        assert_eq!(default_config, deserialized_config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = GamesConfig {
            rps: RpsConfig {
                default_variant: Some(RuleSetKind::LizardSpock),
            },
            tictactoe: TicTacToeConfig {
                computer_marker: '#',
                first_to_move: FirstToMove::Computer,
                ..TicTacToeConfig::default()
            },
            ..GamesConfig::default()
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.as_path()));

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh_manager = get_config_manager(Some(file_path.as_path()));
        assert_eq!(fresh_manager.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some(Path::new("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config().unwrap(), GamesConfig::default());
    }

    #[test]
    fn test_partial_config_fills_in_defaults() {
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(&file_path);
        content_provider
            .set_config_content("blackjack:\n  rounds_to_win: 5\n")
            .unwrap();

        let manager = get_config_manager(Some(file_path.as_path()));
        let config = manager.get_config().unwrap();
        assert_eq!(config.blackjack.rounds_to_win, 5);
        assert_eq!(config.blackjack.player_name, "Player");
        assert_eq!(config.display, DisplayConfig::default());

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            display:
              clear_screen: false
              pause_ms: 60000
            tictactoe:
              games_per_match: 0
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(&file_path);
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager = get_config_manager(Some(file_path.as_path()));
        assert!(manager.get_config().is_err());

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_unknown_variant_cant_be_read() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<GamesConfig, _> =
            serializer.deserialize("rps:\n  default_variant: rock_paper_dynamite\n");
        assert!(result.is_err());
    }
}
