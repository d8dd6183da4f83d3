use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::{Difficulty, FirstPlayerMode, TicTacToeSettings};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub difficulty: Difficulty,
    /// `None` shows the start menu every round.
    #[serde(default)]
    pub first_player: Option<FirstPlayerMode>,
    #[serde(default)]
    pub use_log_prefix: bool,
}

impl Config {
    pub fn settings(&self, first_player_mode: FirstPlayerMode) -> TicTacToeSettings {
        TicTacToeSettings {
            difficulty: self.difficulty,
            first_player_mode,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.settings(FirstPlayerMode::GoFirst).validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            first_player: None,
            use_log_prefix: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_client_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_file() {
        let config = Config {
            difficulty: Difficulty::new(0.9).unwrap(),
            first_player: Some(FirstPlayerMode::CoinToss),
            use_log_prefix: true,
        };
        let file_path = get_temp_file_path();

        let manager: ConfigManager<_, Config> = ConfigManager::from_yaml_file(file_path.clone());
        manager.set_config(&config).unwrap();

        let content_provider = FileContentConfigProvider::new(file_path.clone());
        let content = content_provider.get_config_content().unwrap().unwrap();
        assert!(content.contains("coin_toss"));

        let reloaded: ConfigManager<_, Config> = ConfigManager::from_yaml_file(file_path.clone());
        assert_eq!(reloaded.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer.deserialize("difficulty: 0.3\n").unwrap();
        assert_eq!(config.difficulty.value(), 0.3);
        assert_eq!(config.first_player, None);
        assert!(!config.use_log_prefix);
    }

    #[test]
    fn test_out_of_range_difficulty_rejected() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<Config, String> = serializer.deserialize("difficulty: -1.0\n");
        assert!(result.is_err());
    }
}
