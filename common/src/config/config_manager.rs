use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads a config once, validates it and caches it. A missing source yields
/// `TConfig::default()`.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Mutex::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|e| format!("Config lock poisoned: {}", e))?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let config_data_result = self.config_content_provider.get_config_content()?;
        if let Some(config_data) = config_data_result {
            let config = self.config_serializer.deserialize(&config_data)?;

            config
                .validate()
                .map_err(|e| format!("Config validation error: {}", e))?;

            *current = Some(config.clone());
            return Ok(config);
        }

        Ok(TConfig::default())
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;

        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self
            .config
            .lock()
            .map_err(|e| format!("Config lock poisoned: {}", e))?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Difficulty, FirstPlayerMode, TicTacToeSettings};
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryContentProvider {
        content: RefCell<Option<String>>,
    }

    impl ConfigContentProvider for MemoryContentProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), String> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_missing_content_gives_default() {
        let manager: ConfigManager<_, TicTacToeSettings> =
            ConfigManager::new(MemoryContentProvider::default(), YamlConfigSerializer::new());
        assert_eq!(manager.get_config().unwrap(), TicTacToeSettings::default());
    }

    #[test]
    fn test_set_then_get() {
        let manager: ConfigManager<_, TicTacToeSettings> =
            ConfigManager::new(MemoryContentProvider::default(), YamlConfigSerializer::new());
        let settings = TicTacToeSettings {
            difficulty: Difficulty::new(0.9).unwrap(),
            first_player_mode: FirstPlayerMode::CoinToss,
        };
        manager.set_config(&settings).unwrap();
        assert_eq!(manager.get_config().unwrap(), settings);
    }

    #[test]
    fn test_invalid_content_is_an_error() {
        let provider = MemoryContentProvider::default();
        provider
            .set_config_content("difficulty: 3.0\nfirst_player_mode: go_first\n")
            .unwrap();
        let manager: ConfigManager<_, TicTacToeSettings> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_yaml_file_round_trip() {
        let file_path = get_temp_file_path();
        let settings = TicTacToeSettings {
            difficulty: Difficulty::new(0.25).unwrap(),
            first_player_mode: FirstPlayerMode::GoSecond,
        };

        let writer: ConfigManager<_, TicTacToeSettings> =
            ConfigManager::from_yaml_file(file_path.clone());
        writer.set_config(&settings).unwrap();

        let reader: ConfigManager<_, TicTacToeSettings> =
            ConfigManager::from_yaml_file(file_path.clone());
        assert_eq!(reader.get_config().unwrap(), settings);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_file_gives_default() {
        let manager: ConfigManager<_, TicTacToeSettings> =
            ConfigManager::from_yaml_file(get_temp_file_path());
        assert_eq!(manager.get_config().unwrap(), TicTacToeSettings::default());
    }
}
