use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::{Difficulty, FirstPlayerMode};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TicTacToeSettings {
    pub difficulty: Difficulty,
    pub first_player_mode: FirstPlayerMode,
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            first_player_mode: FirstPlayerMode::GoFirst,
        }
    }
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), String> {
        Difficulty::new(self.difficulty.value())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSerializer, YamlConfigSerializer};

    #[test]
    fn test_default_settings_are_valid() {
        let settings = TicTacToeSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.difficulty.value(), 0.5);
    }

    #[test]
    fn test_yaml_rejects_out_of_range_difficulty() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<TicTacToeSettings, String> =
            serializer.deserialize("difficulty: 1.5\nfirst_player_mode: coin_toss\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_yaml_reads_settings() {
        let serializer = YamlConfigSerializer::new();
        let settings: TicTacToeSettings = serializer
            .deserialize("difficulty: 0.8\nfirst_player_mode: go_second\n")
            .unwrap();
        assert_eq!(settings.difficulty.value(), 0.8);
        assert_eq!(settings.first_player_mode, FirstPlayerMode::GoSecond);
    }
}
