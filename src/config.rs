use std::path::Path;

use crate::arena::ArenaConfig;
use crate::error::ConfigError;
use crate::game::GameConfig;
use crate::ui::PlayConfig;

/// Rule parameters as written in the config file.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameSection {
    pub board_size: usize,
    pub max_pieces: usize,
    /// Falls back to `max_pieces` when absent.
    pub win_length: Option<usize>,
}

impl Default for GameSection {
    fn default() -> Self {
        GameSection {
            board_size: 3,
            max_pieces: 3,
            win_length: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameSection,
    pub play: PlayConfig,
    pub arena: ArenaConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game_config()?;

        if self.arena.games == 0 {
            return Err(ConfigError::Validation("arena.games must be > 0".into()));
        }
        if self.arena.round_limit == 0 {
            return Err(ConfigError::Validation(
                "arena.round_limit must be > 0".into(),
            ));
        }
        if self.arena.log_interval == 0 {
            return Err(ConfigError::Validation(
                "arena.log_interval must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// The validated rule set for a new game.
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        GameConfig::new(
            self.game.board_size,
            self.game.max_pieces,
            self.game.win_length,
        )
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;
    use crate::ui::GameMode;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        let game = config.game_config().unwrap();
        assert_eq!(game, GameConfig::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
board_size = 5
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.board_size, 5);
        assert_eq!(config.game.max_pieces, 3);
        assert_eq!(config.play.mode, GameMode::PlayerVsAi);
        assert_eq!(config.arena.games, 1000);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.game.board_size, AppConfig::default().game.board_size);
        assert_eq!(config.arena.seed, None);
    }

    #[test]
    fn test_win_length_defaults_to_max_pieces() {
        let config: AppConfig = toml::from_str("[game]\nmax_pieces = 4\nboard_size = 6\n").unwrap();
        assert_eq!(config.game_config().unwrap().win_length(), 4);
    }

    #[test]
    fn test_play_section_parses() {
        let toml_str = r#"
[play]
mode = "pvp"
ai_player = "x"
ai_delay_ms = 0
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.play.mode, GameMode::PlayerVsPlayer);
        assert_eq!(config.play.ai_player, Player::X);
        assert_eq!(config.play.ai_delay_ms, 0);
    }

    #[test]
    fn test_validation_rejects_zero_board_size() {
        let mut config = AppConfig::default();
        config.game.board_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_win_length() {
        let mut config = AppConfig::default();
        config.game.win_length = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_round_limit() {
        let mut config = AppConfig::default();
        config.arena.round_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_games() {
        let mut config = AppConfig::default();
        config.arena.games = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_log_interval() {
        let mut config = AppConfig::default();
        config.arena.log_interval = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.game.board_size, 3);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
board_size = 4
max_pieces = 2
win_length = 4

[arena]
seed = 7
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        let game = config.game_config().unwrap();
        assert_eq!(game.board_size(), 4);
        assert_eq!(game.max_pieces(), 2);
        assert_eq!(game.win_length(), 4);
        assert_eq!(config.arena.seed, Some(7));
        // Others are defaults
        assert_eq!(config.arena.round_limit, 1000);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[game]\nmax_pieces = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[game\nboard_size = ").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
