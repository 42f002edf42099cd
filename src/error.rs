use std::path::PathBuf;

use crate::game::Player;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur while driving agent-vs-agent games.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("agent playing {} made no move at move {move_number}", .player.name())]
    AgentStalled { player: Player, move_number: usize },
}
