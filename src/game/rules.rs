use crate::error::ConfigError;

/// Board size, per-player piece limit and winning run length for one game.
///
/// Only constructible through [`GameConfig::new`], so every value is
/// positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    board_size: usize,
    max_pieces: usize,
    win_length: usize,
}

impl GameConfig {
    /// `win_length` falls back to `max_pieces` when `None`.
    pub fn new(
        board_size: usize,
        max_pieces: usize,
        win_length: Option<usize>,
    ) -> Result<Self, ConfigError> {
        let win_length = win_length.unwrap_or(max_pieces);
        if board_size == 0 {
            return Err(ConfigError::Validation("board_size must be > 0".into()));
        }
        if max_pieces == 0 {
            return Err(ConfigError::Validation("max_pieces must be > 0".into()));
        }
        if win_length == 0 {
            return Err(ConfigError::Validation("win_length must be > 0".into()));
        }
        if board_size.checked_mul(board_size).is_none() {
            return Err(ConfigError::Validation(format!(
                "board_size {board_size} is too large"
            )));
        }
        Ok(GameConfig {
            board_size,
            max_pieces,
            win_length,
        })
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn max_pieces(&self) -> usize {
        self.max_pieces
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Total moves after which an undecided game is scored a draw.
    pub fn cell_count(&self) -> usize {
        self.board_size * self.board_size
    }
}

impl Default for GameConfig {
    /// The classic 3×3 board with three pieces each.
    fn default() -> Self {
        GameConfig {
            board_size: 3,
            max_pieces: 3,
            win_length: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_length_defaults_to_max_pieces() {
        let config = GameConfig::new(5, 4, None).unwrap();
        assert_eq!(config.win_length(), 4);
        assert_eq!(config.cell_count(), 25);
    }

    #[test]
    fn test_explicit_win_length() {
        let config = GameConfig::new(4, 2, Some(4)).unwrap();
        assert_eq!(config.max_pieces(), 2);
        assert_eq!(config.win_length(), 4);
    }

    #[test]
    fn test_rejects_zero_values() {
        assert!(GameConfig::new(0, 3, None).is_err());
        assert!(GameConfig::new(3, 0, None).is_err());
        assert!(GameConfig::new(3, 3, Some(0)).is_err());
    }

    #[test]
    fn test_rejects_board_size_overflow() {
        let err = GameConfig::new(usize::MAX, 3, None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(GameConfig::new(usize::MAX / 2, 3, None).is_err());
    }

    #[test]
    fn test_zero_max_pieces_message() {
        let err = GameConfig::new(3, 0, Some(3)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: max_pieces must be > 0"
        );
    }
}
