use std::path::PathBuf;

/// Errors raised when a game is set up incorrectly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board size must be at least 1 (got {0})")]
    InvalidBoardSize(usize),
}

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        let err = GameError::InvalidBoardSize(0);
        assert_eq!(err.to_string(), "board size must be at least 1 (got 0)");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.board_size must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.board_size must be > 0"
        );
    }
}
