use std::path::Path;

use log::warn;

use crate::error::ConfigError;
use crate::game::Player;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "oso.toml";

/// Who plays against player 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    Human,
    Computer,
}

/// Game settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    pub opponent: Opponent,
    /// Player number (1 or 2) the computer plays
    pub computer_player: u8,
    /// Board sizes offered by the GUI
    pub board_sizes: Vec<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: 5,
            opponent: Opponent::Computer,
            computer_player: 2,
            board_sizes: vec![3, 5, 7, 9, 11],
        }
    }
}

impl GameConfig {
    /// The computer's side. Only meaningful after `validate`.
    pub fn computer(&self) -> Player {
        Player::from_number(self.computer_player).unwrap_or(Player::Two)
    }
}

/// Window settings for the GUI.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 1000.0,
            height: 750.0,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub window: WindowConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.board_size == 0 {
            return Err(ConfigError::Validation(
                "game.board_size must be > 0".into(),
            ));
        }
        if Player::from_number(self.game.computer_player).is_none() {
            return Err(ConfigError::Validation(
                "game.computer_player must be 1 or 2".into(),
            ));
        }
        if self.game.board_sizes.is_empty() {
            return Err(ConfigError::Validation(
                "game.board_sizes must not be empty".into(),
            ));
        }
        if self.game.board_sizes.contains(&0) {
            return Err(ConfigError::Validation(
                "game.board_sizes must all be > 0".into(),
            ));
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ConfigError::Validation(
                "window.width and window.height must be > 0".into(),
            ));
        }
        Ok(())
    }
}
