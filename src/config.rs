use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::{DEFAULT_BOARD_SIZE, DEFAULT_PLAYERS_COUNT, MAX_BOARD_SIZE};

/// Parameters fixed for the lifetime of an engine, loadable from TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Width and height of the square board
    pub board_size: usize,
    pub players_count: u32,
    /// Run length needed to win; the board size when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winning_streak: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            board_size: DEFAULT_BOARD_SIZE,
            players_count: DEFAULT_PLAYERS_COUNT,
            winning_streak: None,
        }
    }
}

impl EngineConfig {
    pub fn new(board_size: usize, players_count: u32, winning_streak: usize) -> Self {
        EngineConfig {
            board_size,
            players_count,
            winning_streak: Some(winning_streak),
        }
    }

    /// The effective winning streak length.
    pub fn winning_streak(&self) -> usize {
        self.winning_streak.unwrap_or(self.board_size)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::Validation("board_size must be >= 1".into()));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "board_size must be <= {}",
                MAX_BOARD_SIZE
            )));
        }
        if self.players_count == 0 {
            return Err(ConfigError::Validation("players_count must be >= 1".into()));
        }
        let winning_streak = self.winning_streak();
        if winning_streak == 0 || winning_streak > self.board_size {
            return Err(ConfigError::Validation(format!(
                "winning_streak must be in [1, {}]",
                self.board_size
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> String {
        // a struct of plain integers always serializes
        toml::to_string_pretty(&EngineConfig::default()).unwrap_or_default()
    }
}
