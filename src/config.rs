//! Game configuration
//!
//! Both supported games are configurations of the same engine:
//! - Classic: 3x3, three in a row, exhaustive search scored by depth
//! - Four-in-a-row: 5x5, four in a row, depth-bounded heuristic search with
//!   move pre-filtering

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::MAX_SIZE;
use crate::error::ConfigError;

/// Board shape and search strategy for one game variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantConfig {
    /// Side length of the square board
    pub size: usize,
    /// Consecutive marks needed to win
    pub win_length: usize,
    /// Maximum plies searched below the root move; `None` searches to the end
    pub depth_limit: Option<u32>,
    /// Score horizon nodes with the line heuristic instead of terminal scoring
    pub use_heuristic: bool,
    /// Shortlist candidate moves (win, block, center/corners) before searching
    pub filter_moves: bool,
}

impl VariantConfig {
    /// Classic 3x3 three-in-a-row, solved exactly.
    pub const fn classic() -> Self {
        Self {
            size: 3,
            win_length: 3,
            depth_limit: None,
            use_heuristic: false,
            filter_moves: false,
        }
    }

    /// 5x5 four-in-a-row with a 3-ply heuristic search.
    pub const fn four_in_row() -> Self {
        Self {
            size: 5,
            win_length: 4,
            depth_limit: Some(3),
            use_heuristic: true,
            filter_moves: true,
        }
    }

    /// Check that the board can be built and the search terminates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 || self.size > MAX_SIZE {
            return Err(ConfigError::Validation(format!(
                "size must be between 1 and {MAX_SIZE}, got {}",
                self.size
            )));
        }
        if self.win_length == 0 || self.win_length > self.size {
            return Err(ConfigError::Validation(format!(
                "win_length must be between 1 and size ({}), got {}",
                self.size, self.win_length
            )));
        }
        if self.depth_limit == Some(0) {
            return Err(ConfigError::Validation("depth_limit must be > 0".into()));
        }
        if self.use_heuristic && self.depth_limit.is_none() {
            return Err(ConfigError::Validation(
                "use_heuristic requires a depth_limit".into(),
            ));
        }
        Ok(())
    }
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Named variant presets, selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Variant {
    /// 3x3 three-in-a-row
    Classic,
    /// 5x5 four-in-a-row
    Four,
}

impl Variant {
    pub fn config(self) -> VariantConfig {
        match self {
            Variant::Classic => VariantConfig::classic(),
            Variant::Four => VariantConfig::four_in_row(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub variant: VariantConfig,
    /// Print how long each computer move took. Defaults to on for
    /// heuristic variants.
    pub report_timing: Option<bool>,
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

    /// Parse and validate configuration text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.variant.validate()
    }

    /// Whether the shell reports elapsed search time.
    pub fn timing_enabled(&self) -> bool {
        self.report_timing.unwrap_or(self.variant.use_heuristic)
    }
}
