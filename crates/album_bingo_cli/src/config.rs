//! Front-end configuration loaded from TOML.

use album_bingo::{BoardMode, PromptPolicy};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "album_bingo.toml";

/// Defaults applied to commands that do not override them.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct BingoConfig {
    /// Board side length for `new`.
    #[serde(default = "default_dimension")]
    default_dimension: usize,

    /// Sharing mode for `new`.
    #[serde(default)]
    default_mode: BoardMode,

    /// Generation policy when the catalog is smaller than the board.
    #[serde(default)]
    policy: PromptPolicy,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    log_level: String,
}

fn default_dimension() -> usize {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for BingoConfig {
    fn default() -> Self {
        Self::new(
            default_dimension(),
            BoardMode::default(),
            PromptPolicy::default(),
            default_log_level(),
        )
    }
}

impl BingoConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.default_dimension == 0 {
            return Err(ConfigError::new(
                "default_dimension must be at least 1".to_string(),
            ));
        }

        info!(
            dimension = config.default_dimension,
            mode = %config.default_mode,
            policy = %config.policy,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` (or [`DEFAULT_CONFIG_FILE`]) if it exists, otherwise
    /// returns the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
