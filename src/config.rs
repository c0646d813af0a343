use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;
use crate::game::Player;

/// Mode names accepted in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModeSetting {
    VersusAi,
    TwoPlayer,
}

/// Session settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Skip the start-up prompt when set
    pub mode: Option<ModeSetting>,
    /// Side the computer plays in versus mode
    pub ai_player: Player,
    /// Seed for the computer's random fallback moves
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            mode: None,
            ai_player: Player::O,
            seed: None,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber` filter directive, e.g. `"warn"` or
    /// `"connect_four=debug"`
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "warn".to_string(),
        }
    }
}

impl LogConfig {
    /// Filter to install. `rust_log` (the `RUST_LOG` value) takes precedence
    /// over the configured level unless the level was given explicitly on
    /// the command line.
    pub fn env_filter(
        &self,
        rust_log: Option<&str>,
        explicit_level: bool,
    ) -> Result<EnvFilter, ConfigError> {
        if !explicit_level {
            if let Some(filter) = rust_log.and_then(|env| EnvFilter::try_new(env).ok()) {
                return Ok(filter);
            }
        }
        EnvFilter::try_new(&self.level).map_err(|e| {
            ConfigError::Validation(format!(
                "log.level '{}' is not a valid filter: {e}",
                self.level
            ))
        })
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub log: LogConfig,
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
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log.level.trim().is_empty() {
            return Err(ConfigError::Validation("log.level must not be empty".into()));
        }
        if let Err(e) = EnvFilter::try_new(&self.log.level) {
            return Err(ConfigError::Validation(format!(
                "log.level '{}' is not a valid filter: {e}",
                self.log.level
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
