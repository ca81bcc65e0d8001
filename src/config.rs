//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use strictly_rps::ConfigError;
use tracing::{debug, info, instrument};

/// Default location of the optional config file.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_rps.toml";

/// Presentation settings for a game session.
///
/// Every field is optional in the file; missing values take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Value pre-filled into the round-count prompt.
    #[serde(default)]
    default_rounds: Option<u32>,

    /// Pause before the computer's move is revealed, in milliseconds.
    #[serde(default = "default_reveal_delay_ms")]
    reveal_delay_ms: u64,

    /// Pause before the round verdict is shown, in milliseconds.
    #[serde(default = "default_verdict_delay_ms")]
    verdict_delay_ms: u64,

    /// Pause before the ending screen appears, in milliseconds.
    #[serde(default = "default_ending_delay_ms")]
    ending_delay_ms: u64,

    /// File receiving tracing output while the terminal UI is active.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_reveal_delay_ms() -> u64 {
    1000
}

#[instrument]
fn default_verdict_delay_ms() -> u64 {
    1500
}

#[instrument]
fn default_ending_delay_ms() -> u64 {
    1000
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_rps.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_rounds: None,
            reveal_delay_ms: default_reveal_delay_ms(),
            verdict_delay_ms: default_verdict_delay_ms(),
            ending_delay_ms: default_ending_delay_ms(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Rejects values the engine would refuse later.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_rounds == Some(0) {
            return Err(ConfigError::new(
                "default_rounds must be a positive integer",
            ));
        }
        Ok(())
    }

    /// Pause before the computer's move is revealed.
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Pause before the round verdict is shown.
    pub fn verdict_delay(&self) -> Duration {
        Duration::from_millis(self.verdict_delay_ms)
    }

    /// Pause before the ending screen appears.
    pub fn ending_delay(&self) -> Duration {
        Duration::from_millis(self.ending_delay_ms)
    }

    /// Config with every pause disabled, for scripted sessions.
    pub fn instant() -> Self {
        Self::default()
            .with_reveal_delay_ms(0)
            .with_verdict_delay_ms(0)
            .with_ending_delay_ms(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.default_rounds(), &None);
        assert_eq!(config.reveal_delay(), Duration::from_millis(1000));
        assert_eq!(config.verdict_delay(), Duration::from_millis(1500));
        assert_eq!(config.log_file(), &PathBuf::from("strictly_rps.log"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_rounds = 5\nverdict_delay_ms = 200").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.default_rounds(), &Some(5));
        assert_eq!(config.verdict_delay_ms(), &200);
        assert_eq!(config.reveal_delay_ms(), &1000);
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_rounds = 0").unwrap();

        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("positive"));
    }

    #[test]
    fn test_malformed_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "reveal_delay_ms = \"soon\"").unwrap();

        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_instant_has_no_pauses() {
        let config = GameConfig::instant();
        assert_eq!(config.reveal_delay(), Duration::ZERO);
        assert_eq!(config.verdict_delay(), Duration::ZERO);
        assert_eq!(config.ending_delay(), Duration::ZERO);
    }
}
