//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `alarmclock.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use alarmclock_adapter_http_reqwest::HttpSinkConfig;
use alarmclock_app::collector::SaveScope;
use alarmclock_domain::control::{ControlLabels, DEFAULT_REVERT_DELAY_MS};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target device and its save endpoints.
    pub device: HttpSinkConfig,
    /// Save action behaviour.
    pub action: ActionConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Save action settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ActionConfig {
    /// How long the result label stays before reverting, in milliseconds.
    pub revert_delay_ms: u64,
    /// Which parts of the snapshot are submitted.
    pub scope: SaveScope,
    /// Labels shown on the control.
    pub labels: ControlLabels,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `alarmclock.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("alarmclock.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("ALARMCLOCK_BASE_URL") {
            self.device.base_url = val;
        }
        if let Ok(val) = std::env::var("ALARMCLOCK_REVERT_DELAY_MS")
            && let Ok(delay) = val.parse()
        {
            self.action.revert_delay_ms = delay;
        }
        if let Ok(val) = std::env::var("ALARMCLOCK_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let base_url = &self.device.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "device base_url must be an http(s) URL, got {base_url:?}"
            )));
        }
        for path in [
            &self.device.endpoints.schedule_entries,
            &self.device.endpoints.display_settings,
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "endpoint path must start with '/', got {path:?}"
                )));
            }
        }
        Ok(())
    }
}

impl ActionConfig {
    #[must_use]
    pub fn revert_delay(&self) -> Duration {
        Duration::from_millis(self.revert_delay_ms)
    }
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            revert_delay_ms: DEFAULT_REVERT_DELAY_MS,
            scope: SaveScope::All,
            labels: ControlLabels::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "alarmclock_push=info,alarmclock_app=info,alarmclock_adapter_http_reqwest=info"
                .to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
