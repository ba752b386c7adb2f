use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::naming::DEFAULT_DISALLOWED_CHARS;

/// Rejected configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("delay_between_requests_secs must be a non-negative number of seconds that fits a duration (got {0})")]
    InvalidDelay(f64),
    #[error("disallowed_chars must not contain the '_' replacement character")]
    ReplacementDisallowed,
}

/// Fetch settings loaded from `~/.config/coursedl/config.toml`.
///
/// Passed explicitly into the fetcher and the batch runner; nothing here is global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Total per-request timeout in seconds (None = wait forever).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Connect timeout in seconds (None = libcurl default).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Pause after every attempted download, in seconds.
    #[serde(default = "default_delay")]
    pub delay_between_requests_secs: f64,
    /// Characters replaced by `_` in course directory and file names.
    #[serde(default = "default_disallowed_chars")]
    pub disallowed_chars: String,
    /// Optional User-Agent header sent with every request.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_delay() -> f64 {
    0.5
}

fn default_disallowed_chars() -> String {
    DEFAULT_DISALLOWED_CHARS.iter().collect()
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            connect_timeout_secs: None,
            delay_between_requests_secs: default_delay(),
            disallowed_chars: default_disallowed_chars(),
            user_agent: None,
        }
    }
}

impl FetchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let delay = self.delay_between_requests_secs;
        // Rejects NaN, infinities, negatives and values too large for a Duration.
        if Duration::try_from_secs_f64(delay).is_err() {
            return Err(ConfigError::InvalidDelay(delay));
        }
        if self.disallowed_chars.contains('_') {
            return Err(ConfigError::ReplacementDisallowed);
        }
        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.delay_between_requests_secs).unwrap_or(Duration::ZERO)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }

    pub fn disallowed(&self) -> Vec<char> {
        self.disallowed_chars.chars().collect()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("coursedl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load and validate configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<FetchConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: FetchConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = FetchConfig::default();
        assert!(cfg.timeout_secs.is_none());
        assert!((cfg.delay_between_requests_secs - 0.5).abs() < 1e-9);
        assert_eq!(cfg.disallowed_chars, "<>:\"/\\|?*");
        assert_eq!(cfg.delay(), Duration::from_millis(500));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = FetchConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: FetchConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.disallowed_chars, cfg.disallowed_chars);
        assert_eq!(parsed.timeout_secs, cfg.timeout_secs);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: FetchConfig = toml::from_str("").unwrap();
        assert!((cfg.delay_between_requests_secs - 0.5).abs() < 1e-9);
        assert_eq!(cfg.disallowed(), DEFAULT_DISALLOWED_CHARS.to_vec());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            timeout_secs = 60
            connect_timeout_secs = 10
            delay_between_requests_secs = 0.0
            disallowed_chars = "<>"
            user_agent = "coursedl-test"
        "#;
        let cfg: FetchConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.timeout(), Some(Duration::from_secs(60)));
        assert_eq!(cfg.connect_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(cfg.delay(), Duration::ZERO);
        assert_eq!(cfg.disallowed(), vec!['<', '>']);
        assert_eq!(cfg.user_agent.as_deref(), Some("coursedl-test"));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut cfg = FetchConfig::default();
        cfg.delay_between_requests_secs = -1.0;
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidDelay(-1.0)));

        let mut cfg = FetchConfig::default();
        cfg.delay_between_requests_secs = f64::INFINITY;
        assert!(cfg.validate().is_err());

        let mut cfg = FetchConfig::default();
        cfg.disallowed_chars = "<_>".to_string();
        assert_eq!(cfg.validate(), Err(ConfigError::ReplacementDisallowed));
    }

    #[test]
    fn oversized_delay_is_rejected_without_panicking() {
        let mut cfg = FetchConfig::default();
        cfg.delay_between_requests_secs = 1e30;
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidDelay(1e30)));
        assert_eq!(cfg.delay(), Duration::ZERO);

        cfg.delay_between_requests_secs = f64::NAN;
        assert!(cfg.validate().is_err());
        assert_eq!(cfg.delay(), Duration::ZERO);
    }

    #[test]
    fn load_from_path_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "disallowed_chars = \"_\"\n").unwrap();
        assert!(load_from_path(&path).is_err());

        fs::write(&path, "timeout_secs = 5\n").unwrap();
        let cfg = load_from_path(&path).unwrap();
        assert_eq!(cfg.timeout_secs, Some(5));
    }
}
