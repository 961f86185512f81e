use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Runtime settings, read from `config.json` in the platform config directory
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Seconds on the payment countdown
    pub countdown_seconds: u32,
    /// Simulated payment gateway delay
    pub payment_delay_ms: u64,
    /// Number of days offered on the schedule screen, starting today
    pub schedule_days: u32,
    /// Event poll timeout of the interactive UI
    pub tick_rate_ms: u64,
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            countdown_seconds: 300,
            payment_delay_ms: 1000,
            schedule_days: 14,
            tick_rate_ms: 100,
            log_file: "futsalku.log".to_string(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "futsalku", "futsalku")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.json"))
    }

    /// Load the user's configuration, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path().ok_or(ConfigError::DirectoryUnavailable)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let config_data = fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadFailed(format!("{}: {}", path.display(), e)))?;

        let config: Config = serde_json::from_str(&config_data)
            .map_err(|e| ConfigError::LoadFailed(format!("{}: {}", path.display(), e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path().ok_or(ConfigError::DirectoryUnavailable)?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveFailed(format!("{}: {}", parent.display(), e)))?;
        }

        let config_data = serde_json::to_string_pretty(self)?;

        fs::write(path, config_data)
            .map_err(|e| ConfigError::SaveFailed(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.countdown_seconds == 0 {
            return Err(invalid("countdown_seconds", "must be greater than zero"));
        }
        if !(1..=31).contains(&self.schedule_days) {
            return Err(invalid("schedule_days", "must be between 1 and 31"));
        }
        if self.tick_rate_ms == 0 {
            return Err(invalid("tick_rate_ms", "must be greater than zero"));
        }
        if self.log_file.trim().is_empty() {
            return Err(invalid("log_file", "must not be empty"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> crate::error::FutsalError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.countdown_seconds, 300);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            payment_delay_ms: 0,
            schedule_days: 7,
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults_for_the_rest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "countdown_seconds": 60 }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.countdown_seconds, 60);
        assert_eq!(config.schedule_days, 14);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "schedule_days": 40 }"#).unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("schedule_days"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
