//! Configuration for DSAFlow

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::notifications::{parse_or_default, ClockTime, DEFAULT_SLEEP, DEFAULT_WAKE};

pub const API_KEY_ENV: &str = "DSAFLOW_API_KEY";
pub const DATA_DIR_ENV: &str = "DSAFLOW_DATA_DIR";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Default data directory
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dsaflow")
}

/// Default location of the config file
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dsaflow")
        .join("config.toml")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncBackend {
    /// JSON files under the data directory
    #[default]
    File,
    /// Hosted REST database
    Http,
    /// Process memory only
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSettings {
    #[serde(default)]
    pub backend: SyncBackend,

    /// Base URL of the REST backend
    #[serde(default)]
    pub url: Option<String>,

    /// Public API key sent with every request
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            backend: SyncBackend::default(),
            url: None,
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Whether the local host grants notification permission
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_wake")]
    pub default_wake: String,

    #[serde(default = "default_sleep")]
    pub default_sleep: String,
}

fn default_true() -> bool {
    true
}

fn default_wake() -> String {
    "7:00 AM".to_string()
}

fn default_sleep() -> String {
    "11:00 PM".to_string()
}

impl NotificationSettings {
    /// Parse wake and sleep times, falling back to the configured defaults
    /// for input that cannot be read.
    pub fn resolve_times(&self, wake: &str, sleep: &str) -> (ClockTime, ClockTime) {
        let default_wake = parse_or_default(&self.default_wake, DEFAULT_WAKE);
        let default_sleep = parse_or_default(&self.default_sleep, DEFAULT_SLEEP);
        (
            parse_or_default(wake, default_wake),
            parse_or_default(sleep, default_sleep),
        )
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            default_wake: default_wake(),
            default_sleep: default_sleep(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub sync: SyncSettings,

    #[serde(default)]
    pub notifications: NotificationSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            sync: SyncSettings::default(),
            notifications: NotificationSettings::default(),
        }
    }
}

impl AppConfig {
    /// Load config from file; a missing file gives the defaults.
    /// Environment overrides are applied afterwards.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Self::default()
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    fn apply_env<F: Fn(&str) -> Option<String>>(&mut self, lookup: F) {
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.is_empty()) {
            self.sync.api_key = Some(key);
        }
        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig::load(temp.path().join("missing.toml")).unwrap();

        assert_eq!(config.sync.backend, SyncBackend::File);
        assert_eq!(config.notifications.default_wake, "7:00 AM");
        assert_eq!(config.notifications.default_sleep, "11:00 PM");
        assert!(config.notifications.enabled);
    }

    #[test]
    fn test_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
data_dir = "/tmp/dsaflow-test"

[sync]
backend = "http"
url = "https://db.example.com"

[notifications]
enabled = false
"#,
        )
        .unwrap();

        let config: AppConfig = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/dsaflow-test"));
        assert_eq!(config.sync.backend, SyncBackend::Http);
        assert_eq!(config.sync.timeout_secs, 30);
        assert!(!config.notifications.enabled);
        assert_eq!(config.notifications.default_sleep, "11:00 PM");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config.apply_env(|key| match key {
            API_KEY_ENV => Some("secret".to_string()),
            DATA_DIR_ENV => Some(String::new()),
            _ => None,
        });

        assert_eq!(config.sync.api_key.as_deref(), Some("secret"));
        assert_eq!(config.data_dir, default_data_dir());
    }

    #[test]
    fn test_save_and_reload() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.sync.backend = SyncBackend::Memory;
        config.save(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let reloaded: AppConfig = toml::from_str(&content).unwrap();
        assert_eq!(reloaded.sync.backend, SyncBackend::Memory);
    }

    #[test]
    fn test_resolve_times_uses_configured_defaults() {
        let settings = NotificationSettings {
            default_wake: "6:00 AM".to_string(),
            default_sleep: "10:30 PM".to_string(),
            ..NotificationSettings::default()
        };

        let (wake, sleep) = settings.resolve_times("whenever", "late");
        assert_eq!(wake, ClockTime { hour: 6, minute: 0 });
        assert_eq!(sleep, ClockTime { hour: 22, minute: 30 });

        let (wake, sleep) = settings.resolve_times("8:15 AM", "11:00 PM");
        assert_eq!(wake, ClockTime { hour: 8, minute: 15 });
        assert_eq!(sleep, ClockTime { hour: 23, minute: 0 });
    }

    #[test]
    fn test_resolve_times_with_unreadable_defaults() {
        let settings = NotificationSettings {
            default_wake: "dawn".to_string(),
            default_sleep: String::new(),
            ..NotificationSettings::default()
        };

        assert_eq!(settings.resolve_times("?", "?"), (DEFAULT_WAKE, DEFAULT_SLEEP));
    }

    #[test]
    fn test_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[sync\nbackend = ").unwrap();

        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Parse(_))));
    }
}
