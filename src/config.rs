// User configuration loaded from ~/.config/scilent/config.toml.
// Falls back to sensible defaults when the file is missing.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::format::{set_default_zone, TruncationPolicy, Zone};
use crate::locale::{self, Locale};

/// Application configuration, deserialized from `~/.config/scilent/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub timestamp: TimestampConfig,
    #[serde(default)]
    pub truncation: TruncationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Locale tag such as `en-GB`. Unset means: read the environment.
    #[serde(default)]
    pub locale: Option<String>,
    /// Log level for the `scilent` target (default: info).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            locale: None,
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimestampConfig {
    /// Zone for calendar fields: `local`, `utc` or an offset like `+02:00`.
    #[serde(default)]
    pub time_zone: Zone,
    #[serde(default = "default_auto_update")]
    pub auto_update: bool,
    /// Relative-time refresh period in milliseconds (default: 60000).
    #[serde(default = "default_update_interval_ms")]
    pub update_interval_ms: u64,
}

fn default_auto_update() -> bool {
    true
}

fn default_update_interval_ms() -> u64 {
    60_000
}

impl Default for TimestampConfig {
    fn default() -> Self {
        Self {
            time_zone: Zone::default(),
            auto_update: default_auto_update(),
            update_interval_ms: default_update_interval_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TruncationConfig {
    #[serde(default)]
    pub policy: TruncationPolicy,
    /// Character budget used when the caller gives none (default: 40).
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

fn default_max_length() -> usize {
    40
}

impl Default for TruncationConfig {
    fn default() -> Self {
        Self {
            policy: TruncationPolicy::default(),
            max_length: default_max_length(),
        }
    }
}

impl Config {
    /// Read config from disk, or return defaults if the file doesn't exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("scilent")
            .join("config.toml")
    }

    /// Configured locale, else the environment's, else en-US.
    pub fn locale(&self) -> Locale {
        self.general
            .locale
            .as_deref()
            .map(Locale::parse)
            .or_else(Locale::from_env)
            .unwrap_or_default()
    }

    /// Install the configured locale and zone as process-wide defaults.
    pub fn apply(&self) {
        let locale = self.locale();
        locale::set_default_locale(locale);
        set_default_zone(self.timestamp.time_zone);
        tracing::debug!(
            "defaults: locale={} zone={}",
            locale,
            self.timestamp.time_zone
        );
    }
}
