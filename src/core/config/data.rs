use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::constants::{
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SOURCE_LANGUAGE, DEFAULT_TARGET_LANGUAGE,
};

/// Paper colour the form starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(ThemeMode::Dark),
            "light" | "paper" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn is_light(self) -> bool {
        self == ThemeMode::Light
    }
}

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Translation backend base URL (e.g., "http://localhost:8000")
    pub base_url: Option<String>,
    /// Language code selected in the "From" picker at startup
    pub default_source_language: Option<String>,
    /// Language code selected in the "To" picker at startup
    pub default_target_language: Option<String>,
    /// Initial paper theme ("dark" or "light")
    pub theme: Option<String>,
    /// Upper bound for a single backend request, in seconds
    pub request_timeout_secs: Option<u64>,
}

/// Keys accepted by `translaterm set` / `translaterm unset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    BaseUrl,
    Source,
    Target,
    Theme,
    Timeout,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 5] = [
        ConfigKey::BaseUrl,
        ConfigKey::Source,
        ConfigKey::Target,
        ConfigKey::Theme,
        ConfigKey::Timeout,
    ];

    pub fn parse(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "base-url" | "base_url" | "url" => Some(ConfigKey::BaseUrl),
            "source" | "from" | "default-source" => Some(ConfigKey::Source),
            "target" | "to" | "default-target" => Some(ConfigKey::Target),
            "theme" => Some(ConfigKey::Theme),
            "timeout" | "request-timeout" => Some(ConfigKey::Timeout),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ConfigKey::BaseUrl => "base-url",
            ConfigKey::Source => "source",
            ConfigKey::Target => "target",
            ConfigKey::Theme => "theme",
            ConfigKey::Timeout => "timeout",
        }
    }

    pub fn example(self) -> &'static str {
        match self {
            ConfigKey::BaseUrl => "translaterm set base-url http://localhost:8000",
            ConfigKey::Source => "translaterm set source en",
            ConfigKey::Target => "translaterm set target hi",
            ConfigKey::Theme => "translaterm set theme light",
            ConfigKey::Timeout => "translaterm set timeout 30",
        }
    }
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}

impl Config {
    pub fn source_language(&self) -> &str {
        non_blank(self.default_source_language.as_deref()).unwrap_or(DEFAULT_SOURCE_LANGUAGE)
    }

    pub fn target_language(&self) -> &str {
        non_blank(self.default_target_language.as_deref()).unwrap_or(DEFAULT_TARGET_LANGUAGE)
    }

    /// Configured theme, falling back to dark for missing or unknown names.
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme
            .as_deref()
            .and_then(ThemeMode::parse)
            .unwrap_or_default()
    }

    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// Validate and store a value for `key`. Returns the value as stored.
    pub fn set_value(&mut self, key: ConfigKey, value: &str) -> Result<String, String> {
        let value = value.trim();
        if value.is_empty() {
            return Err(format!("A value is required for {}", key.name()));
        }

        match key {
            ConfigKey::BaseUrl => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(format!(
                        "Base URL must start with http:// or https:// (got {value})"
                    ));
                }
                let normalized = crate::utils::url::normalize_base_url(value);
                self.base_url = Some(normalized.clone());
                Ok(normalized)
            }
            ConfigKey::Source => {
                self.default_source_language = Some(value.to_string());
                Ok(value.to_string())
            }
            ConfigKey::Target => {
                self.default_target_language = Some(value.to_string());
                Ok(value.to_string())
            }
            ConfigKey::Theme => {
                let mode = ThemeMode::parse(value)
                    .ok_or_else(|| format!("Unknown theme: {value} (use dark or light)"))?;
                self.theme = Some(mode.id().to_string());
                Ok(mode.id().to_string())
            }
            ConfigKey::Timeout => {
                let secs: u64 = value
                    .parse()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| format!("Timeout must be a positive number of seconds (got {value})"))?;
                self.request_timeout_secs = Some(secs);
                Ok(secs.to_string())
            }
        }
    }

    pub fn unset_value(&mut self, key: ConfigKey) {
        match key {
            ConfigKey::BaseUrl => self.base_url = None,
            ConfigKey::Source => self.default_source_language = None,
            ConfigKey::Target => self.default_target_language = None,
            ConfigKey::Theme => self.theme = None,
            ConfigKey::Timeout => self.request_timeout_secs = None,
        }
    }

    pub fn display_value(&self, key: ConfigKey) -> Option<String> {
        match key {
            ConfigKey::BaseUrl => self.base_url.clone(),
            ConfigKey::Source => self.default_source_language.clone(),
            ConfigKey::Target => self.default_target_language.clone(),
            ConfigKey::Theme => self.theme.clone(),
            ConfigKey::Timeout => self.request_timeout_secs.map(|secs| format!("{secs}s")),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
