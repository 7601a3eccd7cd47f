//! Error types for settings operations.

use std::fmt;

use crate::core::config::ConfigKey;

#[derive(Debug)]
pub enum SettingError {
    /// The provided setting key is not recognized.
    UnknownKey(String),
    /// The value was rejected by the key's validation.
    InvalidValue { key: ConfigKey, message: String },
    /// An error occurred while persisting the configuration.
    ConfigError(String),
}

impl SettingError {
    /// Print the error message to stderr with appropriate formatting.
    pub fn print(&self) {
        match self {
            SettingError::UnknownKey(key) => {
                eprintln!("❌ Unknown config key: {key}");
                let known: Vec<&str> = ConfigKey::ALL.iter().map(|key| key.name()).collect();
                eprintln!("   Known keys: {}", known.join(", "));
            }
            SettingError::InvalidValue { key, message } => {
                eprintln!("⚠️  {message}");
                eprintln!("Example: {}", key.example());
            }
            SettingError::ConfigError(msg) => {
                eprintln!("❌ Failed to save configuration: {msg}");
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl fmt::Display for SettingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingError::UnknownKey(key) => write!(f, "Unknown config key: {key}"),
            SettingError::InvalidValue { key, message } => {
                write!(f, "Invalid value for {}: {message}", key.name())
            }
            SettingError::ConfigError(msg) => write!(f, "Config error: {msg}"),
        }
    }
}

impl std::error::Error for SettingError {}
