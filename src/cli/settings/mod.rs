//! Settings management for CLI set/unset commands.

pub mod error;

pub use error::SettingError;

use crate::core::config::{Config, ConfigKey};

fn parse_key(key: &str) -> Result<ConfigKey, SettingError> {
    ConfigKey::parse(key).ok_or_else(|| SettingError::UnknownKey(key.to_string()))
}

/// Applies `set <key> <value...>` to `config`.
///
/// Returns `Ok(None)` when no value was given, in which case the caller
/// shows the current configuration instead.
pub fn apply_set(
    config: &mut Config,
    key: &str,
    value: &[String],
) -> Result<Option<String>, SettingError> {
    let key = parse_key(key)?;
    if value.is_empty() {
        return Ok(None);
    }

    let stored = config
        .set_value(key, &value.join(" "))
        .map_err(|message| SettingError::InvalidValue { key, message })?;
    Ok(Some(format!("✅ Set {} to: {stored}", key.name())))
}

pub fn apply_unset(config: &mut Config, key: &str) -> Result<String, SettingError> {
    let key = parse_key(key)?;
    config.unset_value(key);
    Ok(format!("✅ Unset {}", key.name()))
}

fn save(config: &Config) -> Result<(), SettingError> {
    config
        .save()
        .map_err(|err| SettingError::ConfigError(err.to_string()))
}

pub fn run_set(key: String, value: Option<Vec<String>>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load()?;
    match apply_set(&mut config, &key, value.as_deref().unwrap_or_default()) {
        Ok(Some(message)) => match save(&config) {
            Ok(()) => println!("{message}"),
            Err(err) => {
                err.print();
                std::process::exit(err.exit_code());
            }
        },
        Ok(None) => config.print_all(),
        Err(err) => {
            err.print();
            std::process::exit(err.exit_code());
        }
    }
    Ok(())
}

pub fn run_unset(key: String) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load()?;
    let outcome = apply_unset(&mut config, &key).and_then(|message| {
        save(&config)?;
        Ok(message)
    });
    match outcome {
        Ok(message) => println!("{message}"),
        Err(err) => {
            err.print();
            std::process::exit(err.exit_code());
        }
    }
    Ok(())
}
