//! Shared constants used across the application

/// Backend used when neither the command line, the environment nor the
/// config file names one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable that overrides the configured backend URL.
pub const BASE_URL_ENV_VAR: &str = "TRANSLATERM_BASE_URL";

pub const DEFAULT_SOURCE_LANGUAGE: &str = "en";
pub const DEFAULT_TARGET_LANGUAGE: &str = "hi";

/// Target language whose transliteration is a Hindi/English mix rather than
/// a plain romanization.
pub const HINGLISH_LANGUAGE_CODE: &str = "hi";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

pub const LANGUAGES_FAILED_MESSAGE: &str = "Failed to fetch languages";
pub const QUOTA_EXCEEDED_MESSAGE: &str = "API quota exceeded. Please try again later.";
pub const INVALID_API_KEY_MESSAGE: &str = "Invalid API key. Please check your configuration.";
pub const TRANSLATION_FAILED_MESSAGE: &str = "Translation failed. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";
