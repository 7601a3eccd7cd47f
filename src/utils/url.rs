//! Backend URL helpers
//!
//! Keeps endpoint construction free of doubled or missing slashes no matter
//! how the base URL was typed into the config file or on the command line.

use crate::core::constants::{BASE_URL_ENV_VAR, DEFAULT_BASE_URL};

/// Strip trailing slashes from a base URL.
///
/// ```
/// use translaterm::utils::url::normalize_base_url;
///
/// assert_eq!(normalize_base_url("http://localhost:8000/"), "http://localhost:8000");
/// assert_eq!(normalize_base_url("http://translate.lan/api//"), "http://translate.lan/api");
/// ```
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Join a base URL and an endpoint path with exactly one slash.
///
/// ```
/// use translaterm::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("http://localhost:8000/", "/languages"),
///     "http://localhost:8000/languages"
/// );
/// ```
pub fn construct_api_url(base_url: &str, endpoint: &str) -> String {
    let normalized_base = normalize_base_url(base_url);
    let endpoint = endpoint.trim_start_matches('/');
    format!("{normalized_base}/{endpoint}")
}

/// Pick the backend base URL: explicit flag, then environment, then config,
/// then the local default. Blank values are skipped.
pub fn resolve_base_url(
    flag: Option<&str>,
    env_value: Option<&str>,
    configured: Option<&str>,
) -> String {
    [flag, env_value, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(normalize_base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// [`resolve_base_url`] reading the environment variable itself.
pub fn resolve_base_url_from_env(flag: Option<&str>, configured: Option<&str>) -> String {
    let env_value = std::env::var(BASE_URL_ENV_VAR).ok();
    resolve_base_url(flag, env_value.as_deref(), configured)
}
