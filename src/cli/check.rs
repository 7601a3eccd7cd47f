use std::error::Error;

use crate::api::{BackendError, HttpBackend};
use crate::core::config::Config;
use crate::utils::url::resolve_base_url_from_env;

pub fn describe_failure(base_url: &str, error: &BackendError) -> String {
    match error {
        BackendError::Status {
            status,
            detail: Some(detail),
        } => format!("❌ {base_url} responded with HTTP {status}: {detail}"),
        BackendError::Status {
            status,
            detail: None,
        } => format!("❌ {base_url} responded with HTTP {status}"),
        BackendError::Decode { message } => {
            format!("❌ {base_url} answered with an unexpected body: {message}")
        }
        BackendError::Transport { .. } => format!("❌ {base_url} is not reachable: {error}"),
    }
}

/// Probes `GET /` and prints what the backend says about itself.
pub async fn check_backend(base_url: Option<String>) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let base_url = resolve_base_url_from_env(base_url.as_deref(), config.base_url.as_deref());
    let backend = HttpBackend::new(&base_url, config.request_timeout())?;

    match backend.status().await {
        Ok(message) => {
            println!("✅ {} is up: {message}", backend.base_url());
            Ok(())
        }
        Err(error) => {
            eprintln!("{}", describe_failure(backend.base_url(), &error));
            std::process::exit(1);
        }
    }
}
