use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::info;

use super::AppHandle;

use crate::{
    api::HttpBackend,
    core::{
        app::{App, AppInitConfig},
        config::Config,
    },
    utils::url::resolve_base_url_from_env,
};

/// Resolved startup settings for the interactive form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLaunch {
    pub base_url: String,
    pub timeout: Duration,
    pub source_language: String,
    pub target_language: String,
    pub paper_light: bool,
    pub log_file: Option<String>,
}

impl FormLaunch {
    pub fn from_config(
        config: &Config,
        base_url_override: Option<&str>,
        log_file: Option<String>,
    ) -> Self {
        Self {
            base_url: resolve_base_url_from_env(base_url_override, config.base_url.as_deref()),
            timeout: config.request_timeout(),
            source_language: config.source_language().to_string(),
            target_language: config.target_language().to_string(),
            paper_light: config.theme_mode().is_light(),
            log_file,
        }
    }
}

pub fn bootstrap_app(launch: FormLaunch) -> Result<AppHandle, Box<dyn std::error::Error>> {
    let backend = HttpBackend::new(&launch.base_url, launch.timeout)?;
    info!(base_url = %backend.base_url(), "starting translator form");

    let app = App::new(AppInitConfig {
        backend: Arc::new(backend),
        source_language: launch.source_language,
        target_language: launch.target_language,
        paper_light: launch.paper_light,
        log_file: launch.log_file,
    })?;

    Ok(AppHandle::new(Arc::new(Mutex::new(app))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_uses_config_values() {
        let config = Config {
            base_url: Some("http://translate.lan:9000".to_string()),
            default_source_language: Some("bn".to_string()),
            theme: Some("light".to_string()),
            request_timeout_secs: Some(15),
            ..Default::default()
        };

        let launch = FormLaunch::from_config(&config, Some("http://override:1/"), None);
        assert_eq!(launch.base_url, "http://override:1");
        assert_eq!(launch.source_language, "bn");
        assert_eq!(launch.target_language, "hi");
        assert!(launch.paper_light);
        assert_eq!(launch.timeout, Duration::from_secs(15));
    }

    #[tokio::test]
    async fn bootstrap_builds_an_idle_form() {
        let launch = FormLaunch {
            base_url: "http://localhost:8000".to_string(),
            timeout: Duration::from_secs(5),
            source_language: "en".to_string(),
            target_language: "ta".to_string(),
            paper_light: false,
            log_file: None,
        };
        let app = bootstrap_app(launch).expect("bootstrap");
        let (target, loading) = app
            .read(|app| (app.form.target_language.clone(), app.form.loading))
            .await;
        assert_eq!(target, "ta");
        assert!(!loading);
    }
}
