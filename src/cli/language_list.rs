//! Language listing
//!
//! Prints the languages the backend offers, one `code - name` row each.

use std::error::Error;

use crate::api::{HttpBackend, LanguageOption, TranslationBackend};
use crate::core::config::Config;
use crate::core::constants::LANGUAGES_FAILED_MESSAGE;
use crate::utils::url::resolve_base_url_from_env;

pub fn format_languages(languages: &[LanguageOption], config: &Config) -> Vec<String> {
    languages
        .iter()
        .map(|language| {
            let mut marks = Vec::new();
            if language.code == config.source_language() {
                marks.push("from");
            }
            if language.code == config.target_language() {
                marks.push("to");
            }
            if marks.is_empty() {
                format!("{} - {}", language.code, language.name)
            } else {
                format!("{} - {} ({})", language.code, language.name, marks.join(", "))
            }
        })
        .collect()
}

pub async fn list_languages(base_url: Option<String>) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let base_url = resolve_base_url_from_env(base_url.as_deref(), config.base_url.as_deref());
    let backend = HttpBackend::new(&base_url, config.request_timeout())?;

    match backend.fetch_languages().await {
        Ok(languages) => {
            if languages.is_empty() {
                println!("The backend at {} lists no languages.", backend.base_url());
            }
            for line in format_languages(&languages, &config) {
                println!("{line}");
            }
            Ok(())
        }
        Err(error) => {
            tracing::warn!(%error, "language list unavailable");
            eprintln!("{LANGUAGES_FAILED_MESSAGE}");
            std::process::exit(1);
        }
    }
}
