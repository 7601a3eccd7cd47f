//! TUI-less "translate" command

use std::error::Error;

use tracing::warn;

use crate::api::{HttpBackend, TranslateRequest, TranslationBackend, TranslationResult};
use crate::core::config::Config;
use crate::core::labels::pronunciation_label;
use crate::core::notice::Notice;
use crate::utils::logging::LoggingState;
use crate::utils::url::resolve_base_url_from_env;

/// Builds the request from command-line words. `None` when the text is blank.
pub fn build_request(
    words: &[String],
    from: Option<&str>,
    to: Option<&str>,
    config: &Config,
) -> Option<TranslateRequest> {
    let text = words.join(" ");
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    Some(TranslateRequest {
        text: text.to_string(),
        source_language: from.unwrap_or(config.source_language()).to_string(),
        target_language: to.unwrap_or(config.target_language()).to_string(),
    })
}

/// Translation first, then the transliteration under its caption.
pub fn render_translation(result: &TranslationResult, target_language: &str) -> Vec<String> {
    let mut lines = vec![result.translated_text.clone()];
    if !result.transliterated_text.is_empty() {
        lines.push(String::new());
        lines.push(format!("{}:", pronunciation_label(target_language)));
        lines.push(result.transliterated_text.clone());
    }
    lines
}

pub fn exit_code_for(notice: &Notice) -> i32 {
    if notice.is_warning() {
        2
    } else {
        1
    }
}

pub async fn translate_once(
    backend: &dyn TranslationBackend,
    request: &TranslateRequest,
) -> Result<TranslationResult, Notice> {
    backend.translate(request).await.map_err(|error| {
        warn!(%error, "one-shot translation failed");
        Notice::from_translation_error(&error)
    })
}

pub async fn run_translate(
    words: Vec<String>,
    from: Option<String>,
    to: Option<String>,
    base_url: Option<String>,
    log: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let Some(request) = build_request(&words, from.as_deref(), to.as_deref(), &config) else {
        eprintln!("Usage: translaterm translate [--from CODE] [--to CODE] <text>");
        std::process::exit(1);
    };

    let base_url = resolve_base_url_from_env(base_url.as_deref(), config.base_url.as_deref());
    let backend = HttpBackend::new(&base_url, config.request_timeout())?;
    let logging = LoggingState::new(log)?;

    match translate_once(&backend, &request).await {
        Ok(result) => {
            for line in render_translation(&result, &request.target_language) {
                println!("{line}");
            }
            logging.log_translation(&request, &result)?;
            Ok(())
        }
        Err(notice) => {
            eprintln!("{}: {}", notice.severity.as_str(), notice.message);
            std::process::exit(exit_code_for(&notice));
        }
    }
}
