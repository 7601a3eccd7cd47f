//! Wire payloads exchanged with the translation backend.

pub mod client;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

pub use client::{BackendError, HttpBackend, TranslationBackend};

/// One selectable language as listed by `GET /languages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOption {
    pub code: String,
    pub name: String,
}

impl LanguageOption {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslateRequest {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
}

#[derive(Debug, Deserialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    /// Romanized rendering of the translation. The backend names it after
    /// Hinglish but fills it for every target language.
    pub hinglish_text: String,
    #[serde(default)]
    pub source_language: Option<String>,
    #[serde(default)]
    pub target_language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    pub message: String,
}

/// Error body shape returned by the backend for failed requests.
///
/// `detail` is usually a string, but validation failures carry a list of
/// objects instead, so it is kept as raw JSON and narrowed by [`ErrorBody::detail_text`].
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::String(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            _ => None,
        }
    }
}

/// Translated text together with its transliteration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationResult {
    pub translated_text: String,
    pub transliterated_text: String,
}

impl From<TranslateResponse> for TranslationResult {
    fn from(response: TranslateResponse) -> Self {
        Self {
            translated_text: response.translated_text,
            transliterated_text: response.hinglish_text,
        }
    }
}
