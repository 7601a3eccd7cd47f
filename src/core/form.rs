//! The translator form view-model.
//!
//! `FormState` owns everything the form displays: the input, the last result,
//! the language selection, the loading flag, the notice slot and the paper
//! theme flag. Event handlers receive it by `&mut` and every transition lives
//! here, so the rules can be exercised without a terminal or a network.

use tracing::debug;

use crate::api::{BackendError, LanguageOption, TranslateRequest, TranslationResult};
use crate::core::labels::{pronunciation_helper_text, pronunciation_label};
use crate::core::notice::{Notice, NoticeSource};

#[derive(Debug, Clone)]
pub struct FormState {
    pub input: String,
    pub translated_text: String,
    pub pronunciation_text: String,
    pub source_language: String,
    pub target_language: String,
    pub languages: Vec<LanguageOption>,
    pub loading: bool,
    pub notice: Option<Notice>,
    pub paper_light: bool,
    preferred_source: String,
    preferred_target: String,
}

impl FormState {
    pub fn new(source_language: &str, target_language: &str, paper_light: bool) -> Self {
        Self {
            input: String::new(),
            translated_text: String::new(),
            pronunciation_text: String::new(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            languages: Vec::new(),
            loading: false,
            notice: None,
            paper_light,
            preferred_source: source_language.to_string(),
            preferred_target: target_language.to_string(),
        }
    }

    pub fn has_input(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.has_input() && !self.loading
    }

    pub fn submit_caption(&self) -> &'static str {
        if self.loading {
            "Translating..."
        } else {
            "Translate"
        }
    }

    /// Enter the requesting state and build the request to send.
    ///
    /// Returns `None` without touching any state when the input is blank or a
    /// request is already in flight.
    pub fn begin_translation(&mut self) -> Option<TranslateRequest> {
        let text = self.input.trim();
        if text.is_empty() || self.loading {
            return None;
        }

        let request = TranslateRequest {
            text: text.to_string(),
            source_language: self.source_language.clone(),
            target_language: self.target_language.clone(),
        };

        self.notice = None;
        self.loading = true;
        Some(request)
    }

    pub fn finish_translation(&mut self, outcome: Result<TranslationResult, BackendError>) {
        self.loading = false;
        match outcome {
            Ok(result) => {
                self.translated_text = result.translated_text;
                self.pronunciation_text = result.transliterated_text;
            }
            Err(error) => {
                debug!(%error, "translation failed");
                self.notice = Some(Notice::from_translation_error(&error));
            }
        }
    }

    /// Leave the requesting state without a result. Returns `false` when
    /// nothing was in flight.
    pub fn cancel_translation(&mut self) -> bool {
        if !self.loading {
            return false;
        }
        self.loading = false;
        true
    }

    /// Exchange the language pair and the two text fields.
    ///
    /// The transliteration belongs to the old pair, so it is dropped rather
    /// than swapped.
    pub fn swap_languages(&mut self) {
        std::mem::swap(&mut self.source_language, &mut self.target_language);
        std::mem::swap(&mut self.input, &mut self.translated_text);
        self.pronunciation_text.clear();
        self.notice = None;
    }

    pub fn apply_languages(&mut self, languages: Vec<LanguageOption>) {
        self.languages = languages;
        if matches!(
            self.notice,
            Some(Notice {
                source: NoticeSource::Languages,
                ..
            })
        ) {
            self.notice = None;
        }
        self.reconcile_selection();
    }

    /// Record a failed language-list request. Any previously loaded list is
    /// kept so a failed refresh does not empty the selectors.
    pub fn languages_failed(&mut self) {
        self.notice = Some(Notice::languages_failed());
    }

    pub fn has_languages(&self) -> bool {
        !self.languages.is_empty()
    }

    pub fn language_name(&self, code: &str) -> Option<&str> {
        self.languages
            .iter()
            .find(|language| language.code == code)
            .map(|language| language.name.as_str())
    }

    /// Display name for a code, falling back to the raw code before the list
    /// has loaded.
    pub fn language_display(&self, code: &str) -> String {
        self.language_name(code)
            .map(str::to_string)
            .unwrap_or_else(|| code.to_string())
    }

    pub fn set_source_language(&mut self, code: &str) -> bool {
        if !self.is_known_language(code) {
            return false;
        }
        self.source_language = code.to_string();
        true
    }

    pub fn set_target_language(&mut self, code: &str) -> bool {
        if !self.is_known_language(code) {
            return false;
        }
        self.target_language = code.to_string();
        true
    }

    pub fn toggle_paper(&mut self) {
        self.paper_light = !self.paper_light;
    }

    pub fn paper_caption(&self) -> &'static str {
        if self.paper_light {
            "Light Mode"
        } else {
            "Dark Mode"
        }
    }

    pub fn pronunciation_label(&self) -> &'static str {
        pronunciation_label(&self.target_language)
    }

    pub fn pronunciation_helper_text(&self) -> &'static str {
        pronunciation_helper_text(&self.target_language)
    }

    fn is_known_language(&self, code: &str) -> bool {
        self.languages.iter().any(|language| language.code == code)
    }

    /// Keep the selection inside the loaded list: a code the backend no longer
    /// offers is replaced by the preferred default, or by the first entry.
    fn reconcile_selection(&mut self) {
        if self.languages.is_empty() {
            return;
        }
        if !self.is_known_language(&self.source_language) {
            let fallback = self.fallback_code(&self.preferred_source);
            debug!(from = %self.source_language, to = %fallback, "source language unavailable");
            self.source_language = fallback;
        }
        if !self.is_known_language(&self.target_language) {
            let fallback = self.fallback_code(&self.preferred_target);
            debug!(from = %self.target_language, to = %fallback, "target language unavailable");
            self.target_language = fallback;
        }
    }

    fn fallback_code(&self, preferred: &str) -> String {
        if self.is_known_language(preferred) {
            return preferred.to_string();
        }
        self.languages
            .first()
            .map(|language| language.code.clone())
            .unwrap_or_else(|| preferred.to_string())
    }
}
