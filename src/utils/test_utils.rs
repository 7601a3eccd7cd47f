use crate::api::{
    BackendError, LanguageOption, TranslateRequest, TranslationBackend, TranslationResult,
};
use crate::core::app::{App, AppInitConfig};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Canned backend that records every translate request it receives.
pub struct FakeBackend {
    languages: Result<Vec<LanguageOption>, BackendError>,
    translation: Result<TranslationResult, BackendError>,
    delay: Option<Duration>,
    calls: Mutex<Vec<TranslateRequest>>,
}

impl FakeBackend {
    pub fn new(
        languages: Result<Vec<LanguageOption>, BackendError>,
        translation: Result<TranslationResult, BackendError>,
    ) -> Self {
        Self {
            languages,
            translation,
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn translate_calls(&self) -> Vec<TranslateRequest> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl TranslationBackend for FakeBackend {
    async fn fetch_languages(&self) -> Result<Vec<LanguageOption>, BackendError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.languages.clone()
    }

    async fn translate(
        &self,
        request: &TranslateRequest,
    ) -> Result<TranslationResult, BackendError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.translation.clone()
    }
}

pub fn sample_languages() -> Vec<LanguageOption> {
    vec![
        LanguageOption::new("en", "English"),
        LanguageOption::new("hi", "Hindi"),
        LanguageOption::new("bn", "Bengali"),
        LanguageOption::new("ta", "Tamil"),
        LanguageOption::new("ur", "Urdu"),
    ]
}

pub fn create_test_app() -> App {
    let backend = Arc::new(FakeBackend::new(
        Ok(sample_languages()),
        Ok(TranslationResult::default()),
    ));
    App::new(AppInitConfig {
        backend,
        source_language: "en".to_string(),
        target_language: "hi".to_string(),
        paper_light: false,
        log_file: None,
    })
    .expect("test app")
}
