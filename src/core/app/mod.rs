use std::sync::Arc;

use tui_textarea::TextArea;

use crate::api::TranslationBackend;
use crate::core::form::FormState;
use crate::core::translate_service::{LanguagesParams, TranslationParams};
use crate::ui::theme::Theme;
use crate::utils::logging::LoggingState;

pub mod actions;
pub mod session;
pub mod ui_state;


pub use actions::{apply_actions, AppAction, AppActionDispatcher, AppCommand};
pub use session::SessionContext;
pub use ui_state::UiState;

/// Everything needed to stand up the form.
pub struct AppInitConfig {
    pub backend: Arc<dyn TranslationBackend>,
    pub source_language: String,
    pub target_language: String,
    pub paper_light: bool,
    pub log_file: Option<String>,
}

pub struct App {
    pub form: FormState,
    pub session: SessionContext,
    pub ui: UiState,
}

impl App {
    pub fn new(config: AppInitConfig) -> Result<App, Box<dyn std::error::Error>> {
        let logging = LoggingState::new(config.log_file)?;
        let form = FormState::new(
            &config.source_language,
            &config.target_language,
            config.paper_light,
        );
        let ui = UiState::new(Theme::for_paper(config.paper_light));
        Ok(App {
            form,
            session: SessionContext::new(config.backend, logging),
            ui,
        })
    }

    /// Apply an editor change and mirror the text into the form.
    pub fn apply_input_edit<F>(&mut self, f: F)
    where
        F: FnOnce(&mut TextArea<'static>),
    {
        self.ui.apply_textarea_edit(f);
        self.form.input = self.ui.get_input_text();
    }

    /// Push the form's input back into the editor after a model-side change.
    pub fn refresh_input_from_form(&mut self) {
        let text = self.form.input.clone();
        self.ui.set_input_text(&text);
    }

    pub fn toggle_paper(&mut self) {
        self.form.toggle_paper();
        self.ui.set_theme(Theme::for_paper(self.form.paper_light));
    }

    pub fn is_translating(&self) -> bool {
        self.form.loading
    }

    /// Move the form into the requesting state and build the task parameters.
    /// Returns `None` when the busy guard or the blank-input rule rejects it.
    pub fn begin_translation(&mut self) -> Option<TranslationParams> {
        let request = self.form.begin_translation()?;
        let (cancel_token, request_id) = self.session.start_translation(request.clone());
        Some(TranslationParams {
            backend: self.session.backend.clone(),
            request,
            cancel_token,
            request_id,
        })
    }

    pub fn cancel_translation(&mut self) -> bool {
        self.session.cancel_translation();
        self.form.cancel_translation()
    }

    pub fn languages_params(&mut self) -> LanguagesParams {
        LanguagesParams {
            backend: self.session.backend.clone(),
            request_id: self.session.start_languages_request(),
        }
    }
}
