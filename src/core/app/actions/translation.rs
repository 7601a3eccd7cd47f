use tracing::{debug, warn};

use super::{App, AppAction, AppCommand};

pub(super) fn handle_translation_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::SubmitTranslation => {
            let params = app.begin_translation()?;
            app.ui.clear_status();
            Some(AppCommand::SpawnTranslation(params))
        }
        AppAction::CancelTranslation => {
            if app.cancel_translation() {
                app.ui.set_status("Translation cancelled");
            }
            None
        }
        AppAction::TranslationFinished { result, request_id } => {
            let Some(request) = app.session.complete_translation(request_id) else {
                debug!(request_id, "dropping reply for a superseded request");
                return None;
            };
            if let Ok(translation) = &result {
                if let Err(e) = app.session.logging.log_translation(&request, translation) {
                    warn!(error = %e, "failed to append to history log");
                    app.ui.set_status(format!("Failed to write history log: {e}"));
                }
            }
            app.form.finish_translation(result);
            None
        }
        AppAction::ReloadLanguages => {
            app.ui.set_status("Loading languages...");
            Some(AppCommand::LoadLanguages(app.languages_params()))
        }
        AppAction::LanguagesLoaded {
            languages,
            request_id,
        } => {
            if !app.session.is_current_languages_request(request_id) {
                return None;
            }
            debug!(count = languages.len(), "languages loaded");
            app.form.apply_languages(languages);
            app.ui.clear_status();
            None
        }
        AppAction::LanguagesFailed { error, request_id } => {
            if !app.session.is_current_languages_request(request_id) {
                return None;
            }
            warn!(%error, "failed to load languages");
            app.form.languages_failed();
            app.ui.clear_status();
            None
        }
        AppAction::SwapLanguages => {
            if app.cancel_translation() {
                debug!("swap cancelled the in-flight translation");
            }
            app.form.swap_languages();
            app.refresh_input_from_form();
            None
        }
        AppAction::TogglePaper => {
            app.toggle_paper();
            None
        }
        _ => unreachable!("non-translation action routed to translation handler"),
    }
}
