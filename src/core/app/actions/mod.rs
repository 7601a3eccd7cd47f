mod input;
mod picker;
mod translation;

use tokio::sync::mpsc;

use super::App;
use crate::api::{BackendError, LanguageOption, TranslationResult};
use crate::core::translate_service::{LanguagesParams, TranslationParams};
use crate::ui::picker::PickerTarget;

pub enum AppAction {
    SubmitTranslation,
    CancelTranslation,
    TranslationFinished {
        result: Result<TranslationResult, BackendError>,
        request_id: u64,
    },
    ReloadLanguages,
    LanguagesLoaded {
        languages: Vec<LanguageOption>,
        request_id: u64,
    },
    LanguagesFailed {
        error: BackendError,
        request_id: u64,
    },
    SwapLanguages,
    TogglePaper,
    InsertIntoInput {
        text: String,
    },
    ClearInput,
    SetStatus {
        message: String,
    },
    ClearStatus,
    Quit,
    OpenLanguagePicker {
        target: PickerTarget,
    },
    PickerEscape,
    PickerMoveUp,
    PickerMoveDown,
    PickerMoveToStart,
    PickerMoveToEnd,
    PickerApplySelection,
    PickerBackspace,
    PickerTypeChar {
        ch: char,
    },
}

#[derive(Clone)]
pub struct AppActionDispatcher {
    tx: mpsc::UnboundedSender<AppAction>,
}

impl AppActionDispatcher {
    pub fn new(tx: mpsc::UnboundedSender<AppAction>) -> Self {
        Self { tx }
    }

    pub fn dispatch(&self, action: AppAction) {
        let _ = self.tx.send(action);
    }

    pub fn dispatch_many<I>(&self, actions: I)
    where
        I: IntoIterator<Item = AppAction>,
    {
        for action in actions.into_iter() {
            let _ = self.tx.send(action);
        }
    }
}

/// Background work requested by an action, executed by the event loop.
pub enum AppCommand {
    SpawnTranslation(TranslationParams),
    LoadLanguages(LanguagesParams),
}

pub fn apply_actions(app: &mut App, actions: impl IntoIterator<Item = AppAction>) -> Vec<AppCommand> {
    let mut commands = Vec::new();
    for action in actions {
        if let Some(cmd) = apply_action(app, action) {
            commands.push(cmd);
        }
    }
    commands
}

pub fn apply_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::SubmitTranslation
        | AppAction::CancelTranslation
        | AppAction::TranslationFinished { .. }
        | AppAction::ReloadLanguages
        | AppAction::LanguagesLoaded { .. }
        | AppAction::LanguagesFailed { .. }
        | AppAction::SwapLanguages
        | AppAction::TogglePaper => translation::handle_translation_action(app, action),

        AppAction::InsertIntoInput { .. }
        | AppAction::ClearInput
        | AppAction::SetStatus { .. }
        | AppAction::ClearStatus
        | AppAction::Quit => input::handle_input_action(app, action),

        AppAction::OpenLanguagePicker { .. }
        | AppAction::PickerEscape
        | AppAction::PickerMoveUp
        | AppAction::PickerMoveDown
        | AppAction::PickerMoveToStart
        | AppAction::PickerMoveToEnd
        | AppAction::PickerApplySelection
        | AppAction::PickerBackspace
        | AppAction::PickerTypeChar { .. } => picker::handle_picker_action(app, action),
    }
}
