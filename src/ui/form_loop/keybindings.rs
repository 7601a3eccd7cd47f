//! Key event to action mapping.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::app::AppAction;
use crate::ui::picker::PickerTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Editing the input text
    Typing,
    /// A language picker is open
    Picker,
}

impl KeyContext {
    pub fn from_picker_open(picker_open: bool) -> Self {
        if picker_open {
            KeyContext::Picker
        } else {
            KeyContext::Typing
        }
    }
}

pub enum KeyResult {
    /// Dispatch these actions
    Actions(Vec<AppAction>),
    /// Feed the key to the text editor
    TextInput,
    /// Leave the loop
    Exit,
    NotHandled,
}

impl From<AppAction> for KeyResult {
    fn from(action: AppAction) -> Self {
        KeyResult::Actions(vec![action])
    }
}

pub fn resolve_key(key: &KeyEvent, context: KeyContext) -> KeyResult {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyResult::Exit;
    }

    match context {
        KeyContext::Typing => resolve_typing_key(key),
        KeyContext::Picker => resolve_picker_key(key),
    }
}

fn resolve_typing_key(key: &KeyEvent) -> KeyResult {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter
            if key
                .modifiers
                .intersects(KeyModifiers::ALT | KeyModifiers::SHIFT) =>
        {
            AppAction::InsertIntoInput {
                text: "\n".to_string(),
            }
            .into()
        }
        KeyCode::Enter => AppAction::SubmitTranslation.into(),
        KeyCode::Esc => AppAction::CancelTranslation.into(),
        KeyCode::F(2) => AppAction::OpenLanguagePicker {
            target: PickerTarget::Source,
        }
        .into(),
        KeyCode::F(3) => AppAction::OpenLanguagePicker {
            target: PickerTarget::Target,
        }
        .into(),
        KeyCode::F(5) => AppAction::ReloadLanguages.into(),
        KeyCode::Char('s') if ctrl => AppAction::SwapLanguages.into(),
        KeyCode::Char('l') if ctrl => AppAction::TogglePaper.into(),
        KeyCode::Char('n') if ctrl => {
            KeyResult::Actions(vec![AppAction::ClearInput, AppAction::ClearStatus])
        }
        _ => KeyResult::TextInput,
    }
}

fn resolve_picker_key(key: &KeyEvent) -> KeyResult {
    match key.code {
        KeyCode::Esc => AppAction::PickerEscape.into(),
        KeyCode::Up => AppAction::PickerMoveUp.into(),
        KeyCode::Down => AppAction::PickerMoveDown.into(),
        KeyCode::Home => AppAction::PickerMoveToStart.into(),
        KeyCode::End => AppAction::PickerMoveToEnd.into(),
        KeyCode::Enter => AppAction::PickerApplySelection.into(),
        KeyCode::Backspace => AppAction::PickerBackspace.into(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            AppAction::PickerTypeChar { ch }.into()
        }
        _ => KeyResult::NotHandled,
    }
}
