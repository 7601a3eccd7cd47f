use super::{App, AppAction, AppCommand};
use crate::ui::picker::{PickerState, PickerTarget};

pub(super) fn handle_picker_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::OpenLanguagePicker { target } => {
            open_language_picker(app, target);
            None
        }
        AppAction::PickerEscape => {
            app.ui.picker = None;
            None
        }
        AppAction::PickerMoveUp => {
            handle_picker_movement(app, PickerMovement::Up);
            None
        }
        AppAction::PickerMoveDown => {
            handle_picker_movement(app, PickerMovement::Down);
            None
        }
        AppAction::PickerMoveToStart => {
            handle_picker_movement(app, PickerMovement::Start);
            None
        }
        AppAction::PickerMoveToEnd => {
            handle_picker_movement(app, PickerMovement::End);
            None
        }
        AppAction::PickerApplySelection => {
            handle_picker_apply_selection(app);
            None
        }
        AppAction::PickerBackspace => {
            if let Some(picker) = app.ui.picker.as_mut() {
                picker.backspace();
            }
            None
        }
        AppAction::PickerTypeChar { ch } => {
            if let Some(picker) = app.ui.picker.as_mut() {
                picker.type_char(ch);
            }
            None
        }
        _ => unreachable!("non-picker action routed to picker handler"),
    }
}

enum PickerMovement {
    Up,
    Down,
    Start,
    End,
}

fn handle_picker_movement(app: &mut App, movement: PickerMovement) {
    if let Some(state) = app.ui.picker.as_mut() {
        match movement {
            PickerMovement::Up => state.move_up(),
            PickerMovement::Down => state.move_down(),
            PickerMovement::Start => state.move_to_start(),
            PickerMovement::End => state.move_to_end(),
        }
    }
}

fn open_language_picker(app: &mut App, target: PickerTarget) {
    if !app.form.has_languages() {
        app.ui.set_status("No languages loaded yet. Press F5 to retry.");
        return;
    }
    let current = match target {
        PickerTarget::Source => &app.form.source_language,
        PickerTarget::Target => &app.form.target_language,
    };
    app.ui.picker = Some(PickerState::new(target, &app.form.languages, current));
}

fn handle_picker_apply_selection(app: &mut App) {
    let Some(picker) = app.ui.picker.as_ref() else {
        return;
    };
    let Some(code) = picker.selected_id().map(str::to_string) else {
        return;
    };
    let target = picker.target;

    let applied = match target {
        PickerTarget::Source => app.form.set_source_language(&code),
        PickerTarget::Target => app.form.set_target_language(&code),
    };
    if applied {
        let name = app.form.language_display(&code);
        app.ui.set_status(format!("{}: {name}", target.caption()));
    }
    app.ui.picker = None;
}
