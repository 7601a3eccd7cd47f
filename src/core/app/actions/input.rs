use super::{App, AppAction, AppCommand};

pub(super) fn handle_input_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::InsertIntoInput { text } => {
            app.apply_input_edit(|ta| {
                ta.insert_str(&text);
            });
            None
        }
        AppAction::ClearInput => {
            app.form.input.clear();
            app.refresh_input_from_form();
            None
        }
        AppAction::SetStatus { message } => {
            app.ui.set_status(message);
            None
        }
        AppAction::ClearStatus => {
            app.ui.clear_status();
            None
        }
        AppAction::Quit => {
            app.cancel_translation();
            app.ui.exit_requested = true;
            None
        }
        _ => unreachable!("non-input action routed to input handler"),
    }
}
