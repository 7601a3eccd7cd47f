use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::ui::picker::PickerState;
use crate::ui::theme::Theme;

pub const INPUT_PLACEHOLDER: &str = "Type or paste your text here...";

/// Terminal-only state: the editor widget, the open picker and the status line.
pub struct UiState {
    pub theme: Theme,
    pub textarea: TextArea<'static>,
    pub picker: Option<PickerState>,
    pub status: Option<String>,
    pub exit_requested: bool,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        let mut ui = Self {
            theme,
            textarea: TextArea::default(),
            picker: None,
            status: None,
            exit_requested: false,
        };
        ui.configure_textarea();
        ui
    }

    pub(crate) fn configure_textarea(&mut self) {
        let textarea_style = self
            .theme
            .text_style
            .patch(Style::default().bg(self.theme.background_color));
        self.textarea.set_style(textarea_style);
        self.textarea
            .set_cursor_style(self.theme.input_cursor_style);
        self.textarea.set_cursor_line_style(Style::default());
        self.textarea.set_placeholder_text(INPUT_PLACEHOLDER);
        self.textarea
            .set_placeholder_style(self.theme.helper_text_style);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.configure_textarea();
    }

    pub fn get_input_text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Replace the editor contents and park the cursor at the end.
    pub fn set_input_text(&mut self, text: &str) {
        let lines: Vec<String> = if text.is_empty() {
            Vec::new()
        } else {
            text.split('\n').map(|s| s.to_string()).collect()
        };
        self.textarea = TextArea::from(lines);
        self.textarea.move_cursor(CursorMove::Bottom);
        self.textarea.move_cursor(CursorMove::End);
        self.configure_textarea();
    }

    pub fn apply_textarea_edit<F>(&mut self, f: F)
    where
        F: FnOnce(&mut TextArea<'static>),
    {
        f(&mut self.textarea);
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker.is_some()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_text_round_trips_through_the_editor() {
        let mut ui = UiState::new(Theme::dark_default());
        assert_eq!(ui.get_input_text(), "");

        ui.set_input_text("first line\nsecond");
        assert_eq!(ui.get_input_text(), "first line\nsecond");
        assert_eq!(ui.textarea.cursor(), (1, 6));

        ui.set_input_text("");
        assert_eq!(ui.get_input_text(), "");
    }

    #[test]
    fn edits_apply_to_the_editor() {
        let mut ui = UiState::new(Theme::dark_default());
        ui.apply_textarea_edit(|ta| {
            ta.insert_str("namaste");
        });
        assert_eq!(ui.get_input_text(), "namaste");
    }

    #[test]
    fn status_can_be_set_and_cleared() {
        let mut ui = UiState::new(Theme::light());
        ui.set_status("Languages reloaded");
        assert_eq!(ui.status.as_deref(), Some("Languages reloaded"));
        ui.clear_status();
        assert!(ui.status.is_none());
    }
}
