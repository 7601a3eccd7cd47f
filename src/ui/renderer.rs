use crate::core::app::App;
use crate::ui::picker::PickerState;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const KEY_HINTS: &str = "Enter translate • Alt+Enter newline • Ctrl+S swap • F2/F3 languages • F5 reload • Ctrl+L theme • Esc cancel • Ctrl+C quit";

pub fn ui(f: &mut Frame, app: &mut App) {
    let theme = app.ui.theme.clone();
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background_color)),
        f.area(),
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(3), // language selectors
            Constraint::Min(5),    // input and translation
            Constraint::Length(4), // pronunciation
            Constraint::Length(1), // helper text
            Constraint::Length(1), // submit control
            Constraint::Length(1), // notice / status
            Constraint::Length(1), // key hints
        ])
        .split(f.area());

    render_title(f, app, &theme, rows[0]);
    render_language_row(f, app, &theme, rows[1]);
    render_text_panes(f, app, &theme, rows[2]);
    render_pronunciation(f, app, &theme, rows[3], rows[4]);
    render_submit(f, app, &theme, rows[5]);
    render_notice(f, app, &theme, rows[6]);
    f.render_widget(
        Paragraph::new(KEY_HINTS).style(theme.key_hint_style),
        rows[7],
    );

    if let Some(picker) = app.ui.picker.as_ref() {
        render_picker(f, picker, &theme);
    }
}

fn bordered<'a>(title: impl Into<Line<'a>>, theme: &Theme, focused: bool) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            theme.focus_border_style
        } else {
            theme.border_style
        })
        .title(title)
        .title_style(theme.caption_style)
        .style(Style::default().bg(theme.background_color))
}

fn render_title(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            format!("Translaterm v{}", env!("CARGO_PKG_VERSION")),
            theme.title_style,
        ),
        Span::styled(" • ", theme.key_hint_style),
        Span::styled(app.form.paper_caption(), theme.caption_style),
        Span::styled(" • ", theme.key_hint_style),
        Span::styled(app.session.logging.get_status_string(), theme.caption_style),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_language_row(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Percentage(10),
            Constraint::Percentage(45),
        ])
        .split(area);

    let source = Paragraph::new(app.form.language_display(&app.form.source_language))
        .style(theme.text_style)
        .block(bordered("From (F2)", theme, false));
    let target = Paragraph::new(app.form.language_display(&app.form.target_language))
        .style(theme.text_style)
        .block(bordered("To (F3)", theme, false));
    let swap = Paragraph::new(vec![Line::from(""), Line::from("⇄ Ctrl+S")])
        .alignment(Alignment::Center)
        .style(theme.key_hint_style);

    f.render_widget(source, columns[0]);
    f.render_widget(swap, columns[1]);
    f.render_widget(target, columns[2]);
}

fn render_text_panes(f: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let input_focused = app.ui.picker.is_none();
    app.ui
        .textarea
        .set_block(bordered("Enter text to translate", theme, input_focused));
    f.render_widget(&app.ui.textarea, columns[0]);

    let translation = Paragraph::new(app.form.translated_text.as_str())
        .style(theme.output_text_style)
        .wrap(Wrap { trim: false })
        .block(bordered("Translation", theme, false));
    f.render_widget(translation, columns[1]);
}

fn render_pronunciation(
    f: &mut Frame,
    app: &App,
    theme: &Theme,
    area: Rect,
    helper_area: Rect,
) {
    let pronunciation = Paragraph::new(app.form.pronunciation_text.as_str())
        .style(theme.pronunciation_style)
        .wrap(Wrap { trim: false })
        .block(bordered(app.form.pronunciation_label(), theme, false));
    f.render_widget(pronunciation, area);

    f.render_widget(
        Paragraph::new(app.form.pronunciation_helper_text()).style(theme.helper_text_style),
        helper_area,
    );
}

fn render_submit(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let style = if app.form.can_submit() {
        theme.button_style
    } else {
        theme.button_disabled_style
    };
    let button = Paragraph::new(Span::styled(
        format!(" {} ", app.form.submit_caption()),
        style,
    ))
    .alignment(Alignment::Center);
    f.render_widget(button, area);
}

fn render_notice(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let line = if let Some(notice) = app.form.notice.as_ref() {
        Line::from(vec![
            Span::styled(
                format!("{}: ", notice.severity.as_str()),
                theme.notice_style(notice.severity),
            ),
            Span::styled(notice.message.as_str(), theme.notice_style(notice.severity)),
        ])
    } else if let Some(status) = app.ui.status.as_deref() {
        Line::from(Span::styled(status, theme.caption_style))
    } else {
        Line::default()
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_picker(f: &mut Frame, picker: &PickerState, theme: &Theme) {
    let area = centered_rect(50, 60, f.area());
    f.render_widget(Clear, area);

    let items: Vec<ListItem> = picker
        .items
        .iter()
        .map(|item| ListItem::new(format!("{} ({})", item.label, item.id)))
        .collect();
    let list = List::new(items)
        .style(theme.text_style)
        .highlight_style(theme.selection_style)
        .block(bordered(picker.title.as_str(), theme, true));

    let mut state = ListState::default();
    if !picker.items.is_empty() {
        state.select(Some(picker.selected));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::app::{apply_actions, AppAction};
    use crate::core::notice::Notice;
    use crate::ui::picker::PickerTarget;
    use crate::utils::test_utils::{create_test_app, sample_languages};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &mut App) -> String {
        let backend = TestBackend::new(140, 30);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|f| ui(f, app)).expect("draw");
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn loaded_app() -> App {
        let mut app = create_test_app();
        let request_id = app.session.start_languages_request();
        apply_actions(
            &mut app,
            [AppAction::LanguagesLoaded {
                languages: sample_languages(),
                request_id,
            }],
        );
        app
    }

    #[test]
    fn renders_the_form_captions() {
        let mut app = loaded_app();
        let screen = render(&mut app);
        assert!(screen.contains("From (F2)"));
        assert!(screen.contains("English"));
        assert!(screen.contains("Hindi"));
        assert!(screen.contains("Enter text to translate"));
        assert!(screen.contains("Type or paste your text here..."));
        assert!(screen.contains("Translation"));
        assert!(screen.contains("Hinglish Version (Easy to understand)"));
        assert!(screen.contains("This version uses a mix of Hindi and English words"));
        assert!(screen.contains(" Translate "));
        assert!(screen.contains("Dark Mode"));
    }

    #[test]
    fn renders_notice_and_loading_caption() {
        let mut app = loaded_app();
        app.form.notice = Some(Notice::languages_failed());
        app.form.input = "Hello".to_string();
        app.form.loading = true;
        let screen = render(&mut app);
        assert!(screen.contains("error: Failed to fetch languages"));
        assert!(screen.contains("Translating..."));
    }

    #[test]
    fn renders_the_picker_popup() {
        let mut app = loaded_app();
        apply_actions(
            &mut app,
            [AppAction::OpenLanguagePicker {
                target: PickerTarget::Target,
            }],
        );
        let screen = render(&mut app);
        assert!(screen.contains("To (5 available - type to filter)"));
        assert!(screen.contains("Urdu (ur)"));
    }

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(50, 60, area);
        assert_eq!(popup.width, 50);
        assert_eq!(popup.height, 24);
        assert!(popup.x >= area.x && popup.right() <= area.right());
    }
}
