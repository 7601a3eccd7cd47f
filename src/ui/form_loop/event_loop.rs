//! Event polling, dispatching, and UI rendering loop.
//!
//! The loop reads terminal input on a background task, resolves keys into
//! actions, applies queued actions to the shared [`App`](crate::core::app::App),
//! and forwards backend replies from the [`TranslationService`] as actions
//! tagged with their request id.

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;
use tracing::debug;

use crate::core::app::{apply_actions, AppAction, AppActionDispatcher, AppCommand};
use crate::core::translate_service::{BackendMessage, TranslationService};
use crate::ui::renderer::ui;

use super::keybindings::{resolve_key, KeyContext, KeyResult};
use super::lifecycle::{restore_terminal, setup_terminal, SharedTerminal};
use super::setup::{bootstrap_app, FormLaunch};
use super::AppHandle;

#[derive(Debug)]
pub enum UiEvent {
    Crossterm(Event),
}

async fn is_exit_requested(app: &AppHandle) -> bool {
    app.read(|app| app.ui.exit_requested).await
}

async fn try_draw_frame(
    app: &AppHandle,
    terminal: &SharedTerminal,
    request_redraw: &mut bool,
    last_draw: &mut Instant,
    frame_duration: Duration,
) -> io::Result<()> {
    if !*request_redraw {
        return Ok(());
    }

    let now = Instant::now();
    if now.duration_since(*last_draw) < frame_duration {
        return Ok(());
    }

    let mut terminal_guard = terminal.lock().await;
    app.update(|app| terminal_guard.draw(|f| ui(f, app)))
        .await?;
    *last_draw = now;
    *request_redraw = false;
    Ok(())
}

struct EventProcessingOutcome {
    events_processed: bool,
    exit_requested: bool,
}

async fn process_ui_events(
    app: &AppHandle,
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
    dispatcher: &AppActionDispatcher,
) -> EventProcessingOutcome {
    let mut outcome = EventProcessingOutcome {
        events_processed: false,
        exit_requested: false,
    };

    while let Ok(ev) = event_rx.try_recv() {
        outcome.events_processed = true;
        match ev {
            UiEvent::Crossterm(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if route_keyboard_event(app, dispatcher, key).await {
                    outcome.exit_requested = true;
                    break;
                }
            }
            UiEvent::Crossterm(Event::Paste(text)) => {
                handle_paste_event(app, dispatcher, text).await;
            }
            UiEvent::Crossterm(_) => {}
        }
    }

    outcome
}

/// Returns `true` when the key asks the loop to exit.
async fn route_keyboard_event(
    app: &AppHandle,
    dispatcher: &AppActionDispatcher,
    key: KeyEvent,
) -> bool {
    let context = app
        .read(|app| KeyContext::from_picker_open(app.ui.is_picker_open()))
        .await;

    match resolve_key(&key, context) {
        KeyResult::Actions(actions) => dispatcher.dispatch_many(actions),
        KeyResult::TextInput => {
            app.update(|app| {
                app.apply_input_edit(|ta| {
                    ta.input(tui_textarea::Input::from(key));
                });
            })
            .await;
        }
        KeyResult::Exit => {
            dispatcher.dispatch(AppAction::Quit);
            return true;
        }
        KeyResult::NotHandled => {}
    }
    false
}

pub(crate) fn sanitize_pasted_text(text: &str) -> String {
    let without_crlf = text.replace("\r\n", "\n");
    let without_cr = without_crlf.replace('\r', "\n");
    let expanded_tabs = without_cr.replace('\t', "    ");
    expanded_tabs
        .chars()
        .filter(|&c| c == '\n' || !c.is_control())
        .collect()
}

async fn handle_paste_event(app: &AppHandle, dispatcher: &AppActionDispatcher, text: String) {
    if app.read(|app| app.ui.is_picker_open()).await {
        return;
    }
    let sanitized_text = sanitize_pasted_text(&text);
    if sanitized_text.is_empty() {
        return;
    }
    dispatcher.dispatch(AppAction::InsertIntoInput {
        text: sanitized_text,
    });
}

fn process_backend_updates(
    dispatcher: &AppActionDispatcher,
    rx: &mut mpsc::UnboundedReceiver<(BackendMessage, u64)>,
) -> bool {
    let mut actions = Vec::new();

    while let Ok((message, request_id)) = rx.try_recv() {
        actions.push(match message {
            BackendMessage::Translation(result) => {
                AppAction::TranslationFinished { result, request_id }
            }
            BackendMessage::Languages(Ok(languages)) => AppAction::LanguagesLoaded {
                languages,
                request_id,
            },
            BackendMessage::Languages(Err(error)) => {
                AppAction::LanguagesFailed { error, request_id }
            }
        });
    }

    if actions.is_empty() {
        return false;
    }
    dispatcher.dispatch_many(actions);
    true
}

async fn drain_action_queue(
    app: &AppHandle,
    service: &TranslationService,
    action_rx: &mut mpsc::UnboundedReceiver<AppAction>,
) -> bool {
    let mut pending = Vec::new();
    while let Ok(action) = action_rx.try_recv() {
        pending.push(action);
    }

    if pending.is_empty() {
        return false;
    }

    let commands = app.update(|app| apply_actions(app, pending)).await;
    for cmd in commands {
        match cmd {
            AppCommand::SpawnTranslation(params) => {
                debug!(request_id = params.request_id, "spawning translation");
                service.spawn_translation(params);
            }
            AppCommand::LoadLanguages(params) => {
                debug!(request_id = params.request_id, "loading languages");
                service.spawn_languages(params);
            }
        }
    }
    true
}

fn spawn_event_reader(event_tx: mpsc::UnboundedSender<UiEvent>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(10)) {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(UiEvent::Crossterm(ev)).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        continue;
                    }
                }
            } else {
                tokio::task::yield_now().await;
            }
        }
    })
}

pub async fn run_form(launch: FormLaunch) -> Result<(), Box<dyn Error>> {
    let app = bootstrap_app(launch)?;

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<AppAction>();
    let dispatcher = AppActionDispatcher::new(action_tx);
    dispatcher.dispatch(AppAction::ReloadLanguages);

    let (service, mut backend_rx) = TranslationService::new();

    let terminal = setup_terminal()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<UiEvent>();
    let event_reader_handle = spawn_event_reader(event_tx);

    let result = main_loop(
        &app,
        &terminal,
        &dispatcher,
        &service,
        &mut action_rx,
        &mut backend_rx,
        &mut event_rx,
    )
    .await;

    event_reader_handle.abort();
    app.update(|app| app.cancel_translation()).await;
    restore_terminal(&terminal).await?;

    result
}

async fn main_loop(
    app: &AppHandle,
    terminal: &SharedTerminal,
    dispatcher: &AppActionDispatcher,
    service: &TranslationService,
    action_rx: &mut mpsc::UnboundedReceiver<AppAction>,
    backend_rx: &mut mpsc::UnboundedReceiver<(BackendMessage, u64)>,
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
) -> Result<(), Box<dyn Error>> {
    const MAX_FPS: u64 = 60;
    let frame_duration = Duration::from_millis(1000 / MAX_FPS);
    let mut last_draw = Instant::now() - frame_duration;
    let mut request_redraw = true;

    loop {
        if is_exit_requested(app).await {
            return Ok(());
        }

        try_draw_frame(
            app,
            terminal,
            &mut request_redraw,
            &mut last_draw,
            frame_duration,
        )
        .await?;

        let event_outcome = process_ui_events(app, event_rx, dispatcher).await;
        if event_outcome.events_processed {
            request_redraw = true;
        }

        let received_any = process_backend_updates(dispatcher, backend_rx);
        if received_any {
            request_redraw = true;
        }

        let actions_applied = drain_action_queue(app, service, action_rx).await;
        if actions_applied {
            request_redraw = true;
        }

        if event_outcome.exit_requested {
            return Ok(());
        }

        let idle = !event_outcome.events_processed && !received_any && !request_redraw;
        if idle {
            tokio::time::sleep(Duration::from_millis(16)).await;
        }
    }
}
