use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use prompttune_core::{update, AppState, ComplexityLevel, Msg, PromptStyle};
use ratatui::DefaultTerminal;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::effects::EffectRunner;
use super::ui::render;

/// How long the per-card "copied" badge stays visible.
const COPY_FLASH: Duration = Duration::from_secs(2);

/// How long to block on terminal events before draining the message
/// channel again. Bounds the latency of timer and engine messages.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app() -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = run_event_loop(&mut terminal);
    ratatui::restore();
    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Prompt,
    Style,
    Complexity,
    Variants,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditTarget {
    Prompt,
    Variant(usize),
}

/// Presentation-local state: focus, edit cursor, selection, transient
/// flashes. Everything with domain meaning lives in `AppState`.
pub(crate) struct UiState {
    pub(crate) focus: Focus,
    pub(crate) editing: Option<EditTarget>,
    pub(crate) editor: Input,
    pub(crate) selected_variant: usize,
    pub(crate) copied: Option<(usize, Instant)>,
    quit: bool,
}

impl UiState {
    fn new() -> Self {
        Self {
            focus: Focus::Prompt,
            editing: None,
            editor: Input::default(),
            selected_variant: 0,
            copied: None,
            quit: false,
        }
    }

    pub(crate) fn copied_index(&self) -> Option<usize> {
        self.copied
            .filter(|(_, at)| at.elapsed() < COPY_FLASH)
            .map(|(index, _)| index)
    }
}

fn run_event_loop(terminal: &mut DefaultTerminal) -> io::Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx.clone());

    let mut state = AppState::new();
    let mut ui = UiState::new();
    let mut needs_render = true;

    loop {
        if needs_render {
            let view = state.view();
            terminal.draw(|frame| render::render(frame, &view, &ui))?;
            needs_render = false;
        }

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key(key, &mut ui, &state, &msg_tx);
                    needs_render = true;
                }
                Event::Resize(..) => needs_render = true,
                _ => {}
            }
        }

        runner.poll();
        while let Ok(msg) = msg_rx.try_recv() {
            dispatch(&mut state, &runner, msg);
        }
        if state.consume_dirty() {
            needs_render = true;
        }

        // Expire the copied badge without waiting for another key press.
        if let Some((_, at)) = ui.copied {
            if at.elapsed() >= COPY_FLASH {
                ui.copied = None;
                needs_render = true;
            }
        }

        if ui.quit {
            return Ok(());
        }
    }
}

fn dispatch(state: &mut AppState, runner: &EffectRunner, msg: Msg) {
    let current = std::mem::take(state);
    let (next, effects) = update(current, msg);
    *state = next;
    runner.enqueue(effects);
}

fn handle_key(key: KeyEvent, ui: &mut UiState, state: &AppState, msg_tx: &mpsc::Sender<Msg>) {
    if let Some(target) = ui.editing {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => ui.editing = None,
            _ => {
                ui.editor.handle_event(&Event::Key(key));
                let text = ui.editor.value().to_string();
                let msg = match target {
                    EditTarget::Prompt => Msg::InputChanged(text),
                    EditTarget::Variant(index) => Msg::VariantEdited {
                        index,
                        content: text,
                    },
                };
                let _ = msg_tx.send(msg);
            }
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => ui.quit = true,
        KeyCode::Tab => ui.focus = next_focus(ui.focus),
        KeyCode::BackTab => ui.focus = prev_focus(ui.focus),
        KeyCode::Char('o') => {
            let _ = msg_tx.send(Msg::OptimizeRequested);
        }
        KeyCode::Enter => match ui.focus {
            Focus::Prompt => begin_prompt_edit(ui, state),
            Focus::Variants => begin_variant_edit(ui, state),
            Focus::Style | Focus::Complexity => {
                let _ = msg_tx.send(Msg::OptimizeRequested);
            }
        },
        KeyCode::Up | KeyCode::Down => match ui.focus {
            Focus::Style => {
                let style = cycle(&PromptStyle::ALL, state.style(), key.code == KeyCode::Down);
                let _ = msg_tx.send(Msg::StyleSelected(style));
            }
            Focus::Complexity => {
                let complexity = cycle(
                    &ComplexityLevel::ALL,
                    state.complexity(),
                    key.code == KeyCode::Down,
                );
                let _ = msg_tx.send(Msg::ComplexitySelected(complexity));
            }
            _ => {}
        },
        KeyCode::Left | KeyCode::Right if ui.focus == Focus::Variants => {
            let count = state.variant_drafts().len();
            if count > 0 {
                let current = ui.selected_variant.min(count - 1);
                ui.selected_variant = if key.code == KeyCode::Right {
                    (current + 1) % count
                } else {
                    (current + count - 1) % count
                };
            }
        }
        KeyCode::Char('e') if ui.focus == Focus::Variants => begin_variant_edit(ui, state),
        KeyCode::Char('r') if ui.focus == Focus::Variants => {
            let _ = msg_tx.send(Msg::ReplaceRequested {
                index: ui.selected_variant,
            });
        }
        KeyCode::Char('a') if ui.focus == Focus::Variants => {
            let _ = msg_tx.send(Msg::AppendRequested {
                index: ui.selected_variant,
            });
        }
        KeyCode::Char('c') if ui.focus == Focus::Variants => {
            if state.variant_drafts().len() > ui.selected_variant {
                ui.copied = Some((ui.selected_variant, Instant::now()));
            }
            let _ = msg_tx.send(Msg::CopyRequested {
                index: ui.selected_variant,
            });
        }
        _ => {}
    }
}

fn begin_prompt_edit(ui: &mut UiState, state: &AppState) {
    // The input box is locked while a run is in flight.
    if state.stage().is_running() {
        return;
    }
    ui.editor = Input::from(state.input().to_string());
    ui.editing = Some(EditTarget::Prompt);
}

fn begin_variant_edit(ui: &mut UiState, state: &AppState) {
    if let Some(content) = state.variant_drafts().get(ui.selected_variant) {
        ui.editor = Input::from(content.clone());
        ui.editing = Some(EditTarget::Variant(ui.selected_variant));
    }
}

fn next_focus(focus: Focus) -> Focus {
    match focus {
        Focus::Prompt => Focus::Style,
        Focus::Style => Focus::Complexity,
        Focus::Complexity => Focus::Variants,
        Focus::Variants => Focus::Prompt,
    }
}

fn prev_focus(focus: Focus) -> Focus {
    match focus {
        Focus::Prompt => Focus::Variants,
        Focus::Style => Focus::Prompt,
        Focus::Complexity => Focus::Style,
        Focus::Variants => Focus::Complexity,
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let len = all.len();
    let index = all
        .iter()
        .position(|candidate| *candidate == current)
        .unwrap_or(0);
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    all[next]
}
