use crate::config::hotkeys::get_action_for_event;
use crate::config::HotkeyAction;
use crate::error::{AppError, AppResult};
use crate::state::{State, StateError, View};
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Paste(String),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            if let Err(e) = poll_terminal(&tx) {
                error!("Terminal input polling stopped: {}", e);
            }
        });
        Handler { rx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> AppResult<bool> {
        let event = self
            .rx
            .recv()
            .map_err(|e| AppError::Terminal(format!("Input channel closed: {}", e)))?;
        let result = match event {
            Event::Input(key) => handle_key(state, &key),
            Event::Paste(text) => handle_paste(state, &text).map(|_| true),
            Event::Tick => Ok(true),
        };
        match result {
            Ok(keep_running) => Ok(keep_running),
            Err(e) => {
                warn!("Ignoring input: {}", e);
                Ok(true)
            }
        }
    }
}

/// Forward crossterm events to the channel until the receiver goes away.
///
fn poll_terminal(tx: &mpsc::Sender<Event<KeyEvent>>) -> AppResult<()> {
    let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
    loop {
        let event = if event::poll(tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Event::Input(key),
                CrosstermEvent::Paste(text) => Event::Paste(text),
                _ => Event::Tick,
            }
        } else {
            Event::Tick
        };
        if tx.send(event).is_err() {
            return Ok(());
        }
    }
}

/// Apply a key press to the state. Returns false when exit was requested.
///
pub fn handle_key(state: &mut State, key: &KeyEvent) -> Result<bool, StateError> {
    if key.kind != KeyEventKind::Press {
        return Ok(true);
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return Ok(false);
    }

    let view = state.current_view();
    let action = get_action_for_event(key, view, state.get_hotkeys());
    match (view, action) {
        (_, Some(HotkeyAction::Quit)) => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return Ok(false);
        }
        (View::List, Some(HotkeyAction::NavigateNext)) => {
            state.next_plant();
        }
        (View::List, Some(HotkeyAction::NavigatePrev)) => {
            state.previous_plant();
        }
        (View::List, Some(HotkeyAction::AddPlant)) => {
            state.open_add_form()?;
        }
        (View::List, Some(HotkeyAction::ToggleLog)) => {
            state.toggle_log();
        }
        (View::Add, Some(HotkeyAction::NavigateFieldNext)) => {
            state.next_field()?;
        }
        (View::Add, Some(HotkeyAction::NavigateFieldPrev)) => {
            state.previous_field()?;
        }
        (View::Add, Some(HotkeyAction::DeleteChar)) => {
            state.remove_char()?;
        }
        (View::Add, Some(HotkeyAction::SubmitForm)) => {
            state.submit_form()?;
        }
        (View::Add, Some(HotkeyAction::Cancel)) => {
            state.cancel_form()?;
        }
        (View::Add, None) => {
            if let KeyCode::Char(c) = key.code {
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    state.input_char(c)?;
                }
            }
        }
        (_, Some(action)) => {
            trace!("Action {:?} has no effect in {:?} view.", action, view);
        }
        (View::List, None) => {}
    }
    Ok(true)
}

/// Insert pasted text into the add form. Ignored on the list view.
///
pub fn handle_paste(state: &mut State, text: &str) -> Result<bool, StateError> {
    match state.current_view() {
        View::Add => state.input_str(text.trim_end_matches(['\r', '\n'])),
        View::List => Ok(false),
    }
}
