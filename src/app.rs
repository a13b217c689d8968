use crate::config::Config;
use crate::error::AppResult;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::LogBuffer;
use crate::state::State;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
}

impl App {
    /// Build the session state from the configuration, seeding the demo
    /// plants when enabled.
    ///
    pub fn new(config: &Config, log_buffer: LogBuffer) -> AppResult<App> {
        let mut state = State::new(config.theme(), config.hotkeys.clone(), log_buffer);
        if config.seed_demo_plants {
            state.seed_demo_plants()?;
        }
        Ok(App { state })
    }

    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub fn start(config: &Config, log_buffer: LogBuffer) -> AppResult<()> {
        info!("Starting application...");
        let mut app = App::new(config, log_buffer)?;
        app.start_ui()?;
        info!(
            "Exiting application with {} plants.",
            app.state.registry().len()
        );
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. The terminal is restored even when the
    /// loop fails.
    ///
    fn start_ui(&mut self) -> AppResult<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        let result = self.run(&mut terminal);

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste)?;
        terminal.show_cursor()?;

        result
    }

    fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> AppResult<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            terminal.draw(|frame| crate::ui::render(frame, &mut self.state))?;
            if !terminal_event_handler.handle_next(&mut self.state)? {
                debug!("Received application exit request.");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_seeds_when_enabled() {
        let config = Config::new();
        let app = App::new(&config, LogBuffer::default()).unwrap();
        assert_eq!(app.state.registry().len(), 2);
    }

    #[test]
    fn new_skips_seed_when_disabled() {
        let mut config = Config::new();
        config.seed_demo_plants = false;
        let app = App::new(&config, LogBuffer::default()).unwrap();
        assert!(app.state.registry().is_empty());
    }

    #[test]
    fn new_uses_configured_theme() {
        let mut config = Config::new();
        config.set_theme_name("dracula").unwrap();
        let app = App::new(&config, LogBuffer::default()).unwrap();
        assert_eq!(app.state.get_theme().name, "dracula");
    }
}
