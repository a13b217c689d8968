mod add_plant;
mod footer;
mod header;
mod log;
mod plant_list;

use super::*;
use crate::state::{State, View};
use ratatui::layout::{Constraint, Direction, Layout};

/// Height of the log panel including borders.
///
const LOG_HEIGHT: u16 = 8;

/// Render the whole screen according to state.
///
pub fn render(frame: &mut Frame, state: &mut State) {
    let mut constraints = vec![Constraint::Length(3), Constraint::Min(6)];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(1));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.size());

    header::header(frame, rows[0], state);
    match state.current_view() {
        View::List => plant_list::plant_list(frame, rows[1], state),
        View::Add => add_plant::add_plant(frame, rows[1], state),
    }
    if state.is_log_visible() {
        log::log(frame, rows[2], state);
    }
    footer::footer(frame, rows[rows.len() - 1], state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::INVALID_FORM_MESSAGE;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &mut State) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_seeded_list() {
        let mut state = State::default();
        state.seed_demo_plants().unwrap();
        let screen = draw(&mut state);
        assert!(screen.contains("Monstera deliciosa"));
        assert!(screen.contains("Snake Plant"));
        assert!(screen.contains("2 plants"));
        assert!(screen.contains("every 7 days"));
    }

    #[test]
    fn renders_empty_list_hint() {
        let mut state = State::default();
        let screen = draw(&mut state);
        assert!(screen.contains("No plants yet"));
    }

    #[test]
    fn renders_form_error() {
        let mut state = State::default();
        state.open_add_form().unwrap();
        assert!(!draw(&mut state).contains("Please enter a name"));
        state.submit_form().unwrap();
        let screen = draw(&mut state);
        assert!(screen.contains("Water every (days)"));
        assert!(screen.contains(&INVALID_FORM_MESSAGE[..20]));
    }

    #[test]
    fn hides_log_panel() {
        let mut state = State::default();
        assert!(draw(&mut state).contains("Log"));
        state.toggle_log();
        assert!(!draw(&mut state).contains("Log"));
    }
}
