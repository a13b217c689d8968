use crate::config::ViewHotkeys;
use crate::garden::{self, GardenError, Plant, PlantId, Registry};
use crate::logger::LogBuffer;
use crate::ui::Theme;
use log::*;
use ratatui::widgets::ListState;

use super::error::StateError;
use super::form::PlantDraft;
use super::navigation::View;

/// Houses data representative of application state.
///
/// One instance lives for the whole session and is handed to the terminal
/// event handler and the renderer by reference.
///
pub struct State {
    registry: Registry,
    view_stack: Vec<View>,
    draft: Option<PlantDraft>,
    plants_list_state: ListState,
    theme: Theme,
    hotkeys: ViewHotkeys,
    log_buffer: LogBuffer,
    log_visible: bool,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            registry: Registry::new(),
            view_stack: vec![View::List],
            draft: None,
            plants_list_state: ListState::default(),
            theme: Theme::default(),
            hotkeys: ViewHotkeys::default(),
            log_buffer: LogBuffer::default(),
            log_visible: true,
        }
    }
}

impl State {
    /// Return new state with the given presentation settings and an empty
    /// registry.
    ///
    pub fn new(theme: Theme, hotkeys: ViewHotkeys, log_buffer: LogBuffer) -> Self {
        State {
            theme,
            hotkeys,
            log_buffer,
            ..State::default()
        }
    }

    /// Return the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Return the key bindings.
    ///
    pub fn get_hotkeys(&self) -> &ViewHotkeys {
        &self.hotkeys
    }

    /// Return the plant registry.
    ///
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Insert the demo plants if the registry is empty and select the first
    /// row.
    ///
    pub fn seed_demo_plants(&mut self) -> Result<usize, GardenError> {
        let inserted = garden::seed_demo_plants(&mut self.registry)?;
        if inserted > 0 && self.plants_list_state.selected().is_none() {
            self.plants_list_state.select(Some(0));
        }
        Ok(inserted)
    }

    /// Return the current view.
    ///
    pub fn current_view(&self) -> View {
        // The base List view is never popped.
        self.view_stack.last().copied().unwrap_or(View::List)
    }

    /// Pop a view from the view stack, never removing the base view.
    ///
    fn pop_view(&mut self) -> Option<View> {
        if self.view_stack.len() > 1 {
            self.view_stack.pop()
        } else {
            None
        }
    }

    /// Move from the plant list to a fresh add plant form.
    ///
    pub fn open_add_form(&mut self) -> Result<(), StateError> {
        let from = self.current_view();
        if from != View::List {
            return Err(StateError::InvalidViewTransition { from, to: View::Add });
        }
        debug!("Opening add plant form...");
        self.draft = Some(PlantDraft::new());
        self.view_stack.push(View::Add);
        Ok(())
    }

    /// Discard the draft and return to the plant list.
    ///
    pub fn cancel_form(&mut self) -> Result<(), StateError> {
        let from = self.current_view();
        if from != View::Add {
            return Err(StateError::InvalidViewTransition { from, to: View::List });
        }
        debug!("Discarding plant draft.");
        self.close_form();
        Ok(())
    }

    /// Validate the draft. A valid draft becomes a plant appended to the
    /// registry, the form closes and the new plant's id is returned. An
    /// invalid draft stays open with its error flag set and `None` is
    /// returned.
    ///
    pub fn submit_form(&mut self) -> Result<Option<PlantId>, StateError> {
        let draft = self.draft.as_mut().ok_or(StateError::NoDraft)?;
        match draft.submit() {
            Ok(plant) => {
                info!(
                    "Added {} ({}), watered {}.",
                    plant.name(),
                    plant.species(),
                    plant.watering_label()
                );
                let id = plant.id().clone();
                self.registry.append(plant);
                self.plants_list_state.select(self.registry.position(&id));
                self.close_form();
                Ok(Some(id))
            }
            Err(e) => {
                warn!("Plant not saved: {}", e);
                Ok(None)
            }
        }
    }

    fn close_form(&mut self) {
        self.draft = None;
        while self.pop_view().is_some() {}
    }

    /// Return the open draft, if any.
    ///
    pub fn get_draft(&self) -> Option<&PlantDraft> {
        self.draft.as_ref()
    }

    fn draft_mut(&mut self) -> Result<&mut PlantDraft, StateError> {
        self.draft.as_mut().ok_or(StateError::NoDraft)
    }

    /// Type a character into the focused form field. Returns whether the
    /// draft accepted it.
    ///
    pub fn input_char(&mut self, c: char) -> Result<bool, StateError> {
        let accepted = self.draft_mut()?.input_char(c);
        if !accepted {
            trace!("Rejected input {:?} for focused field.", c);
        }
        Ok(accepted)
    }

    /// Insert pasted text into the focused form field.
    ///
    pub fn input_str(&mut self, text: &str) -> Result<bool, StateError> {
        let accepted = self.draft_mut()?.input(text);
        if !accepted {
            debug!("Rejected pasted text for focused field.");
        }
        Ok(accepted)
    }

    /// Delete the last character of the focused form field.
    ///
    pub fn remove_char(&mut self) -> Result<(), StateError> {
        self.draft_mut()?.remove_char();
        Ok(())
    }

    /// Focus the next form field.
    ///
    pub fn next_field(&mut self) -> Result<(), StateError> {
        self.draft_mut()?.focus_next();
        Ok(())
    }

    /// Focus the previous form field.
    ///
    pub fn previous_field(&mut self) -> Result<(), StateError> {
        self.draft_mut()?.focus_previous();
        Ok(())
    }

    /// Return the plant list selection.
    ///
    pub fn get_plants_list_state(&mut self) -> &mut ListState {
        &mut self.plants_list_state
    }

    /// Return the selected plant.
    ///
    pub fn selected_plant(&self) -> Option<&Plant> {
        self.plants_list_state
            .selected()
            .and_then(|i| self.registry.get(i))
    }

    /// Activate the next plant, wrapping to the top.
    ///
    pub fn next_plant(&mut self) -> &mut Self {
        let len = self.registry.len();
        if len == 0 {
            self.plants_list_state.select(None);
            return self;
        }
        let next = match self.plants_list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.plants_list_state.select(Some(next));
        self
    }

    /// Activate the previous plant, wrapping to the bottom.
    ///
    pub fn previous_plant(&mut self) -> &mut Self {
        let len = self.registry.len();
        if len == 0 {
            self.plants_list_state.select(None);
            return self;
        }
        let prev = match self.plants_list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        };
        self.plants_list_state.select(Some(prev));
        self
    }

    /// Return a copy of the captured log lines, oldest first.
    ///
    pub fn get_log_entries(&self) -> Vec<String> {
        self.log_buffer.snapshot()
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    /// Show or hide the log panel.
    ///
    pub fn toggle_log(&mut self) -> &mut Self {
        self.log_visible = !self.log_visible;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormField;
    use fake::{Fake, Faker};

    fn fill_form(state: &mut State, name: &str, species: &str, frequency: &str) {
        state.input_str(name).unwrap();
        state.next_field().unwrap();
        state.input_str(species).unwrap();
        state.next_field().unwrap();
        state.input_str(frequency).unwrap();
    }

    #[test]
    fn starts_on_list_view() {
        let state = State::default();
        assert_eq!(state.current_view(), View::List);
        assert!(state.get_draft().is_none());
        assert!(state.registry().is_empty());
    }

    #[test]
    fn seed_selects_first_plant() {
        let mut state = State::default();
        assert_eq!(state.seed_demo_plants(), Ok(2));
        assert_eq!(state.selected_plant().unwrap().name(), "Monstera");
        assert_eq!(state.seed_demo_plants(), Ok(0));
        assert_eq!(state.registry().len(), 2);
    }

    #[test]
    fn open_add_form_creates_draft() {
        let mut state = State::default();
        state.open_add_form().unwrap();
        assert_eq!(state.current_view(), View::Add);
        let draft = state.get_draft().unwrap();
        assert_eq!(draft.name(), "");
        assert_eq!(draft.focused(), FormField::Name);
    }

    #[test]
    fn open_add_form_twice_is_rejected() {
        let mut state = State::default();
        state.open_add_form().unwrap();
        assert_eq!(
            state.open_add_form(),
            Err(StateError::InvalidViewTransition {
                from: View::Add,
                to: View::Add
            })
        );
        assert_eq!(state.current_view(), View::Add);
        state.cancel_form().unwrap();
        assert_eq!(state.current_view(), View::List);
    }

    #[test]
    fn cancel_returns_to_list_without_changes() {
        let mut state = State::default();
        state.seed_demo_plants().unwrap();
        let before: Vec<Plant> = state.registry().list().to_vec();
        state.open_add_form().unwrap();
        fill_form(&mut state, "Fern", "Nephrolepis", "5");
        state.cancel_form().unwrap();
        assert_eq!(state.current_view(), View::List);
        assert!(state.get_draft().is_none());
        assert_eq!(state.registry().list(), before.as_slice());
    }

    #[test]
    fn cancel_from_list_is_rejected() {
        let mut state = State::default();
        assert!(state.cancel_form().is_err());
        assert_eq!(state.current_view(), View::List);
    }

    #[test]
    fn submit_valid_plant() {
        let mut state = State::default();
        state.open_add_form().unwrap();
        fill_form(&mut state, "Fern", "Nephrolepis", "5");
        let id = state.submit_form().unwrap().unwrap();
        assert_eq!(state.current_view(), View::List);
        assert!(state.get_draft().is_none());
        assert_eq!(state.registry().len(), 1);
        let plant = state.registry().get(0).unwrap();
        assert_eq!(plant.id(), &id);
        assert_eq!(plant.name(), "Fern");
        assert_eq!(plant.species(), "Nephrolepis");
        assert_eq!(plant.watering_frequency_days(), 5);
        assert_eq!(state.selected_plant().unwrap().id(), &id);
    }

    #[test]
    fn submit_appends_after_seeded_plants() {
        let mut state = State::default();
        state.seed_demo_plants().unwrap();
        state.open_add_form().unwrap();
        fill_form(&mut state, "Fern", "Nephrolepis", "5");
        state.submit_form().unwrap();
        let names: Vec<&str> = state.registry().list().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Monstera", "Snake Plant", "Fern"]);
        assert_eq!(state.selected_plant().map(|p| p.name()), Some("Fern"));
    }

    #[test]
    fn submit_blank_name_keeps_form_open() {
        let mut state = State::default();
        state.open_add_form().unwrap();
        fill_form(&mut state, "", "Fern", "5");
        assert_eq!(state.submit_form(), Ok(None));
        assert_eq!(state.current_view(), View::Add);
        assert!(state.get_draft().unwrap().has_error());
        assert!(state.registry().is_empty());
    }

    #[test]
    fn submit_invalid_inputs_leave_registry_unchanged() {
        let cases = [
            ("", "Nephrolepis", "5"),
            ("Fern", "", "5"),
            ("Fern", "Nephrolepis", ""),
            ("Fern", "Nephrolepis", "abc"),
            ("Fern", "Nephrolepis", "0"),
        ];
        for (name, species, frequency) in cases {
            let mut state = State::default();
            state.seed_demo_plants().unwrap();
            state.open_add_form().unwrap();
            fill_form(&mut state, name, species, frequency);
            assert_eq!(state.submit_form(), Ok(None));
            assert_eq!(state.registry().len(), 2);
            assert!(state.get_draft().unwrap().has_error());
        }
    }

    #[test]
    fn error_clears_after_fixing_draft() {
        let mut state = State::default();
        state.open_add_form().unwrap();
        fill_form(&mut state, "Fern", "Nephrolepis", "");
        assert_eq!(state.submit_form(), Ok(None));
        state.input_char('9').unwrap();
        assert!(state.submit_form().unwrap().is_some());
        assert_eq!(state.registry().get(0).unwrap().watering_frequency_days(), 9);
    }

    #[test]
    fn reopened_form_starts_clean() {
        let mut state = State::default();
        state.open_add_form().unwrap();
        fill_form(&mut state, "", "Fern", "5");
        state.submit_form().unwrap();
        state.cancel_form().unwrap();
        state.open_add_form().unwrap();
        let draft = state.get_draft().unwrap();
        assert!(!draft.has_error());
        assert_eq!(draft.species(), "");
    }

    #[test]
    fn frequency_keystrokes_are_filtered() {
        let mut state = State::default();
        state.open_add_form().unwrap();
        state.next_field().unwrap();
        state.next_field().unwrap();
        assert_eq!(state.input_char('1'), Ok(true));
        assert_eq!(state.input_char('x'), Ok(false));
        assert_eq!(state.input_str("2b"), Ok(false));
        assert_eq!(state.get_draft().unwrap().frequency(), "1");
    }

    #[test]
    fn form_operations_require_draft() {
        let mut state = State::default();
        assert_eq!(state.input_char('a'), Err(StateError::NoDraft));
        assert_eq!(state.remove_char(), Err(StateError::NoDraft));
        assert_eq!(state.next_field(), Err(StateError::NoDraft));
        assert_eq!(state.submit_form(), Err(StateError::NoDraft));
    }

    #[test]
    fn many_submissions_grow_registry_by_one_each() {
        let mut state = State::default();
        for expected in 1..=20 {
            let name: String = Faker.fake();
            let days: u32 = (1..100).fake();
            state.open_add_form().unwrap();
            fill_form(&mut state, &format!("n{}", name), "Species", &days.to_string());
            state.submit_form().unwrap().unwrap();
            assert_eq!(state.registry().len(), expected);
            let last = state.registry().get(expected - 1).unwrap();
            assert_eq!(last.watering_frequency_days(), days);
        }
    }

    #[test]
    fn plant_selection_wraps() {
        let mut state = State::default();
        let selected = |state: &State| state.selected_plant().map(|p| p.name().to_string());
        state.next_plant();
        assert_eq!(selected(&state), None);
        state.seed_demo_plants().unwrap();
        state.next_plant();
        assert_eq!(selected(&state).as_deref(), Some("Snake Plant"));
        state.next_plant();
        assert_eq!(selected(&state).as_deref(), Some("Monstera"));
        state.previous_plant();
        assert_eq!(selected(&state).as_deref(), Some("Snake Plant"));
    }

    #[test]
    fn toggle_log() {
        let mut state = State::default();
        assert!(state.is_log_visible());
        state.toggle_log();
        assert!(!state.is_log_visible());
    }
}
