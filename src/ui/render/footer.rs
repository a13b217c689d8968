use super::Frame;
use crate::config::hotkeys::build_footer_text;
use crate::config::HotkeyAction;
use crate::state::{State, View};
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, widgets::Paragraph};

/// Format hotkeys for the current view as a display string.
///
fn format_hotkeys_for_view(view: View, state: &State) -> String {
    let bindings = state.get_hotkeys().for_view(view);
    match view {
        View::List => build_footer_text(
            bindings,
            &[
                (
                    HotkeyAction::NavigateNext,
                    "navigate",
                    Some(HotkeyAction::NavigatePrev),
                ),
                (HotkeyAction::AddPlant, "add plant", None),
                (HotkeyAction::ToggleLog, "log", None),
                (HotkeyAction::Quit, "quit", None),
            ],
        ),
        View::Add => build_footer_text(
            bindings,
            &[
                (
                    HotkeyAction::NavigateFieldNext,
                    "next field",
                    Some(HotkeyAction::NavigateFieldPrev),
                ),
                (HotkeyAction::SubmitForm, "save", None),
                (HotkeyAction::Cancel, "cancel", None),
            ],
        ),
    }
}

/// Render the key hint line.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let text = format_hotkeys_for_view(state.current_view(), state);
    let widget = Paragraph::new(text).style(styling::muted_text_style(state.get_theme()));
    frame.render_widget(widget, size);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_footer_mentions_add() {
        let state = State::default();
        let text = format_hotkeys_for_view(View::List, &state);
        assert!(text.contains("a: add plant"));
        assert!(text.contains("q: quit"));
    }

    #[test]
    fn add_footer_mentions_save_and_cancel() {
        let state = State::default();
        let text = format_hotkeys_for_view(View::Add, &state);
        assert!(text.contains("Tab/Shift+Tab: next field"));
        assert!(text.contains("Enter: save"));
        assert!(text.contains("Esc: cancel"));
    }
}
