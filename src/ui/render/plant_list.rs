use super::Frame;
use crate::config::hotkeys::first_hotkey_display;
use crate::config::HotkeyAction;
use crate::state::{State, View};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

const BLOCK_TITLE: &str = "Plants";
const EMPTY_TEXT: &str = "No plants yet.";

/// Empty list hint naming the key currently bound to adding a plant.
///
fn empty_text(state: &State) -> String {
    let bindings = state.get_hotkeys().for_view(View::List);
    match first_hotkey_display(bindings, HotkeyAction::AddPlant) {
        Some(key) => format!("{} Press '{}' to add one.", EMPTY_TEXT, key),
        None => EMPTY_TEXT.to_string(),
    }
}

/// Render the plant list with a detail panel for the selected plant.
///
pub fn plant_list(frame: &mut Frame, size: Rect, state: &mut State) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(size);

    let theme = state.get_theme();
    let text_style = styling::normal_text_style(theme);
    let muted_style = styling::muted_text_style(theme);
    let highlight_style = styling::active_list_item_style(theme);
    let block = Block::default()
        .title(Span::styled(BLOCK_TITLE, styling::active_block_title_style()))
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme));

    if state.registry().is_empty() {
        let empty = Paragraph::new(empty_text(state))
            .style(muted_style)
            .block(block);
        frame.render_widget(empty, columns[0]);
    } else {
        let items: Vec<ListItem> = state
            .registry()
            .list()
            .iter()
            .map(|plant| {
                ListItem::new(Line::from(vec![
                    Span::styled(plant.name().to_string(), text_style),
                    Span::styled(format!("  {}", plant.species()), muted_style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(highlight_style)
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, columns[0], state.get_plants_list_state());
    }

    detail(frame, columns[1], state);
}

/// Render the selected plant's details.
///
fn detail(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .title("Details")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    let lines = match state.selected_plant() {
        Some(plant) => {
            let row = |label: &str, value: String| {
                Line::from(vec![
                    Span::styled(format!("{:<10}", label), styling::label_style(theme)),
                    Span::styled(value, styling::normal_text_style(theme)),
                ])
            };
            vec![
                row("Name", plant.name().to_string()),
                row("Species", plant.species().to_string()),
                row("Water", plant.watering_label()),
                Line::from(""),
                Line::from(Span::styled(
                    format!("id {}", plant.id()),
                    styling::muted_text_style(theme),
                )),
            ]
        }
        None => vec![Line::from(Span::styled(
            "Nothing selected",
            styling::muted_text_style(theme),
        ))],
    };

    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, size);
}
