use super::Frame;
use crate::state::{FormField, PlantDraft, State, INVALID_FORM_MESSAGE};
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
};

const FIELDS: [FormField; 3] = [FormField::Name, FormField::Species, FormField::Frequency];

/// Render the add plant form.
///
pub fn add_plant(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let outer = Block::default()
        .title(Span::styled("Add Plant", styling::active_block_title_style()))
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme));
    let inner = outer.inner(size);
    frame.render_widget(outer, size);

    let Some(draft) = state.get_draft() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Species
            Constraint::Length(3), // Frequency
            Constraint::Length(2), // Validation message
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    for (field, area) in FIELDS.iter().zip(chunks.iter()) {
        render_field(frame, *area, theme, draft, *field);
    }

    if draft.has_error() {
        let message = Paragraph::new(INVALID_FORM_MESSAGE)
            .style(styling::error_text_style(theme))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(message, chunks[3]);
    }
}

/// Render a single input box, placing the cursor in it when focused.
///
fn render_field(frame: &mut Frame, area: Rect, theme: &Theme, draft: &PlantDraft, field: FormField) {
    let focused = draft.focused() == field;
    let border_style = if focused {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    let block = Block::default()
        .title(Span::styled(field.label(), styling::label_style(theme)))
        .borders(Borders::ALL)
        .border_style(border_style);

    let value = draft.field(field);
    let widget = Paragraph::new(value.to_string())
        .style(styling::normal_text_style(theme))
        .block(block);
    frame.render_widget(widget, area);

    if focused {
        let offset = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
        let max_x = area.x + area.width.saturating_sub(2);
        frame.set_cursor((area.x + 1).saturating_add(offset).min(max_x), area.y + 1);
    }
}
