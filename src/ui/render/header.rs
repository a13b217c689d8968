use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const BANNER: &str = "garden-tui";

/// Render the title bar with the plant count.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let count = state.registry().len();
    let count_text = match count {
        1 => "1 plant".to_string(),
        n => format!("{} plants", n),
    };

    let line = Line::from(vec![
        Span::styled(BANNER, styling::banner_style(theme)),
        Span::styled(" · ", styling::muted_text_style(theme)),
        Span::styled(state.current_view().title(), styling::normal_text_style(theme)),
        Span::styled(" · ", styling::muted_text_style(theme)),
        Span::styled(count_text, styling::muted_text_style(theme)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let widget = Paragraph::new(line)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(widget, size);
}
