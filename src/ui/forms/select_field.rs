//! Rendering for single-selection fields

use super::base_field::FieldChrome;
use crate::state::forms::{FieldState, SelectList};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the select field showing the label of the current value; while
/// focused, arrows hint at cycling
pub fn draw_select_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    list: &SelectList,
    state: &FieldState,
    is_active: bool,
) {
    let inner = FieldChrome::new(label, &state.meta.errors, is_active).render(frame, area);

    let value = state.value.as_text();
    let display = if value.is_empty() && list.required() {
        "(select)"
    } else {
        list.label_for(value)
    };

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let line = if is_active {
        Line::from(vec![
            Span::styled("◂ ", Style::default().fg(Color::DarkGray)),
            Span::styled(display.to_string(), style),
            Span::styled(" ▸", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(Span::styled(display.to_string(), style))
    };

    frame.render_widget(Paragraph::new(line), inner);
}
