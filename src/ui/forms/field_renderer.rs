//! Rendering for text, number and multi-line text fields

use super::base_field::FieldChrome;
use crate::state::forms::FieldState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draw a single-line text field; the value is shown verbatim
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    state: &FieldState,
    is_active: bool,
) {
    draw_input(
        frame,
        area,
        label,
        state.value.as_text(),
        state,
        is_active,
        false,
    );
}

/// Draw a multi-line text field
pub fn draw_textarea_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    state: &FieldState,
    is_active: bool,
) {
    draw_input(
        frame,
        area,
        label,
        state.value.as_text(),
        state,
        is_active,
        true,
    );
}

/// Draw a numeric field showing the raw edit buffer
pub fn draw_number_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    raw: &str,
    state: &FieldState,
    is_active: bool,
) {
    draw_input(frame, area, label, raw, state, is_active, false);
}

/// Shared input rendering inside the field chrome
pub fn draw_input(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    display: &str,
    state: &FieldState,
    is_active: bool,
    is_multiline: bool,
) {
    let inner = FieldChrome::new(label, &state.meta.errors, is_active).render(frame, area);

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display = if display.is_empty() && !is_active {
        "(empty)"
    } else {
        display
    };
    let cursor = if is_active { "▌" } else { "" };

    let content = if is_multiline {
        let mut lines: Vec<Line> = display
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display.to_string(), style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    frame.render_widget(content.wrap(Wrap { trim: false }), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::{ErrorKind, FieldError, FieldValue};
    use ratatui::{backend::TestBackend, Terminal};

    fn text_state(value: &str) -> FieldState {
        FieldState {
            value: FieldValue::Text(value.to_string()),
            meta: Default::default(),
        }
    }

    fn render_to_string(draw: impl Fn(&mut Frame, Rect)) -> String {
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw(frame, area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    #[test]
    fn test_text_field_shows_value_and_label() {
        let state = text_state("Karl Johans gate 1");
        let rendered =
            render_to_string(|frame, area| draw_text_field(frame, area, "Name", &state, false));
        assert!(rendered.contains("Name"));
        assert!(rendered.contains("Karl Johans gate 1"));
    }

    #[test]
    fn test_empty_inactive_field_shows_placeholder() {
        let state = text_state("");
        let rendered =
            render_to_string(|frame, area| draw_text_field(frame, area, "Name", &state, false));
        assert!(rendered.contains("(empty)"));
    }

    #[test]
    fn test_first_error_message_rendered() {
        let mut state = text_state("");
        state
            .meta
            .errors
            .push(FieldError::new(ErrorKind::Required, "Name is required"));
        state
            .meta
            .errors
            .push(FieldError::new(ErrorKind::Length, "second error"));
        let rendered =
            render_to_string(|frame, area| draw_text_field(frame, area, "Name", &state, true));
        assert!(rendered.contains("Name is required"));
        assert!(!rendered.contains("second error"));
    }

    #[test]
    fn test_textarea_renders_multiple_lines() {
        let state = text_state("line one\nline two");
        let rendered = render_to_string(|frame, area| {
            draw_textarea_field(frame, area, "Notes", &state, false)
        });
        assert!(rendered.contains("line one"));
        assert!(rendered.contains("line two"));
    }

    #[test]
    fn test_number_field_shows_raw_buffer() {
        let state = FieldState {
            value: FieldValue::Number(4.0),
            meta: Default::default(),
        };
        let rendered = render_to_string(|frame, area| {
            draw_number_field(frame, area, "Relevant risks", "4", &state, true)
        });
        assert!(rendered.contains('4'));
        assert!(rendered.contains('▌'));
    }
}
