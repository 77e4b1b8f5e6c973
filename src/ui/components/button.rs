//! Button components, including the submit button presentation

use crate::state::forms::SubmissionFlags;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Derived presentation of the submit action.
///
/// Purely a subscriber over the aggregate form flags plus an optional caller
/// `loading` override; it never mutates form state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitPresentation {
    /// The action cannot be triggered
    pub disabled: bool,
    /// Show a loading indicator instead of the label
    pub busy: bool,
}

impl SubmitPresentation {
    pub fn derive(flags: SubmissionFlags, loading: bool) -> Self {
        let busy = flags.is_submitting || flags.is_validating || loading;
        Self {
            disabled: busy || flags.is_pristine,
            busy,
        }
    }
}

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render the submit button: its label while idle, a loading indicator while
/// the form is submitting/validating or the caller forces `loading`
pub fn render_submit_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    presentation: SubmitPresentation,
    is_selected: bool,
) {
    let content = if presentation.busy { "..." } else { label };
    render_button(
        frame,
        area,
        content,
        is_selected && !presentation.disabled,
        !presentation.disabled,
    );
}
