//! Shared field chrome: label, description and error wiring
//!
//! Every concrete field renders inside this chrome. The chrome reads the
//! field's error list; a non-empty list switches the styling to invalid and
//! shows the first error's message. It never produces or clears errors.

use crate::state::forms::FieldError;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders},
    Frame,
};

/// Chrome around a single input area
pub struct FieldChrome<'a> {
    pub label: &'a str,
    pub description: Option<&'a str>,
    pub errors: &'a [FieldError],
    pub is_active: bool,
}

impl<'a> FieldChrome<'a> {
    pub fn new(label: &'a str, errors: &'a [FieldError], is_active: bool) -> Self {
        Self {
            label,
            description: None,
            errors,
            is_active,
        }
    }

    pub fn description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    fn is_invalid(&self) -> bool {
        !self.errors.is_empty()
    }

    fn border_color(&self) -> Color {
        if self.is_invalid() {
            Color::Red
        } else if self.is_active {
            Color::Cyan
        } else {
            Color::DarkGray
        }
    }

    /// Draw the chrome and return the inner area for the concrete input
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Rect {
        let mut block = Block::default()
            .title(format!(" {} ", self.label))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color()));

        if let Some(message) = error_message(self.errors) {
            block = block.title_bottom(Span::styled(
                format!(" {message} "),
                Style::default().fg(Color::Red),
            ));
        } else if let Some(description) = self.description {
            block = block.title_bottom(Span::styled(
                format!(" {description} "),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);
        inner
    }
}

/// The message to display: the first error is authoritative, an empty list
/// shows nothing
pub fn error_message(errors: &[FieldError]) -> Option<&str> {
    errors.first().map(|error| error.message.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::ErrorKind;

    #[test]
    fn test_no_errors_renders_no_message() {
        assert_eq!(error_message(&[]), None);
    }

    #[test]
    fn test_first_error_wins() {
        let errors = vec![
            FieldError::new(ErrorKind::Required, "Name is required"),
            FieldError::new(ErrorKind::Length, "too long"),
        ];
        assert_eq!(error_message(&errors), Some("Name is required"));
    }

    #[test]
    fn test_invalid_chrome_uses_error_color() {
        let errors = vec![FieldError::new(ErrorKind::Format, "bad")];
        let chrome = FieldChrome::new("Zip", &errors, true);
        assert_eq!(chrome.border_color(), Color::Red);
    }

    #[test]
    fn test_active_chrome_without_errors_is_highlighted() {
        let chrome = FieldChrome::new("Name", &[], true);
        assert_eq!(chrome.border_color(), Color::Cyan);
        let idle = FieldChrome::new("Name", &[], false);
        assert_eq!(idle.border_color(), Color::DarkGray);
    }
}
