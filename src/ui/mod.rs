//! UI rendering module

pub mod components;
pub mod forms;
mod properties;

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Top-level draw dispatch
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // main view
            Constraint::Length(1), // status / help line
        ])
        .split(frame.area());

    match app.state.current_view {
        View::PropertyList => {
            let style = app.config.currency_style();
            properties::draw_list(frame, chunks[0], &app.state, &style);
        }
        View::PropertyForm => {
            if let Some(view) = &app.state.form {
                forms::draw_property_form(frame, chunks[0], view);
            }
        }
    }

    if let Some(message) = &app.status_message {
        let status = Paragraph::new(message.as_str()).style(Style::default().fg(Color::Yellow));
        frame.render_widget(status, chunks[1]);
    } else if app.state.current_view == View::PropertyList {
        properties::draw_help(frame, chunks[1]);
    }

    if let Some(input) = &app.state.portfolio_prompt {
        components::render_prompt_dialog(frame, "New portfolio", input);
    }

    if let Some(message) = &app.state.error_dialog {
        components::render_error_dialog(frame, message);
    }
}
