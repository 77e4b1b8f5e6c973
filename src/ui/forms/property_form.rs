//! Property form rendering (create and edit)

use super::currency_field::draw_currency_field;
use super::field_renderer::{draw_number_field, draw_text_field};
use super::map_field::draw_map_field;
use super::select_field::draw_select_field;
use crate::state::forms::{fields, FormMode, PropertyFormView};
use crate::ui::components::{
    render_button, render_submit_button, SubmitPresentation, BUTTON_HEIGHT,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the property create/edit form with its action sidebar
pub fn draw_property_form(frame: &mut Frame, area: Rect, view: &PropertyFormView) {
    let title = match view.mode {
        FormMode::Create => " New Property ".to_string(),
        FormMode::Edit(id) => format!(" Edit Property #{id} "),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(32),    // address fields
            Constraint::Min(32),    // numbers and map
            Constraint::Length(22), // actions
        ])
        .split(inner);

    draw_text_column(frame, columns[0], view);
    draw_value_column(frame, columns[1], view);
    draw_action_panel(frame, columns[2], view);
}

fn is_active(view: &PropertyFormView, name: &str) -> bool {
    view.active_field_name() == Some(name)
}

fn draw_text_column(frame: &mut Frame, area: Rect, view: &PropertyFormView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Address
            Constraint::Length(3), // Zip code
            Constraint::Length(3), // City
            Constraint::Length(3), // Portfolio
            Constraint::Min(0),
        ])
        .split(area);

    for (i, (name, label)) in [
        (fields::NAME, "Name"),
        (fields::ADDRESS, "Address"),
        (fields::ZIP_CODE, "Zip code"),
        (fields::CITY, "City"),
    ]
    .into_iter()
    .enumerate()
    {
        if let Some(state) = view.engine.state(name) {
            draw_text_field(frame, chunks[i], label, state, is_active(view, name));
        }
    }

    if let Some(state) = view.engine.state(fields::PORTFOLIO) {
        draw_select_field(
            frame,
            chunks[4],
            "Portfolio",
            &view.portfolio_select,
            state,
            is_active(view, fields::PORTFOLIO),
        );
    }
}

fn draw_value_column(frame: &mut Frame, area: Rect, view: &PropertyFormView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Estimated value
            Constraint::Length(3), // Total financial risk
            Constraint::Length(3), // Relevant risks
            Constraint::Length(3), // Handled risks
            Constraint::Min(8),    // Location
        ])
        .split(area);

    if let Some(state) = view.engine.state(fields::ESTIMATED_VALUE) {
        draw_currency_field(
            frame,
            chunks[0],
            "Estimated value",
            &view.estimated_value_editor,
            state,
            is_active(view, fields::ESTIMATED_VALUE),
        );
    }
    if let Some(state) = view.engine.state(fields::TOTAL_FINANCIAL_RISK) {
        draw_currency_field(
            frame,
            chunks[1],
            "Total financial risk",
            &view.financial_risk_editor,
            state,
            is_active(view, fields::TOTAL_FINANCIAL_RISK),
        );
    }
    if let Some(state) = view.engine.state(fields::RELEVANT_RISKS) {
        draw_number_field(
            frame,
            chunks[2],
            "Relevant risks",
            view.relevant_risks_editor.raw(),
            state,
            is_active(view, fields::RELEVANT_RISKS),
        );
    }
    if let Some(state) = view.engine.state(fields::HANDLED_RISKS) {
        draw_number_field(
            frame,
            chunks[3],
            "Handled risks",
            view.handled_risks_editor.raw(),
            state,
            is_active(view, fields::HANDLED_RISKS),
        );
    }
    if let Some(state) = view.engine.state(fields::LOCATION) {
        draw_map_field(
            frame,
            chunks[4],
            "Location",
            &view.map_view,
            view.marker(),
            state,
            is_active(view, fields::LOCATION),
        );
    }
}

fn draw_action_panel(frame: &mut Frame, area: Rect, view: &PropertyFormView) {
    let is_focused = view.is_actions_row_active();
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Save
            Constraint::Length(BUTTON_HEIGHT), // Cancel
            Constraint::Min(0),                // help
        ])
        .split(inner);

    let presentation = SubmitPresentation::derive(view.flags, false);
    let label = match view.mode {
        FormMode::Create => "Create",
        FormMode::Edit(_) => "Save",
    };
    render_submit_button(
        frame,
        chunks[0],
        label,
        presentation,
        is_focused && view.selected_button == 0,
    );
    render_button(
        frame,
        chunks[1],
        "Cancel",
        is_focused && view.selected_button == 1,
        true,
    );

    let help = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(" next field"),
        ]),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" activate"),
        ]),
        Line::from(vec![
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(" cancel"),
        ]),
    ])
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);
}
