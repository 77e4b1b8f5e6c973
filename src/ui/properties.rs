//! Property list rendering

use crate::state::forms::CurrencyStyle;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

/// Draw the property table with the active portfolio filter in the title
pub fn draw_list(frame: &mut Frame, area: Rect, state: &AppState, style: &CurrencyStyle) {
    let filter_label = state
        .portfolio_filter
        .and_then(|id| state.portfolio_name(id))
        .unwrap_or("all portfolios");
    let title = format!(" Properties ({filter_label}) ");

    let header = Row::new(vec!["Name", "City", "Estimated value", "Risks", "Portfolio"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = state
        .properties
        .iter()
        .enumerate()
        .map(|(i, property)| {
            let row_style = if i == state.selected_index {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                property.name.clone(),
                property.city.clone(),
                style.format(property.estimated_value as f64),
                format!("{}/{}", property.handled_risks, property.relevant_risks),
                state
                    .portfolio_name(property.portfolio)
                    .unwrap_or("?")
                    .to_string(),
            ])
            .style(row_style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(20),
            Constraint::Length(7),
            Constraint::Min(14),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(table, area);
}

/// One-line key help under the table
pub fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled("n", Style::default().fg(Color::Cyan)),
        Span::raw(" new  "),
        Span::styled("e", Style::default().fg(Color::Cyan)),
        Span::raw(" edit  "),
        Span::styled("d", Style::default().fg(Color::Cyan)),
        Span::raw(" delete  "),
        Span::styled("p", Style::default().fg(Color::Cyan)),
        Span::raw(" filter  "),
        Span::styled("c", Style::default().fg(Color::Cyan)),
        Span::raw(" portfolio  "),
        Span::styled("r", Style::default().fg(Color::Cyan)),
        Span::raw(" refresh  "),
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::raw(" quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
