//! Rendering for the map-pin location field
//!
//! A world-map canvas with the marker painted on top. The viewport comes from
//! the immutable [`MapViewState`]; only the marker follows the field value.

use super::base_field::FieldChrome;
use crate::state::forms::{FieldState, MapViewState};
use crate::state::models::Location;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Map, MapResolution, Points},
        Paragraph,
    },
    Frame,
};

pub fn draw_map_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    view: &MapViewState,
    marker: Location,
    state: &FieldState,
    is_active: bool,
) {
    let inner = FieldChrome::new(label, &state.meta.errors, is_active)
        .description("arrows move the pin")
        .render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let marker_color = if is_active { Color::Cyan } else { Color::Yellow };
    let canvas = Canvas::default()
        .x_bounds(view.x_bounds())
        .y_bounds(view.y_bounds())
        .paint(move |ctx| {
            ctx.draw(&Map {
                resolution: MapResolution::High,
                color: Color::DarkGray,
            });
            ctx.draw(&Points {
                coords: &[(marker.longitude, marker.latitude)],
                color: marker_color,
            });
        });
    frame.render_widget(canvas, chunks[0]);

    let readout = Paragraph::new(Line::from(vec![
        Span::styled("lng ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{:.4}", marker.longitude)),
        Span::styled("  lat ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{:.4}", marker.latitude)),
    ]))
    .style(Style::default().fg(Color::Gray));
    frame.render_widget(readout, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::FieldValue;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_map_field_renders_coordinate_readout() {
        let view = MapViewState::new(Some(5), Some(Location::new(10.75, 59.91)));
        let marker = Location::new(10.7522, 59.9139);
        let state = FieldState {
            value: FieldValue::Location(marker),
            meta: Default::default(),
        };

        let backend = TestBackend::new(50, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw_map_field(frame, area, "Location", &view, marker, &state, true);
            })
            .unwrap();

        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect();
        assert!(rendered.contains("10.7522"));
        assert!(rendered.contains("59.9139"));
        assert!(rendered.contains("Location"));
    }
}
