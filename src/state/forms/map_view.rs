//! Map view state for the location picker
//!
//! The view (center + zoom) is fixed at construction from caller-supplied
//! values; moving the marker afterwards changes only the bound field value,
//! never the view. That keeps the map steady while the pin is nudged around.

use crate::state::models::Location;

/// Default zoom when the caller supplies none
pub const DEFAULT_ZOOM: u8 = 5;

/// Marker fallback when neither a field value nor caller coordinates exist
pub const DEFAULT_MARKER: Location = Location {
    longitude: 0.0,
    latitude: 0.0,
};

/// Emitted when the marker is moved; carries the new position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerDragEvent {
    pub lng: f64,
    pub lat: f64,
}

/// Immutable-after-mount map viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewState {
    center: Location,
    zoom: u8,
}

impl MapViewState {
    pub fn new(zoom: Option<u8>, coordinates: Option<Location>) -> Self {
        Self {
            center: coordinates.unwrap_or(DEFAULT_MARKER),
            zoom: zoom.unwrap_or(DEFAULT_ZOOM).clamp(0, 18),
        }
    }

    pub fn center(&self) -> Location {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Longitude span of the viewport in degrees
    pub fn lng_span(&self) -> f64 {
        360.0 / f64::powi(2.0, i32::from(self.zoom))
    }

    /// Latitude span; half the longitude span to roughly match terminal cell
    /// aspect on the canvas
    pub fn lat_span(&self) -> f64 {
        self.lng_span() / 2.0
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        let half = self.lng_span() / 2.0;
        [
            (self.center.longitude - half).max(-180.0),
            (self.center.longitude + half).min(180.0),
        ]
    }

    pub fn y_bounds(&self) -> [f64; 2] {
        let half = self.lat_span() / 2.0;
        [
            (self.center.latitude - half).max(-90.0),
            (self.center.latitude + half).min(90.0),
        ]
    }

    /// One arrow-key nudge of the marker, the drag analogue. `dx`/`dy` are
    /// steps east/north; the result stays inside the world range.
    pub fn nudge(&self, from: Location, dx: i8, dy: i8) -> MarkerDragEvent {
        let step = self.lng_span() / 40.0;
        MarkerDragEvent {
            lng: (from.longitude + step * f64::from(dx)).clamp(-180.0, 180.0),
            lat: (from.latitude + step * f64::from(dy)).clamp(-90.0, 90.0),
        }
    }
}

/// Initial marker position: field value, then caller coordinates, then (0,0)
pub fn initial_marker(value: Option<Location>, coordinates: Option<Location>) -> Location {
    value.or(coordinates).unwrap_or(DEFAULT_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_defaults_to_origin() {
        assert_eq!(initial_marker(None, None), Location::new(0.0, 0.0));
    }

    #[test]
    fn test_marker_prefers_field_value_over_coordinates() {
        let value = Location::new(10.5, 59.9);
        let fallback = Location::new(5.3, 60.4);
        assert_eq!(initial_marker(Some(value), Some(fallback)), value);
        assert_eq!(initial_marker(None, Some(fallback)), fallback);
    }

    #[test]
    fn test_view_defaults() {
        let view = MapViewState::new(None, None);
        assert_eq!(view.zoom(), DEFAULT_ZOOM);
        assert_eq!(view.center(), DEFAULT_MARKER);
    }

    #[test]
    fn test_higher_zoom_narrows_span() {
        let wide = MapViewState::new(Some(2), None);
        let tight = MapViewState::new(Some(8), None);
        assert!(tight.lng_span() < wide.lng_span());
        assert_eq!(wide.lng_span(), 90.0);
    }

    #[test]
    fn test_bounds_clamped_to_world() {
        let view = MapViewState::new(Some(0), Some(Location::new(170.0, 85.0)));
        let [x0, x1] = view.x_bounds();
        let [y0, y1] = view.y_bounds();
        assert!(x0 >= -180.0 && x1 <= 180.0);
        assert!(y0 >= -90.0 && y1 <= 90.0);
    }

    #[test]
    fn test_nudge_moves_marker_but_not_center() {
        let view = MapViewState::new(Some(5), Some(Location::new(10.75, 59.91)));
        let before = view.center();
        let event = view.nudge(Location::new(10.75, 59.91), 1, 0);
        assert!(event.lng > 10.75);
        assert_eq!(event.lat, 59.91);
        assert_eq!(view.center(), before);
    }

    #[test]
    fn test_nudge_clamps_at_world_edge() {
        let view = MapViewState::new(Some(0), None);
        let event = view.nudge(Location::new(179.9, 89.9), 10, 10);
        assert!(event.lng <= 180.0);
        assert!(event.lat <= 90.0);
    }
}
