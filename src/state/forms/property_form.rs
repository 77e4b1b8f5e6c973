//! Property create/edit form: field wiring, validators, focus traversal
//!
//! Built through the form builder; validation mirrors the backend serializer
//! so errors show up before a round trip.

use super::currency::{CurrencyEditor, CurrencyStyle};
use super::engine::{FormEngine, SubmissionFlags, SubmissionWatch, Validator};
use super::field::{ErrorKind, FieldError, FieldValue, NumberEditor};
use super::map_view::{initial_marker, MapViewState, MarkerDragEvent};
use super::select::{SelectList, SelectOption};
use crate::state::models::{Location, Portfolio, Property};

/// Field names, matching the backend attribute names
pub mod fields {
    pub const NAME: &str = "name";
    pub const ADDRESS: &str = "address";
    pub const ZIP_CODE: &str = "zip_code";
    pub const CITY: &str = "city";
    pub const PORTFOLIO: &str = "portfolio";
    pub const ESTIMATED_VALUE: &str = "estimated_value";
    pub const TOTAL_FINANCIAL_RISK: &str = "total_financial_risk";
    pub const RELEVANT_RISKS: &str = "relevant_risks";
    pub const HANDLED_RISKS: &str = "handled_risks";
    pub const LOCATION: &str = "location";
}

/// Focus traversal order; the actions row follows the last field
pub const FIELD_ORDER: [&str; 10] = [
    fields::NAME,
    fields::ADDRESS,
    fields::ZIP_CODE,
    fields::CITY,
    fields::PORTFOLIO,
    fields::ESTIMATED_VALUE,
    fields::TOTAL_FINANCIAL_RISK,
    fields::RELEVANT_RISKS,
    fields::HANDLED_RISKS,
    fields::LOCATION,
];

const MAX_MONEY: f64 = 1_000_000_000.0;
const MAX_RISKS: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// State of one open property form: the engine plus the transient widget
/// state (currency/number edit buffers, select list, map viewport)
pub struct PropertyFormView {
    pub mode: FormMode,
    pub engine: FormEngine,
    pub portfolio_select: SelectList,
    pub estimated_value_editor: CurrencyEditor,
    pub financial_risk_editor: CurrencyEditor,
    pub relevant_risks_editor: NumberEditor,
    pub handled_risks_editor: NumberEditor,
    pub map_view: MapViewState,
    /// Last observed submission flags, refreshed each frame via the watch
    pub flags: SubmissionFlags,
    watch: SubmissionWatch,
    active: usize,
    /// Selected button on the actions row (0 = Save, 1 = Cancel)
    pub selected_button: usize,
}

impl PropertyFormView {
    pub fn create(
        portfolios: &[Portfolio],
        style: CurrencyStyle,
        zoom: Option<u8>,
        coordinates: Option<Location>,
    ) -> Self {
        let marker = initial_marker(None, coordinates);
        let engine = build_engine(None, marker);
        Self::assemble(FormMode::Create, engine, portfolios, style, zoom, coordinates)
    }

    pub fn edit(
        property: &Property,
        portfolios: &[Portfolio],
        style: CurrencyStyle,
        zoom: Option<u8>,
    ) -> Self {
        let engine = build_engine(Some(property), property.location);
        let mode = match property.id {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        };
        Self::assemble(
            mode,
            engine,
            portfolios,
            style,
            zoom,
            Some(property.location),
        )
    }

    fn assemble(
        mode: FormMode,
        engine: FormEngine,
        portfolios: &[Portfolio],
        style: CurrencyStyle,
        zoom: Option<u8>,
        coordinates: Option<Location>,
    ) -> Self {
        let options = portfolios
            .iter()
            .map(|p| SelectOption::new(p.name.clone(), p.id.to_string()))
            .collect();
        let estimated = engine
            .state(fields::ESTIMATED_VALUE)
            .map_or(f64::NAN, |s| s.value.as_number());
        let risk = engine
            .state(fields::TOTAL_FINANCIAL_RISK)
            .map_or(f64::NAN, |s| s.value.as_number());
        let relevant = engine
            .state(fields::RELEVANT_RISKS)
            .map_or(f64::NAN, |s| s.value.as_number());
        let handled = engine
            .state(fields::HANDLED_RISKS)
            .map_or(f64::NAN, |s| s.value.as_number());

        let mut view = Self {
            mode,
            engine,
            portfolio_select: SelectList::new(options, true),
            estimated_value_editor: CurrencyEditor::new(style.clone(), estimated),
            financial_risk_editor: CurrencyEditor::new(style, risk),
            relevant_risks_editor: NumberEditor::from_value(relevant),
            handled_risks_editor: NumberEditor::from_value(handled),
            map_view: MapViewState::new(zoom, coordinates),
            flags: SubmissionFlags::default(),
            watch: SubmissionWatch::default(),
            active: 0,
            selected_button: 0,
        };
        view.flags = view.watch.poll(&view.engine).unwrap_or_default();
        view
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Name of the focused field, or None on the actions row
    pub fn active_field_name(&self) -> Option<&'static str> {
        FIELD_ORDER.get(self.active).copied()
    }

    pub fn is_actions_row_active(&self) -> bool {
        self.active == FIELD_ORDER.len()
    }

    pub fn next_field(&mut self) {
        let from = self.active;
        self.active = (from + 1) % (FIELD_ORDER.len() + 1);
        self.moved_focus(from);
    }

    pub fn prev_field(&mut self) {
        let from = self.active;
        self.active = if from == 0 {
            FIELD_ORDER.len()
        } else {
            from - 1
        };
        self.moved_focus(from);
    }

    fn moved_focus(&mut self, from: usize) {
        if let Some(name) = FIELD_ORDER.get(from).copied() {
            let canonical = self.number_value(name);
            match name {
                fields::ESTIMATED_VALUE => self.estimated_value_editor.blur(canonical),
                fields::TOTAL_FINANCIAL_RISK => self.financial_risk_editor.blur(canonical),
                _ => {}
            }
            if let Some(mut binding) = self.engine.field(name) {
                binding.handle_blur();
            }
        }
        if let Some(name) = self.active_field_name() {
            let canonical = self.number_value(name);
            match name {
                fields::ESTIMATED_VALUE => self.estimated_value_editor.focus(canonical),
                fields::TOTAL_FINANCIAL_RISK => self.financial_risk_editor.focus(canonical),
                _ => {}
            }
        }
    }

    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % 2;
    }

    pub fn prev_button(&mut self) {
        self.selected_button = if self.selected_button == 0 { 1 } else { 0 };
    }

    /// Route a typed character to the focused field's widget adapter
    pub fn handle_char(&mut self, c: char) {
        let Some(name) = self.active_field_name() else {
            return;
        };
        match name {
            fields::NAME | fields::ADDRESS | fields::ZIP_CODE | fields::CITY => {
                let mut text = self
                    .engine
                    .state(name)
                    .map_or_else(String::new, |s| s.value.as_text().to_string());
                text.push(c);
                if let Some(mut binding) = self.engine.field(name) {
                    binding.handle_change(FieldValue::Text(text));
                }
            }
            fields::ESTIMATED_VALUE => {
                if let Some(value) = self.estimated_value_editor.push_char(c) {
                    self.change_number(name, value);
                }
            }
            fields::TOTAL_FINANCIAL_RISK => {
                if let Some(value) = self.financial_risk_editor.push_char(c) {
                    self.change_number(name, value);
                }
            }
            fields::RELEVANT_RISKS => {
                if let Some(value) = self.relevant_risks_editor.push_char(c) {
                    self.change_number(name, value);
                }
            }
            fields::HANDLED_RISKS => {
                if let Some(value) = self.handled_risks_editor.push_char(c) {
                    self.change_number(name, value);
                }
            }
            // select cycles with arrows, the marker moves with arrows
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        let Some(name) = self.active_field_name() else {
            return;
        };
        match name {
            fields::NAME | fields::ADDRESS | fields::ZIP_CODE | fields::CITY => {
                let mut text = self
                    .engine
                    .state(name)
                    .map_or_else(String::new, |s| s.value.as_text().to_string());
                text.pop();
                if let Some(mut binding) = self.engine.field(name) {
                    binding.handle_change(FieldValue::Text(text));
                }
            }
            fields::ESTIMATED_VALUE => {
                if let Some(value) = self.estimated_value_editor.backspace() {
                    self.change_number(name, value);
                }
            }
            fields::TOTAL_FINANCIAL_RISK => {
                if let Some(value) = self.financial_risk_editor.backspace() {
                    self.change_number(name, value);
                }
            }
            fields::RELEVANT_RISKS => {
                let value = self.relevant_risks_editor.backspace();
                self.change_number(name, value);
            }
            fields::HANDLED_RISKS => {
                let value = self.handled_risks_editor.backspace();
                self.change_number(name, value);
            }
            _ => {}
        }
    }

    /// Cycle the portfolio selection when the select field is focused
    pub fn cycle_select(&mut self, forward: bool) {
        if self.active_field_name() != Some(fields::PORTFOLIO) {
            return;
        }
        let current = self
            .engine
            .state(fields::PORTFOLIO)
            .map_or_else(String::new, |s| s.value.as_text().to_string());
        let next = if forward {
            self.portfolio_select.next(&current)
        } else {
            self.portfolio_select.prev(&current)
        }
        .to_string();
        if let Some(mut binding) = self.engine.field(fields::PORTFOLIO) {
            binding.handle_change(FieldValue::Choice(next));
        }
    }

    /// Current marker position (the location field's value)
    pub fn marker(&self) -> Location {
        self.engine
            .state(fields::LOCATION)
            .and_then(|s| s.value.as_location())
            .unwrap_or_default()
    }

    /// Nudge the marker when the map field is focused
    pub fn nudge_marker(&mut self, dx: i8, dy: i8) {
        if self.active_field_name() != Some(fields::LOCATION) {
            return;
        }
        let event = self.map_view.nudge(self.marker(), dx, dy);
        self.apply_marker_drag(event);
    }

    /// Drag-end handler: the new position replaces the field value directly
    pub fn apply_marker_drag(&mut self, event: MarkerDragEvent) {
        if let Some(mut binding) = self.engine.field(fields::LOCATION) {
            binding.handle_change(FieldValue::Location(Location::new(event.lng, event.lat)));
        }
    }

    /// Replace all values from a record outside the input cycle; currency
    /// displays resync on the next frame
    pub fn load(&mut self, property: &Property) {
        self.engine
            .load(fields::NAME, FieldValue::Text(property.name.clone()));
        self.engine
            .load(fields::ADDRESS, FieldValue::Text(property.address.clone()));
        self.engine
            .load(fields::ZIP_CODE, FieldValue::Text(property.zip_code.clone()));
        self.engine
            .load(fields::CITY, FieldValue::Text(property.city.clone()));
        self.engine.load(
            fields::PORTFOLIO,
            FieldValue::Choice(property.portfolio.to_string()),
        );
        self.engine.load(
            fields::ESTIMATED_VALUE,
            FieldValue::Number(property.estimated_value as f64),
        );
        self.engine.load(
            fields::TOTAL_FINANCIAL_RISK,
            FieldValue::Number(property.total_financial_risk as f64),
        );
        self.engine.load(
            fields::RELEVANT_RISKS,
            FieldValue::Number(f64::from(property.relevant_risks)),
        );
        self.engine.load(
            fields::HANDLED_RISKS,
            FieldValue::Number(f64::from(property.handled_risks)),
        );
        self.engine
            .load(fields::LOCATION, FieldValue::Location(property.location));

        self.estimated_value_editor.notify_external_change();
        self.financial_risk_editor.notify_external_change();
        self.relevant_risks_editor
            .sync(f64::from(property.relevant_risks));
        self.handled_risks_editor
            .sync(f64::from(property.handled_risks));
    }

    /// Per-frame upkeep: poll the flag subscription and let the currency
    /// editors apply any deferred display resync
    pub fn on_frame(&mut self) {
        if let Some(flags) = self.watch.poll(&self.engine) {
            self.flags = flags;
        }
        let estimated = self.number_value(fields::ESTIMATED_VALUE);
        self.estimated_value_editor.on_frame(estimated);
        let risk = self.number_value(fields::TOTAL_FINANCIAL_RISK);
        self.financial_risk_editor.on_frame(risk);
    }

    /// Run all field validators plus the cross-field risk rule
    pub fn validate(&mut self) -> bool {
        self.engine.set_validating(true);
        let mut ok = self.engine.validate_all();
        let relevant = self.number_value(fields::RELEVANT_RISKS);
        let handled = self.number_value(fields::HANDLED_RISKS);
        if handled.is_finite() && relevant.is_finite() && handled > relevant {
            self.engine.push_error(
                fields::HANDLED_RISKS,
                FieldError::new(
                    ErrorKind::CrossField,
                    "Handled risks cannot exceed relevant risks",
                ),
            );
            ok = false;
        }
        self.engine.set_validating(false);
        ok
    }

    /// Assemble the outgoing record; None when required pieces are missing
    /// (guarded by `validate`, so submission never sees None)
    pub fn to_property(&self) -> Option<Property> {
        let portfolio: i64 = self
            .engine
            .state(fields::PORTFOLIO)?
            .value
            .as_text()
            .parse()
            .ok()?;
        let location = self.marker();
        let estimated = self.number_value(fields::ESTIMATED_VALUE);
        let financial = self.number_value(fields::TOTAL_FINANCIAL_RISK);
        let relevant = self.number_value(fields::RELEVANT_RISKS);
        let handled = self.number_value(fields::HANDLED_RISKS);
        if !estimated.is_finite()
            || !financial.is_finite()
            || !relevant.is_finite()
            || !handled.is_finite()
        {
            return None;
        }

        Some(Property {
            id: match self.mode {
                FormMode::Edit(id) => Some(id),
                FormMode::Create => None,
            },
            portfolio,
            name: self.text_value(fields::NAME),
            address: self.text_value(fields::ADDRESS),
            zip_code: self.text_value(fields::ZIP_CODE),
            city: self.text_value(fields::CITY),
            location,
            estimated_value: estimated.round() as i64,
            relevant_risks: relevant.round() as u32,
            handled_risks: handled.round() as u32,
            total_financial_risk: financial.round() as i64,
        })
    }

    fn change_number(&mut self, name: &str, value: f64) {
        if let Some(mut binding) = self.engine.field(name) {
            binding.handle_change(FieldValue::Number(value));
        }
    }

    fn number_value(&self, name: &str) -> f64 {
        self.engine
            .state(name)
            .map_or(f64::NAN, |s| s.value.as_number())
    }

    fn text_value(&self, name: &str) -> String {
        self.engine
            .state(name)
            .map_or_else(String::new, |s| s.value.as_text().to_string())
    }
}

fn build_engine(existing: Option<&Property>, marker: Location) -> FormEngine {
    let text = |get: fn(&Property) -> &str| {
        existing.map_or_else(String::new, |p| get(p).to_string())
    };
    let number = |get: fn(&Property) -> f64| existing.map_or(f64::NAN, get);

    FormEngine::builder()
        .validated(
            fields::NAME,
            FieldValue::Text(text(|p| &p.name)),
            text_length("Name", 100),
        )
        .validated(
            fields::ADDRESS,
            FieldValue::Text(text(|p| &p.address)),
            text_length("Address", 255),
        )
        .validated(
            fields::ZIP_CODE,
            FieldValue::Text(text(|p| &p.zip_code)),
            Box::new(validate_zip_code),
        )
        .validated(
            fields::CITY,
            FieldValue::Text(text(|p| &p.city)),
            text_length("City", 100),
        )
        .validated(
            fields::PORTFOLIO,
            FieldValue::Choice(
                existing.map_or_else(String::new, |p| p.portfolio.to_string()),
            ),
            Box::new(validate_portfolio),
        )
        .validated(
            fields::ESTIMATED_VALUE,
            FieldValue::Number(number(|p| p.estimated_value as f64)),
            money_range("Estimated value"),
        )
        .validated(
            fields::TOTAL_FINANCIAL_RISK,
            FieldValue::Number(number(|p| p.total_financial_risk as f64)),
            money_range("Total financial risk"),
        )
        .validated(
            fields::RELEVANT_RISKS,
            FieldValue::Number(number(|p| f64::from(p.relevant_risks))),
            risk_count("Relevant risks"),
        )
        .validated(
            fields::HANDLED_RISKS,
            FieldValue::Number(number(|p| f64::from(p.handled_risks))),
            risk_count("Handled risks"),
        )
        .validated(
            fields::LOCATION,
            FieldValue::Location(marker),
            Box::new(validate_location),
        )
        .build()
}

fn text_length(label: &'static str, max: usize) -> Validator {
    Box::new(move |value| {
        let len = value.as_text().chars().count();
        if len == 0 {
            vec![FieldError::new(
                ErrorKind::Required,
                format!("{label} is required"),
            )]
        } else if len > max {
            vec![FieldError::new(
                ErrorKind::Length,
                format!("{label} must be at most {max} characters"),
            )]
        } else {
            vec![]
        }
    })
}

fn validate_zip_code(value: &FieldValue) -> Vec<FieldError> {
    let zip = value.as_text();
    if zip.len() == 4 && zip.chars().all(|c| c.is_ascii_digit()) {
        vec![]
    } else {
        vec![FieldError::new(
            ErrorKind::Format,
            "Zip code must be exactly 4 digits",
        )]
    }
}

fn validate_portfolio(value: &FieldValue) -> Vec<FieldError> {
    if value.as_text().is_empty() {
        vec![FieldError::new(ErrorKind::Required, "Select a portfolio")]
    } else {
        vec![]
    }
}

fn money_range(label: &'static str) -> Validator {
    Box::new(move |value| {
        let amount = value.as_number();
        if !amount.is_finite() {
            vec![FieldError::new(
                ErrorKind::Required,
                format!("{label} is required"),
            )]
        } else if amount < 0.0 || amount > MAX_MONEY {
            vec![FieldError::new(
                ErrorKind::Range,
                format!("{label} must be between 0 and 1 000 000 000"),
            )]
        } else {
            vec![]
        }
    })
}

fn risk_count(label: &'static str) -> Validator {
    Box::new(move |value| {
        let count = value.as_number();
        if !count.is_finite() {
            vec![FieldError::new(
                ErrorKind::Required,
                format!("{label} is required"),
            )]
        } else if count.fract() != 0.0 {
            vec![FieldError::new(
                ErrorKind::Format,
                format!("{label} must be a whole number"),
            )]
        } else if count < 0.0 || count > MAX_RISKS {
            vec![FieldError::new(
                ErrorKind::Range,
                format!("{label} must be between 0 and 1000"),
            )]
        } else {
            vec![]
        }
    })
}

fn validate_location(value: &FieldValue) -> Vec<FieldError> {
    match value.as_location() {
        Some(location) => {
            let mut errors = Vec::new();
            if !(-180.0..=180.0).contains(&location.longitude) {
                errors.push(FieldError::new(
                    ErrorKind::Range,
                    "Longitude must be between -180 and 180",
                ));
            }
            if !(-90.0..=90.0).contains(&location.latitude) {
                errors.push(FieldError::new(
                    ErrorKind::Range,
                    "Latitude must be between -90 and 90",
                ));
            }
            errors
        }
        None => vec![FieldError::new(ErrorKind::Required, "Pick a location")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolios() -> Vec<Portfolio> {
        vec![
            Portfolio {
                id: 1,
                name: "Oslo Portfolio".to_string(),
            },
            Portfolio {
                id: 2,
                name: "Bergen Portfolio".to_string(),
            },
        ]
    }

    fn oslo_property() -> Property {
        Property {
            id: Some(7),
            portfolio: 1,
            name: "Karl Johans gate 1".to_string(),
            address: "Karl Johans gate 1".to_string(),
            zip_code: "0154".to_string(),
            city: "Oslo".to_string(),
            location: Location::new(10.7522, 59.9139),
            estimated_value: 25_000_000,
            relevant_risks: 5,
            handled_risks: 3,
            total_financial_risk: 1_200_000,
        }
    }

    fn create_view() -> PropertyFormView {
        PropertyFormView::create(
            &portfolios(),
            CurrencyStyle::default(),
            Some(5),
            Some(Location::new(10.75, 59.91)),
        )
    }

    fn type_str(view: &mut PropertyFormView, s: &str) {
        for c in s.chars() {
            view.handle_char(c);
        }
    }

    fn fill_valid(view: &mut PropertyFormView) {
        // traversal order: name, address, zip, city, portfolio, money x2,
        // risks x2, location
        type_str(view, "Aker Brygge 12");
        view.next_field();
        type_str(view, "Stranden 1");
        view.next_field();
        type_str(view, "0250");
        view.next_field();
        type_str(view, "Oslo");
        view.next_field();
        view.cycle_select(true);
        view.next_field();
        type_str(view, "45000000");
        view.next_field();
        type_str(view, "2100000");
        view.next_field();
        type_str(view, "4");
        view.next_field();
        type_str(view, "2");
        view.next_field();
        view.nudge_marker(1, 0);
    }

    #[test]
    fn test_create_starts_pristine_and_on_first_field() {
        let view = create_view();
        assert_eq!(view.active_field_name(), Some(fields::NAME));
        assert!(view.flags.is_pristine);
        assert!(!view.flags.is_submitting);
    }

    #[test]
    fn test_marker_initialized_from_caller_coordinates() {
        let view = create_view();
        assert_eq!(view.marker(), Location::new(10.75, 59.91));
    }

    #[test]
    fn test_marker_defaults_to_origin_without_coordinates() {
        let view =
            PropertyFormView::create(&portfolios(), CurrencyStyle::default(), None, None);
        assert_eq!(view.marker(), Location::new(0.0, 0.0));
    }

    #[test]
    fn test_typing_writes_text_verbatim_and_dirties_form() {
        let mut view = create_view();
        type_str(&mut view, "Aker Brygge 12");
        assert_eq!(
            view.engine.state(fields::NAME).unwrap().value.as_text(),
            "Aker Brygge 12"
        );
        view.on_frame();
        assert!(!view.flags.is_pristine);
    }

    #[test]
    fn test_leaving_field_marks_it_touched() {
        let mut view = create_view();
        view.next_field();
        let meta = &view.engine.state(fields::NAME).unwrap().meta;
        assert!(meta.touched);
        assert_eq!(meta.first_error().unwrap().kind, ErrorKind::Required);
    }

    #[test]
    fn test_traversal_wraps_through_actions_row() {
        let mut view = create_view();
        for _ in 0..FIELD_ORDER.len() {
            view.next_field();
        }
        assert!(view.is_actions_row_active());
        view.next_field();
        assert_eq!(view.active_field_name(), Some(fields::NAME));
        view.prev_field();
        assert!(view.is_actions_row_active());
    }

    #[test]
    fn test_currency_field_focus_edit_blur_cycle() {
        let mut view = create_view();
        while view.active_field_name() != Some(fields::ESTIMATED_VALUE) {
            view.next_field();
        }
        assert!(view.estimated_value_editor.is_editing());
        assert_eq!(view.estimated_value_editor.display(), "");

        type_str(&mut view, "1234,56");
        assert_eq!(view.estimated_value_editor.display(), "1234,56");
        assert_eq!(
            view.engine
                .state(fields::ESTIMATED_VALUE)
                .unwrap()
                .value
                .as_number(),
            1234.56
        );

        view.next_field();
        assert!(!view.estimated_value_editor.is_editing());
        assert_eq!(view.estimated_value_editor.display(), "1 234,56 kr");
    }

    #[test]
    fn test_select_cycles_and_writes_choice() {
        let mut view = create_view();
        while view.active_field_name() != Some(fields::PORTFOLIO) {
            view.next_field();
        }
        view.cycle_select(true);
        assert_eq!(
            view.engine.state(fields::PORTFOLIO).unwrap().value.as_text(),
            "1"
        );
        view.cycle_select(true);
        assert_eq!(
            view.engine.state(fields::PORTFOLIO).unwrap().value.as_text(),
            "2"
        );
    }

    #[test]
    fn test_marker_drag_updates_value_but_not_map_center() {
        let mut view = create_view();
        let center_before = view.map_view.center();
        view.apply_marker_drag(MarkerDragEvent {
            lng: 10.5,
            lat: 59.9,
        });
        assert_eq!(view.marker(), Location::new(10.5, 59.9));
        assert_eq!(view.map_view.center(), center_before);
    }

    #[test]
    fn test_nudge_requires_location_focus() {
        let mut view = create_view();
        let before = view.marker();
        view.nudge_marker(1, 1);
        assert_eq!(view.marker(), before);
    }

    #[test]
    fn test_validate_accepts_filled_form() {
        let mut view = create_view();
        fill_valid(&mut view);
        assert!(view.validate());
        let property = view.to_property().unwrap();
        assert_eq!(property.portfolio, 1);
        assert_eq!(property.estimated_value, 45_000_000);
        assert_eq!(property.zip_code, "0250");
        assert!(property.id.is_none());
    }

    #[test]
    fn test_validate_rejects_bad_zip() {
        let mut view = create_view();
        fill_valid(&mut view);
        view.engine
            .load(fields::ZIP_CODE, FieldValue::Text("123".into()));
        assert!(!view.validate());
        let meta = &view.engine.state(fields::ZIP_CODE).unwrap().meta;
        assert_eq!(meta.first_error().unwrap().kind, ErrorKind::Format);
    }

    #[test]
    fn test_validate_rejects_out_of_range_money() {
        let mut view = create_view();
        fill_valid(&mut view);
        view.engine
            .load(fields::ESTIMATED_VALUE, FieldValue::Number(2_000_000_000.0));
        assert!(!view.validate());
    }

    #[test]
    fn test_validate_rejects_out_of_range_location() {
        let mut view = create_view();
        fill_valid(&mut view);
        view.engine.load(
            fields::LOCATION,
            FieldValue::Location(Location::new(181.0, 0.0)),
        );
        assert!(!view.validate());
    }

    #[test]
    fn test_cross_field_rule_handled_exceeds_relevant() {
        let mut view = create_view();
        fill_valid(&mut view);
        view.engine
            .load(fields::HANDLED_RISKS, FieldValue::Number(9.0));
        assert!(!view.validate());
        let meta = &view.engine.state(fields::HANDLED_RISKS).unwrap().meta;
        assert_eq!(meta.first_error().unwrap().kind, ErrorKind::CrossField);
    }

    #[test]
    fn test_edit_form_loads_record_and_keeps_id() {
        let property = oslo_property();
        let view = PropertyFormView::edit(
            &property,
            &portfolios(),
            CurrencyStyle::default(),
            Some(5),
        );
        assert_eq!(view.mode, FormMode::Edit(7));
        assert_eq!(
            view.engine.state(fields::NAME).unwrap().value.as_text(),
            "Karl Johans gate 1"
        );
        assert_eq!(view.estimated_value_editor.display(), "25 000 000,00 kr");
        assert_eq!(view.marker(), property.location);
        // map view centers on the record once, at mount
        assert_eq!(view.map_view.center(), property.location);
    }

    #[test]
    fn test_external_load_reformats_currency_next_frame() {
        let mut view = create_view();
        view.load(&oslo_property());
        // still the stale display until the frame hook runs
        assert_eq!(view.estimated_value_editor.display(), "");
        view.on_frame();
        assert_eq!(view.estimated_value_editor.display(), "25 000 000,00 kr");
        assert!(view.flags.is_pristine);
    }

    #[test]
    fn test_submitting_flag_reaches_subscription() {
        let mut view = create_view();
        view.engine.set_submitting(true);
        view.on_frame();
        assert!(view.flags.is_submitting);
        view.engine.set_submitting(false);
        view.on_frame();
        assert!(!view.flags.is_submitting);
    }

    #[test]
    fn test_to_property_missing_portfolio_is_none() {
        let view = create_view();
        assert!(view.to_property().is_none());
    }

    #[test]
    fn test_actions_row_button_cycling() {
        let mut view = create_view();
        assert_eq!(view.selected_button, 0);
        view.next_button();
        assert_eq!(view.selected_button, 1);
        view.next_button();
        assert_eq!(view.selected_button, 0);
        view.prev_button();
        assert_eq!(view.selected_button, 1);
    }
}
