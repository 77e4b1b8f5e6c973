//! Form state module
//!
//! The form engine plus the widget-side state it feeds:
//! - `engine`: named typed fields, bindings, submission flags
//! - `field`: field values, errors, numeric edit buffer
//! - `currency`: currency formatting/parsing and its edit state machine
//! - `map_view`: map viewport and marker drag events
//! - `select`: single-selection option lists
//! - `property_form`: the property create/edit form built on the above

mod currency;
mod engine;
mod field;
mod map_view;
mod property_form;
mod select;

pub use currency::{parse_amount, CurrencyEditor, CurrencyStyle, Locale};
pub use engine::{
    FieldBinding, FieldState, FormBuilder, FormEngine, SubmissionFlags, SubmissionWatch,
    Validator,
};
pub use field::{parse_number, ErrorKind, FieldError, FieldMeta, FieldValue, NumberEditor};
pub use map_view::{initial_marker, MapViewState, MarkerDragEvent, DEFAULT_ZOOM};
pub use property_form::{fields, FormMode, PropertyFormView, FIELD_ORDER};
pub use select::{SelectList, SelectOption};
