//! Form rendering module
//!
//! UI components for rendering form fields:
//! - `base_field`: shared label/description/error chrome
//! - `field_renderer`: text, number and multi-line inputs
//! - `currency_field`: currency input bound to its edit state machine
//! - `map_field`: map-pin location picker
//! - `select_field`: single-selection input
//! - `property_form`: the property create/edit page

mod base_field;
mod currency_field;
mod field_renderer;
mod map_field;
mod property_form;
mod select_field;

pub use base_field::{error_message, FieldChrome};
pub use currency_field::draw_currency_field;
pub use field_renderer::{draw_number_field, draw_text_field, draw_textarea_field};
pub use map_field::draw_map_field;
pub use property_form::draw_property_form;
pub use select_field::draw_select_field;
