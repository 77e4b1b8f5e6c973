//! Rendering for currency fields
//!
//! The displayed string comes from the field's [`CurrencyEditor`]: formatted
//! while unfocused, raw numeric text while the user types. The canonical
//! value never appears directly.

use super::field_renderer::draw_input;
use crate::state::forms::{CurrencyEditor, FieldState};
use ratatui::{layout::Rect, Frame};

pub fn draw_currency_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    editor: &CurrencyEditor,
    state: &FieldState,
    is_active: bool,
) {
    draw_input(
        frame,
        area,
        label,
        editor.display(),
        state,
        is_active,
        false,
    );
}
